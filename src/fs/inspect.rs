use std::fs;
use std::path::Path;

pub fn is_valid_file<P: AsRef<Path>>(path: P) -> bool {
    fs::metadata(path.as_ref())
        .map(|m| m.is_file() && m.len() > 0)
        .unwrap_or(false)
}

pub fn parent_folder_name<P: AsRef<Path>>(path: P) -> String {
    path.as_ref()
        .parent()
        .and_then(|p| p.file_name())
        .and_then(|n| n.to_str())
        .unwrap_or("")
        .to_string()
}
