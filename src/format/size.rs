use std::fs;
use std::path::Path;

const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

pub fn format_file_size(size_in_bytes: i64) -> String {
    if size_in_bytes <= 0 {
        return "0 B".to_string();
    }
    let group = ((size_in_bytes as f64).log10() / 1024f64.log10()) as usize;
    let group = group.min(UNITS.len() - 1);
    format!(
        "{:.1} {}",
        size_in_bytes as f64 / 1024f64.powi(group as i32),
        UNITS[group]
    )
}

pub fn file_size_in_kb<P: AsRef<Path>>(path: P) -> f64 {
    match fs::metadata(path.as_ref()) {
        Ok(metadata) => metadata.len() as f64 / 1024.0,
        Err(_) => 0.0,
    }
}

pub fn file_size_in_mb<P: AsRef<Path>>(path: P) -> f64 {
    match fs::metadata(path.as_ref()) {
        Ok(metadata) => metadata.len() as f64 / (1024.0 * 1024.0),
        Err(_) => 0.0,
    }
}
