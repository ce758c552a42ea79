use std::path::Path;

use crate::classify::extension::file_extension;
use crate::core::types::FileKind;

pub const WILDCARD_MIME: &str = "*/*";

pub fn mime_from_extension(ext: &str) -> String {
    if ext.is_empty() {
        return WILDCARD_MIME.to_string();
    }
    mime_guess::from_ext(&ext.to_lowercase())
        .first()
        .map(|m| m.to_string())
        .unwrap_or_else(|| WILDCARD_MIME.to_string())
}

pub fn mime_from_path<P: AsRef<Path>>(path: P) -> String {
    let name = path
        .as_ref()
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("");
    mime_from_extension(&file_extension(name))
}

pub fn has_mime_prefix<P: AsRef<Path>>(path: P, prefix: &str) -> bool {
    mime_from_path(path).starts_with(prefix)
}

// Ordered first-match classification; the msword/wordprocessingml substring
// match is deliberate and applies anywhere in the string.
pub fn kind_from_mime(mime: Option<&str>) -> FileKind {
    let mime = match mime {
        Some(mime) => mime,
        None => return FileKind::Unknown,
    };

    if mime.starts_with("image/") {
        FileKind::Image
    } else if mime.starts_with("video/") {
        FileKind::Video
    } else if mime.starts_with("audio/") {
        FileKind::Audio
    } else if mime.starts_with("text/") {
        FileKind::Text
    } else if mime == "application/pdf" {
        FileKind::Pdf
    } else if mime.contains("msword") || mime.contains("wordprocessingml") {
        FileKind::Document
    } else {
        FileKind::File
    }
}
