use once_cell::sync::Lazy;

use crate::core::config::CategorySets;

static DEFAULT_SETS: Lazy<CategorySets> = Lazy::new(CategorySets::default);

// Splits on the last dot of the raw name, so "archive.tar.gz" yields "gz"
// and a trailing dot yields "".
pub fn file_extension(file_name: &str) -> String {
    match file_name.rfind('.') {
        Some(dot) => file_name[dot + 1..].to_lowercase(),
        None => String::new(),
    }
}

// Unlike file_extension, the result keeps the original casing.
pub fn file_name_without_extension(file_name: &str) -> String {
    match file_name.rfind('.') {
        Some(dot) => file_name[..dot].to_string(),
        None => file_name.to_string(),
    }
}

pub fn normalize_extension(ext: &str) -> String {
    ext.trim_start_matches('.').to_lowercase()
}

pub fn is_image_file(file_name: &str) -> bool {
    DEFAULT_SETS.is_image(file_name)
}

pub fn is_video_file(file_name: &str) -> bool {
    DEFAULT_SETS.is_video(file_name)
}

pub fn is_audio_file(file_name: &str) -> bool {
    DEFAULT_SETS.is_audio(file_name)
}

pub fn is_document_file(file_name: &str) -> bool {
    DEFAULT_SETS.is_document(file_name)
}

pub fn is_pdf_file(file_name: &str) -> bool {
    file_extension(file_name) == "pdf"
}
