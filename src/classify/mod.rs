pub mod extension;
pub mod mime;

pub use extension::{
    file_extension, file_name_without_extension, is_audio_file, is_document_file, is_image_file,
    is_pdf_file, is_video_file, normalize_extension,
};
pub use mime::{has_mime_prefix, kind_from_mime, mime_from_extension, mime_from_path, WILDCARD_MIME};
