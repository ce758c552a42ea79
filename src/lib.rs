pub mod classify;
pub mod core;
pub mod format;
pub mod fs;
pub mod locator;

pub use crate::core::{CategorySets, FileKind, FileOpError, FileSummary, Result, StorageState};

pub use crate::classify::{
    file_extension, file_name_without_extension, has_mime_prefix, is_audio_file, is_document_file,
    is_image_file, is_pdf_file, is_video_file, kind_from_mime, mime_from_extension, mime_from_path,
    normalize_extension, WILDCARD_MIME,
};

pub use crate::format::{
    file_age_description, file_size_in_kb, file_size_in_mb, format_file_size,
    last_modified_formatted,
};

pub use crate::fs::{
    copy_file, delete_file_if_exists, is_external_storage_writable, is_valid_file,
    parent_folder_name, rename_file, try_copy_file, try_delete_file, try_rename_file, MountProbe,
    StorageStateSource,
};

pub use crate::locator::{readable_file_name, DisplayNameResolver, NoResolver, ResolveWith};

pub mod prelude {
    pub use crate::classify::{file_extension, mime_from_path};
    pub use crate::core::{CategorySets, FileKind, FileSummary, Result};
    pub use crate::format::{format_file_size, last_modified_formatted};
}
