use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::classify::{file_extension, kind_from_mime, mime_from_path};
use crate::core::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FileKind {
    Image,
    Video,
    Audio,
    Text,
    Pdf,
    Document,
    File,
    Unknown,
}

impl FileKind {
    pub fn label(&self) -> &'static str {
        match self {
            FileKind::Image => "Image",
            FileKind::Video => "Video",
            FileKind::Audio => "Audio",
            FileKind::Text => "Text",
            FileKind::Pdf => "PDF",
            FileKind::Document => "Document",
            FileKind::File => "File",
            FileKind::Unknown => "unknown",
        }
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StorageState {
    Mounted,
    ReadOnly,
    Unmounted,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileSummary {
    pub path: PathBuf,
    pub name: String,
    pub extension: String,
    pub size: u64,
    pub is_directory: bool,
    pub modified_at: Option<DateTime<Utc>>,
    pub mime_type: String,
    pub kind: FileKind,
}

impl FileSummary {
    pub fn inspect<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let metadata = fs::metadata(path)?;

        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("")
            .to_string();

        let mime_type = mime_from_path(path);
        let kind = kind_from_mime(Some(&mime_type));

        Ok(Self {
            path: path.to_path_buf(),
            extension: file_extension(&name),
            name,
            size: metadata.len(),
            is_directory: metadata.is_dir(),
            modified_at: metadata.modified().ok().and_then(system_time_to_datetime),
            mime_type,
            kind,
        })
    }
}

fn system_time_to_datetime(time: std::time::SystemTime) -> Option<DateTime<Utc>> {
    time.duration_since(std::time::UNIX_EPOCH)
        .ok()
        .and_then(|duration| {
            Utc.timestamp_opt(duration.as_secs() as i64, duration.subsec_nanos())
                .single()
        })
}
