use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::classify::file_extension;
use crate::core::error::{FileOpError, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategorySets {
    pub image: Vec<String>,
    pub video: Vec<String>,
    pub audio: Vec<String>,
    pub document: Vec<String>,
}

impl Default for CategorySets {
    fn default() -> Self {
        Self {
            image: owned(&["jpg", "jpeg", "png", "gif", "bmp", "webp", "heic", "svg"]),
            video: owned(&["mp4", "mkv", "webm", "avi", "mov", "flv", "3gp"]),
            audio: owned(&["mp3", "wav", "aac", "ogg", "m4a", "flac", "amr"]),
            document: owned(&[
                "pdf", "doc", "docx", "ppt", "pptx", "xls", "xlsx", "txt", "rtf",
            ]),
        }
    }
}

fn owned(extensions: &[&str]) -> Vec<String> {
    extensions.iter().map(|e| e.to_string()).collect()
}

impl CategorySets {
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let sets: Self = if path.extension().and_then(|s| s.to_str()) == Some("json") {
            serde_json::from_str(&content)
                .map_err(|e| FileOpError::Configuration(e.to_string()))?
        } else {
            toml::from_str(&content).map_err(|e| FileOpError::Configuration(e.to_string()))?
        };
        Ok(sets)
    }

    pub fn to_file(&self, path: &PathBuf) -> Result<()> {
        let content = if path.extension().and_then(|s| s.to_str()) == Some("json") {
            serde_json::to_string_pretty(self)
                .map_err(|e| FileOpError::Configuration(e.to_string()))?
        } else {
            toml::to_string_pretty(self).map_err(|e| FileOpError::Configuration(e.to_string()))?
        };
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn is_image(&self, file_name: &str) -> bool {
        Self::matches(&self.image, file_name)
    }

    pub fn is_video(&self, file_name: &str) -> bool {
        Self::matches(&self.video, file_name)
    }

    pub fn is_audio(&self, file_name: &str) -> bool {
        Self::matches(&self.audio, file_name)
    }

    pub fn is_document(&self, file_name: &str) -> bool {
        Self::matches(&self.document, file_name)
    }

    fn matches(extensions: &[String], file_name: &str) -> bool {
        let ext = file_extension(file_name);
        if ext.is_empty() {
            return false;
        }
        extensions.iter().any(|e| e.eq_ignore_ascii_case(&ext))
    }
}
