use std::fs;
use std::path::PathBuf;

use crate::core::types::StorageState;

pub trait StorageStateSource {
    fn state(&self) -> StorageState;
}

// A fixed state is itself a source; handy for hosts that already know it.
impl StorageStateSource for StorageState {
    fn state(&self) -> StorageState {
        *self
    }
}

pub struct MountProbe {
    root: PathBuf,
}

impl MountProbe {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }
}

impl StorageStateSource for MountProbe {
    fn state(&self) -> StorageState {
        match fs::metadata(&self.root) {
            Err(_) => StorageState::Unmounted,
            Ok(metadata) if !metadata.is_dir() => StorageState::Unmounted,
            Ok(metadata) if metadata.permissions().readonly() => StorageState::ReadOnly,
            Ok(_) => StorageState::Mounted,
        }
    }
}

pub fn is_external_storage_writable<S: StorageStateSource>(source: &S) -> bool {
    source.state() == StorageState::Mounted
}
