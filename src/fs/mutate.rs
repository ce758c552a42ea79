use std::fs;
use std::path::{Path, PathBuf, MAIN_SEPARATOR};

use crate::core::error::{FileOpError, Result};

pub fn try_delete_file<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(FileOpError::PathNotFound(path.to_path_buf()));
    }
    fs::remove_file(path)?;
    Ok(())
}

pub fn delete_file_if_exists<P: AsRef<Path>>(path: P) -> bool {
    match try_delete_file(path.as_ref()) {
        Ok(()) => true,
        Err(e) => {
            log::debug!("delete {} skipped: {}", path.as_ref().display(), e);
            false
        }
    }
}

pub fn try_rename_file<P: AsRef<Path>>(path: P, new_name: &str) -> Result<PathBuf> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(FileOpError::PathNotFound(path.to_path_buf()));
    }
    // The target must stay inside the source's parent directory.
    if new_name.is_empty() || new_name.contains('/') || new_name.contains(MAIN_SEPARATOR) {
        return Err(FileOpError::InvalidName(new_name.to_string()));
    }
    let target = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.join(new_name),
        _ => PathBuf::from(new_name),
    };
    fs::rename(path, &target)?;
    Ok(target)
}

pub fn rename_file<P: AsRef<Path>>(path: P, new_name: &str) -> Option<PathBuf> {
    match try_rename_file(path.as_ref(), new_name) {
        Ok(target) => Some(target),
        Err(e) => {
            log::debug!(
                "rename {} -> {:?} failed: {}",
                path.as_ref().display(),
                new_name,
                e
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_delete_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("victim.txt");
        fs::write(&file_path, "bye").unwrap();

        assert!(delete_file_if_exists(&file_path));
        assert!(!file_path.exists());
    }

    #[test]
    fn test_delete_missing_file_returns_false() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("gone.txt");

        assert!(!delete_file_if_exists(&file_path));
        assert!(matches!(
            try_delete_file(&file_path),
            Err(FileOpError::PathNotFound(_))
        ));
    }

    #[test]
    fn test_rename_keeps_parent() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("old.txt");
        fs::write(&file_path, "data").unwrap();

        let renamed = rename_file(&file_path, "new.txt").unwrap();

        assert_eq!(renamed.file_name().unwrap(), "new.txt");
        assert_eq!(renamed.parent().unwrap(), temp_dir.path());
        assert!(renamed.exists());
        assert!(!file_path.exists());
    }

    #[test]
    fn test_rename_missing_source() {
        let temp_dir = TempDir::new().unwrap();
        assert!(rename_file(temp_dir.path().join("gone.txt"), "new.txt").is_none());
    }

    #[test]
    fn test_rename_rejects_bad_names() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("old.txt");
        fs::write(&file_path, "data").unwrap();

        assert!(rename_file(&file_path, "").is_none());
        assert!(matches!(
            try_rename_file(&file_path, "sub/new.txt"),
            Err(FileOpError::InvalidName(_))
        ));
        assert!(file_path.exists());
    }
}
