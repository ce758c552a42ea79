use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use crate::core::error::Result;

const COPY_BUFFER_SIZE: usize = 1024;

pub fn try_copy_file<P: AsRef<Path>, Q: AsRef<Path>>(src: P, dest: Q) -> Result<u64> {
    let mut reader = File::open(src.as_ref())?;
    let mut writer = File::create(dest.as_ref())?;
    let mut buffer = [0u8; COPY_BUFFER_SIZE];
    let mut copied = 0u64;

    loop {
        let count = reader.read(&mut buffer)?;
        if count == 0 {
            break;
        }
        writer.write_all(&buffer[..count])?;
        copied += count as u64;
    }
    writer.flush()?;

    Ok(copied)
}

// On failure the destination may be left truncated; nothing is rolled back.
pub fn copy_file<P: AsRef<Path>, Q: AsRef<Path>>(src: P, dest: Q) -> bool {
    match try_copy_file(src.as_ref(), dest.as_ref()) {
        Ok(_) => true,
        Err(e) => {
            log::warn!(
                "copy {} -> {} failed: {}",
                src.as_ref().display(),
                dest.as_ref().display(),
                e
            );
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_copy_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let src = temp_dir.path().join("empty.bin");
        let dest = temp_dir.path().join("copy.bin");
        fs::write(&src, b"").unwrap();

        assert!(copy_file(&src, &dest));
        assert_eq!(fs::read(&dest).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_copy_spans_multiple_chunks() {
        let temp_dir = TempDir::new().unwrap();
        let src = temp_dir.path().join("big.bin");
        let dest = temp_dir.path().join("copy.bin");

        let payload: Vec<u8> = (0..4096 + 37).map(|i| (i % 251) as u8).collect();
        fs::write(&src, &payload).unwrap();

        let copied = try_copy_file(&src, &dest).unwrap();
        assert_eq!(copied, payload.len() as u64);
        assert_eq!(fs::read(&dest).unwrap(), payload);
    }

    #[test]
    fn test_copy_missing_source_fails() {
        let temp_dir = TempDir::new().unwrap();
        let src = temp_dir.path().join("gone.bin");
        let dest = temp_dir.path().join("copy.bin");

        assert!(!copy_file(&src, &dest));
        assert!(try_copy_file(&src, &dest).is_err());
    }
}
