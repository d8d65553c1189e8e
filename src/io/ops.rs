use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

pub fn ensure_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|e| Error::io(path, e))
}

/// Write `data` to `path`, creating parent directories as needed
pub fn write_file(path: &Path, data: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    fs::write(path, data).map_err(|e| Error::io(path, e))
}

pub fn remove_dir(path: &Path) -> Result<()> {
    fs::remove_dir_all(path).map_err(|e| Error::io(path, e))
}

/// Size of a written artifact, 0 if it vanished
pub fn file_size(path: &Path) -> u64 {
    fs::metadata(path).map(|m| m.len()).unwrap_or(0)
}

/// Count of `.png` files directly inside `dir`
pub fn count_pngs(dir: &Path) -> Result<usize> {
    let read_dir = fs::read_dir(dir).map_err(|e| Error::io(dir, e))?;
    Ok(read_dir
        .flatten()
        .filter(|entry| {
            entry
                .path()
                .extension()
                .map(|ext| ext.eq_ignore_ascii_case("png"))
                .unwrap_or(false)
        })
        .count())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_file_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a").join("b").join("icon.png");
        write_file(&path, b"data").unwrap();
        assert_eq!(file_size(&path), 4);
    }

    #[test]
    fn test_count_pngs_ignores_other_files() {
        let dir = tempfile::tempdir().unwrap();
        write_file(&dir.path().join("one.png"), b"x").unwrap();
        write_file(&dir.path().join("two.PNG"), b"x").unwrap();
        write_file(&dir.path().join("notes.txt"), b"x").unwrap();
        assert_eq!(count_pngs(dir.path()).unwrap(), 2);
    }

    #[test]
    fn test_remove_dir_missing_is_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(remove_dir(&dir.path().join("missing")).is_err());
    }
}
