//! @acp:module "Preflight"
//! @acp:summary "Refuse to scaffold into a directory that already has content"
//! @acp:domain cli
//! @acp:layer service

use std::fs;
use std::path::Path;

use crate::error::{Result, ScaffoldError};

/// Ensure `root` has no entries at all, hidden files included.
///
/// `read_dir` never yields `.` or `..`, so anything it returns counts.
pub fn ensure_empty(root: &Path) -> Result<()> {
    let read = fs::read_dir(root).map_err(|e| ScaffoldError::io("read directory", root, e))?;

    let mut entries = Vec::new();
    for entry in read {
        let entry = entry.map_err(|e| ScaffoldError::io("read directory", root, e))?;
        entries.push(entry.file_name().to_string_lossy().into_owned());
    }

    if entries.is_empty() {
        tracing::debug!("{} is empty", root.display());
        return Ok(());
    }

    entries.sort();
    Err(ScaffoldError::DirectoryNotEmpty {
        path: root.to_path_buf(),
        entries,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_empty_directory_passes() {
        let temp = TempDir::new().unwrap();
        assert!(ensure_empty(temp.path()).is_ok());
    }

    #[test]
    fn test_hidden_file_blocks() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join(".hidden"), "").unwrap();

        match ensure_empty(temp.path()) {
            Err(ScaffoldError::DirectoryNotEmpty { entries, .. }) => {
                assert_eq!(entries, vec![".hidden".to_string()]);
            }
            other => panic!("expected DirectoryNotEmpty, got {:?}", other),
        }
    }

    #[test]
    fn test_entries_are_sorted() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir(temp.path().join("src")).unwrap();
        std::fs::write(temp.path().join("makefile"), "").unwrap();

        let err = ensure_empty(temp.path()).unwrap_err();
        assert!(err.is_usage());
        assert!(err.to_string().ends_with("(found: makefile, src)"));
    }

    #[test]
    fn test_missing_directory_is_io_error() {
        let temp = TempDir::new().unwrap();
        let err = ensure_empty(&temp.path().join("nope")).unwrap_err();
        assert!(matches!(err, ScaffoldError::Io { .. }));
    }
}
