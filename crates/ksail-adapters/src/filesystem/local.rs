//! Local filesystem adapter using std::fs.

use std::fs::{self, File};
use std::io;
use std::path::Path;
use std::time::SystemTime;

use ksail_core::{
    application::ports::{FileStat, Filesystem},
    error::KsailResult,
};

use crate::error::AdapterError;

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> KsailResult<()> {
        fs::create_dir_all(path).map_err(|e| AdapterError::io("create directory", path, e))?;
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> KsailResult<()> {
        fs::write(path, content).map_err(|e| AdapterError::io("write file", path, e))?;
        Ok(())
    }

    fn stat(&self, path: &Path) -> io::Result<FileStat> {
        let metadata = fs::metadata(path)?;
        Ok(FileStat {
            modified: metadata.modified()?,
            is_dir: metadata.is_dir(),
        })
    }

    fn set_modified(&self, path: &Path, modified: SystemTime) -> KsailResult<()> {
        File::options()
            .write(true)
            .open(path)
            .and_then(|file| file.set_modified(modified))
            .map_err(|e| AdapterError::io("set modification time", path, e))?;
        Ok(())
    }

    fn remove_file(&self, path: &Path) -> KsailResult<()> {
        fs::remove_file(path).map_err(|e| AdapterError::io("remove file", path, e))?;
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn stat_reports_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = LocalFilesystem::new()
            .stat(&dir.path().join("missing.yaml"))
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn set_modified_is_observed_by_stat() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("kind.yaml");
        let fs = LocalFilesystem::new();
        fs.write_file(&path, "kind: Cluster\n").unwrap();

        let target = SystemTime::UNIX_EPOCH + Duration::from_secs(1_700_000_000);
        fs.set_modified(&path, target).unwrap();

        assert_eq!(fs.stat(&path).unwrap().modified, target);
    }

    #[test]
    fn remove_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(LocalFilesystem::new()
            .remove_file(&dir.path().join("gone.yaml"))
            .is_err());
    }
}
