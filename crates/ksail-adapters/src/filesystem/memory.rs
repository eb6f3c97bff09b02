//! In-memory filesystem adapter for testing.
//!
//! Modification times come from a [`Clock`] so tests can freeze time and
//! reproduce two writes landing in the same tick.

use std::{
    collections::{HashMap, HashSet},
    io,
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
    time::{Duration, SystemTime},
};

use ksail_core::{
    application::ports::{FileStat, Filesystem},
    error::KsailResult,
};

use crate::error::AdapterError;

/// Time source for modification times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Clock {
    System,
    Frozen(SystemTime),
}

impl Clock {
    fn now(self) -> SystemTime {
        match self {
            Self::System => SystemTime::now(),
            Self::Frozen(at) => at,
        }
    }
}

/// In-memory filesystem for testing.
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, MemoryFile>,
    directories: HashSet<PathBuf>,
    clock: Clock,
}

#[derive(Debug, Clone)]
struct MemoryFile {
    content: String,
    modified: SystemTime,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem on the system clock.
    pub fn new() -> Self {
        Self::with_clock(Clock::System)
    }

    /// Create a new empty memory filesystem whose clock never moves on its own.
    pub fn frozen(at: SystemTime) -> Self {
        Self::with_clock(Clock::Frozen(at))
    }

    fn with_clock(clock: Clock) -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryFilesystemInner {
                files: HashMap::new(),
                directories: HashSet::new(),
                clock,
            })),
        }
    }

    /// Move a frozen clock forward. No effect on the system clock.
    pub fn advance(&self, by: Duration) {
        if let Ok(mut inner) = self.inner.write() {
            if let Clock::Frozen(at) = inner.clock {
                inner.clock = Clock::Frozen(at + by);
            }
        }
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).map(|file| file.content.clone())
    }

    /// List all files, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        let Ok(inner) = self.inner.read() else {
            return Vec::new();
        };
        let mut files: Vec<_> = inner.files.keys().cloned().collect();
        files.sort();
        files
    }
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> KsailResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| AdapterError::LockPoisoned)?;

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> KsailResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| AdapterError::LockPoisoned)?;

        // Ensure parent exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(AdapterError::io(
                    "write file",
                    path,
                    io::Error::new(io::ErrorKind::NotFound, "parent directory does not exist"),
                )
                .into());
            }
        }

        let modified = inner.clock.now();
        inner.files.insert(
            path.to_path_buf(),
            MemoryFile {
                content: content.to_string(),
                modified,
            },
        );
        Ok(())
    }

    fn stat(&self, path: &Path) -> io::Result<FileStat> {
        let inner = self
            .inner
            .read()
            .map_err(|_| io::Error::other("filesystem lock poisoned"))?;

        if let Some(file) = inner.files.get(path) {
            return Ok(FileStat {
                modified: file.modified,
                is_dir: false,
            });
        }
        if inner.directories.contains(path) {
            return Ok(FileStat {
                modified: inner.clock.now(),
                is_dir: true,
            });
        }
        Err(io::Error::from(io::ErrorKind::NotFound))
    }

    fn set_modified(&self, path: &Path, modified: SystemTime) -> KsailResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| AdapterError::LockPoisoned)?;

        match inner.files.get_mut(path) {
            Some(file) => {
                file.modified = modified;
                Ok(())
            }
            None => Err(AdapterError::io(
                "set modification time",
                path,
                io::Error::from(io::ErrorKind::NotFound),
            )
            .into()),
        }
    }

    fn remove_file(&self, path: &Path) -> KsailResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| AdapterError::LockPoisoned)?;

        match inner.files.remove(path) {
            Some(_) => Ok(()),
            None => Err(AdapterError::io(
                "remove file",
                path,
                io::Error::from(io::ErrorKind::NotFound),
            )
            .into()),
        }
    }
}
