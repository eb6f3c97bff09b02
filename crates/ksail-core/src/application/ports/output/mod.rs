//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `ksail-adapters` crate provides implementations.

use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::error::KsailResult;

/// Result of a successful `stat`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileStat {
    pub modified: SystemTime,
    pub is_dir: bool,
}

/// Port for filesystem operations.
///
/// Implemented by:
/// - `ksail_adapters::filesystem::LocalFilesystem` (production)
/// - `ksail_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> KsailResult<()>;

    /// Write content to a file, replacing it if present.
    fn write_file(&self, path: &Path, content: &str) -> KsailResult<()>;

    /// Stat a path. The raw `io::Error` is returned so callers can tell
    /// not-found apart from other failures.
    fn stat(&self, path: &Path) -> io::Result<FileStat>;

    /// Set a file's modification time.
    fn set_modified(&self, path: &Path, modified: SystemTime) -> KsailResult<()>;

    /// Remove a single file.
    fn remove_file(&self, path: &Path) -> KsailResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool {
        self.stat(path).is_ok()
    }
}

/// Options handed to a [`Generator`] alongside its model.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Where to write the output. `None` only renders.
    pub output: Option<PathBuf>,
    /// Replace an existing file at `output`.
    pub force: bool,
}

impl GenerateOptions {
    pub fn write_to(output: impl Into<PathBuf>, force: bool) -> Self {
        Self {
            output: Some(output.into()),
            force,
        }
    }
}

/// Port for turning a model into file content and persisting it.
///
/// Implemented by:
/// - `ksail_adapters::generator::YamlGenerator` (serde_yaml + safe write)
/// - any `Fn(&M, &GenerateOptions) -> KsailResult<String>` closure
///
/// The scaffolder is agnostic to the model's schema and to how the returned
/// content is serialized or persisted.
pub trait Generator<M>: Send + Sync {
    fn generate(&self, model: &M, options: &GenerateOptions) -> KsailResult<String>;
}

impl<M, F> Generator<M> for F
where
    F: Fn(&M, &GenerateOptions) -> KsailResult<String> + Send + Sync,
{
    fn generate(&self, model: &M, options: &GenerateOptions) -> KsailResult<String> {
        self(model, options)
    }
}
