//! Adapter-level errors and their mapping into [`KsailError`].

use std::io;
use std::path::PathBuf;

use ksail_core::{application::ApplicationError, domain::DomainError, error::KsailError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AdapterError {
    #[error("Failed to {operation} '{}': {source}", path.display())]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to marshal {model}: {source}")]
    Marshal {
        model: &'static str,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Filesystem lock poisoned")]
    LockPoisoned,
}

impl AdapterError {
    pub fn io(operation: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            operation,
            path: path.into(),
            source,
        }
    }
}

impl From<AdapterError> for KsailError {
    fn from(err: AdapterError) -> Self {
        match err {
            AdapterError::Io {
                operation,
                path,
                source,
            } => ApplicationError::FilesystemError {
                path,
                reason: format!("Failed to {}: {}", operation, source),
            }
            .into(),
            AdapterError::Marshal { model, source } => DomainError::MarshalFailed {
                model,
                reason: source.to_string(),
            }
            .into(),
            AdapterError::LockPoisoned => ApplicationError::LockPoisoned.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_maps_to_filesystem_error() {
        let err: KsailError = AdapterError::io(
            "write file",
            "out/kind.yaml",
            io::Error::from(io::ErrorKind::PermissionDenied),
        )
        .into();

        match err {
            KsailError::Application(ApplicationError::FilesystemError { path, reason }) => {
                assert_eq!(path, PathBuf::from("out/kind.yaml"));
                assert!(reason.starts_with("Failed to write file"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn poisoned_lock_maps_through() {
        let err: KsailError = AdapterError::LockPoisoned.into();
        assert!(matches!(
            err,
            KsailError::Application(ApplicationError::LockPoisoned)
        ));
    }
}
