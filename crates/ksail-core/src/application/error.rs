//! Application layer errors.
//!
//! These errors represent failures in orchestration, not spec logic.
//! Spec and model errors are `DomainError` from `crate::domain`.
//!
//! Each emitted artifact has its own sentinel variant wrapping the underlying
//! cause, so callers can match on which step failed and still walk
//! `source()` down to the root error.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::Artifact;
use crate::error::{ErrorCategory, KsailError};

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Generating or writing `ksail.yaml` failed.
    #[error("failed to generate ksail config: {source}")]
    KSailConfigGeneration { source: Box<KsailError> },

    /// Generating or writing the Kind config failed.
    #[error("failed to generate kind config: {source}")]
    KindConfigGeneration { source: Box<KsailError> },

    /// Generating or writing the K3d config failed.
    #[error("failed to generate k3d config: {source}")]
    K3dConfigGeneration { source: Box<KsailError> },

    /// Generating or writing the EKS config failed.
    #[error("failed to generate eks config: {source}")]
    EksConfigGeneration { source: Box<KsailError> },

    /// Generating or writing `kustomization.yaml` failed.
    #[error("failed to generate kustomization: {source}")]
    KustomizationGeneration { source: Box<KsailError> },

    /// The cluster spec names a distribution with no registered generator.
    #[error("unknown distribution '{distribution}'")]
    UnknownDistribution { distribution: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// An in-memory adapter's lock was poisoned.
    #[error("Filesystem lock poisoned")]
    LockPoisoned,
}

impl ApplicationError {
    /// Wrap `source` in the sentinel belonging to `artifact`.
    pub fn generation_failed(artifact: Artifact, source: KsailError) -> Self {
        let source = Box::new(source);
        match artifact {
            Artifact::KSailConfig => Self::KSailConfigGeneration { source },
            Artifact::KindConfig => Self::KindConfigGeneration { source },
            Artifact::K3dConfig => Self::K3dConfigGeneration { source },
            Artifact::EksConfig => Self::EksConfigGeneration { source },
            Artifact::Kustomization => Self::KustomizationGeneration { source },
        }
    }

    /// The artifact whose generation failed, for generation sentinels.
    pub fn artifact(&self) -> Option<Artifact> {
        match self {
            Self::KSailConfigGeneration { .. } => Some(Artifact::KSailConfig),
            Self::KindConfigGeneration { .. } => Some(Artifact::KindConfig),
            Self::K3dConfigGeneration { .. } => Some(Artifact::K3dConfig),
            Self::EksConfigGeneration { .. } => Some(Artifact::EksConfig),
            Self::KustomizationGeneration { .. } => Some(Artifact::Kustomization),
            _ => None,
        }
    }

    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnknownDistribution { distribution } => vec![
                format!("'{}' is not a distribution KSail can scaffold", distribution),
                "Use --distribution kind, k3d or eks".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::LockPoisoned => vec!["Try again".into()],
            generation => {
                let mut suggestions = vec![
                    "Files written before the failure were kept".into(),
                    "Re-run the command once the cause is fixed".into(),
                ];
                if let Some(artifact) = generation.artifact() {
                    suggestions.insert(0, format!("Could not write '{}'", artifact));
                }
                suggestions
            }
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnknownDistribution { .. } => ErrorCategory::Validation,
            Self::FilesystemError { .. } | Self::LockPoisoned => ErrorCategory::Internal,
            Self::KSailConfigGeneration { source }
            | Self::KindConfigGeneration { source }
            | Self::K3dConfigGeneration { source }
            | Self::EksConfigGeneration { source }
            | Self::KustomizationGeneration { source } => source.category(),
        }
    }
}
