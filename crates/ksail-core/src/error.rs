//! Unified error handling for KSail Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for KSail Core operations.
///
/// This enum wraps all possible errors that can occur when using ksail-core,
/// providing a unified interface for error handling.
#[derive(Debug, Error, Clone)]
pub enum KsailError {
    /// Errors from the domain layer (invalid specs, marshalling).
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (orchestration failures).
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl KsailError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Internal { .. } => vec![
                "This appears to be a bug in KSail".into(),
                "Please report this issue at: https://github.com/devantler-tech/ksail/issues"
                    .into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }

    /// The application sentinel this error is, if any.
    pub fn as_application(&self) -> Option<&ApplicationError> {
        match self {
            Self::Application(e) => Some(e),
            _ => None,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}

/// Convenient result type alias.
pub type KsailResult<T> = Result<T, KsailError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_categories_carry_through() {
        let invalid: KsailError = DomainError::InvalidSpec("unknown cni: weave".into()).into();
        assert_eq!(invalid.category(), ErrorCategory::Validation);

        let marshal: KsailError = DomainError::MarshalFailed {
            model: "Kustomization",
            reason: "boom".into(),
        }
        .into();
        assert_eq!(marshal.category(), ErrorCategory::Internal);
        assert!(marshal.as_application().is_none());
    }
}
