// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (so they can be boxed into application sentinels)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Invalid cluster spec: {0}")]
    InvalidSpec(String),

    // ========================================================================
    // Serialization Errors
    // ========================================================================
    #[error("Failed to marshal {model}: {reason}")]
    MarshalFailed { model: &'static str, reason: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidSpec(msg) => vec![
                "Check your cluster spec".into(),
                format!("Details: {}", msg),
            ],
            Self::MarshalFailed { .. } => {
                vec!["This is likely a bug in a config model".into()]
            }
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidSpec(_) => ErrorCategory::Validation,
            Self::MarshalFailed { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
