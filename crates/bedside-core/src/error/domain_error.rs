//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("At least one side (left or right) must be provided")]
    EmptyUpdate,

    // =========================================================================
    // Configuration Errors
    // =========================================================================
    #[error("Stale timeout must be positive, got {0} ms")]
    InvalidStaleTimeout(i64),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptyUpdate => "VALIDATION_ERROR",
            Self::InvalidStaleTimeout(_) => "CONFIG_ERROR",
        }
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::EmptyUpdate)
    }
}
