//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// invariants, lookups). Persistence failures belong to the crate doing the IO.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. wrongly typed input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A domain invariant was violated.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),

    /// The named item is not tracked.
    #[error("not found: {0}")]
    NotFound(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
