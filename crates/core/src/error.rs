//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Lookups never produce these; they report absence through `Option` or an
/// empty result. Errors are reserved for mutations that could not be carried
/// out and for malformed input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. malformed price, `min > max`).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A domain invariant would be violated (e.g. deleting a product that
    /// still has associated parts).
    #[error("invariant violated: {0}")]
    InvariantViolation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// The targeted record does not exist.
    #[error("not found")]
    NotFound,

    /// A positional replace was given a position outside the collection.
    #[error("index {index} out of bounds for collection of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }

    pub fn out_of_bounds(index: usize, len: usize) -> Self {
        Self::IndexOutOfBounds { index, len }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_bounds_message_names_index_and_length() {
        let err = DomainError::out_of_bounds(7, 3);
        assert_eq!(
            err.to_string(),
            "index 7 out of bounds for collection of length 3"
        );
    }

    #[test]
    fn constructors_wrap_messages() {
        assert_eq!(
            DomainError::invariant("still referenced"),
            DomainError::InvariantViolation("still referenced".to_string())
        );
        assert_eq!(DomainError::not_found().to_string(), "not found");
    }
}
