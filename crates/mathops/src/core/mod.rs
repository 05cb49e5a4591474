//! Core arithmetic and sanitizing logic
//!
//! Everything here is pure: no I/O, no global state. Callers own the
//! operands and the fields being sanitized.

mod operations;
pub mod sanitizer;

pub use operations::{perform_operation, perform_operation_tag, Operation};
pub use sanitizer::{digits_only, only_numbers, InputField};

use thiserror::Error;

/// Result type for mathops operations
pub type MathResult<T> = Result<T, MathError>;

/// Errors raised at the string and lookup boundaries.
///
/// Arithmetic itself never fails: division by zero follows IEEE-754.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MathError {
    /// Operation tag is not one of add, subtract, multiply, divide
    #[error("Invalid operation: '{tag}'")]
    InvalidOperation {
        /// The rejected tag as given by the caller
        tag: String,
    },

    /// No input field is registered under this id
    #[error("Field not found: '{id}'")]
    FieldNotFound {
        /// The id that was looked up
        id: String,
    },
}

impl MathError {
    /// Create an invalid operation error
    #[must_use]
    pub fn invalid_operation(tag: impl Into<String>) -> Self {
        Self::InvalidOperation { tag: tag.into() }
    }

    /// Create a field not found error
    #[must_use]
    pub fn field_not_found(id: impl Into<String>) -> Self {
        Self::FieldNotFound { id: id.into() }
    }
}
