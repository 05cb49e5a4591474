//! Operation dispatcher
//!
//! A closed enum replaces string-tag dispatch, so every operation is matched
//! exhaustively and an unknown tag can only appear at the parsing boundary.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::{MathError, MathResult};

/// Arithmetic operation selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (*)
    Multiply,
    /// Division (/)
    Divide,
}

impl Operation {
    /// All operations in declaration order
    pub const ALL: [Self; 4] = [Self::Add, Self::Subtract, Self::Multiply, Self::Divide];

    /// Returns the operator symbol for display
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        }
    }

    /// Returns the lowercase tag (`add`, `subtract`, ...)
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
        }
    }

    /// Applies this operation to two operands.
    ///
    /// Division by zero is not an error: a nonzero dividend gives a signed
    /// infinity and `0 / 0` gives NaN.
    #[must_use]
    pub fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            Self::Add => a + b,
            Self::Subtract => a - b,
            Self::Multiply => a * b,
            Self::Divide => a / b,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Operation {
    type Err = MathError;

    /// Parses an exact lowercase tag; anything else is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|op| op.tag() == s)
            .ok_or_else(|| MathError::invalid_operation(s))
    }
}

/// Performs `op` on `a` and `b`.
///
/// Operands are not validated; NaN and infinities propagate per IEEE-754.
#[must_use]
pub fn perform_operation(a: f64, b: f64, op: Operation) -> f64 {
    let result = op.apply(a, b);
    tracing::trace!(a, b, operation = op.tag(), result, "performed operation");
    result
}

/// Parses `tag` and performs the operation.
///
/// Returns [`MathError::InvalidOperation`] when the tag is unknown.
pub fn perform_operation_tag(a: f64, b: f64, tag: &str) -> MathResult<f64> {
    let op: Operation = tag.parse()?;
    Ok(perform_operation(a, b, op))
}
