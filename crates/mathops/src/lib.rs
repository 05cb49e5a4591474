//! mathops - four-operation arithmetic and digits-only input sanitizing
//!
//! Two independent leaf components:
//!
//! - **Operation dispatcher**: [`perform_operation`](core::perform_operation)
//!   applies add, subtract, multiply or divide to two `f64` operands.
//!   Division by zero follows IEEE-754 (signed infinity, or NaN for `0 / 0`).
//! - **Numeric sanitizer**: [`only_numbers`](core::only_numbers) rewrites an
//!   [`InputField`](core::InputField)'s value in place, keeping ASCII digits only.
//!
//! # Example
//!
//! ```rust
//! use mathops::prelude::*;
//!
//! assert_eq!(perform_operation(5.5, 3.25, Operation::Add), 8.75);
//! assert_eq!(perform_operation(3.5, 0.0, Operation::Divide), f64::INFINITY);
//!
//! // String tags are parsed at the boundary
//! assert!(perform_operation_tag(1.0, 2.0, "modulo").is_err());
//!
//! let mut field = TextInput::new("qty").with_value("123abc");
//! only_numbers(&mut field);
//! assert_eq!(field.value, "123");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod core;
pub mod dom;

pub use crate::core::{MathError, MathResult};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::{
        digits_only, only_numbers, perform_operation, perform_operation_tag, InputField,
        MathError, MathResult, Operation,
    };
    pub use crate::dom::{FieldDocument, TextInput};
}
