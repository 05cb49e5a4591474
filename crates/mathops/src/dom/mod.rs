//! Input-field stand-ins for page elements
//!
//! Lets the sanitizer run against `<input>`-like values without a browser.

mod document;
mod input;

pub use document::FieldDocument;
pub use input::TextInput;
