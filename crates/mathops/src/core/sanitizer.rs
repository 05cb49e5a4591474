//! Numeric input sanitizer
//!
//! Keeps only ASCII digits `0-9`. Minus signs, decimal points and
//! non-ASCII digits are dropped.

/// A caller-owned, mutable text holder such as an `<input>` element.
pub trait InputField {
    /// Current textual value
    fn value(&self) -> &str;

    /// Overwrites the value
    fn set_value(&mut self, value: String);
}

impl InputField for String {
    fn value(&self) -> &str {
        self
    }

    fn set_value(&mut self, value: String) {
        *self = value;
    }
}

/// Returns `text` with every non-digit character removed.
#[must_use]
pub fn digits_only(text: &str) -> String {
    text.chars().filter(char::is_ascii_digit).collect()
}

/// Strips every non-digit character from `field`'s value, in place.
///
/// Never fails. A value without digits becomes the empty string, and
/// sanitizing an already clean value leaves it untouched.
pub fn only_numbers<F: InputField + ?Sized>(field: &mut F) {
    let original = field.value();
    let filtered = digits_only(original);
    if filtered.len() == original.len() {
        return;
    }
    tracing::debug!(
        removed = original.chars().count() - filtered.len(),
        kept = filtered.len(),
        "stripped non-digit characters"
    );
    field.set_value(filtered);
}
