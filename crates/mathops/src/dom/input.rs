//! Mock `<input>` element

use crate::core::InputField;

/// A text `<input>` element held by the caller
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextInput {
    /// Element ID
    pub id: String,
    /// Current value
    pub value: String,
}

impl TextInput {
    /// Creates an empty input with the given ID
    #[must_use]
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            ..Self::default()
        }
    }

    /// Sets the initial value
    #[must_use]
    pub fn with_value(mut self, value: &str) -> Self {
        self.value = value.to_string();
        self
    }
}

impl InputField for TextInput {
    fn value(&self) -> &str {
        &self.value
    }

    fn set_value(&mut self, value: String) {
        self.value = value;
    }
}
