//! Id-keyed set of input fields
//!
//! Stands in for `document.getElementById(..)` reads. The document only
//! stores fields; it renders nothing and dispatches no events.

use std::collections::HashMap;

use crate::core::{only_numbers, MathError, MathResult};
use crate::dom::TextInput;

/// Input fields registered by ID
#[derive(Debug, Clone, Default)]
pub struct FieldDocument {
    elements: HashMap<String, TextInput>,
}

impl FieldDocument {
    /// Creates an empty document
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a document from a list of inputs
    #[must_use]
    pub fn with_inputs(inputs: impl IntoIterator<Item = TextInput>) -> Self {
        let mut doc = Self::new();
        for input in inputs {
            doc.register(input);
        }
        doc
    }

    /// Registers an input for ID lookup.
    ///
    /// Inputs without an ID are ignored; a repeated ID replaces the earlier
    /// input and returns it.
    pub fn register(&mut self, input: TextInput) -> Option<TextInput> {
        if input.id.is_empty() {
            return None;
        }
        self.elements.insert(input.id.clone(), input)
    }

    /// Gets an input by ID
    #[must_use]
    pub fn get_element_by_id(&self, id: &str) -> Option<&TextInput> {
        self.elements.get(id)
    }

    /// Gets a mutable input by ID
    pub fn get_element_by_id_mut(&mut self, id: &str) -> Option<&mut TextInput> {
        self.elements.get_mut(id)
    }

    /// Reads the value of the input with this ID
    pub fn value_of(&self, id: &str) -> MathResult<&str> {
        self.elements
            .get(id)
            .map(|input| input.value.as_str())
            .ok_or_else(|| MathError::field_not_found(id))
    }

    /// Sanitizes the input with this ID in place
    pub fn only_numbers(&mut self, id: &str) -> MathResult<()> {
        let input = self
            .elements
            .get_mut(id)
            .ok_or_else(|| MathError::field_not_found(id))?;
        only_numbers(input);
        Ok(())
    }

    /// Number of registered inputs
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns true if no inputs are registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}
