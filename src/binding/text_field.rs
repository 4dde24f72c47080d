// ============================================================================
// In-Memory Text Field
// ============================================================================

use crate::interfaces::{CaretError, CurrencyField};

/// Minimal [`CurrencyField`] backed by a `String`.
///
/// Behaves like a browser text input: writing the value moves the caret to
/// the end, and `insert`/`backspace` simulate keystrokes at the caret.
/// Fields built with [`TextField::without_caret_support`] reject caret moves
/// the way `<input type="number">` does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextField {
    id: String,
    value: String,
    caret: usize,
    caret_supported: bool,
    bound: bool,
}

impl TextField {
    /// Create a field with the caret at the end of `value`
    pub fn new(id: impl Into<String>, value: impl Into<String>) -> Self {
        let value = value.into();
        let caret = value.chars().count();
        Self {
            id: id.into(),
            value,
            caret,
            caret_supported: true,
            bound: false,
        }
    }

    /// Builder method: Reject every caret move
    pub fn without_caret_support(mut self) -> Self {
        self.caret_supported = false;
        self
    }

    /// Builder method: Place the caret (clamped to the value length)
    pub fn with_caret(mut self, offset: usize) -> Self {
        self.caret = offset.min(self.value.chars().count());
        self
    }

    /// Type `text` at the caret
    pub fn insert(&mut self, text: &str) {
        let at = self.byte_offset(self.caret);
        self.value.insert_str(at, text);
        self.caret += text.chars().count();
    }

    /// Delete the character left of the caret
    pub fn backspace(&mut self) {
        if self.caret == 0 {
            return;
        }
        let start = self.byte_offset(self.caret - 1);
        let end = self.byte_offset(self.caret);
        self.value.replace_range(start..end, "");
        self.caret -= 1;
    }

    fn byte_offset(&self, chars: usize) -> usize {
        self.value
            .char_indices()
            .nth(chars)
            .map_or(self.value.len(), |(i, _)| i)
    }
}

impl CurrencyField for TextField {
    fn id(&self) -> &str {
        &self.id
    }

    fn value(&self) -> &str {
        &self.value
    }

    fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
        self.caret = self.value.chars().count();
    }

    fn caret(&self) -> usize {
        self.caret
    }

    fn set_caret(&mut self, offset: usize) -> Result<(), CaretError> {
        if !self.caret_supported {
            return Err(CaretError::Unsupported);
        }
        if offset > self.value.chars().count() {
            return Err(CaretError::OutOfRange);
        }
        self.caret = offset;
        Ok(())
    }

    fn is_bound(&self) -> bool {
        self.bound
    }

    fn set_bound(&mut self, bound: bool) {
        self.bound = bound;
    }
}
