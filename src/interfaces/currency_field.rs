// ============================================================================
// Currency Field Interface
// The seam between the formatter and whatever text widget holds the value
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Reasons a field can refuse to move its caret
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CaretError {
    /// The widget has no selection API (e.g. a numeric input)
    Unsupported,
    /// Offset lies beyond the end of the value
    OutOfRange,
}

impl fmt::Display for CaretError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaretError::Unsupported => write!(f, "field does not support caret placement"),
            CaretError::OutOfRange => write!(f, "caret offset is past the end of the value"),
        }
    }
}

impl std::error::Error for CaretError {}

/// A text field holding a currency amount.
///
/// Offsets are character offsets into the current value.
pub trait CurrencyField {
    /// Identifier used in events and logs
    fn id(&self) -> &str;

    /// Current text of the field
    fn value(&self) -> &str;

    /// Replace the text of the field
    fn set_value(&mut self, value: &str);

    /// Current caret offset
    fn caret(&self) -> usize;

    /// Move the caret.
    ///
    /// # Errors
    /// Fields without caret support return `Unsupported`.
    fn set_caret(&mut self, offset: usize) -> Result<(), CaretError>;

    /// True once a binding has taken the field under management
    fn is_bound(&self) -> bool;

    /// Set or clear the managed marker (a `data-*` attribute on a web page)
    fn set_bound(&mut self, bound: bool);
}
