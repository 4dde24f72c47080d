// ============================================================================
// Live Format Result
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Outcome of reformatting a field while the user types.
///
/// The caller writes `value` into the field and moves the caret to `cursor`
/// (a character offset into `value`).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LiveFormat {
    pub value: String,
    pub cursor: usize,
}

impl LiveFormat {
    pub fn new(value: String, cursor: usize) -> Self {
        Self { value, cursor }
    }

    /// Empty field with the caret at the start
    pub fn cleared() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}
