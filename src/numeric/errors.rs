// ============================================================================
// Numeric Errors
// Error types for parsing plain numeric strings
// ============================================================================

use std::fmt;

/// Errors that can occur while parsing a plain numeric string.
///
/// The public codec never surfaces these: every failure collapses into an
/// empty result. They exist for callers that want to know *why* a value was
/// rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Input was empty or whitespace only
    Empty,
    /// Input string is not a plain number
    InvalidInput,
    /// Value does not fit in a `Decimal`
    Overflow,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::Empty => write!(f, "empty input: nothing to parse"),
            NumericError::InvalidInput => write!(f, "invalid input: could not parse value"),
            NumericError::Overflow => {
                write!(f, "overflow: value exceeds the decimal range")
            },
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
