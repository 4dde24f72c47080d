// ============================================================================
// Numeric Module
// Conversion between display and plain currency strings
// ============================================================================
//
// This module provides:
// - PlainNumber: validated plain numeric string (dot decimal, no grouping)
// - NumberFormatCodec: display <-> plain conversion and live reformatting
// - NumericError: Error types for plain-number parsing
//
// Design principles:
// - Public conversions are total: bad input yields an empty string
// - No floating-point operations; values go through rust_decimal
// - Separators come from FormatConfig

mod codec;
mod errors;
mod plain;

pub use codec::{format_live, to_display, to_plain, NumberFormatCodec};
pub use errors::{NumericError, NumericResult};
pub use plain::PlainNumber;
