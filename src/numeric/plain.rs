// ============================================================================
// Plain Number
// Parsed form of a canonical "plain" numeric string (dot decimal, no grouping)
// ============================================================================

use super::errors::{NumericError, NumericResult};
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

/// A validated plain numeric string, split into its parts.
///
/// Accepted shape: optional `+`/`-`, ASCII digits, optional `.` followed by
/// ASCII digits, with at least one digit overall. Digits are kept verbatim
/// (leading zeros included) so the value can be re-emitted exactly as typed.
///
/// # Examples
/// - `"1234.56"` -> integer `"1234"`, fraction `Some("56")`
/// - `"12."` -> integer `"12"`, fraction `Some("")`
/// - `".5"` -> integer `""`, fraction `Some("5")`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlainNumber {
    negative: bool,
    integer: String,
    fraction: Option<String>,
}

impl PlainNumber {
    /// True when the string carried a leading minus sign.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Integer digits as written (may be empty, e.g. for `".5"`).
    #[inline]
    pub fn integer_digits(&self) -> &str {
        &self.integer
    }

    /// Fraction digits as written, `None` when there was no decimal point.
    #[inline]
    pub fn fraction_digits(&self) -> Option<&str> {
        self.fraction.as_deref()
    }

    /// Integer digits without superfluous leading zeros, never empty.
    pub fn significant_integer(&self) -> &str {
        let trimmed = self.integer.trim_start_matches('0');
        if trimmed.is_empty() {
            "0"
        } else {
            trimmed
        }
    }

    /// Convert to `rust_decimal::Decimal`.
    ///
    /// # Errors
    /// Returns `Overflow` if the value does not fit in a `Decimal`.
    pub fn to_decimal(&self) -> NumericResult<Decimal> {
        let mut canonical = String::with_capacity(self.integer.len() + 4);
        if self.negative {
            canonical.push('-');
        }
        canonical.push_str(self.significant_integer());
        if let Some(frac) = self.fraction.as_deref().filter(|f| !f.is_empty()) {
            canonical.push('.');
            canonical.push_str(frac);
        }

        Decimal::from_str(&canonical).map_err(|_| NumericError::Overflow)
    }
}

impl FromStr for PlainNumber {
    type Err = NumericError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(NumericError::Empty);
        }

        // Check for sign
        let (negative, s) = if let Some(rest) = s.strip_prefix('-') {
            (true, rest)
        } else if let Some(rest) = s.strip_prefix('+') {
            (false, rest)
        } else {
            (false, s)
        };

        // Split on decimal point
        let (int_str, frac_str) = match s.split_once('.') {
            Some((int_str, frac_str)) => (int_str, Some(frac_str)),
            None => (s, None),
        };

        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(int_str) || !frac_str.map_or(true, all_digits) {
            return Err(NumericError::InvalidInput);
        }
        if int_str.is_empty() && frac_str.map_or(true, str::is_empty) {
            return Err(NumericError::InvalidInput);
        }

        Ok(Self {
            negative,
            integer: int_str.to_string(),
            fraction: frac_str.map(str::to_string),
        })
    }
}

impl fmt::Display for PlainNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            f.write_str("-")?;
        }
        f.write_str(&self.integer)?;
        if let Some(frac) = &self.fraction {
            write!(f, ".{}", frac)?;
        }
        Ok(())
    }
}
