// ============================================================================
// Number Format Codec
// Display <-> plain conversion and caret-preserving live reformatting
// ============================================================================

use super::errors::{NumericError, NumericResult};
use super::plain::PlainNumber;
use crate::domain::{FormatConfig, LiveFormat};
use rust_decimal::Decimal;

/// Bidirectional converter between display strings (`1.234,56`) and plain
/// strings (`1234.56`), parameterised by a [`FormatConfig`].
///
/// Every conversion is total: empty or unparseable input produces an empty
/// string (or `None`), never an error.
///
/// # Example
/// ```
/// use currency_format::numeric::NumberFormatCodec;
///
/// let codec = NumberFormatCodec::default();
/// assert_eq!(codec.to_display("1234.5"), "1.234,50");
/// assert_eq!(codec.to_plain("1.234,56"), "1234.56");
///
/// let live = codec.format_live("100000", 6);
/// assert_eq!(live.value, "100.000");
/// assert_eq!(live.cursor, 7);
/// ```
#[derive(Debug, Clone, Default)]
pub struct NumberFormatCodec {
    config: FormatConfig,
}

impl NumberFormatCodec {
    /// Create a codec for the given layout.
    ///
    /// The config is used as-is; call [`FormatConfig::validate`] first when
    /// it comes from outside.
    pub fn new(config: FormatConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FormatConfig {
        &self.config
    }

    // ========================================================================
    // Plain -> Display
    // ========================================================================

    /// Render a plain numeric string for display.
    ///
    /// Whitespace is ignored and the first decimal separator is accepted in
    /// place of `.`. Values with a non-zero fraction (at the configured
    /// precision) get exactly `fraction_digits` decimals; everything else is
    /// shown as a truncated, grouped integer.
    ///
    /// # Examples
    /// - `"10000"` -> `"10.000"`
    /// - `"1234.5"` -> `"1.234,50"`
    /// - `"abc"` -> `""`
    pub fn to_display(&self, plain: &str) -> String {
        match self.parse_plain_value(plain) {
            Ok(number) => self.format_number(&number),
            Err(err) => {
                tracing::trace!(input = plain, %err, "plain value not displayable");
                String::new()
            },
        }
    }

    /// Render a decimal amount for display, same rules as [`Self::to_display`].
    pub fn format_decimal(&self, value: Decimal) -> String {
        // Decimal's Display never uses exponents, so this always parses
        match value.to_string().parse::<PlainNumber>() {
            Ok(number) => self.format_number(&number),
            Err(_) => String::new(),
        }
    }

    /// Render a decimal amount with the configured currency symbol.
    ///
    /// `Gs. 10.000`, `-Gs. 5`; without a symbol this is [`Self::format_decimal`].
    pub fn format_currency(&self, amount: Decimal) -> String {
        let display = self.format_decimal(amount);
        match self.config.currency_symbol.as_deref() {
            None => display,
            Some(symbol) => match display.strip_prefix('-') {
                Some(magnitude) => format!("-{} {}", symbol, magnitude),
                None => format!("{} {}", symbol, display),
            },
        }
    }

    // ========================================================================
    // Display -> Plain
    // ========================================================================

    /// Convert a display string back to a plain string for submission.
    ///
    /// Thousands separators are dropped and the decimal separator becomes
    /// `.`. A string with only thousands separators (`"1.234"`) is therefore
    /// read as an integer, never as a decimal. Returns `""` when the result
    /// is not a plain number.
    ///
    /// # Examples
    /// - `"1.234,56"` -> `"1234.56"`
    /// - `"1.234"` -> `"1234"`
    pub fn to_plain(&self, input: &str) -> String {
        let compact: String = input.chars().filter(|c| !c.is_whitespace()).collect();
        if compact.is_empty() {
            return String::new();
        }

        let plain: String = compact
            .chars()
            .filter(|&c| c != self.config.thousands_separator)
            .map(|c| {
                if c == self.config.decimal_separator {
                    '.'
                } else {
                    c
                }
            })
            .collect();

        match plain.parse::<PlainNumber>() {
            Ok(_) => plain,
            Err(err) => {
                tracing::trace!(input, %err, "display value not convertible");
                String::new()
            },
        }
    }

    /// Parse user input (display or plain) into a decimal.
    ///
    /// Returns `None` for empty or unparseable input.
    pub fn parse_decimal(&self, display: &str) -> Option<Decimal> {
        self.to_plain(display)
            .parse::<PlainNumber>()
            .and_then(|number| number.to_decimal())
            .ok()
    }

    // ========================================================================
    // Live Reformatting
    // ========================================================================

    /// Reformat a field value after a keystroke, keeping the caret attached
    /// to the same digit.
    ///
    /// `cursor` is a character offset into `current`. The returned cursor is
    /// placed right after the n-th digit of the new value, where n is the
    /// number of digits left of the caret before reformatting (0 digits puts
    /// it at the start, too few digits puts it at the end). The one exception
    /// is a decimal separator just typed at the end of the value: it is kept,
    /// and so is the caret after it.
    pub fn format_live(&self, current: &str, cursor: usize) -> LiveFormat {
        let digits_before = current
            .chars()
            .take(cursor)
            .filter(char::is_ascii_digit)
            .count();
        let typed_trailing_separator = cursor >= current.chars().count()
            && current.ends_with(self.config.decimal_separator);

        let plain = self.to_plain(current);
        let number = match plain.parse::<PlainNumber>() {
            Ok(number) => number,
            Err(_) => return LiveFormat::cleared(),
        };

        let mut value = String::with_capacity(current.len() + 4);
        if number.is_negative() {
            value.push('-');
        }
        value.push_str(&self.group(number.significant_integer()));

        // A bare trailing separator is kept so the user can go on typing decimals
        if let Some(frac) = number.fraction_digits().filter(|_| self.config.fraction_digits > 0) {
            value.push(self.config.decimal_separator);
            value.extend(frac.chars().take(self.config.fraction_digits as usize));
        }

        let new_cursor = if typed_trailing_separator && value.ends_with(self.config.decimal_separator)
        {
            value.chars().count()
        } else {
            caret_after_digits(&value, digits_before)
        };

        LiveFormat::new(value, new_cursor)
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    fn parse_plain_value(&self, plain: &str) -> NumericResult<PlainNumber> {
        let compact: String = plain.chars().filter(|c| !c.is_whitespace()).collect();
        let normalized = compact.replacen(self.config.decimal_separator, ".", 1);

        match normalized.parse::<PlainNumber>() {
            Err(NumericError::InvalidInput) if normalized.contains(['e', 'E']) => {
                Decimal::from_scientific(&normalized)
                    .map_err(|_| NumericError::InvalidInput)?
                    .to_string()
                    .parse()
            },
            parsed => parsed,
        }
    }

    /// Display form of a parsed number, computed on its digit string so any
    /// length is accepted
    fn format_number(&self, number: &PlainNumber) -> String {
        let integer = number.significant_integer();
        let fraction = number.fraction_digits().unwrap_or("");

        let body = match round_fraction(integer, fraction, self.config.fraction_digits as usize) {
            Some((int_part, frac_part)) => format!(
                "{}{}{}",
                self.group(&int_part),
                self.config.decimal_separator,
                frac_part
            ),
            None => self.group(integer),
        };

        // "-0" is shown as "0"
        let is_zero = !body.bytes().any(|b| (b'1'..=b'9').contains(&b));
        if number.is_negative() && !is_zero {
            format!("-{}", body)
        } else {
            body
        }
    }

    /// Insert the thousands separator every `group_size` digits from the right
    fn group(&self, digits: &str) -> String {
        let size = self.config.group_size.max(1);
        let len = digits.chars().count();
        let mut out = String::with_capacity(len + len / size);

        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (len - i) % size == 0 {
                out.push(self.config.thousands_separator);
            }
            out.push(ch);
        }

        out
    }
}

/// Round `integer.fraction` half away from zero to `places` fractional digits.
///
/// Returns the rounded integer digits and exactly `places` fraction digits,
/// or `None` when the fraction rounds to zero (the value is then shown
/// truncated).
fn round_fraction(integer: &str, fraction: &str, places: usize) -> Option<(String, String)> {
    if places == 0 {
        return None;
    }

    let mut digits: Vec<u8> = integer
        .bytes()
        .chain(fraction.bytes().chain(std::iter::repeat(b'0')).take(places))
        .collect();
    let round_up = fraction
        .as_bytes()
        .get(places)
        .is_some_and(|&d| d >= b'5');

    let kept_fraction = &digits[digits.len() - places..];
    if !round_up && kept_fraction.iter().all(|&d| d == b'0') {
        return None;
    }

    if round_up {
        let mut carry = true;
        for d in digits.iter_mut().rev() {
            if *d == b'9' {
                *d = b'0';
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
        }
    }

    let split = digits.len() - places;
    let text = |part: &[u8]| part.iter().map(|&d| char::from(d)).collect::<String>();
    Some((text(&digits[..split]), text(&digits[split..])))
}

/// Character offset right after the `digits`-th ASCII digit of `value`
fn caret_after_digits(value: &str, digits: usize) -> usize {
    if digits == 0 {
        return 0;
    }

    let mut seen = 0;
    for (i, ch) in value.chars().enumerate() {
        if ch.is_ascii_digit() {
            seen += 1;
            if seen == digits {
                return i + 1;
            }
        }
    }

    value.chars().count()
}

// ============================================================================
// Default-Layout Shortcuts
// ============================================================================

/// [`NumberFormatCodec::to_display`] with the default (es-PY) layout
pub fn to_display(plain: &str) -> String {
    NumberFormatCodec::default().to_display(plain)
}

/// [`NumberFormatCodec::to_plain`] with the default (es-PY) layout
pub fn to_plain(display: &str) -> String {
    NumberFormatCodec::default().to_plain(display)
}

/// [`NumberFormatCodec::format_live`] with the default (es-PY) layout
pub fn format_live(current: &str, cursor: usize) -> LiveFormat {
    NumberFormatCodec::default().format_live(current, cursor)
}

// ============================================================================
// Tests
// ============================================================================
