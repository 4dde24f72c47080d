// ============================================================================
// Format Configuration
// Separators, grouping and precision for display strings
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Largest scale a `rust_decimal::Decimal` can carry
const MAX_FRACTION_DIGITS: u32 = 28;

/// Layout of the display representation of an amount.
///
/// The default is the Paraguayan Spanish layout: `.` groups thousands,
/// `,` marks decimals, two fractional digits, no currency symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FormatConfig {
    /// Inserted between digit groups of the integer part
    pub thousands_separator: char,

    /// Separates integer and fractional parts in display strings
    pub decimal_separator: char,

    /// Number of digits per group, counted from the right
    pub group_size: usize,

    /// Fractional digits shown when a value has a fraction
    pub fraction_digits: u32,

    /// Optional: Prefix used by `format_currency` (e.g. "Gs.")
    pub currency_symbol: Option<String>,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            thousands_separator: '.',
            decimal_separator: ',',
            group_size: 3,
            fraction_digits: 2,
            currency_symbol: None,
        }
    }
}

impl FormatConfig {
    /// Create a configuration with the given separators and default grouping
    pub fn new(thousands_separator: char, decimal_separator: char) -> Self {
        Self {
            thousands_separator,
            decimal_separator,
            ..Self::default()
        }
    }

    /// Builder method: Set the thousands separator
    pub fn with_thousands_separator(mut self, separator: char) -> Self {
        self.thousands_separator = separator;
        self
    }

    /// Builder method: Set the decimal separator
    pub fn with_decimal_separator(mut self, separator: char) -> Self {
        self.decimal_separator = separator;
        self
    }

    /// Builder method: Set the digit group size
    pub fn with_group_size(mut self, size: usize) -> Self {
        self.group_size = size;
        self
    }

    /// Builder method: Set the number of fractional digits
    pub fn with_fraction_digits(mut self, digits: u32) -> Self {
        self.fraction_digits = digits;
        self
    }

    /// Builder method: Set the currency symbol
    pub fn with_currency_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.currency_symbol = Some(symbol.into());
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        for (name, sep) in [
            ("Thousands separator", self.thousands_separator),
            ("Decimal separator", self.decimal_separator),
        ] {
            if sep.is_ascii_digit() || sep.is_whitespace() || sep == '-' || sep == '+' {
                return Err(format!("{} cannot be {:?}", name, sep));
            }
        }

        if self.thousands_separator == self.decimal_separator {
            return Err("Thousands and decimal separators must differ".to_string());
        }

        if self.group_size == 0 {
            return Err("Group size must be positive".to_string());
        }

        if self.fraction_digits > MAX_FRACTION_DIGITS {
            return Err(format!(
                "Fraction digits cannot exceed {}",
                MAX_FRACTION_DIGITS
            ));
        }

        Ok(())
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl FormatConfig {
    /// Paraguayan guaraní (es-PY)
    /// - `.` thousands, `,` decimals
    /// - Symbol: "Gs."
    pub fn paraguayan_guarani() -> Self {
        Self::default().with_currency_symbol("Gs.")
    }

    /// Continental euro layout (de-DE, es-ES, ...)
    /// - `.` thousands, `,` decimals
    /// - Symbol: "€"
    pub fn continental_euro() -> Self {
        Self::default().with_currency_symbol("€")
    }

    /// English layout
    /// - `,` thousands, `.` decimals
    pub fn english() -> Self {
        Self::new(',', '.')
    }
}
