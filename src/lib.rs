// ============================================================================
// Currency Format Library
// Locale-aware currency strings for form inputs
// ============================================================================

//! # Currency Format
//!
//! Conversion between grouped display amounts (`1.234,56`) and plain amounts
//! (`1234.56`) for web form inputs, plus a caret-preserving live formatter.
//!
//! ## Features
//!
//! - **Total conversions**: bad input becomes an empty string, never an error
//! - **Live reformatting** that keeps the caret next to the same digit
//! - **Headless input binding** for registration, typing, blur and submit
//! - **Decimal helpers** for parsing form values and rendering amounts
//!
//! ## Example
//!
//! ```rust
//! use currency_format::prelude::*;
//! use std::sync::Arc;
//!
//! assert_eq!(to_display("10000"), "10.000");
//! assert_eq!(to_plain("1.234,56"), "1234.56");
//!
//! let binding = CurrencyInputBinding::new(
//!     FormatConfig::paraguayan_guarani(),
//!     Arc::new(LoggingEventHandler),
//! )
//! .unwrap();
//!
//! let mut field = TextField::new("monto", "");
//! for key in ["1", "0", "0", "0", "0"] {
//!     field.insert(key);
//!     binding.on_input(&mut field);
//! }
//! assert_eq!(field.value(), "10.000");
//!
//! binding.on_submit([&mut field]);
//! assert_eq!(field.value(), "10000");
//! ```

pub mod binding;
pub mod domain;
pub mod interfaces;
pub mod numeric;
pub mod utils;

// Re-exports for convenience
pub mod prelude {
    pub use crate::binding::{CurrencyInputBinding, FieldEvent, TextField};
    pub use crate::domain::{FormatConfig, LiveFormat};
    pub use crate::interfaces::{
        CaretError, CurrencyField, FormatEvent, FormatEventHandler, LoggingEventHandler,
        NoOpEventHandler, RecordingEventHandler,
    };
    pub use crate::numeric::{
        format_live, to_display, to_plain, NumberFormatCodec, NumericError, PlainNumber,
    };
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;
    use rust_decimal::Decimal;
    use std::sync::Arc;

    #[test]
    fn test_end_to_end_form_round_trip() {
        let recorder = Arc::new(RecordingEventHandler::new());
        let binding =
            CurrencyInputBinding::new(FormatConfig::paraguayan_guarani(), recorder.clone())
                .unwrap();

        // Server renders a plain amount into the page
        let mut monto = TextField::new("input_monto", "250000");
        let mut precio = TextField::new("precio", "");
        binding.register(&mut monto);
        binding.register(&mut precio);
        assert_eq!(monto.value(), "250.000");

        // User types a price with decimals
        for key in ["1", "2", "3", "4", ",", "5"] {
            precio.insert(key);
            binding.handle(&mut precio, FieldEvent::Input);
        }
        assert_eq!(precio.value(), "1.234,5");

        binding.handle(&mut precio, FieldEvent::Blur);
        assert_eq!(precio.value(), "1.234,50");

        // Submit sends plain values, which the server parses back
        binding.on_submit([&mut monto, &mut precio]);
        assert_eq!(monto.value(), "250000");
        assert_eq!(precio.value(), "1234.50");

        let submitted: PlainNumber = precio.value().parse().unwrap();
        assert_eq!(submitted.to_decimal(), Ok(Decimal::new(123450, 2)));

        // Display input parses straight to a decimal
        let codec = binding.codec();
        assert_eq!(codec.parse_decimal("1.234,50"), Some(Decimal::new(123450, 2)));
        assert_eq!(
            codec.format_currency(Decimal::from(250000)),
            "Gs. 250.000"
        );

        assert!(recorder
            .events()
            .iter()
            .any(|e| matches!(e, FormatEvent::FieldInitialized { field_id, .. } if field_id == "input_monto")));
        assert!(recorder
            .events()
            .iter()
            .any(|e| matches!(e, FormatEvent::FieldNormalized { plain, .. } if plain == "1234.50")));
    }

    #[test]
    fn test_independent_bindings() {
        let guarani =
            CurrencyInputBinding::new(FormatConfig::default(), Arc::new(NoOpEventHandler))
                .unwrap();
        let dollars =
            CurrencyInputBinding::new(FormatConfig::english(), Arc::new(NoOpEventHandler))
                .unwrap();

        let mut a = TextField::new("total", "1234.5");
        let mut b = TextField::new("total", "1234.5");
        guarani.register(&mut a);
        dollars.register(&mut b);

        assert_eq!(a.value(), "1.234,50");
        assert_eq!(b.value(), "1,234.50");
    }
}
