// ============================================================================
// Binding Module
// Headless wiring of the codec to currency input fields
// ============================================================================

mod currency_input;
mod text_field;

pub use currency_input::{CurrencyInputBinding, FieldEvent};
pub use text_field::TextField;
