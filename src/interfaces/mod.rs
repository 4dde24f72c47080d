// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod currency_field;
mod event_handler;

pub use currency_field::{CaretError, CurrencyField};
pub use event_handler::{
    FormatEvent, FormatEventHandler, LoggingEventHandler, NoOpEventHandler, RecordingEventHandler,
};
