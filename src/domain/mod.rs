// ============================================================================
// Domain Models Module
// Configuration and value objects shared by the codec and the input binding
// ============================================================================

pub mod config;
pub mod live;

pub use config::FormatConfig;
pub use live::LiveFormat;
