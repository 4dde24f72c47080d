// ============================================================================
// Utilities Module
// Tracing subscriber setup for binaries, demos and tests
// ============================================================================

#[cfg(feature = "logging")]
mod logging;

#[cfg(feature = "logging")]
pub use logging::init_tracing;
