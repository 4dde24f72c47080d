// ============================================================================
// Logging Setup
// ============================================================================

use tracing_subscriber::EnvFilter;

/// Install a global fmt subscriber.
///
/// Honours `RUST_LOG` (e.g. `RUST_LOG=currency_format=debug`), falling back
/// to `info`. Calling it again once a subscriber is set does nothing.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_line_number(true)
        .compact()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice() {
        init_tracing();
        init_tracing();
        tracing::debug!("subscriber installed");
    }
}
