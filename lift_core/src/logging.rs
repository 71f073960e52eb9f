//! Tracing setup for liftlog.
//!
//! Log output goes to stderr so it never mixes with report output on stdout.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install the subscriber at warn level
///
/// Parser diagnostics (skipped lines, orphan sets) are at debug, so a
/// normal import stays quiet. RUST_LOG=debug shows them.
pub fn init() {
    init_with_level("warn")
}

/// Install the subscriber with `default_level` as the fallback filter
///
/// RUST_LOG, when set, replaces the fallback entirely.
pub fn init_with_level(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}

/// Debug-level subscriber routed through the test harness
#[cfg(test)]
pub fn init_test() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(EnvFilter::new("debug"))
        .try_init();
}
