//! Tracing subscriber setup for test binaries.
//!
//! Assertions emit structured events (`event = "specs.assert.*"`). Nothing is
//! printed unless a subscriber is installed, so tests opt in by calling
//! [`init_logging`] at the top of the test body. Repeated calls are no-ops.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

const DEFAULT_FILTER: &str = "warn";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install a human-readable subscriber that writes through the test harness
/// capture, filtered by `RUST_LOG` (default `warn`).
pub fn init_logging() {
    let layer = fmt::layer().with_test_writer().with_target(false);

    // Another test in the same binary may have installed a subscriber already.
    let _ = tracing_subscriber::registry()
        .with(env_filter())
        .with(layer)
        .try_init();
}

/// Same as [`init_logging`] but emits one JSON object per event.
pub fn init_logging_json() {
    let layer = fmt::layer()
        .json()
        .with_test_writer()
        .with_target(false);

    let _ = tracing_subscriber::registry()
        .with(env_filter())
        .with(layer)
        .try_init();
}
