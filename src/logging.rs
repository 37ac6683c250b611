//! Structured logging setup for embedding drivers and tests.

use tracing_subscriber::EnvFilter;

/// Install a global `tracing` subscriber filtered by `RUST_LOG`, defaulting to `info`.
///
/// Calling this more than once (or after another subscriber was installed) is harmless.
pub fn init_tracing() {
    init_tracing_with_default("info");
}

/// Like [`init_tracing`], with an explicit fallback filter for when `RUST_LOG` is unset or invalid.
pub fn init_tracing_with_default(default_filter: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .try_init();
}
