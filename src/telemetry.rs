//! Tracing initialization for standalone/CLI use.
//!
//! Grounded on `huginn-proxy`'s `init_tracing()`: an `EnvFilter` (defaulting
//! to `info` when `RUST_LOG` is unset) layered under a `fmt` subscriber.
//! No OpenTelemetry exporter: this crate has no network egress of its own,
//! so there is nothing for a remote collector to receive.

use tracing_subscriber::EnvFilter;

/// Installs a process-global `tracing` subscriber. Intended for the
/// `preread-inspect` binary and standalone tests; a library embedded in a
/// larger host should let that host own subscriber initialization instead.
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .init();
}
