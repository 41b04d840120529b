//! Tracing initialization for embedding hosts.
//!
//! The library logs through `tracing` and leaves the subscriber to the
//! process that embeds it. Hosts without their own subscriber call
//! [`init_telemetry`] once at startup; anything already installed wins.

use std::sync::OnceLock;

use tracing_subscriber::EnvFilter;

static INITIALIZED: OnceLock<()> = OnceLock::new();

/// Output shape of the process-wide subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable console lines.
    #[default]
    Pretty,
    /// One JSON object per event, for log shippers.
    Json,
}

/// Installs the process-wide `tracing` subscriber. Repeat calls are
/// no-ops, as is calling into a process that already has a subscriber.
/// The filter comes from `RUST_LOG`, defaulting to `info`.
pub fn init_telemetry(format: LogFormat) {
    INITIALIZED.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let result = match format {
            LogFormat::Pretty => tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .try_init(),
            LogFormat::Json => tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .json()
                .try_init(),
        };
        if result.is_err() {
            tracing::debug!("Tracing subscriber already installed; keeping it");
        }
    });
}
