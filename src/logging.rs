//! Tracing setup for the monitoring service.
//!
//! One `fmt` subscriber with an env-filter; `RUST_LOG` selects levels
//! (default `info`). Per-city fetch failures log at `warn` with the
//! city name as a field, batch summaries at `info`.

use tracing_subscriber::EnvFilter;

/// Initializes the global subscriber. Safe to call more than once; only
/// the first call installs anything.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
