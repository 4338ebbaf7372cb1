// ## src/telemetry/logging.rs

use tracing_subscriber::EnvFilter;

use crate::constants::DEFAULT_LOG_FILTER;

/// Install a `tracing` fmt subscriber.
///
/// `RUST_LOG` wins over `default_filter`; `None` falls back to
/// `DEFAULT_LOG_FILTER`. Returns `false` when a global subscriber was
/// already installed, which makes it safe to call from every test.
pub fn init_tracing(default_filter: Option<&str>) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter.unwrap_or(DEFAULT_LOG_FILTER)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_thread_names(true)
        .with_target(true)
        .try_init()
        .is_ok()
}
