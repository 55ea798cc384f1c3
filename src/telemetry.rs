//! Tracing subscriber setup

use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::config::{AppConfig, LogFormat};

/// Install process wide subscriber. `RUST_LOG` wins over [`AppConfig::log_level`].
///
/// Safe to call multiple times, later calls are no-ops.
pub fn init(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    let installed = match config.log_format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Text => builder.try_init(),
    };
    // Reported through the subscriber installed earlier.
    if let Err(e) = installed {
        debug!(%e, "tracing subscriber already installed");
    }
}
