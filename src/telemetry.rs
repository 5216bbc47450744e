//! Tracing subscriber setup for test binaries

use tracing_subscriber::EnvFilter;

use crate::config::LoggingSettings;
use crate::error::{Error, Result};

/// Install a global fmt subscriber writing through the test harness
///
/// `RUST_LOG` takes precedence over the configured level. Fails if a global
/// subscriber is already installed.
pub fn init_tracing(settings: &LoggingSettings) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.level))
        .map_err(|e| Error::Telemetry(e.to_string()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init()
        .map_err(|e| Error::Telemetry(e.to_string()))
}
