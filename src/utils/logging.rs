//! Structured logging setup.
//!
//! The codec itself only emits `tracing` events; installing a subscriber is the
//! application's call. [`init_logging`] is a convenience for binaries, tests and
//! benchmarks that want the events printed according to a [`LoggingConfig`].

use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;
use crate::error::{CodecError, Result};

/// Install a global fmt subscriber configured from `config`.
///
/// `RUST_LOG`, when set, takes precedence over `config.log_level`.
///
/// # Errors
/// Returns `CodecError::Config` if the configuration is invalid or a global
/// subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let errors = config.validate();
    if !errors.is_empty() {
        return Err(CodecError::Config(errors.join("; ")));
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string().to_lowercase()));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    let installed = if config.json_format {
        builder.json().try_init()
    } else {
        builder.with_ansi(config.ansi).try_init()
    };
    installed.map_err(|e| CodecError::Config(format!("Failed to install subscriber: {e}")))?;

    info!(app = %config.app_name, level = %config.log_level, "logging initialized");
    Ok(())
}
