//! Command-line options shared by both binaries

use clap::Args;
use core_runtime::logging::{LogFormat, LogLevel, LoggingConfig};
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Logging flags
#[derive(Args, Debug, Clone)]
pub struct LogArgs {
    /// Log output format: pretty, json or compact
    #[arg(long = "log-format", value_name = "FORMAT", env = "LOG_FORMAT")]
    pub log_format: Option<LogFormat>,

    /// Minimum log level: trace, debug, info, warn or error
    #[arg(long = "log-level", value_name = "LEVEL", env = "LOG_LEVEL", default_value = "info")]
    pub log_level: LogLevel,

    /// Custom filter directives, e.g. "core_library=debug,sqlx=info"
    #[arg(long = "log-filter", value_name = "FILTER")]
    pub log_filter: Option<String>,
}

impl LogArgs {
    pub fn logging_config(&self) -> LoggingConfig {
        let mut config = LoggingConfig::default()
            .with_format(self.log_format.unwrap_or_default())
            .with_level(self.log_level);
        if let Some(filter) = &self.log_filter {
            config = config.with_filter(filter.clone());
        }
        config
    }
}

/// Log the outcome of `dotenvy::dotenv()` once logging is up.
///
/// A missing file is the normal case outside development and is only
/// reported at debug level.
pub fn log_env_file(loaded: dotenvy::Result<PathBuf>) -> Option<PathBuf> {
    match loaded {
        Ok(path) => {
            info!(path = %path.display(), "Loaded environment file");
            Some(path)
        }
        Err(e) if e.not_found() => {
            debug!("No environment file found");
            None
        }
        Err(e) => {
            warn!(error = %e, "Failed to load environment file");
            None
        }
    }
}
