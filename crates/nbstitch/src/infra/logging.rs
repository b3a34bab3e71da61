//! Process-wide tracing setup.
//!
//! The subscriber is installed once per process from an explicit
//! [`LogConfig`]; repeated calls are no-ops.

use std::env;
use std::sync::Once;

use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "NBSTITCH_LOG";
const DEFAULT_FILTER: &str = "info";

static INIT: Once = Once::new();

/// Settings for the global subscriber.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Filter directive string, e.g. `info` or `nbstitch=debug`.
    pub filter: String,
    /// Whether to emit ANSI color codes.
    pub ansi: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_owned(),
            ansi: true,
        }
    }
}

impl LogConfig {
    /// Build a config from the `NBSTITCH_LOG` environment variable,
    /// falling back to `info` when unset or unparsable.
    pub fn from_env() -> Self {
        let filter = env::var(LOG_ENV).unwrap_or_else(|_| DEFAULT_FILTER.to_owned());
        Self {
            filter,
            ansi: true,
        }
    }
}

/// Install the global subscriber using environment defaults.
pub fn init() {
    init_with(LogConfig::from_env());
}

/// Install the global subscriber with the given configuration.
pub fn init_with(config: LogConfig) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_new(&config.filter)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(config.ansi)
            .with_writer(std::io::stderr)
            .init();
    });
}
