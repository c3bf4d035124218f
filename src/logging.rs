//! Logging configuration
//!
//! Diagnostics go to stderr through `tracing`. Stdout is reserved for the
//! status lines and the `--json` event stream.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding an `EnvFilter` directive
pub const LOG_ENV: &str = "WEBSHIP_LOG";

/// Log level configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl LogLevel {
    /// Level selected by the `-v` count
    pub fn from_verbosity(verbose: u8) -> Self {
        match verbose {
            0 => LogLevel::Warn,
            1 => LogLevel::Debug,
            _ => LogLevel::Trace,
        }
    }

    pub fn to_filter_string(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::str::FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(format!("Invalid log level: {}", s)),
        }
    }
}

/// Logging options
#[derive(Debug, Clone, Default)]
pub struct LogOptions {
    pub log_level: LogLevel,
    /// Write ANSI colors to stderr
    pub ansi: bool,
}

impl LogOptions {
    pub fn from_verbosity(verbose: u8) -> Self {
        Self {
            log_level: LogLevel::from_verbosity(verbose),
            ansi: false,
        }
    }

    pub fn with_ansi(mut self, ansi: bool) -> Self {
        self.ansi = ansi;
        self
    }
}

/// Build the filter: `WEBSHIP_LOG` wins over the verbosity level
pub fn build_filter(options: &LogOptions, env_directive: Option<&str>) -> EnvFilter {
    env_directive
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(options.log_level.to_filter_string()))
}

/// Initialize logging
///
/// Fails if a global subscriber is already installed.
pub fn init_logging(options: LogOptions) -> Result<(), String> {
    let env = std::env::var(LOG_ENV).ok();
    let filter = build_filter(&options, env.as_deref());

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(options.ansi)
                .with_target(false),
        )
        .try_init()
        .map_err(|e| e.to_string())
}
