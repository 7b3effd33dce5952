//! Logging integration using tracing.
//!
//! Output goes to stderr. `log` crate records are forwarded to tracing, so
//! messages from dependencies end up in the same stream.
//!
//! # Example
//!
//! ```ignore
//! use rosplan_movebase::logger::{LogLevel, init_ros_logging};
//! use tracing::info;
//!
//! init_ros_logging("rosplan_interface_movebase", Some(LogLevel::Debug));
//! info!("KCL: (goto_waypoint) ready");
//! ```

use std::{fmt, str::FromStr, sync::OnceLock};
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt};

static LOGGER_INITIALIZED: OnceLock<()> = OnceLock::new();

/// Severity given with `--log-level`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
    /// Mapped to `error`, tracing has nothing above it.
    Fatal,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
            Self::Fatal => "FATAL",
        }
    }

    /// Directive understood by [`EnvFilter`].
    pub fn as_directive(&self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error | Self::Fatal => "error",
        }
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "DEBUG" => Ok(Self::Debug),
            "INFO" => Ok(Self::Info),
            "WARN" | "WARNING" => Ok(Self::Warn),
            "ERROR" => Ok(Self::Error),
            "FATAL" => Ok(Self::Fatal),
            _ => Err(format!("Invalid log level: {s}")),
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Build the filter: `RUST_LOG` wins, then `level`, then `info`.
fn env_filter(level: Option<LogLevel>) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(level.map(|l| l.as_directive()).unwrap_or("info"))
    })
}

/// Initialize logging.
///
/// Only the first call installs the subscriber; later calls are ignored.
pub fn init_ros_logging(name: &str, level: Option<LogLevel>) {
    LOGGER_INITIALIZED.get_or_init(|| {
        // log -> tracing bridge
        tracing_log::LogTracer::init().ok();

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_thread_names(false)
            .with_file(false)
            .with_line_number(false)
            .with_span_events(FmtSpan::NONE)
            .with_writer(std::io::stderr);

        let installed = tracing_subscriber::registry()
            .with(env_filter(level))
            .with(fmt_layer)
            .try_init()
            .is_ok();
        if installed {
            debug!(node = name, "logging initialized");
        }
    });
}
