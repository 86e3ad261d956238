//! Structured logging setup and redaction helpers
//!
//! Output goes through `tracing` / `tracing-subscriber`:
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `RUST_LOG` | `spot_probe=info` | Level filter (standard `EnvFilter` syntax) |
//! | `LOG_FORMAT` | `json` | `json` for machine-readable lines, `pretty` for humans |
//!
//! API keys and signatures end up in log fields on every signed call, so
//! they go through [`SanitizedValue`] / [`sanitize_signature`] first:
//!
//! ```rust,ignore
//! use spot_probe::core::logging::sanitize;
//!
//! tracing::debug!(api_key = %sanitize(&api_key), "Dispatching signed request");
//! // api_key = "vmPU...REDACTED"
//! ```

use std::env;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing_subscriber::{fmt as ts_fmt, prelude::*, EnvFilter};

static LOGGING_INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Filter used when `RUST_LOG` is not set
pub const DEFAULT_LOG_LEVEL: &str = "spot_probe=info";

/// Display wrapper that keeps at most the first 4 characters of a value
#[derive(Clone, Copy)]
pub struct SanitizedValue<'a>(&'a str);

impl<'a> SanitizedValue<'a> {
    pub fn new(value: &'a str) -> Self {
        Self(value)
    }
}

impl fmt::Display for SanitizedValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Values of 8 chars or fewer are fully hidden
        match self.0.get(..4) {
            Some(prefix) if self.0.len() > 8 => write!(f, "{}...REDACTED", prefix),
            _ => write!(f, "REDACTED"),
        }
    }
}

impl fmt::Debug for SanitizedValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SanitizedValue(***)")
    }
}

/// Shorthand for [`SanitizedValue::new`]
pub fn sanitize(value: &str) -> SanitizedValue<'_> {
    SanitizedValue::new(value)
}

/// First 8 hex chars of a signature, enough to correlate log lines
pub fn sanitize_signature(sig: &str) -> String {
    match sig.get(..8) {
        Some(prefix) if sig.len() > 12 => format!("{}...", prefix),
        _ => "REDACTED".to_string(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// `EnvFilter` directive string
    pub level_filter: String,
    pub use_pretty_format: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level_filter: DEFAULT_LOG_LEVEL.to_string(),
            use_pretty_format: false,
        }
    }
}

impl LoggingConfig {
    /// Read `RUST_LOG` and `LOG_FORMAT`
    pub fn from_env() -> Self {
        let level_filter = env::var("RUST_LOG")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());
        let use_pretty_format = env::var("LOG_FORMAT")
            .map(|v| v.eq_ignore_ascii_case("pretty"))
            .unwrap_or(false);

        Self {
            level_filter,
            use_pretty_format,
        }
    }
}

/// Initialize logging from the environment; later calls are no-ops
pub fn init_logging() {
    init_logging_with_config(LoggingConfig::from_env());
}

pub fn init_logging_with_config(config: LoggingConfig) {
    if LOGGING_INITIALIZED.swap(true, Ordering::SeqCst) {
        return;
    }

    let env_filter =
        EnvFilter::try_new(&config.level_filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));

    // try_init: a subscriber installed elsewhere (tests) wins silently
    if config.use_pretty_format {
        let _ = tracing_subscriber::registry()
            .with(ts_fmt::layer().pretty().with_target(true))
            .with(env_filter)
            .try_init();
    } else {
        let _ = tracing_subscriber::registry()
            .with(ts_fmt::layer().json().with_target(true).with_current_span(true))
            .with(env_filter)
            .try_init();
    }
}
