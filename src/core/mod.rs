//! Core module - logging setup, ticker table, clock
//!
//! Prefer importing from `crate::core`:
//! ```ignore
//! use crate::core::{init_logging, PriceTable};
//! ```

pub mod logging;
pub mod table;

pub use logging::{
    init_logging, init_logging_with_config, sanitize, sanitize_signature, LoggingConfig,
    SanitizedValue, DEFAULT_LOG_LEVEL,
};
pub use table::{PriceTable, TableView};

/// Wall-clock Unix time in milliseconds, as Binance expects in `timestamp`
pub fn current_time_ms() -> u64 {
    u64::try_from(chrono::Utc::now().timestamp_millis()).unwrap_or(0)
}
