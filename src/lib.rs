//! Spot Probe
//!
//! Minimal Binance spot REST client:
//! - Ticker price snapshot loaded into a flat table
//! - HMAC-SHA256 request signing
//! - Signed order placement and lookup, status and body handed back as data

pub mod adapters;
pub mod config;
pub mod core;
pub mod error;

pub use error::AppError;
