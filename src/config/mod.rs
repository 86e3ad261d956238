//! Configuration module
//!
//! This module provides:
//! - Endpoint and environment-variable constants with env overrides
//! - `.env` loading and required-variable lookup
//!
//! Exchange credentials themselves are held by
//! [`crate::adapters::binance::BinanceConfig`].

pub mod constants;
mod loader;

pub use loader::{load_dotenv, require_env};
