//! Application-wide constants and configuration defaults
//!
//! This module centralizes all hardcoded values to make them configurable
//! and maintainable. Values can be overridden via environment variables.

// =============================================================================
// Endpoints
// =============================================================================

/// Binance spot mainnet REST host
pub const MAINNET_REST_URL: &str = "https://api1.binance.com";

/// Binance spot testnet REST host
pub const TESTNET_REST_URL: &str = "https://testnet.binance.vision";

/// Header carrying the API key on authenticated requests
pub const API_KEY_HEADER: &str = "X-MBX-APIKEY";

pub const TICKER_PRICE_PATH: &str = "/api/v3/ticker/price";
pub const ORDER_PATH: &str = "/api/v3/order";
pub const PING_PATH: &str = "/api/v3/ping";
pub const SERVER_TIME_PATH: &str = "/api/v3/time";

// =============================================================================
// Credential Environment Variables
// =============================================================================

pub const MAINNET_API_KEY_VAR: &str = "BINANCE_API_KEY";
pub const MAINNET_API_SECRET_VAR: &str = "BINANCE_API_SECRET";
pub const TESTNET_API_KEY_VAR: &str = "BINANCE_APIKEY_TEST";
pub const TESTNET_API_SECRET_VAR: &str = "BINANCE_APISECRET_TEST";

// =============================================================================
// Overrides
// =============================================================================

/// REST base URL override, replacing the mainnet/testnet host
///
/// Environment variable: `BINANCE_REST_URL`
pub fn rest_url_override() -> Option<String> {
    std::env::var("BINANCE_REST_URL")
        .ok()
        .map(|s| s.trim_end_matches('/').to_string())
        .filter(|s| !s.is_empty())
}

/// Number of ticker rows printed by the snapshot binary (default: 5)
///
/// Environment variable: `TICKER_PREVIEW_ROWS`
pub fn ticker_preview_rows() -> usize {
    std::env::var("TICKER_PREVIEW_ROWS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(5)
}

/// Print all configuration values (for debugging/startup logs)
pub fn log_configuration() {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("  - REST override: {:?}", rest_url_override());
    tracing::info!("  - Ticker preview rows: {}", ticker_preview_rows());
    tracing::info!("==================================");
}
