//! Binance Configuration
//!
//! Base URL and credentials, built once at startup and handed to
//! [`super::BinanceClient`] by reference.

use std::fmt;

use crate::config::constants::{
    rest_url_override, MAINNET_API_KEY_VAR, MAINNET_API_SECRET_VAR, MAINNET_REST_URL,
    TESTNET_API_KEY_VAR, TESTNET_API_SECRET_VAR, TESTNET_REST_URL,
};
use crate::config::require_env;
use crate::core::logging::sanitize;
use crate::error::Result;

/// API key and secret pair
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    api_key: String,
    api_secret: String,
}

impl Credentials {
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
        }
    }

    /// Read both values from the named variables; absent or empty is an error
    pub fn from_env(key_var: &str, secret_var: &str) -> Result<Self> {
        let api_key = require_env(key_var)?;
        let api_secret = require_env(secret_var)?;
        Ok(Self { api_key, api_secret })
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn api_secret(&self) -> &str {
        &self.api_secret
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &sanitize(&self.api_key).to_string())
            .field("api_secret", &"REDACTED")
            .finish()
    }
}

/// Configuration for a Binance spot REST connection
#[derive(Debug, Clone)]
pub struct BinanceConfig {
    /// REST host without trailing slash
    pub base_url: String,
    /// Required for signed endpoints only
    pub credentials: Option<Credentials>,
}

impl BinanceConfig {
    /// Public (unauthenticated) mainnet access
    pub fn mainnet_public() -> Self {
        Self {
            base_url: rest_url_override().unwrap_or_else(|| MAINNET_REST_URL.to_string()),
            credentials: None,
        }
    }

    /// Mainnet with `BINANCE_API_KEY` / `BINANCE_API_SECRET`
    pub fn mainnet_from_env() -> Result<Self> {
        let credentials = Credentials::from_env(MAINNET_API_KEY_VAR, MAINNET_API_SECRET_VAR)?;
        Ok(Self {
            base_url: rest_url_override().unwrap_or_else(|| MAINNET_REST_URL.to_string()),
            credentials: Some(credentials),
        })
    }

    /// Spot testnet with `BINANCE_APIKEY_TEST` / `BINANCE_APISECRET_TEST`
    pub fn testnet_from_env() -> Result<Self> {
        let credentials = Credentials::from_env(TESTNET_API_KEY_VAR, TESTNET_API_SECRET_VAR)?;
        Ok(Self {
            base_url: rest_url_override().unwrap_or_else(|| TESTNET_REST_URL.to_string()),
            credentials: Some(credentials),
        })
    }

    /// Explicit host, e.g. a mock server in tests
    pub fn with_base_url(base_url: impl Into<String>, credentials: Option<Credentials>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            credentials,
        }
    }

    pub fn is_testnet(&self) -> bool {
        self.base_url == TESTNET_REST_URL
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_binance_env() {
        std::env::remove_var(TESTNET_API_KEY_VAR);
        std::env::remove_var(TESTNET_API_SECRET_VAR);
        std::env::remove_var(MAINNET_API_KEY_VAR);
        std::env::remove_var(MAINNET_API_SECRET_VAR);
        std::env::remove_var("BINANCE_REST_URL");
    }

    #[test]
    #[serial(env)]
    fn test_testnet_from_env_success() {
        clear_binance_env();
        std::env::set_var(TESTNET_API_KEY_VAR, "test-key");
        std::env::set_var(TESTNET_API_SECRET_VAR, "test-secret");

        let config = BinanceConfig::testnet_from_env().unwrap();
        assert_eq!(config.base_url, TESTNET_REST_URL);
        assert!(config.is_testnet());
        let creds = config.credentials.unwrap();
        assert_eq!(creds.api_key(), "test-key");
        assert_eq!(creds.api_secret(), "test-secret");

        clear_binance_env();
    }

    #[test]
    #[serial(env)]
    fn test_testnet_from_env_missing_secret() {
        clear_binance_env();
        std::env::set_var(TESTNET_API_KEY_VAR, "test-key");

        let err = BinanceConfig::testnet_from_env().unwrap_err();
        assert!(err.to_string().contains(TESTNET_API_SECRET_VAR), "Got: {}", err);

        clear_binance_env();
    }

    #[test]
    #[serial(env)]
    fn test_mainnet_from_env_missing_key() {
        clear_binance_env();
        let err = BinanceConfig::mainnet_from_env().unwrap_err();
        assert!(err.to_string().contains(MAINNET_API_KEY_VAR), "Got: {}", err);
    }

    #[test]
    #[serial(env)]
    fn test_mainnet_public_honours_override() {
        clear_binance_env();
        assert_eq!(BinanceConfig::mainnet_public().base_url, MAINNET_REST_URL);

        std::env::set_var("BINANCE_REST_URL", "http://localhost:8080/");
        let config = BinanceConfig::mainnet_public();
        assert_eq!(config.base_url, "http://localhost:8080");
        assert!(config.credentials.is_none());

        clear_binance_env();
    }

    #[test]
    fn test_with_base_url_trims_slash() {
        let config = BinanceConfig::with_base_url("http://127.0.0.1:1234/", None);
        assert_eq!(config.base_url, "http://127.0.0.1:1234");
        assert!(!config.is_testnet());
    }

    #[test]
    fn test_credentials_debug_hides_secret() {
        let creds = Credentials::new("abcdefghijklmnop", "super-secret-value");
        let debug = format!("{:?}", creds);
        assert!(!debug.contains("super-secret-value"), "Got: {}", debug);
        assert!(!debug.contains("abcdefghijklmnop"), "Got: {}", debug);
        assert!(debug.contains("abcd...REDACTED"), "Got: {}", debug);
    }
}
