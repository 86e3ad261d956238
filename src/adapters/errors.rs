//! Exchange adapter error types
//!
//! All exchange-related errors are wrapped in ExchangeError enum
//! which implements thiserror for consistent error handling.
//!
//! A non-2xx HTTP status is NOT an error at this layer: the dispatcher
//! hands it back as an ordinary `ApiResponse`. Only `ApiResponse::into_result`
//! turns it into `ExchangeError::Rejected`.

use thiserror::Error;

/// Exchange-specific error types for adapter operations
#[derive(Error, Debug)]
pub enum ExchangeError {
    /// DNS, connect, TLS or timeout failure reported by the HTTP transport
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Response body was not valid JSON (or not the expected shape)
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Parameters could not be serialized to a query string
    #[error("Encode error: {0}")]
    Encode(#[from] serde_urlencoded::ser::Error),

    /// Signed request attempted without credentials
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Request parameters violate a local precondition
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Exchange answered with a non-2xx status
    #[error("Rejected by exchange (HTTP {status}): code={code:?}, msg={msg}")]
    Rejected {
        status: u16,
        code: Option<i64>,
        msg: String,
    },
}

/// Result type alias for exchange operations
pub type ExchangeResult<T> = std::result::Result<T, ExchangeError>;
