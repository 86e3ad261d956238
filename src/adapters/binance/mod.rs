//! Binance Spot Adapter
//!
//! REST access to Binance spot (mainnet or testnet).
//! Uses HMAC-SHA256 query signatures for authenticated endpoints.
//!
//! This module is organized into submodules:
//! - `config` - Base URL and credentials
//! - `types` - Request parameter sets and response shapes
//! - `signing` - HMAC-SHA256 signing logic
//! - `adapter` - `BinanceClient`, the request dispatcher

mod adapter;
mod config;
mod signing;
mod types;

pub use adapter::{BinanceClient, HttpMethod};
pub use config::{BinanceConfig, Credentials};
pub use signing::{hmac_sha256_hex, sign_params, SignedParams, SIGNATURE_PARAM};
pub use types::{
    ApiErrorBody, ApiResponse, GetOrderRequest, OrderResponse, OrderSide, OrderStatus, OrderType,
    ParamValue, PlaceOrderRequest, RequestParameters, ServerTime, TickerPrice, TimeInForce,
};
