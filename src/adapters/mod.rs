//! Exchange adapters
//!
//! REST plumbing for Binance spot: request signing, signed and public
//! dispatch, response decoding.

pub mod binance;
pub mod errors;

// Re-export commonly used types for convenience
pub use binance::{
    ApiResponse, BinanceClient, BinanceConfig, Credentials, GetOrderRequest, HttpMethod,
    OrderResponse, OrderSide, OrderStatus, OrderType, PlaceOrderRequest, RequestParameters,
    TickerPrice, TimeInForce,
};
pub use errors::{ExchangeError, ExchangeResult};
