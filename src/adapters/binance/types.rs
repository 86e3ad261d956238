//! Binance Types
//!
//! Request parameter sets (typed per endpoint, plus an ordered bag for
//! ad-hoc calls) and the response shapes read back from the REST API.
//!
//! Field declaration order is wire order: the signature is computed over
//! the serialized query string, so reordering fields changes signatures.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::adapters::errors::{ExchangeError, ExchangeResult};
use crate::core::current_time_ms;

// =============================================================================
// Enums
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderSide {
    Buy,
    Sell,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderType {
    Limit,
    Market,
    StopLoss,
    StopLossLimit,
    TakeProfit,
    TakeProfitLimit,
    LimitMaker,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TimeInForce {
    /// Good till cancelled
    Gtc,
    /// Immediate or cancel
    Ioc,
    /// Fill or kill
    Fok,
}

/// Order lifecycle state as reported by the exchange
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    New,
    PendingNew,
    PartiallyFilled,
    Filled,
    Canceled,
    PendingCancel,
    Rejected,
    Expired,
    ExpiredInMatch,
    #[serde(other)]
    Unknown,
}

// =============================================================================
// Ad-hoc Parameters
// =============================================================================

/// A single query parameter value: text or integer
///
/// There is no float variant. Decimal values (quantities, prices) are passed
/// as text, e.g. `"0.001"`, so the signed query carries exactly the digits the
/// caller wrote instead of a re-rendered binary float.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ParamValue {
    Text(String),
    Int(i64),
    UInt(u64),
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Text(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Text(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Int(value)
    }
}

impl From<u64> for ParamValue {
    fn from(value: u64) -> Self {
        ParamValue::UInt(value)
    }
}

/// Ordered name/value bag for endpoints without a typed request
///
/// Serializes as a sequence of pairs, so insertion order is query order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RequestParameters(Vec<(String, ParamValue)>);

impl RequestParameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parameter, builder style
    pub fn with(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.push(name, value);
        self
    }

    pub fn push(&mut self, name: impl Into<String>, value: impl Into<ParamValue>) {
        self.0.push((name.into(), value.into()));
    }

    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.0.iter().find(|(k, _)| k == name).map(|(_, v)| v)
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.0.iter().any(|(k, _)| k == name)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// =============================================================================
// Typed Requests
// =============================================================================

/// `POST /api/v3/order`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrderRequest {
    pub symbol: String,
    pub side: OrderSide,
    #[serde(rename = "type")]
    pub order_type: OrderType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_in_force: Option<TimeInForce>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    pub timestamp: u64,
}

impl PlaceOrderRequest {
    /// Market order stamped with the current time
    pub fn market(symbol: impl Into<String>, side: OrderSide, quantity: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            side,
            order_type: OrderType::Market,
            time_in_force: None,
            quantity: Some(quantity.into()),
            price: None,
            timestamp: current_time_ms(),
        }
    }

    /// Limit order stamped with the current time
    pub fn limit(
        symbol: impl Into<String>,
        side: OrderSide,
        quantity: impl Into<String>,
        price: impl Into<String>,
        time_in_force: TimeInForce,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            side,
            order_type: OrderType::Limit,
            time_in_force: Some(time_in_force),
            quantity: Some(quantity.into()),
            price: Some(price.into()),
            timestamp: current_time_ms(),
        }
    }

    pub fn with_timestamp(mut self, timestamp: u64) -> Self {
        self.timestamp = timestamp;
        self
    }
}

/// `GET /api/v3/order`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetOrderRequest {
    pub symbol: String,
    pub order_id: u64,
    pub timestamp: u64,
}

impl GetOrderRequest {
    pub fn new(symbol: impl Into<String>, order_id: u64) -> Self {
        Self {
            symbol: symbol.into(),
            order_id,
            timestamp: current_time_ms(),
        }
    }

    pub fn with_timestamp(mut self, timestamp: u64) -> Self {
        self.timestamp = timestamp;
        self
    }
}

// =============================================================================
// Responses
// =============================================================================

/// Order object returned by place/query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub symbol: String,
    pub order_id: u64,
    #[serde(default)]
    pub client_order_id: Option<String>,
    pub status: OrderStatus,
    pub side: OrderSide,
    #[serde(rename = "type")]
    pub order_type: OrderType,
    pub price: String,
    pub orig_qty: String,
    pub executed_qty: String,
}

/// Error object: `{"code": -1003, "msg": "..."}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub code: i64,
    pub msg: String,
}

/// One row of `/api/v3/ticker/price`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickerPrice {
    pub symbol: String,
    /// Kept as sent; the exchange formats prices as decimal strings
    pub price: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerTime {
    pub server_time: i64,
}

// =============================================================================
// Dispatch Result
// =============================================================================

/// HTTP status plus decoded JSON body, whatever the status
///
/// Rate limits (429) and validation failures (4xx) come back as ordinary
/// values; inspecting them is the caller's job.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: serde_json::Value,
}

impl ApiResponse {
    pub fn new(status: u16, body: serde_json::Value) -> Self {
        Self { status, body }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode the body into `T`, regardless of status
    pub fn json<T: DeserializeOwned>(&self) -> ExchangeResult<T> {
        Ok(T::deserialize(&self.body)?)
    }

    /// The `{code, msg}` error object, if the body has that shape
    pub fn api_error(&self) -> Option<ApiErrorBody> {
        ApiErrorBody::deserialize(&self.body).ok()
    }

    /// Decode a 2xx body into `T`; any other status becomes `Rejected`
    pub fn into_result<T: DeserializeOwned>(self) -> ExchangeResult<T> {
        if self.is_success() {
            return Ok(T::deserialize(self.body)?);
        }
        let (code, msg) = match self.api_error() {
            Some(err) => (Some(err.code), err.msg),
            None => (None, self.body.to_string()),
        };
        Err(ExchangeError::Rejected {
            status: self.status,
            code,
            msg,
        })
    }
}
