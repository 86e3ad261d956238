//! Binance REST client
//!
//! One request per call, awaited to completion: no retry, no backoff, no
//! rate-limit bookkeeping. Signed calls send the parameters as a query
//! string (for POST as well) with the API key in `X-MBX-APIKEY`.

use chrono::{DateTime, Utc};
use reqwest::Method;
use serde::de::Error as _;
use serde::Serialize;
use tracing::{debug, info, warn};

use super::config::{BinanceConfig, Credentials};
use super::signing::{sign_params, SignedParams};
use super::types::{ApiResponse, GetOrderRequest, PlaceOrderRequest, ServerTime, TickerPrice};
use crate::adapters::errors::{ExchangeError, ExchangeResult};
use crate::config::constants::{
    API_KEY_HEADER, ORDER_PATH, PING_PATH, SERVER_TIME_PATH, TICKER_PRICE_PATH,
};
use crate::core::logging::{sanitize, sanitize_signature};

/// HTTP verbs accepted by the dispatcher
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    fn as_reqwest(self) -> Method {
        match self {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
        }
    }
}

/// Create the HTTP client used for every call
///
/// No request timeout is set: a call waits for the peer or for the
/// transport to give up.
fn create_http_client() -> ExchangeResult<reqwest::Client> {
    let client = reqwest::Client::builder().tcp_nodelay(true).build()?;
    debug!(phase = "init", exchange = "binance", "HTTP client configured");
    Ok(client)
}

/// Binance spot REST client
///
/// Borrows its configuration; build the config once at startup and pass it
/// to every client that needs it.
#[derive(Debug, Clone)]
pub struct BinanceClient<'a> {
    http: reqwest::Client,
    config: &'a BinanceConfig,
}

impl<'a> BinanceClient<'a> {
    pub fn new(config: &'a BinanceConfig) -> ExchangeResult<Self> {
        Ok(Self {
            http: create_http_client()?,
            config,
        })
    }

    pub fn config(&self) -> &BinanceConfig {
        self.config
    }

    fn credentials(&self) -> ExchangeResult<&'a Credentials> {
        self.config.credentials.as_ref().ok_or_else(|| {
            ExchangeError::AuthenticationFailed(
                "signed endpoint requires API key and secret".to_string(),
            )
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    /// Send already-signed parameters and return status plus JSON body
    ///
    /// Any status is returned as data. Errors are limited to the transport
    /// failing, the body not being JSON, or missing credentials.
    pub async fn dispatch(
        &self,
        method: HttpMethod,
        path: &str,
        signed: &SignedParams,
    ) -> ExchangeResult<ApiResponse> {
        let credentials = self.credentials()?;
        let url = format!("{}?{}", self.url(path), signed.query_string());

        debug!(
            method = ?method,
            path = %path,
            api_key = %sanitize(credentials.api_key()),
            signature = %sanitize_signature(signed.signature()),
            "Dispatching signed request"
        );

        let response = self
            .http
            .request(method.as_reqwest(), &url)
            .header(API_KEY_HEADER, credentials.api_key())
            .send()
            .await?;

        Self::read_response(path, response).await
    }

    /// Sign `params` with the configured secret, then [`Self::dispatch`]
    pub async fn send_signed<P: Serialize>(
        &self,
        method: HttpMethod,
        path: &str,
        params: P,
    ) -> ExchangeResult<ApiResponse> {
        let credentials = self.credentials()?;
        let signed = sign_params(params, credentials.api_secret())?;
        self.dispatch(method, path, &signed).await
    }

    /// `POST /api/v3/order`
    pub async fn place_order(&self, request: &PlaceOrderRequest) -> ExchangeResult<ApiResponse> {
        info!(
            symbol = %request.symbol,
            side = ?request.side,
            order_type = ?request.order_type,
            quantity = ?request.quantity,
            price = ?request.price,
            "Placing order"
        );
        self.send_signed(HttpMethod::Post, ORDER_PATH, request).await
    }

    /// `GET /api/v3/order`
    pub async fn get_order(&self, request: &GetOrderRequest) -> ExchangeResult<ApiResponse> {
        debug!(symbol = %request.symbol, order_id = request.order_id, "Querying order");
        self.send_signed(HttpMethod::Get, ORDER_PATH, request).await
    }

    /// Unauthenticated GET
    pub async fn public_get(&self, path: &str) -> ExchangeResult<ApiResponse> {
        debug!(path = %path, "Dispatching public request");
        let response = self.http.get(self.url(path)).send().await?;
        Self::read_response(path, response).await
    }

    /// All symbols with their last price, in exchange order
    pub async fn ticker_prices(&self) -> ExchangeResult<Vec<TickerPrice>> {
        let rows: Vec<TickerPrice> = self.public_get(TICKER_PRICE_PATH).await?.into_result()?;
        info!(symbols = rows.len(), "Ticker prices fetched");
        Ok(rows)
    }

    /// Connectivity check; the exchange answers `{}`
    pub async fn ping(&self) -> ExchangeResult<()> {
        let _: serde_json::Value = self.public_get(PING_PATH).await?.into_result()?;
        Ok(())
    }

    pub async fn server_time(&self) -> ExchangeResult<DateTime<Utc>> {
        let time: ServerTime = self.public_get(SERVER_TIME_PATH).await?.into_result()?;
        DateTime::<Utc>::from_timestamp_millis(time.server_time).ok_or_else(|| {
            ExchangeError::Decode(serde_json::Error::custom(format!(
                "server time out of range: {}",
                time.server_time
            )))
        })
    }

    async fn read_response(path: &str, response: reqwest::Response) -> ExchangeResult<ApiResponse> {
        let status = response.status().as_u16();
        let text = response.text().await?;
        let body: serde_json::Value = serde_json::from_str(&text)?;

        let response = ApiResponse::new(status, body);
        if response.is_success() {
            debug!(path = %path, status, "Response received");
        } else {
            let (code, msg) = response
                .api_error()
                .map(|e| (Some(e.code), e.msg))
                .unwrap_or((None, String::new()));
            warn!(path = %path, status, code = ?code, msg = %msg, "Exchange returned non-success status");
        }
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::binance::types::{OrderSide, OrderStatus, OrderResponse};
    use mockito::Matcher;

    const API_KEY: &str = "test-api-key";
    const API_SECRET: &str = "testsecret";

    fn config_for(server: &mockito::ServerGuard) -> BinanceConfig {
        BinanceConfig::with_base_url(server.url(), Some(Credentials::new(API_KEY, API_SECRET)))
    }

    #[tokio::test]
    async fn test_place_order_sends_signed_query_and_key_header() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/v3/order")
            .match_header("X-MBX-APIKEY", API_KEY)
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("symbol".into(), "BTCUSDT".into()),
                Matcher::UrlEncoded("side".into(), "BUY".into()),
                Matcher::UrlEncoded("type".into(), "MARKET".into()),
                Matcher::UrlEncoded("quantity".into(), "0.001".into()),
                Matcher::UrlEncoded("timestamp".into(), "1700000000000".into()),
                Matcher::UrlEncoded(
                    "signature".into(),
                    "3cc0b158aa7e4a3fed901e87286269650bf8a04b258cae72e8221a9e6ce0e58c".into(),
                ),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"symbol":"BTCUSDT","orderId":2749370,"status":"FILLED","side":"BUY","type":"MARKET","price":"60000.00000000","origQty":"0.00100000","executedQty":"0.00100000"}"#,
            )
            .create_async()
            .await;

        let config = config_for(&server);
        let client = BinanceClient::new(&config).unwrap();
        let request = PlaceOrderRequest::market("BTCUSDT", OrderSide::Buy, "0.001")
            .with_timestamp(1700000000000);

        let response = client.place_order(&request).await.unwrap();
        assert_eq!(response.status, 200);
        let order: OrderResponse = response.json().unwrap();
        assert_eq!(order.status, OrderStatus::Filled);

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_signed_call_without_credentials_fails_before_network() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/v3/order")
            .expect(0)
            .create_async()
            .await;

        let config = BinanceConfig::with_base_url(server.url(), None);
        let client = BinanceClient::new(&config).unwrap();
        let request = PlaceOrderRequest::market("BTCUSDT", OrderSide::Buy, "0.001");

        let err = client.place_order(&request).await.unwrap_err();
        assert!(matches!(err, ExchangeError::AuthenticationFailed(_)));

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_ticker_prices_keeps_exchange_order() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/v3/ticker/price")
            .with_status(200)
            .with_body(r#"[{"symbol":"ETHBTC","price":"0.05370000"},{"symbol":"LTCBTC","price":"0.00105600"},{"symbol":"BNBBTC","price":"0.00790000"}]"#)
            .create_async()
            .await;

        let config = BinanceConfig::with_base_url(server.url(), None);
        let client = BinanceClient::new(&config).unwrap();

        let rows = client.ticker_prices().await.unwrap();
        let symbols: Vec<&str> = rows.iter().map(|r| r.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["ETHBTC", "LTCBTC", "BNBBTC"]);

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_ticker_prices_rejected_status() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/v3/ticker/price")
            .with_status(418)
            .with_body(r#"{"code":-1003,"msg":"Way too many requests; IP banned."}"#)
            .create_async()
            .await;

        let config = BinanceConfig::with_base_url(server.url(), None);
        let client = BinanceClient::new(&config).unwrap();

        match client.ticker_prices().await {
            Err(ExchangeError::Rejected { status, code, .. }) => {
                assert_eq!(status, 418);
                assert_eq!(code, Some(-1003));
            }
            other => panic!("Expected Rejected, got {:?}", other),
        }

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_ping_and_server_time() {
        let mut server = mockito::Server::new_async().await;
        let ping = server
            .mock("GET", "/api/v3/ping")
            .with_status(200)
            .with_body("{}")
            .create_async()
            .await;
        let time_mock = server
            .mock("GET", "/api/v3/time")
            .with_status(200)
            .with_body(r#"{"serverTime":1700000000000}"#)
            .create_async()
            .await;

        let config = BinanceConfig::with_base_url(server.url(), None);
        let client = BinanceClient::new(&config).unwrap();

        client.ping().await.unwrap();
        let time = client.server_time().await.unwrap();
        assert_eq!(time.timestamp_millis(), 1700000000000);

        ping.assert_async().await;
        time_mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_server_time_out_of_range_is_decode_error() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/v3/time")
            .with_status(200)
            .with_body(format!(r#"{{"serverTime":{}}}"#, i64::MAX))
            .create_async()
            .await;

        let config = BinanceConfig::with_base_url(server.url(), None);
        let client = BinanceClient::new(&config).unwrap();

        match client.server_time().await {
            Err(ExchangeError::Decode(e)) => {
                assert!(e.to_string().contains("server time out of range"), "Got: {}", e)
            }
            other => panic!("Expected Decode, got {:?}", other),
        }

        mock.assert_async().await;
    }
}
