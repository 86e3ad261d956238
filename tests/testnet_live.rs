//! Live tests against the Binance spot testnet
//!
//! These hit `https://testnet.binance.vision` for real and need
//! `BINANCE_APIKEY_TEST` / `BINANCE_APISECRET_TEST` (a `.env` file works).
//! They are ignored by default; the mocked tier lives in `tests/dispatch.rs`.
//!
//! # Running the tests
//! ```bash
//! cargo test --test testnet_live -- --ignored --test-threads=1
//! ```

use spot_probe::adapters::{
    BinanceClient, BinanceConfig, GetOrderRequest, OrderResponse, OrderSide, OrderStatus,
    PlaceOrderRequest, TimeInForce,
};

fn testnet_config() -> BinanceConfig {
    spot_probe::config::load_dotenv();
    match BinanceConfig::testnet_from_env() {
        Ok(config) => config,
        Err(e) => panic!("testnet credentials required: {}", e),
    }
}

#[tokio::test]
#[ignore = "hits the live spot testnet"]
async fn live_place_market_order() {
    let config = testnet_config();
    let client = BinanceClient::new(&config).unwrap();

    for quantity in ["0.001", "0.01"] {
        let request = PlaceOrderRequest::market("BTCUSDT", OrderSide::Buy, quantity);
        let response = client.place_order(&request).await.unwrap();

        assert_eq!(response.status, 200, "Order placement failed: {}", response.body);
        let order: OrderResponse = response.json().unwrap();
        assert_eq!(order.status, OrderStatus::Filled, "Order was not filled");
    }
}

#[tokio::test]
#[ignore = "hits the live spot testnet"]
async fn live_place_and_fetch_limit_order() {
    let config = testnet_config();
    let client = BinanceClient::new(&config).unwrap();

    let request =
        PlaceOrderRequest::limit("BTCUSDT", OrderSide::Buy, "0.001", "30000", TimeInForce::Gtc);
    let placed = client.place_order(&request).await.unwrap();
    assert_eq!(placed.status, 200, "Order placement failed: {}", placed.body);
    let placed: OrderResponse = placed.json().unwrap();
    assert_eq!(placed.status, OrderStatus::New);

    let lookup = GetOrderRequest::new("BTCUSDT", placed.order_id);
    let fetched = client.get_order(&lookup).await.unwrap();
    assert_eq!(fetched.status, 200, "Order fetch failed: {}", fetched.body);
    let fetched: OrderResponse = fetched.json().unwrap();
    assert_eq!(fetched.order_id, placed.order_id);
    assert_eq!(fetched.status, OrderStatus::New);
}

#[tokio::test]
#[ignore = "hits the live spot testnet"]
async fn live_public_endpoints() {
    let config = testnet_config();
    let client = BinanceClient::new(&config).unwrap();

    client.ping().await.unwrap();
    let rows = client.ticker_prices().await.unwrap();
    assert!(rows.iter().any(|r| r.symbol == "BTCUSDT"));
}
