//! Order Placement Check (Spot Testnet)
//!
//! Places a small market order, then a far-from-market limit order, and
//! reads the limit order back. Every response is printed with its HTTP
//! status; non-2xx answers (rate limits, validation errors) are reported,
//! not retried.
//!
//! Usage:
//! ```bash
//! cargo run --bin order_check
//! ```
//!
//! Requires environment variables (or a `.env` file):
//! - BINANCE_APIKEY_TEST, BINANCE_APISECRET_TEST

use tracing::{error, info, warn};

use spot_probe::adapters::{
    ApiResponse, BinanceClient, BinanceConfig, GetOrderRequest, OrderResponse, OrderSide,
    PlaceOrderRequest, TimeInForce,
};
use spot_probe::config;
use spot_probe::core::init_logging;

const SYMBOL: &str = "BTCUSDT";
const QUANTITY: &str = "0.001";
/// Well below market so the order rests as NEW
const LIMIT_PRICE: &str = "30000";

fn report(label: &str, response: &ApiResponse) -> Option<OrderResponse> {
    if !response.is_success() {
        match response.api_error() {
            Some(err) => warn!(status = response.status, code = err.code, msg = %err.msg, "{} rejected", label),
            None => warn!(status = response.status, body = %response.body, "{} rejected", label),
        }
        return None;
    }
    match response.json::<OrderResponse>() {
        Ok(order) => {
            info!(
                status = response.status,
                order_id = order.order_id,
                order_status = ?order.status,
                executed_qty = %order.executed_qty,
                "{} ok",
                label
            );
            Some(order)
        }
        Err(e) => {
            error!(error = %e, body = %response.body, "{}: unexpected body", label);
            None
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    config::load_dotenv();
    init_logging();

    info!("═══════════════════════════════════════════════════════════");
    info!("Binance spot testnet - order placement check");
    info!("═══════════════════════════════════════════════════════════");

    let config = match BinanceConfig::testnet_from_env() {
        Ok(c) => c,
        Err(e) => {
            error!(error = %e, "Failed to load testnet credentials");
            return Err(e.into());
        }
    };
    if !config.is_testnet() {
        warn!(base_url = %config.base_url, "BINANCE_REST_URL points away from the spot testnet");
    }
    let client = BinanceClient::new(&config)?;

    client.ping().await?;
    let server_time = client.server_time().await?;
    info!(server_time = %server_time.to_rfc3339(), base_url = %config.base_url, "Testnet reachable");

    // Market order
    let market = PlaceOrderRequest::market(SYMBOL, OrderSide::Buy, QUANTITY);
    let response = client.place_order(&market).await?;
    report("Market order", &response);

    // Limit order, then read it back
    let limit = PlaceOrderRequest::limit(SYMBOL, OrderSide::Buy, QUANTITY, LIMIT_PRICE, TimeInForce::Gtc);
    let response = client.place_order(&limit).await?;
    let Some(placed) = report("Limit order", &response) else {
        return Ok(());
    };

    let lookup = GetOrderRequest::new(SYMBOL, placed.order_id);
    let response = client.get_order(&lookup).await?;
    if let Some(fetched) = report("Order lookup", &response) {
        if fetched.status != placed.status {
            warn!(placed = ?placed.status, fetched = ?fetched.status, "Order state changed since placement");
        }
    }

    info!("Done");
    Ok(())
}
