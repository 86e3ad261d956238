//! Ticker snapshot
//!
//! 1. Loads `.env` (if present) and initializes logging
//! 2. Fetches every spot ticker price from Binance
//! 3. Loads the rows into a `PriceTable`
//! 4. Prints the first `TICKER_PREVIEW_ROWS` rows (default 5)
//!
//! The ticker endpoint is public: no credentials are needed.

use tracing::{error, info};

use spot_probe::adapters::{BinanceClient, BinanceConfig};
use spot_probe::config::{self, constants};
use spot_probe::core::{init_logging, PriceTable};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    config::load_dotenv();
    init_logging();

    let config = BinanceConfig::mainnet_public();
    info!(base_url = %config.base_url, "Fetching ticker prices");
    constants::log_configuration();

    let client = BinanceClient::new(&config)?;
    let rows = match client.ticker_prices().await {
        Ok(rows) => rows,
        Err(e) => {
            error!(error = %e, "Ticker fetch failed");
            return Err(e.into());
        }
    };

    let table = PriceTable::from_records(rows);
    info!(
        symbols = table.len(),
        loaded_at = %table.loaded_at().to_rfc3339(),
        "Price table loaded"
    );

    println!("{}", table.head(constants::ticker_preview_rows()));
    Ok(())
}
