//! Flat ticker table for inspection
//!
//! Holds the `/api/v3/ticker/price` rows in the order the exchange sent
//! them and renders the first few as a plain-text table:
//!
//! ```text
//!    symbol       price
//! 0  ETHBTC  0.05370000
//! 1  LTCBTC  0.00105600
//! ```

use std::fmt;

use chrono::{DateTime, Utc};

use crate::adapters::binance::TickerPrice;

const COLUMN_GAP: &str = "  ";

/// Ticker rows plus the time they were loaded
#[derive(Debug, Clone)]
pub struct PriceTable {
    rows: Vec<TickerPrice>,
    loaded_at: DateTime<Utc>,
}

impl PriceTable {
    pub fn from_records(rows: Vec<TickerPrice>) -> Self {
        Self {
            rows,
            loaded_at: Utc::now(),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[TickerPrice] {
        &self.rows
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    /// First row with this symbol
    pub fn get(&self, symbol: &str) -> Option<&TickerPrice> {
        self.rows.iter().find(|row| row.symbol == symbol)
    }

    /// View of the first `n` rows, rendered through `Display`
    pub fn head(&self, n: usize) -> TableView<'_> {
        TableView {
            rows: &self.rows[..n.min(self.rows.len())],
        }
    }
}

impl fmt::Display for PriceTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&TableView { rows: &self.rows }, f)
    }
}

/// Borrowed slice of rows with a fixed-width text rendering
#[derive(Debug, Clone, Copy)]
pub struct TableView<'a> {
    rows: &'a [TickerPrice],
}

impl TableView<'_> {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl fmt::Display for TableView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.rows.is_empty() {
            return write!(f, "Empty PriceTable");
        }

        let index_width = (self.rows.len() - 1).to_string().len();
        let symbol_width = self
            .rows
            .iter()
            .map(|r| r.symbol.len())
            .chain(std::iter::once("symbol".len()))
            .max()
            .unwrap_or(0);
        let price_width = self
            .rows
            .iter()
            .map(|r| r.price.len())
            .chain(std::iter::once("price".len()))
            .max()
            .unwrap_or(0);

        write!(
            f,
            "{:>iw$}{gap}{:>sw$}{gap}{:>pw$}",
            "",
            "symbol",
            "price",
            gap = COLUMN_GAP,
            iw = index_width,
            sw = symbol_width,
            pw = price_width,
        )?;
        for (i, row) in self.rows.iter().enumerate() {
            write!(
                f,
                "\n{:>iw$}{gap}{:>sw$}{gap}{:>pw$}",
                i,
                row.symbol,
                row.price,
                gap = COLUMN_GAP,
                iw = index_width,
                sw = symbol_width,
                pw = price_width,
            )?;
        }
        Ok(())
    }
}
