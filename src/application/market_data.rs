//! Market quotes with a simulated fallback, plus the commodity board,
//! index summary and ticker tape built on top of them.

use crate::application::fallback::FallbackPolicy;
use crate::domain::entities::market_quote::{display_symbol, round2, MarketQuote};
use crate::domain::ports::quote_source::QuoteSource;
use crate::domain::values::market_catalog::{COMMODITY_TICKERS, INDICES, TICKER_SYMBOLS};
use rand::Rng;
use serde::Serialize;
use std::sync::Arc;

pub const SIMULATED_NOTE: &str = "Live data unavailable. Showing simulated data.";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndexSnapshot {
    pub name: String,
    pub price: f64,
    pub change: f64,
    pub percent_change: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarketSummary {
    pub indices: Vec<IndexSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TickerEntry {
    pub symbol: String,
    pub last_price: f64,
    pub percent_change: f64,
}

/// Flagged stand-in quote used when the live source cannot be reached.
pub fn synthetic_quote<R: Rng>(symbol: &str, rng: &mut R) -> MarketQuote {
    let price: f64 = rng.random_range(100.0..3000.0);
    let change: f64 = rng.random_range(-50.0..50.0);
    MarketQuote {
        symbol: display_symbol(symbol),
        name: symbol.to_string(),
        price: round2(price),
        change: round2(change),
        percent_change: round2(change / price * 100.0),
        currency: "INR".to_string(),
        market_cap: None,
        pe_ratio: None,
        sector: "Unknown".to_string(),
        day_high: round2(price + 20.0),
        day_low: round2(price - 20.0),
        note: Some(SIMULATED_NOTE.to_string()),
    }
}

pub struct MarketDataService {
    source: Arc<dyn QuoteSource>,
    policy: FallbackPolicy,
}

impl MarketDataService {
    pub fn new(source: Arc<dyn QuoteSource>, policy: FallbackPolicy) -> Self {
        Self { source, policy }
    }

    /// `None` only when the source answered with no data for `symbol`.
    pub async fn quote(&self, symbol: &str) -> Option<MarketQuote> {
        let live = async {
            self.source
                .quote(symbol)
                .await
                .map(|snap| snap.map(|s| MarketQuote::from_snapshot(symbol, s)))
        };
        self.policy
            .run(live, || Some(synthetic_quote(symbol, &mut rand::rng())))
            .await
    }

    /// Live quote or nothing; never simulated.
    async fn live_quote(&self, symbol: &str) -> Option<MarketQuote> {
        let live = async {
            self.source
                .quote(symbol)
                .await
                .map(|snap| snap.map(|s| MarketQuote::from_snapshot(symbol, s)))
        };
        self.policy.run(live, || None).await
    }

    pub async fn commodity_snapshot(&self) -> Vec<MarketQuote> {
        let mut board = Vec::with_capacity(COMMODITY_TICKERS.len());
        for (name, ticker) in COMMODITY_TICKERS {
            if let Some(mut quote) = self.quote(ticker).await {
                quote.name = name.to_string();
                board.push(quote);
            }
        }
        board
    }

    pub async fn market_summary(&self) -> MarketSummary {
        let mut indices = Vec::new();
        for (name, ticker, reference) in INDICES {
            match self.live_quote(ticker).await {
                Some(q) => indices.push(IndexSnapshot {
                    name: name.to_string(),
                    price: q.price,
                    change: q.change,
                    percent_change: q.percent_change,
                }),
                None => {
                    if let Some((price, change, percent_change)) = reference {
                        indices.push(IndexSnapshot {
                            name: name.to_string(),
                            price: *price,
                            change: *change,
                            percent_change: *percent_change,
                        });
                    }
                }
            }
        }
        MarketSummary { indices }
    }

    pub async fn market_ticker(&self) -> Vec<TickerEntry> {
        let mut tape = Vec::with_capacity(TICKER_SYMBOLS.len());
        for symbol in TICKER_SYMBOLS {
            if let Some(q) = self.quote(symbol).await {
                tape.push(TickerEntry {
                    symbol: q.symbol,
                    last_price: q.price,
                    percent_change: q.percent_change,
                });
            }
        }
        tape
    }
}
