mod common;

use common::*;
use newsdesk::application::market_data::SIMULATED_NOTE;
use std::sync::Arc;

#[tokio::test]
async fn test_live_quote() {
    let desk = desk(Providers {
        quotes: Arc::new(FakeQuoteSource::default().with(snapshot("TCS.NS", 110.0, 100.0))),
        ..providers()
    });
    let q = desk.quote("TCS.NS").await.unwrap();
    assert_eq!(q.symbol, "TCS");
    assert_eq!(q.name, "TCS.NS Ltd");
    assert_eq!(q.change, 10.0);
    assert_eq!(q.percent_change, 10.0);
    assert!(q.note.is_none());
}

#[tokio::test]
async fn test_unavailable_source_gives_flagged_simulation() {
    let desk = desk(Providers {
        quotes: Arc::new(FakeQuoteSource::down()),
        ..providers()
    });
    for _ in 0..20 {
        let q = desk.quote("IRCTC.NS").await.unwrap();
        assert_eq!(q.note.as_deref(), Some(SIMULATED_NOTE));
        assert!((100.0..=3000.0).contains(&q.price));
        assert!((-50.0..=50.0).contains(&q.change));
        assert_eq!(q.currency, "INR");
        assert_eq!(q.sector, "Unknown");
        assert!(q.market_cap.is_none());
        assert!(q.pe_ratio.is_none());
    }
}

#[tokio::test]
async fn test_no_data_is_none() {
    let desk = setup();
    assert!(desk.quote("NOSUCH.NS").await.is_none());
}

#[tokio::test]
async fn test_market_summary_static_fallback() {
    let desk = desk(Providers {
        quotes: Arc::new(FakeQuoteSource::down()),
        ..providers()
    });
    let summary = desk.market_summary().await;
    assert_eq!(summary.indices.len(), 1);
    let nifty = &summary.indices[0];
    assert_eq!(nifty.name, "NIFTY 50");
    assert_eq!(nifty.price, 26218.0);
    assert_eq!(nifty.change, -18.0);
    assert_eq!(nifty.percent_change, -0.07);
}

#[tokio::test]
async fn test_market_summary_live() {
    let quotes = FakeQuoteSource::default()
        .with(snapshot("^NSEI", 25000.0, 25100.0))
        .with(snapshot("^BSESN", 82000.0, 81000.0));
    let desk = desk(Providers {
        quotes: Arc::new(quotes),
        ..providers()
    });
    let summary = desk.market_summary().await;
    let names: Vec<&str> = summary.indices.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["NIFTY 50", "SENSEX"]);
    assert_eq!(summary.indices[0].change, -100.0);
    assert_eq!(summary.indices[1].price, 82000.0);
}

#[tokio::test]
async fn test_market_ticker_skips_symbols_without_data() {
    let quotes = FakeQuoteSource::default()
        .with(snapshot("RELIANCE.NS", 1300.0, 1290.0))
        .with(snapshot("ITC.NS", 400.0, 410.0));
    let desk = desk(Providers {
        quotes: Arc::new(quotes),
        ..providers()
    });
    let tape = desk.market_ticker().await;
    let symbols: Vec<&str> = tape.iter().map(|t| t.symbol.as_str()).collect();
    assert_eq!(symbols, vec!["RELIANCE", "ITC"]);
    assert_eq!(tape[0].last_price, 1300.0);
}

#[tokio::test]
async fn test_market_ticker_simulates_when_down() {
    let desk = desk(Providers {
        quotes: Arc::new(FakeQuoteSource::down()),
        ..providers()
    });
    assert_eq!(desk.market_ticker().await.len(), 8);
}
