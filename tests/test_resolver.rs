mod common;

use common::*;
use newsdesk::application::fallback::{FallbackPolicies, FallbackPolicy};
use newsdesk::domain::values::resolved_query::ResolvedQuery;
use newsdesk::NewsDesk;
use std::time::Duration;

fn terms(q: &ResolvedQuery) -> Vec<String> {
    q.search_terms().as_slice().to_vec()
}

#[tokio::test]
async fn test_commodity_token_query() {
    let desk = setup();
    let q = desk.resolve("commodity outlook").await.unwrap();
    let json = serde_json::to_value(&q).unwrap();
    assert_eq!(json["type"], "commodity_market");
    assert_eq!(json["name"], "Global Commodities");
    assert_eq!(
        terms(&q),
        vec!["Commodity Market News", "Gold Price Outlook", "Crude Oil Analysis"]
    );
}

#[tokio::test]
async fn test_commodity_exact_name() {
    let desk = setup();
    let q = desk.resolve(" crude   oil ").await.unwrap();
    assert!(matches!(q, ResolvedQuery::CommodityMarket { .. }));
}

#[tokio::test]
async fn test_bank_of_baroda_lands_in_bank_sector() {
    let desk = setup();
    let q = desk.resolve("Bank of Baroda").await.unwrap();
    let ResolvedQuery::Sector { name, symbols, .. } = &q else {
        panic!("expected sector, got {q:?}");
    };
    assert_eq!(name, "Bank Sector");
    assert_eq!(symbols.len(), 5);
    assert_eq!(terms(&q), vec!["Bank Sector News", "Indian Bank Stocks Outlook"]);
}

#[tokio::test]
async fn test_sector_checked_before_group() {
    let desk = setup();
    let q = desk.resolve("HDFC BANK").await.unwrap();
    assert!(matches!(q, ResolvedQuery::Sector { ref name, .. } if name == "Bank Sector"));
}

#[tokio::test]
async fn test_group_query() {
    let desk = setup();
    let q = desk.resolve("tata motors").await.unwrap();
    let ResolvedQuery::Group { name, symbols, .. } = &q else {
        panic!("expected group, got {q:?}");
    };
    assert_eq!(name, "Tata Group");
    assert!(symbols.contains(&"TCS.NS".to_string()));
    assert_eq!(terms(&q), vec!["TATA Group News"]);
}

#[tokio::test]
async fn test_brand_alias() {
    let desk = setup();
    let q = desk.resolve("kfc").await.unwrap();
    let ResolvedQuery::Stock { symbol, note, .. } = &q else {
        panic!("expected stock");
    };
    assert_eq!(symbol, "DEVYANI.NS");
    assert!(note.is_none());
    assert_eq!(terms(&q), vec!["KFC", "DEVYANI", "Devyani International"]);
}

#[tokio::test]
async fn test_symbol_search_hit_attaches_note() {
    let desk = desk(Providers {
        symbol_search: Some(FakeSymbolSearch::matching("ETERNAL.NS", "Eternal Ltd")),
        ..providers()
    });
    let q = desk.resolve("eternal").await.unwrap();
    let ResolvedQuery::Stock { symbol, note, .. } = &q else {
        panic!("expected stock");
    };
    assert_eq!(symbol, "ETERNAL.NS");
    assert_eq!(
        note.as_deref(),
        Some("Matched Eternal Ltd (ETERNAL.NS) via symbol search.")
    );
    assert_eq!(terms(&q), vec!["ETERNAL", "Eternal Ltd"]);
}

#[tokio::test]
async fn test_unknown_query_gets_exchange_suffix() {
    let desk = setup();
    let q = desk.resolve("irctc").await.unwrap();
    let ResolvedQuery::Stock { symbol, .. } = &q else {
        panic!("expected stock");
    };
    assert_eq!(symbol, "IRCTC.NS");
    assert_eq!(terms(&q), vec!["IRCTC"]);
}

#[tokio::test]
async fn test_suffix_not_doubled() {
    let desk = setup();
    let q = desk.resolve("irctc.ns").await.unwrap();
    assert!(matches!(q, ResolvedQuery::Stock { ref symbol, .. } if symbol == "IRCTC.NS"));
}

#[tokio::test]
async fn test_slow_symbol_search_times_out() {
    let policies = FallbackPolicies {
        symbol_search: FallbackPolicy::new("symbol_search", Some(Duration::from_millis(20))),
        ..FallbackPolicies::default()
    };
    let desk = NewsDesk::with_providers(
        ":memory:",
        Providers {
            symbol_search: Some(FakeSymbolSearch::slow(Duration::from_secs(5))),
            ..providers()
        },
        policies,
    )
    .unwrap();

    let q = desk.resolve("irctc").await.unwrap();
    assert!(matches!(q, ResolvedQuery::Stock { ref symbol, ref note, .. } if symbol == "IRCTC.NS" && note.is_none()));
}

#[tokio::test]
async fn test_search_terms_never_empty() {
    let desk = setup();
    for query in ["gold", "it", "adani", "dmart", "xyz"] {
        let q = desk.resolve(query).await.unwrap();
        assert!(!q.search_terms().as_slice().is_empty(), "{query}");
    }
}
