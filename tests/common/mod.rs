//! Shared test doubles for the news desk ports.
#![allow(dead_code)]

use async_trait::async_trait;
use newsdesk::application::fallback::FallbackPolicies;
use newsdesk::domain::entities::market_quote::QuoteSnapshot;
use newsdesk::domain::entities::news_item::RawNewsItem;
use newsdesk::domain::error::{DomainError, FeedError};
use newsdesk::domain::ports::language_model::LanguageModel;
use newsdesk::domain::ports::news_source::NewsSource;
use newsdesk::domain::ports::page_fetcher::PageFetcher;
use newsdesk::domain::ports::quote_source::QuoteSource;
use newsdesk::domain::ports::sentiment_scorer::SentimentScorer;
use newsdesk::domain::ports::symbol_search::{SymbolMatch, SymbolSearch};
use newsdesk::infrastructure::embeddings::hashing::HashingProvider;
pub use newsdesk::{NewsDesk, Providers};
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub const ENTITIES_REPLY: &str =
    "```json\n{\"companies\": [\"Zomato\"], \"sectors\": [\"Consumer Tech\"], \"sentiment\": \"Positive\"}\n```";

/// Language model that returns a fixed reply (or fails) and counts calls.
pub struct ScriptedModel {
    reply: Result<String, String>,
    calls: AtomicUsize,
}

impl ScriptedModel {
    pub fn replying(reply: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(reply.to_string()),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Err(message.to_string()),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LanguageModel for ScriptedModel {
    async fn invoke(&self, _prompt: &str) -> Result<String, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.reply.clone().map_err(DomainError::Model)
    }

    fn name(&self) -> &str {
        "scripted"
    }
}

pub fn news(title: &str, desc: &str, date: Option<&str>) -> RawNewsItem {
    RawNewsItem {
        title: title.to_string(),
        desc: desc.to_string(),
        media: "Wire".to_string(),
        link: format!("https://news.example/{}", title.len()),
        date: date.map(String::from),
    }
}

/// News source backed by a term → results table. Terms listed in
/// `failing` return a network error; unknown terms return nothing.
#[derive(Default)]
pub struct FakeNewsSource {
    pub results: HashMap<String, Vec<RawNewsItem>>,
    pub failing: HashSet<String>,
    pub requested: Mutex<Vec<String>>,
}

impl FakeNewsSource {
    pub fn with(mut self, term: &str, items: Vec<RawNewsItem>) -> Self {
        self.results.insert(term.to_string(), items);
        self
    }

    pub fn failing_on(mut self, term: &str) -> Self {
        self.failing.insert(term.to_string());
        self
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().map(|r| r.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl NewsSource for FakeNewsSource {
    fn name(&self) -> &str {
        "fake-news"
    }

    async fn search(&self, term: &str) -> Result<Vec<RawNewsItem>, FeedError> {
        if let Ok(mut r) = self.requested.lock() {
            r.push(term.to_string());
        }
        if self.failing.contains(term) {
            return Err(FeedError::Network("connection reset".into()));
        }
        Ok(self.results.get(term).cloned().unwrap_or_default())
    }
}

pub fn snapshot(symbol: &str, price: f64, reference: f64) -> QuoteSnapshot {
    QuoteSnapshot {
        symbol: symbol.to_string(),
        name: Some(format!("{symbol} Ltd")),
        price,
        reference_price: reference,
        day_high: price + 1.0,
        day_low: price - 1.0,
        currency: Some("INR".into()),
        market_cap: Some(1.0e12),
        pe_ratio: None,
        sector: Some("Technology".into()),
    }
}

/// Quote source with a fixed table. Symbols in `unavailable` fail;
/// any other symbol missing from the table has no data.
#[derive(Default)]
pub struct FakeQuoteSource {
    pub quotes: HashMap<String, QuoteSnapshot>,
    pub unavailable: HashSet<String>,
    pub all_unavailable: bool,
}

impl FakeQuoteSource {
    pub fn with(mut self, snap: QuoteSnapshot) -> Self {
        self.quotes.insert(snap.symbol.clone(), snap);
        self
    }

    pub fn unavailable_for(mut self, symbol: &str) -> Self {
        self.unavailable.insert(symbol.to_string());
        self
    }

    pub fn down() -> Self {
        Self {
            all_unavailable: true,
            ..Self::default()
        }
    }
}

#[async_trait]
impl QuoteSource for FakeQuoteSource {
    fn name(&self) -> &str {
        "fake-quotes"
    }

    async fn quote(&self, symbol: &str) -> Result<Option<QuoteSnapshot>, FeedError> {
        if self.all_unavailable || self.unavailable.contains(symbol) {
            return Err(FeedError::Network("service unavailable".into()));
        }
        Ok(self.quotes.get(symbol).cloned())
    }
}

/// Symbol search returning a fixed match after an optional delay.
pub struct FakeSymbolSearch {
    pub hit: Option<SymbolMatch>,
    pub delay: Duration,
}

impl FakeSymbolSearch {
    pub fn matching(symbol: &str, name: &str) -> Arc<Self> {
        Arc::new(Self {
            hit: Some(SymbolMatch {
                symbol: symbol.to_string(),
                name: Some(name.to_string()),
            }),
            delay: Duration::ZERO,
        })
    }

    pub fn slow(delay: Duration) -> Arc<Self> {
        Arc::new(Self {
            hit: Some(SymbolMatch {
                symbol: "LATE.NS".into(),
                name: None,
            }),
            delay,
        })
    }
}

#[async_trait]
impl SymbolSearch for FakeSymbolSearch {
    async fn lookup(&self, _query: &str) -> Result<Option<SymbolMatch>, FeedError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        Ok(self.hit.clone())
    }
}

/// Page fetcher serving one canned answer and recording requested URLs.
pub struct FakePageFetcher {
    pub page: Result<Option<String>, String>,
    pub requested: Mutex<Vec<String>>,
}

impl FakePageFetcher {
    pub fn serving(text: &str) -> Arc<Self> {
        Self::answer(Ok(Some(text.to_string())))
    }

    pub fn refusing() -> Arc<Self> {
        Self::answer(Ok(None))
    }

    pub fn failing(message: &str) -> Arc<Self> {
        Self::answer(Err(message.to_string()))
    }

    fn answer(page: Result<Option<String>, String>) -> Arc<Self> {
        Arc::new(Self {
            page,
            requested: Mutex::new(Vec::new()),
        })
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().map(|r| r.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl PageFetcher for FakePageFetcher {
    async fn fetch_text(&self, url: &str) -> Result<Option<String>, FeedError> {
        if let Ok(mut r) = self.requested.lock() {
            r.push(url.to_string());
        }
        self.page.clone().map_err(FeedError::Network)
    }
}

/// Scores any text containing "beat" as bullish and "miss" as bearish.
pub struct KeywordScorer;

impl SentimentScorer for KeywordScorer {
    fn polarity(&self, text: &str) -> f64 {
        let text = text.to_lowercase();
        if text.contains("beat") {
            0.8
        } else if text.contains("miss") {
            -0.6
        } else {
            0.0
        }
    }
}

pub fn providers() -> Providers {
    Providers {
        embedder: Arc::new(HashingProvider::default()),
        model: ScriptedModel::replying(ENTITIES_REPLY),
        news: Arc::new(FakeNewsSource::default()),
        quotes: Arc::new(FakeQuoteSource::default()),
        pages: FakePageFetcher::refusing(),
        symbol_search: None,
        sentiment: None,
    }
}

pub fn desk(providers: Providers) -> NewsDesk {
    NewsDesk::with_providers(":memory:", providers, FallbackPolicies::default()).unwrap()
}

pub fn setup() -> NewsDesk {
    desk(providers())
}
