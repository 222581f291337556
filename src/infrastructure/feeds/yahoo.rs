use super::browser_client;
use crate::domain::entities::market_quote::QuoteSnapshot;
use crate::domain::error::FeedError;
use crate::domain::ports::quote_source::QuoteSource;
use async_trait::async_trait;
use reqwest::StatusCode;

/// Yahoo Finance quotes using the v8 chart API (no auth required), topped
/// up with fundamentals from the v10 quote summary when Yahoo serves it.
pub struct YahooQuoteSource {
    client: reqwest::Client,
}

impl YahooQuoteSource {
    pub fn new() -> Self {
        Self {
            client: browser_client(None),
        }
    }
}

impl Default for YahooQuoteSource {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, serde::Deserialize)]
struct ChartResponse {
    chart: ChartResult,
}

#[derive(Debug, serde::Deserialize)]
struct ChartResult {
    result: Option<Vec<ChartData>>,
    error: Option<serde_json::Value>,
}

#[derive(Debug, serde::Deserialize)]
struct ChartData {
    meta: ChartMeta,
    #[serde(default)]
    indicators: Option<Indicators>,
}

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChartMeta {
    symbol: String,
    #[serde(default)]
    currency: Option<String>,
    #[serde(default)]
    short_name: Option<String>,
    #[serde(default)]
    long_name: Option<String>,
    #[serde(default)]
    regular_market_price: Option<f64>,
    #[serde(default)]
    chart_previous_close: Option<f64>,
    #[serde(default)]
    regular_market_day_high: Option<f64>,
    #[serde(default)]
    regular_market_day_low: Option<f64>,
}

#[derive(Debug, serde::Deserialize)]
struct Indicators {
    #[serde(default)]
    quote: Vec<QuoteSeries>,
}

#[derive(Debug, serde::Deserialize)]
struct QuoteSeries {
    #[serde(default)]
    open: Vec<Option<f64>>,
}

impl ChartData {
    /// Last session open in the series, if any bar carries one.
    fn session_open(&self) -> Option<f64> {
        self.indicators
            .as_ref()?
            .quote
            .first()?
            .open
            .iter()
            .rev()
            .flatten()
            .next()
            .copied()
    }

    fn into_snapshot(self) -> Option<QuoteSnapshot> {
        let open = self.session_open();
        let meta = self.meta;
        let price = meta.regular_market_price?;
        let reference_price = open.or(meta.chart_previous_close).unwrap_or(price);

        Some(QuoteSnapshot {
            name: meta.short_name.or(meta.long_name),
            price,
            reference_price,
            day_high: meta.regular_market_day_high.unwrap_or(price),
            day_low: meta.regular_market_day_low.unwrap_or(price),
            currency: meta.currency,
            market_cap: None,
            pe_ratio: None,
            sector: None,
            symbol: meta.symbol,
        })
    }
}

#[derive(Debug, Default, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct SummaryResponse {
    #[serde(default)]
    quote_summary: Option<SummaryResult>,
}

#[derive(Debug, Default, serde::Deserialize)]
struct SummaryResult {
    #[serde(default)]
    result: Option<Vec<SummaryModules>>,
}

#[derive(Debug, Default, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct SummaryModules {
    #[serde(default)]
    summary_detail: Option<SummaryDetail>,
    #[serde(default)]
    asset_profile: Option<AssetProfile>,
}

#[derive(Debug, Default, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct SummaryDetail {
    #[serde(default)]
    market_cap: Option<RawValue>,
    #[serde(default, rename = "trailingPE")]
    trailing_pe: Option<RawValue>,
}

#[derive(Debug, Default, serde::Deserialize)]
struct AssetProfile {
    #[serde(default)]
    sector: Option<String>,
}

/// Yahoo wraps numbers as `{"raw": 1.0, "fmt": "1.00"}`; empty objects mean no value.
#[derive(Debug, Default, serde::Deserialize)]
struct RawValue {
    #[serde(default)]
    raw: Option<f64>,
}

#[derive(Debug, Default, Clone, PartialEq)]
struct Fundamentals {
    market_cap: Option<f64>,
    pe_ratio: Option<f64>,
    sector: Option<String>,
}

impl Fundamentals {
    fn apply(self, snap: &mut QuoteSnapshot) {
        snap.market_cap = self.market_cap;
        snap.pe_ratio = self.pe_ratio;
        snap.sector = self.sector;
    }
}

fn parse_summary(data: SummaryResponse) -> Fundamentals {
    let Some(modules) = data
        .quote_summary
        .and_then(|s| s.result)
        .and_then(|r| r.into_iter().next())
    else {
        return Fundamentals::default();
    };
    let detail = modules.summary_detail.unwrap_or_default();
    Fundamentals {
        market_cap: detail.market_cap.and_then(|v| v.raw),
        pe_ratio: detail.trailing_pe.and_then(|v| v.raw),
        sector: modules
            .asset_profile
            .and_then(|p| p.sector)
            .filter(|s| !s.trim().is_empty()),
    }
}

fn parse_chart(data: ChartResponse, symbol: &str) -> Result<Option<QuoteSnapshot>, FeedError> {
    if let Some(err) = data.chart.error {
        tracing::debug!(%symbol, %err, "yahoo reported chart error");
        return Ok(None);
    }
    Ok(data
        .chart
        .result
        .and_then(|r| r.into_iter().next())
        .and_then(ChartData::into_snapshot))
}

impl YahooQuoteSource {
    async fn fetch_summary(&self, symbol: &str) -> Result<Fundamentals, FeedError> {
        let url = format!("https://query2.finance.yahoo.com/v10/finance/quoteSummary/{symbol}");
        let resp = self
            .client
            .get(&url)
            .query(&[("modules", "summaryDetail,assetProfile")])
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(FeedError::Network(format!(
                "Yahoo summary returned {} for {symbol}",
                resp.status()
            )));
        }
        let data: SummaryResponse = resp.json().await?;
        Ok(parse_summary(data))
    }

    /// Fundamentals are optional: any failure leaves them unset.
    async fn fundamentals(&self, symbol: &str) -> Fundamentals {
        match self.fetch_summary(symbol).await {
            Ok(f) => f,
            Err(e) => {
                tracing::debug!(%symbol, error = %e, "quote summary unavailable");
                Fundamentals::default()
            }
        }
    }
}

#[async_trait]
impl QuoteSource for YahooQuoteSource {
    fn name(&self) -> &str {
        "yahoo_finance"
    }

    async fn quote(&self, symbol: &str) -> Result<Option<QuoteSnapshot>, FeedError> {
        let url = format!("https://query1.finance.yahoo.com/v8/finance/chart/{symbol}");

        let resp = self
            .client
            .get(&url)
            .query(&[("range", "1d"), ("interval", "1d")])
            .send()
            .await?;

        if resp.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !resp.status().is_success() {
            return Err(FeedError::Network(format!(
                "Yahoo API returned {} for {symbol}",
                resp.status()
            )));
        }

        let data: ChartResponse = resp.json().await?;
        let Some(mut snap) = parse_chart(data, symbol)? else {
            return Ok(None);
        };
        self.fundamentals(symbol).await.apply(&mut snap);
        Ok(Some(snap))
    }
}
