use super::browser_client;
use crate::domain::error::FeedError;
use crate::domain::ports::symbol_search::{SymbolMatch, SymbolSearch};
use async_trait::async_trait;
use std::time::Duration;

/// Ticker lookup through Yahoo's v1 search endpoint.
///
/// Prefers listings on the home exchange (suffix `.NS`), then any equity,
/// then whatever comes first.
pub struct YahooSymbolSearch {
    client: reqwest::Client,
    home_suffix: String,
}

impl YahooSymbolSearch {
    pub fn new(timeout: Duration, home_suffix: &str) -> Self {
        Self {
            client: browser_client(Some(timeout)),
            home_suffix: home_suffix.to_string(),
        }
    }
}

#[derive(Debug, serde::Deserialize)]
struct SearchResponse {
    #[serde(default)]
    quotes: Vec<SearchQuote>,
}

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchQuote {
    #[serde(default)]
    symbol: Option<String>,
    #[serde(default)]
    shortname: Option<String>,
    #[serde(default)]
    longname: Option<String>,
    #[serde(default)]
    quote_type: Option<String>,
}

fn pick(quotes: Vec<SearchQuote>, home_suffix: &str) -> Option<SymbolMatch> {
    let candidates: Vec<SearchQuote> = quotes.into_iter().filter(|q| q.symbol.is_some()).collect();
    let idx = candidates
        .iter()
        .position(|q| q.symbol.as_deref().is_some_and(|s| s.ends_with(home_suffix)))
        .or_else(|| {
            candidates
                .iter()
                .position(|q| q.quote_type.as_deref() == Some("EQUITY"))
        })
        .or(if candidates.is_empty() { None } else { Some(0) })?;

    let chosen = candidates.into_iter().nth(idx)?;
    Some(SymbolMatch {
        symbol: chosen.symbol?,
        name: chosen.longname.or(chosen.shortname),
    })
}

#[async_trait]
impl SymbolSearch for YahooSymbolSearch {
    async fn lookup(&self, query: &str) -> Result<Option<SymbolMatch>, FeedError> {
        let resp = self
            .client
            .get("https://query2.finance.yahoo.com/v1/finance/search")
            .query(&[("q", query), ("quotesCount", "5"), ("newsCount", "0")])
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(FeedError::Network(format!(
                "Yahoo search returned {} for {query}",
                resp.status()
            )));
        }

        let body: SearchResponse = resp.json().await?;
        Ok(pick(body.quotes, &self.home_suffix))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quote(symbol: &str, kind: &str) -> SearchQuote {
        SearchQuote {
            symbol: Some(symbol.into()),
            shortname: Some(format!("{symbol} short")),
            longname: None,
            quote_type: Some(kind.into()),
        }
    }

    #[test]
    fn test_prefers_home_exchange() {
        let picked = pick(
            vec![quote("IRFC.BO", "EQUITY"), quote("IRFC.NS", "EQUITY")],
            ".NS",
        )
        .unwrap();
        assert_eq!(picked.symbol, "IRFC.NS");
        assert_eq!(picked.name.as_deref(), Some("IRFC.NS short"));
    }

    #[test]
    fn test_falls_back_to_equity_then_first() {
        let picked = pick(vec![quote("BTC-USD", "CRYPTOCURRENCY"), quote("AAPL", "EQUITY")], ".NS").unwrap();
        assert_eq!(picked.symbol, "AAPL");

        let picked = pick(vec![quote("BTC-USD", "CRYPTOCURRENCY")], ".NS").unwrap();
        assert_eq!(picked.symbol, "BTC-USD");
    }

    #[test]
    fn test_empty_results() {
        assert!(pick(vec![], ".NS").is_none());
    }
}
