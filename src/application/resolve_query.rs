//! Free-text query classification into commodity, sector, group or stock.

use crate::application::fallback::FallbackPolicy;
use crate::domain::entities::market_quote::display_symbol;
use crate::domain::ports::symbol_search::{SymbolMatch, SymbolSearch};
use crate::domain::values::market_catalog::{
    self, Basket, COMMODITY_NAMES, COMMODITY_TOKENS, GROUPS, MARKET_SUFFIX, SECTORS,
};
use crate::domain::values::resolved_query::{QueryClass, ResolvedQuery, SearchTerms, CLASSIFICATION_ORDER};
use std::sync::Arc;

/// Uppercase and collapse runs of whitespace.
pub fn normalize(query: &str) -> String {
    query.split_whitespace().collect::<Vec<_>>().join(" ").to_uppercase()
}

pub fn classify_commodity(q: &str) -> Option<ResolvedQuery> {
    let hit = COMMODITY_NAMES.contains(&q) || COMMODITY_TOKENS.iter().any(|t| q.contains(t));
    hit.then(|| ResolvedQuery::CommodityMarket {
        name: "Global Commodities".into(),
        search_terms: SearchTerms::new(
            "Commodity Market News",
            ["Gold Price Outlook".to_string(), "Crude Oil Analysis".to_string()],
        ),
    })
}

fn first_basket<'a>(q: &str, baskets: &'a [Basket]) -> Option<&'a Basket> {
    baskets.iter().find(|b| q.contains(b.key))
}

fn symbols(basket: &Basket) -> Vec<String> {
    basket.symbols.iter().map(|s| s.to_string()).collect()
}

pub fn classify_sector(q: &str) -> Option<ResolvedQuery> {
    first_basket(q, SECTORS).map(|b| ResolvedQuery::Sector {
        name: format!("{} Sector", b.display),
        symbols: symbols(b),
        search_terms: SearchTerms::new(
            format!("{} Sector News", b.display),
            [format!("Indian {} Stocks Outlook", b.display)],
        ),
    })
}

pub fn classify_group(q: &str) -> Option<ResolvedQuery> {
    first_basket(q, GROUPS).map(|b| ResolvedQuery::Group {
        name: format!("{} Group", b.display),
        symbols: symbols(b),
        search_terms: SearchTerms::new(format!("{} Group News", b.key), Vec::new()),
    })
}

/// Ticker guessed from the query itself by the exchange-suffix convention.
pub fn synthesized_symbol(q: &str) -> String {
    if q.ends_with(MARKET_SUFFIX) {
        q.to_string()
    } else {
        format!("{q}{MARKET_SUFFIX}")
    }
}

fn stock(q: &str, symbol: String, parent: Option<String>, note: Option<String>) -> ResolvedQuery {
    let base = display_symbol(&symbol);
    let rest = [Some(base), parent].into_iter().flatten();
    ResolvedQuery::Stock {
        search_terms: SearchTerms::new(q, rest),
        symbol,
        note,
    }
}

pub struct QueryResolver {
    symbol_search: Option<Arc<dyn SymbolSearch>>,
    policy: FallbackPolicy,
}

impl QueryResolver {
    pub fn new(symbol_search: Option<Arc<dyn SymbolSearch>>, policy: FallbackPolicy) -> Self {
        Self {
            symbol_search,
            policy,
        }
    }

    pub async fn resolve(&self, query: &str) -> ResolvedQuery {
        let q = normalize(query);
        let mut resolved = None;
        for class in CLASSIFICATION_ORDER {
            resolved = match class {
                QueryClass::Commodity => classify_commodity(&q),
                QueryClass::Sector => classify_sector(&q),
                QueryClass::Group => classify_group(&q),
                QueryClass::Stock => Some(self.resolve_stock(&q).await),
            };
            if resolved.is_some() {
                break;
            }
        }
        let resolved = resolved.unwrap_or_else(|| stock(&q, synthesized_symbol(&q), None, None));
        tracing::info!(query = %q, class = ?resolved.class(), "query resolved");
        resolved
    }

    /// Brand alias, then symbol search, then the suffix convention.
    async fn resolve_stock(&self, q: &str) -> ResolvedQuery {
        if let Some((symbol, parent)) = market_catalog::brand(q) {
            return stock(q, symbol.to_string(), parent.map(String::from), None);
        }

        if let Some(found) = self.search_symbol(q).await {
            let note = format!(
                "Matched {} ({}) via symbol search.",
                found.name.as_deref().unwrap_or(&found.symbol),
                found.symbol
            );
            return stock(q, found.symbol, found.name, Some(note));
        }

        stock(q, synthesized_symbol(q), None, None)
    }

    async fn search_symbol(&self, q: &str) -> Option<SymbolMatch> {
        let search = self.symbol_search.as_ref()?;
        if q.is_empty() || q.ends_with(MARKET_SUFFIX) {
            return None;
        }
        self.policy.run(search.lookup(q), || None).await
    }
}
