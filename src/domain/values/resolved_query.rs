use serde::Serialize;

/// Ordered, de-duplicated news search terms. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SearchTerms(Vec<String>);

impl SearchTerms {
    pub fn new(first: impl Into<String>, rest: impl IntoIterator<Item = String>) -> Self {
        let mut terms = vec![first.into()];
        for term in rest {
            if !term.is_empty() && !terms.contains(&term) {
                terms.push(term);
            }
        }
        Self(terms)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

/// Classifier categories, tested in [`CLASSIFICATION_ORDER`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryClass {
    Commodity,
    Sector,
    Group,
    Stock,
}

/// First matching class wins. Sector is checked before Stock, so
/// "BANK OF BARODA" lands in the bank sector.
pub const CLASSIFICATION_ORDER: [QueryClass; 4] = [
    QueryClass::Commodity,
    QueryClass::Sector,
    QueryClass::Group,
    QueryClass::Stock,
];

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ResolvedQuery {
    CommodityMarket {
        name: String,
        search_terms: SearchTerms,
    },
    Sector {
        name: String,
        symbols: Vec<String>,
        search_terms: SearchTerms,
    },
    Group {
        name: String,
        symbols: Vec<String>,
        search_terms: SearchTerms,
    },
    Stock {
        symbol: String,
        search_terms: SearchTerms,
        #[serde(skip_serializing_if = "Option::is_none")]
        note: Option<String>,
    },
}

impl ResolvedQuery {
    pub fn class(&self) -> QueryClass {
        match self {
            ResolvedQuery::CommodityMarket { .. } => QueryClass::Commodity,
            ResolvedQuery::Sector { .. } => QueryClass::Sector,
            ResolvedQuery::Group { .. } => QueryClass::Group,
            ResolvedQuery::Stock { .. } => QueryClass::Stock,
        }
    }

    pub fn search_terms(&self) -> &SearchTerms {
        match self {
            ResolvedQuery::CommodityMarket { search_terms, .. }
            | ResolvedQuery::Sector { search_terms, .. }
            | ResolvedQuery::Group { search_terms, .. }
            | ResolvedQuery::Stock { search_terms, .. } => search_terms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_terms_dedup_and_skip_empty() {
        let terms = SearchTerms::new("ZOMATO", vec!["ZOMATO".into(), "".into(), "Zomato Ltd".into()]);
        assert_eq!(terms.as_slice(), &["ZOMATO".to_string(), "Zomato Ltd".to_string()]);
    }

    #[test]
    fn test_serializes_with_type_tag() {
        let q = ResolvedQuery::CommodityMarket {
            name: "Global Commodities".into(),
            search_terms: SearchTerms::new("Commodity Market News", vec![]),
        };
        let json = serde_json::to_value(&q).unwrap();
        assert_eq!(json["type"], "commodity_market");
        assert_eq!(json["search_terms"][0], "Commodity Market News");
    }
}
