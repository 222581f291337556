use serde::{Serialize, Serializer};

/// Raw figures from a quote source, before rounding and labelling.
#[derive(Debug, Clone, Default)]
pub struct QuoteSnapshot {
    pub symbol: String,
    pub name: Option<String>,
    pub price: f64,
    /// Session open when known, otherwise the previous close.
    pub reference_price: f64,
    pub day_high: f64,
    pub day_low: f64,
    pub currency: Option<String>,
    pub market_cap: Option<f64>,
    pub pe_ratio: Option<f64>,
    pub sector: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MarketQuote {
    pub symbol: String,
    pub name: String,
    pub price: f64,
    pub change: f64,
    pub percent_change: f64,
    pub currency: String,
    #[serde(serialize_with = "not_available_if_none")]
    pub market_cap: Option<f64>,
    #[serde(serialize_with = "not_available_if_none")]
    pub pe_ratio: Option<f64>,
    pub sector: String,
    pub day_high: f64,
    pub day_low: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl MarketQuote {
    pub fn from_snapshot(requested: &str, snap: QuoteSnapshot) -> Self {
        let change = snap.price - snap.reference_price;
        let percent_change = if snap.reference_price != 0.0 {
            change / snap.reference_price * 100.0
        } else {
            0.0
        };
        Self {
            symbol: display_symbol(requested),
            name: snap.name.unwrap_or_else(|| requested.to_string()),
            price: round2(snap.price),
            change: round2(change),
            percent_change: round2(percent_change),
            currency: snap.currency.unwrap_or_else(|| "?".to_string()),
            market_cap: snap.market_cap,
            pe_ratio: snap.pe_ratio,
            sector: snap.sector.unwrap_or_else(|| "Market".to_string()),
            day_high: round2(snap.day_high),
            day_low: round2(snap.day_low),
            note: None,
        }
    }

    /// Append a note, keeping any note already present.
    pub fn add_note(&mut self, note: &str) {
        self.note = Some(match self.note.take() {
            Some(existing) => format!("{existing} {note}"),
            None => note.to_string(),
        });
    }
}

/// Strip the exchange (`.NS`) and futures (`=F`) suffixes for display.
pub fn display_symbol(symbol: &str) -> String {
    symbol.replace(".NS", "").replace("=F", "")
}

pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

fn not_available_if_none<S: Serializer>(value: &Option<f64>, s: S) -> Result<S::Ok, S::Error> {
    match value {
        Some(v) => s.serialize_f64(*v),
        None => s.serialize_str("N/A"),
    }
}
