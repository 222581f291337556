use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Polarity above this is bullish, below its negation bearish.
pub const POLARITY_BAND: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SentimentLabel {
    Bullish,
    Bearish,
    #[default]
    Neutral,
}

impl SentimentLabel {
    pub fn from_polarity(polarity: f64) -> Self {
        if polarity > POLARITY_BAND {
            SentimentLabel::Bullish
        } else if polarity < -POLARITY_BAND {
            SentimentLabel::Bearish
        } else {
            SentimentLabel::Neutral
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SentimentLabel::Bullish => write!(f, "Bullish"),
            SentimentLabel::Bearish => write!(f, "Bearish"),
            SentimentLabel::Neutral => write!(f, "Neutral"),
        }
    }
}

impl FromStr for SentimentLabel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bullish" => Ok(SentimentLabel::Bullish),
            "bearish" => Ok(SentimentLabel::Bearish),
            "neutral" => Ok(SentimentLabel::Neutral),
            _ => Err(format!("Unknown sentiment label: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_edges_are_neutral() {
        assert_eq!(SentimentLabel::from_polarity(0.1), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::from_polarity(-0.1), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::from_polarity(0.0), SentimentLabel::Neutral);
    }

    #[test]
    fn test_outside_band() {
        assert_eq!(SentimentLabel::from_polarity(0.11), SentimentLabel::Bullish);
        assert_eq!(SentimentLabel::from_polarity(-0.5), SentimentLabel::Bearish);
    }

    #[test]
    fn test_round_trip_label_text() {
        let label: SentimentLabel = "BULLISH".parse().unwrap();
        assert_eq!(label.to_string(), "Bullish");
        assert!("sideways".parse::<SentimentLabel>().is_err());
    }
}
