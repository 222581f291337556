//! Word-lexicon polarity scorer for headlines.
//!
//! Polarity is the mean score of every lexicon word found in the text.
//! A negation within the two preceding tokens flips and halves a word's
//! score; an intensifier directly before it scales the score.

use crate::domain::ports::sentiment_scorer::SentimentScorer;
use std::collections::HashMap;

const POSITIVE: &[(&str, f64)] = &[
    ("surge", 0.8),
    ("surges", 0.8),
    ("soar", 0.8),
    ("soars", 0.8),
    ("rally", 0.7),
    ("rallies", 0.7),
    ("jump", 0.6),
    ("jumps", 0.6),
    ("gain", 0.5),
    ("gains", 0.5),
    ("rise", 0.4),
    ("rises", 0.4),
    ("up", 0.2),
    ("high", 0.3),
    ("higher", 0.4),
    ("record", 0.5),
    ("profit", 0.6),
    ("profits", 0.6),
    ("beat", 0.5),
    ("beats", 0.5),
    ("strong", 0.5),
    ("growth", 0.5),
    ("upgrade", 0.6),
    ("bullish", 0.8),
    ("boost", 0.5),
    ("outperform", 0.6),
    ("recovery", 0.4),
    ("positive", 0.5),
    ("good", 0.7),
    ("great", 0.8),
    ("best", 1.0),
    ("win", 0.6),
    ("wins", 0.6),
    ("approval", 0.4),
    ("dividend", 0.3),
];

const NEGATIVE: &[(&str, f64)] = &[
    ("crash", -0.9),
    ("crashes", -0.9),
    ("plunge", -0.8),
    ("plunges", -0.8),
    ("slump", -0.7),
    ("slumps", -0.7),
    ("fall", -0.5),
    ("falls", -0.5),
    ("drop", -0.5),
    ("drops", -0.5),
    ("decline", -0.5),
    ("declines", -0.5),
    ("down", -0.2),
    ("low", -0.3),
    ("lower", -0.4),
    ("loss", -0.6),
    ("losses", -0.6),
    ("miss", -0.5),
    ("misses", -0.5),
    ("weak", -0.5),
    ("downgrade", -0.6),
    ("bearish", -0.8),
    ("fraud", -0.9),
    ("probe", -0.4),
    ("penalty", -0.5),
    ("default", -0.7),
    ("selloff", -0.7),
    ("negative", -0.5),
    ("bad", -0.7),
    ("worst", -1.0),
    ("concern", -0.4),
    ("concerns", -0.4),
    ("fear", -0.6),
    ("fears", -0.6),
];

const NEGATIONS: &[&str] = &["not", "no", "never", "without", "isn't", "wasn't", "didn't", "doesn't"];

const INTENSIFIERS: &[(&str, f64)] = &[
    ("very", 1.3),
    ("sharply", 1.5),
    ("massive", 1.5),
    ("huge", 1.4),
    ("slightly", 0.5),
    ("marginally", 0.5),
];

pub struct LexiconSentiment {
    words: HashMap<&'static str, f64>,
    intensifiers: HashMap<&'static str, f64>,
}

impl LexiconSentiment {
    pub fn new() -> Self {
        Self {
            words: POSITIVE.iter().chain(NEGATIVE.iter()).copied().collect(),
            intensifiers: INTENSIFIERS.iter().copied().collect(),
        }
    }
}

impl Default for LexiconSentiment {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentScorer for LexiconSentiment {
    fn polarity(&self, text: &str) -> f64 {
        let tokens: Vec<String> = text
            .split(|c: char| !(c.is_alphanumeric() || c == '\''))
            .filter(|t| !t.is_empty())
            .map(|t| t.to_lowercase())
            .collect();

        let mut total = 0.0;
        let mut hits = 0usize;
        for (i, token) in tokens.iter().enumerate() {
            let Some(&base) = self.words.get(token.as_str()) else {
                continue;
            };
            let mut score = base;
            if i > 0 {
                if let Some(&m) = self.intensifiers.get(tokens[i - 1].as_str()) {
                    score *= m;
                }
            }
            let negated = tokens[i.saturating_sub(2)..i]
                .iter()
                .any(|t| NEGATIONS.contains(&t.as_str()));
            if negated {
                score *= -0.5;
            }
            total += score;
            hits += 1;
        }

        if hits == 0 {
            0.0
        } else {
            (total / hits as f64).clamp(-1.0, 1.0)
        }
    }
}
