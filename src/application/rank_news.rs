//! News retrieval and ranking across a list of search terms.

use crate::application::fallback::FallbackPolicy;
use crate::domain::entities::news_item::{NewsItem, RawNewsItem};
use crate::domain::ports::news_source::NewsSource;
use crate::domain::ports::sentiment_scorer::SentimentScorer;
use crate::domain::values::sentiment::SentimentLabel;
use std::collections::HashSet;
use std::sync::Arc;

pub const MAX_RESULTS_PER_TERM: usize = 6;
pub const URGENCY_KEYWORDS: &[&str] = &["surge", "crash", "high", "record", "profit", "quarter", "results"];
pub const KEYWORD_BONUS: u32 = 20;

/// Recency points for a free-form relative date such as "3 hours ago".
pub fn recency_score(date: &str) -> u32 {
    let date = date.to_lowercase();
    if date.contains("min") || date.contains("just now") {
        100
    } else if date.contains("hour") {
        match first_integer(&date) {
            Some(n) => 50u32.saturating_sub(n),
            None => 40,
        }
    } else if date.contains("day") {
        10
    } else {
        0
    }
}

fn first_integer(s: &str) -> Option<u32> {
    let digits: String = s
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect();
    if digits.is_empty() {
        return None;
    }
    // Overlong runs are far in the past anyway.
    Some(digits.parse().unwrap_or(u32::MAX))
}

pub fn keyword_bonus(text: &str) -> u32 {
    let text = text.to_lowercase();
    if URGENCY_KEYWORDS.iter().any(|k| text.contains(k)) {
        KEYWORD_BONUS
    } else {
        0
    }
}

/// Comma separated term list; blanks dropped.
pub fn split_terms(query: &str) -> Vec<String> {
    query
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect()
}

pub fn rank(date: &str, text: &str) -> u32 {
    recency_score(date) + keyword_bonus(text)
}

pub struct NewsRanker {
    source: Arc<dyn NewsSource>,
    scorer: Option<Arc<dyn SentimentScorer>>,
    policy: FallbackPolicy,
}

impl NewsRanker {
    pub fn new(
        source: Arc<dyn NewsSource>,
        scorer: Option<Arc<dyn SentimentScorer>>,
        policy: FallbackPolicy,
    ) -> Self {
        Self {
            source,
            scorer,
            policy,
        }
    }

    /// Fetch every term in order, dedup by title, rank, sort descending.
    pub async fn rank_terms(&self, terms: &[String]) -> Vec<NewsItem> {
        let mut seen: HashSet<String> = HashSet::new();
        let mut items = Vec::new();

        for term in terms {
            let raw = self.policy.run(self.source.search(term), Vec::new).await;
            tracing::debug!(term = %term, hits = raw.len(), source = self.source.name(), "news fetched");
            for entry in raw.into_iter().take(MAX_RESULTS_PER_TERM) {
                if seen.insert(entry.title.clone()) {
                    items.push(self.score(entry));
                }
            }
        }

        // sort_by is stable: equal ranks keep retrieval order
        items.sort_by(|a, b| b.rank.cmp(&a.rank));
        items
    }

    fn score(&self, raw: RawNewsItem) -> NewsItem {
        let text = format!("{}. {}", raw.title, raw.desc);
        let rank = rank(raw.date.as_deref().unwrap_or(""), &text);
        let sentiment = self
            .scorer
            .as_ref()
            .map(|s| SentimentLabel::from_polarity(s.polarity(&text)))
            .unwrap_or_default();

        NewsItem {
            text: raw.title,
            desc: raw.desc,
            source: raw.media,
            link: raw.link,
            date: raw.date.unwrap_or_else(|| "Today".to_string()),
            rank,
            sentiment,
        }
    }
}
