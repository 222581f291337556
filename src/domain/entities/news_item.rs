use crate::domain::values::sentiment::SentimentLabel;
use serde::{Deserialize, Serialize};

/// A news hit exactly as the news source hands it over.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawNewsItem {
    pub title: String,
    pub desc: String,
    pub media: String,
    pub link: String,
    pub date: Option<String>,
}

/// A ranked news item returned to the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsItem {
    /// Headline.
    pub text: String,
    pub desc: String,
    pub source: String,
    pub link: String,
    /// Free-form relative date, e.g. "2 hours ago".
    pub date: String,
    pub rank: u32,
    pub sentiment: SentimentLabel,
}
