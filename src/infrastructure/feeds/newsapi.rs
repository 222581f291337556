use crate::domain::entities::news_item::RawNewsItem;
use crate::domain::error::FeedError;
use crate::domain::ports::news_source::NewsSource;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

const ENDPOINT: &str = "https://newsapi.org/v2/everything";
const PAGE_SIZE: usize = 10;

/// News search over newsapi.org. Publish timestamps are rendered as
/// relative strings ("3 hours ago") so the ranker can bucket them.
pub struct NewsApiSource {
    api_key: Option<String>,
    language: String,
    client: reqwest::Client,
}

impl NewsApiSource {
    pub fn new(api_key: Option<String>, language: String) -> Self {
        Self {
            api_key: api_key.filter(|k| !k.is_empty()),
            language,
            client: reqwest::Client::builder()
                .user_agent(concat!("newsdesk/", env!("CARGO_PKG_VERSION")))
                .build()
                .unwrap_or_default(),
        }
    }
}

#[derive(Debug, serde::Deserialize)]
struct SearchResponse {
    status: String,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    articles: Vec<Article>,
}

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct Article {
    #[serde(default)]
    source: Option<ArticleSource>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    published_at: Option<String>,
}

#[derive(Debug, serde::Deserialize)]
struct ArticleSource {
    #[serde(default)]
    name: Option<String>,
}

#[async_trait]
impl NewsSource for NewsApiSource {
    fn name(&self) -> &str {
        "newsapi"
    }

    async fn search(&self, term: &str) -> Result<Vec<RawNewsItem>, FeedError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| FeedError::Config("NEWSDESK_NEWS_API_KEY is not set".into()))?;

        let page_size = PAGE_SIZE.to_string();
        let resp = self
            .client
            .get(ENDPOINT)
            .query(&[
                ("q", term),
                ("language", self.language.as_str()),
                ("sortBy", "publishedAt"),
                ("pageSize", page_size.as_str()),
            ])
            .header("X-Api-Key", api_key)
            .send()
            .await?;

        let status = resp.status();
        let body: SearchResponse = resp.json().await?;
        if !status.is_success() || body.status != "ok" {
            return Err(FeedError::Network(format!(
                "NewsAPI returned {status}: {}",
                body.message.unwrap_or_default()
            )));
        }

        Ok(to_raw_items(body.articles, Utc::now()))
    }
}

fn to_raw_items(articles: Vec<Article>, now: DateTime<Utc>) -> Vec<RawNewsItem> {
    articles
        .into_iter()
        .filter_map(|a| {
            let title = a.title.filter(|t| !t.is_empty() && t != "[Removed]")?;
            let date = a
                .published_at
                .as_deref()
                .and_then(|p| DateTime::parse_from_rfc3339(p).ok())
                .map(|p| relative_age(p.to_utc(), now));
            Some(RawNewsItem {
                title,
                desc: a.description.unwrap_or_default(),
                media: a.source.and_then(|s| s.name).unwrap_or_default(),
                link: a.url.unwrap_or_default(),
                date,
            })
        })
        .collect()
}

/// Render a publish time relative to `now`, the way news search pages do.
pub fn relative_age(published: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let age = now.signed_duration_since(published);
    let mins = age.num_minutes();
    let hours = age.num_hours();
    let days = age.num_days();

    fn plural(n: i64, unit: &str) -> String {
        if n == 1 {
            format!("1 {unit} ago")
        } else {
            format!("{n} {unit}s ago")
        }
    }

    if mins < 1 {
        "just now".to_string()
    } else if mins < 60 {
        plural(mins, "min")
    } else if hours < 24 {
        plural(hours, "hour")
    } else if days < 30 {
        plural(days, "day")
    } else {
        published.format("%b %d, %Y").to_string()
    }
}
