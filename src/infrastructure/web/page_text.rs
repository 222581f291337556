use crate::domain::error::FeedError;
use crate::domain::ports::page_fetcher::PageFetcher;
use async_trait::async_trait;
use regex::Regex;
use std::sync::OnceLock;
use std::time::Duration;

pub const MAX_PAGE_CHARS: usize = 15_000;
const FETCH_TIMEOUT: Duration = Duration::from_secs(15);
const NOISE_TAGS: &[&str] = &["script", "style", "nav", "footer", "header", "aside", "form", "iframe"];

fn block_patterns() -> &'static Vec<Regex> {
    static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        NOISE_TAGS
            .iter()
            .filter_map(|tag| Regex::new(&format!(r"(?is)<{tag}\b[^>]*>.*?</{tag}\s*>")).ok())
            .collect()
    })
}

fn tag_pattern() -> Option<&'static Regex> {
    static TAG: OnceLock<Option<Regex>> = OnceLock::new();
    TAG.get_or_init(|| Regex::new(r"(?s)<!--.*?-->|<[^>]+>").ok()).as_ref()
}

/// Visible text of an HTML document: noise blocks removed, tags dropped,
/// common entities decoded, whitespace collapsed, truncated.
pub fn html_to_text(html: &str) -> String {
    let mut text = html.to_string();
    for pattern in block_patterns() {
        text = pattern.replace_all(&text, " ").into_owned();
    }
    if let Some(tags) = tag_pattern() {
        text = tags.replace_all(&text, " ").into_owned();
    }
    let text = text
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">");

    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed.chars().take(MAX_PAGE_CHARS).collect()
}

/// Fetch a page and return its visible text, or `None` on a non-200 answer.
pub async fn fetch_page_text(url: &str) -> Result<Option<String>, FeedError> {
    let client = crate::infrastructure::feeds::browser_client(Some(FETCH_TIMEOUT));
    let resp = client
        .get(url)
        .header(
            "Accept",
            "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8",
        )
        .header("Referer", "https://www.google.com/")
        .send()
        .await?;

    if resp.status() != reqwest::StatusCode::OK {
        tracing::warn!(%url, status = %resp.status(), "page fetch refused");
        return Ok(None);
    }

    let body = resp.text().await?;
    Ok(Some(html_to_text(&body)))
}

/// Live fetcher posing as a desktop browser.
#[derive(Debug, Default, Clone, Copy)]
pub struct WebPageFetcher;

#[async_trait]
impl PageFetcher for WebPageFetcher {
    async fn fetch_text(&self, url: &str) -> Result<Option<String>, FeedError> {
        fetch_page_text(url).await
    }
}
