pub mod newsapi;
pub mod yahoo;
pub mod yahoo_search;

use std::time::Duration;

const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
     AppleWebKit/537.36 (KHTML, like Gecko) \
     Chrome/120.0.0.0 Safari/537.36";

/// HTTP client that presents as a desktop browser. Yahoo rejects the
/// default reqwest user agent.
pub(crate) fn browser_client(timeout: Option<Duration>) -> reqwest::Client {
    let mut builder = reqwest::Client::builder().user_agent(BROWSER_USER_AGENT);
    if let Some(t) = timeout {
        builder = builder.timeout(t);
    }
    builder.build().unwrap_or_default()
}
