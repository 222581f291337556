//! Free-form document review by the language model, with a gate that
//! rejects pages too short to analyze and non-financial content.

use crate::domain::ports::language_model::LanguageModel;
use crate::domain::ports::page_fetcher::PageFetcher;
use serde::Serialize;
use std::sync::Arc;

pub const MIN_DOCUMENT_CHARS: usize = 100;
pub const PROMPT_DOCUMENT_CHARS: usize = 5_000;
pub const NON_FINANCIAL_MARKER: &str = "NON_FINANCIAL";

pub const TOO_SHORT_MESSAGE: &str =
    "Could not extract enough text from the link. Website might be protected.";
pub const NOT_FINANCIAL_MESSAGE: &str =
    "Not my cup of tea. This appears to be general content (Entertainment/Sports), not Financial Intelligence.";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentAnalysis {
    pub is_relevant: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis: Option<String>,
}

impl DocumentAnalysis {
    fn rejected(message: impl Into<String>) -> Self {
        Self {
            is_relevant: false,
            message: Some(message.into()),
            analysis: None,
        }
    }

    fn relevant(analysis: String) -> Self {
        Self {
            is_relevant: true,
            message: None,
            analysis: Some(analysis),
        }
    }
}

pub fn build_prompt(text: &str) -> String {
    let excerpt: String = text.chars().take(PROMPT_DOCUMENT_CHARS).collect();
    format!(
        r#"You are a Financial Analyst. Analyze the text below.

STEP 1: IDENTIFY TOPIC
- If the text is about Movies (Plots, Cast), Sports (Match scores), Recipes, or Celebrity Gossip -> Output "{NON_FINANCIAL_MARKER}".
- If the text mentions Stocks, Companies (e.g., Tata, Reliance), Prices (Rs, $), Markets, Business, or Economy -> Proceed to Step 2.

STEP 2: ANALYSIS (Only if Financial)
Provide a valid JSON-style response with:
- Summary (3 bullet points)
- Sentiment (Bullish/Bearish/Neutral)
- Impact (What stock/sector is affected?)

Text to Analyze:
{excerpt}
"#
    )
}

pub struct DocumentAnalyst {
    model: Arc<dyn LanguageModel>,
    pages: Arc<dyn PageFetcher>,
}

impl DocumentAnalyst {
    pub fn new(model: Arc<dyn LanguageModel>, pages: Arc<dyn PageFetcher>) -> Self {
        Self { model, pages }
    }

    pub async fn analyze_text(&self, text: &str) -> DocumentAnalysis {
        if text.trim().chars().count() < MIN_DOCUMENT_CHARS {
            return DocumentAnalysis::rejected(TOO_SHORT_MESSAGE);
        }

        let reply = match self.model.invoke(&build_prompt(text)).await {
            Ok(reply) => reply,
            Err(e) => {
                tracing::warn!(model = self.model.name(), error = %e, "document analysis failed");
                return DocumentAnalysis::rejected(format!("AI Error: {e}"));
            }
        };

        let reply = reply.trim();
        if reply.contains(NON_FINANCIAL_MARKER) {
            tracing::info!("document rejected as non-financial");
            return DocumentAnalysis::rejected(NOT_FINANCIAL_MESSAGE);
        }
        DocumentAnalysis::relevant(reply.to_string())
    }

    /// Scrape the page, then analyze whatever text it yielded.
    pub async fn analyze_url(&self, url: &str) -> DocumentAnalysis {
        let text = match self.pages.fetch_text(url).await {
            Ok(text) => text.unwrap_or_default(),
            Err(e) => {
                tracing::warn!(url, error = %e, "page fetch failed");
                String::new()
            }
        };
        self.analyze_text(&text).await
    }
}
