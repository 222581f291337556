use crate::application::fallback::FallbackPolicy;
use crate::domain::entities::article::Entities;
use crate::domain::error::DomainError;
use crate::domain::ports::language_model::LanguageModel;
use std::sync::Arc;

pub fn build_prompt(text: &str) -> String {
    format!(
        r#"You are a Senior Financial Analyst. Analyze this news.
1. Identify Companies (e.g., 'Zomato', 'HDFC Bank').
2. Identify the SPECIFIC Sector (e.g., 'Consumer Tech', 'Banking', 'Energy', 'Commodities').
3. Identify Sentiment (Positive/Negative).

CRITICAL: Do not guess. If it's about food delivery, the sector is 'Consumer Tech', NOT 'Commodities'.

Return JSON ONLY:
{{
    "companies": ["Name"],
    "sectors": ["Specific Sector"],
    "sentiment": "string"
}}

News: {text}
"#
    )
}

/// Pull the JSON body out of a reply that may be wrapped in Markdown fences.
///
/// A ```json fence wins over a bare ``` fence; an unterminated fence yields
/// everything after the opener. Text without fences is returned trimmed.
pub fn strip_code_fences(reply: &str) -> &str {
    let reply = reply.trim();
    let inner = if let Some((_, rest)) = reply.split_once("```json") {
        rest
    } else if let Some((_, rest)) = reply.split_once("```") {
        rest
    } else {
        return reply;
    };
    inner.split("```").next().unwrap_or(inner).trim()
}

pub fn parse_entities(reply: &str) -> Result<Entities, DomainError> {
    serde_json::from_str(strip_code_fences(reply)).map_err(|e| DomainError::Parse(e.to_string()))
}

pub struct EntityExtractor {
    model: Arc<dyn LanguageModel>,
    policy: FallbackPolicy,
}

impl EntityExtractor {
    pub fn new(model: Arc<dyn LanguageModel>, policy: FallbackPolicy) -> Self {
        Self { model, policy }
    }

    /// One model call, no retry. A failed call is an error; an unparsable
    /// reply degrades to empty entities.
    pub async fn extract(&self, text: &str) -> Result<Entities, DomainError> {
        let reply = self.model.invoke(&build_prompt(text)).await?;
        let entities = self.policy.recover(parse_entities(&reply), Entities::default);
        tracing::info!(
            companies = entities.companies.len(),
            sectors = entities.sectors.len(),
            "entities extracted"
        );
        Ok(entities)
    }
}
