use crate::domain::error::DomainError;
use async_trait::async_trait;

/// Text-in, text-out completion model.
#[async_trait]
pub trait LanguageModel: Send + Sync {
    async fn invoke(&self, prompt: &str) -> Result<String, DomainError>;

    /// Model name for logging
    fn name(&self) -> &str;
}
