//! Article ingestion: dedup check, entity extraction, storage.
//!
//! ```text
//! DeduplicationCheck --duplicate--> Done(Ignored)
//!        |
//!        +--> EntityExtraction --> Storage --> Done(Processed)
//! ```
//!
//! The only branch is after the dedup check. There are no retries and no
//! early cancellation; a model or store failure aborts with an error.

use crate::application::extract_entities::EntityExtractor;
use crate::application::similarity_gate::SimilarityGate;
use crate::application::store_article::ArticleWriter;
use crate::domain::entities::article::{Article, Entities};
use crate::domain::error::DomainError;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum IngestOutcome {
    Ignored { reason: String },
    Processed { entities: Entities },
}

#[derive(Debug, Clone, PartialEq)]
pub enum PipelineStage {
    DeduplicationCheck,
    EntityExtraction,
    Storage(Entities),
    Done(IngestOutcome),
}

impl PipelineStage {
    pub fn label(&self) -> &'static str {
        match self {
            PipelineStage::DeduplicationCheck => "deduplication-check",
            PipelineStage::EntityExtraction => "entity-extraction",
            PipelineStage::Storage(_) => "storage",
            PipelineStage::Done(IngestOutcome::Ignored { .. }) => "done-duplicate",
            PipelineStage::Done(IngestOutcome::Processed { .. }) => "done-stored",
        }
    }
}

/// Everything one pipeline run produced: the article with whatever
/// entities it gained, the outcome and the stage labels visited in order.
#[derive(Debug, Clone)]
pub struct IngestRun {
    pub article: Article,
    pub outcome: IngestOutcome,
    pub stages: Vec<&'static str>,
}

pub struct IngestUseCase {
    gate: SimilarityGate,
    extractor: EntityExtractor,
    writer: ArticleWriter,
}

impl IngestUseCase {
    pub fn new(gate: SimilarityGate, extractor: EntityExtractor, writer: ArticleWriter) -> Self {
        Self {
            gate,
            extractor,
            writer,
        }
    }

    pub async fn execute(&self, text: &str) -> Result<IngestOutcome, DomainError> {
        Ok(self.run(text).await?.outcome)
    }

    pub async fn run(&self, text: &str) -> Result<IngestRun, DomainError> {
        if text.trim().is_empty() {
            return Err(DomainError::InvalidInput("article text is empty".into()));
        }

        let mut article = Article::new(text);
        let mut stages = Vec::new();
        let mut stage = PipelineStage::DeduplicationCheck;

        loop {
            stages.push(stage.label());
            tracing::info!(stage = stage.label(), "ingestion step");
            stage = match stage {
                PipelineStage::DeduplicationCheck => {
                    if self.gate.check(&article.text).await?.is_duplicate {
                        PipelineStage::Done(IngestOutcome::Ignored {
                            reason: "Duplicate".into(),
                        })
                    } else {
                        PipelineStage::EntityExtraction
                    }
                }
                PipelineStage::EntityExtraction => {
                    PipelineStage::Storage(self.extractor.extract(&article.text).await?)
                }
                PipelineStage::Storage(entities) => {
                    self.writer.write(&article.text, &entities).await?;
                    article.entities = Some(entities.clone());
                    PipelineStage::Done(IngestOutcome::Processed { entities })
                }
                PipelineStage::Done(outcome) => {
                    return Ok(IngestRun {
                        article,
                        outcome,
                        stages,
                    })
                }
            };
        }
    }
}
