use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Entities pulled out of an article by the language model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Entities {
    #[serde(default)]
    pub companies: Vec<String>,
    #[serde(default)]
    pub sectors: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<String>,
}

impl Entities {
    /// Flatten the list fields into the scalar metadata the store accepts.
    pub fn to_metadata(&self) -> RecordMetadata {
        RecordMetadata {
            companies: self.companies.join(", "),
            sectors: self.sectors.join(", "),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Article {
    pub text: String,
    pub entities: Option<Entities>,
}

impl Article {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            entities: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordMetadata {
    pub companies: String,
    pub sectors: String,
}

/// An article as persisted in the nearest-neighbor store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredRecord {
    pub id: String,
    pub content: String,
    pub metadata: RecordMetadata,
    pub created_at: DateTime<Utc>,
}

impl StoredRecord {
    pub fn new(content: String, metadata: RecordMetadata) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            content,
            metadata,
            created_at: Utc::now(),
        }
    }
}

/// A stored record paired with its distance to a query (lower is closer).
#[derive(Debug, Clone)]
pub struct ScoredRecord {
    pub record: StoredRecord,
    pub distance: f64,
}
