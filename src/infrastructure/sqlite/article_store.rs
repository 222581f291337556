use crate::domain::entities::article::{RecordMetadata, ScoredRecord, StoredRecord};
use crate::domain::error::DomainError;
use crate::domain::ports::article_store::ArticleStore;
use crate::domain::ports::embedding_port::{EmbeddingProvider, InputType};
use crate::infrastructure::sqlite::migrations::run_migrations;
use async_trait::async_trait;
use chrono::DateTime;
use rusqlite::{params, Connection};
use std::sync::{Arc, Mutex};

/// SQLite-backed article store with brute-force nearest-neighbor search.
///
/// Vectors are L2-normalized before they are written, and the distance
/// reported by [`ArticleStore::query`] is the squared Euclidean distance
/// between unit vectors: 0 for identical direction, 2 for orthogonal, 4 for
/// opposite. Text that embeds to a zero vector is rejected on write and on
/// query, and rows holding empty or zero vectors are never returned.
pub struct SqliteArticleStore {
    conn: Mutex<Connection>,
    embedder: Arc<dyn EmbeddingProvider>,
}

impl SqliteArticleStore {
    pub fn open(db_path: &str, embedder: Arc<dyn EmbeddingProvider>) -> Result<Self, DomainError> {
        let conn = Connection::open(db_path)?;
        if db_path != ":memory:" {
            conn.pragma_update(None, "journal_mode", "WAL")?;
        }
        run_migrations(&conn).map_err(DomainError::Database)?;
        Ok(Self {
            conn: Mutex::new(conn),
            embedder,
        })
    }

    pub fn count(&self) -> Result<usize, DomainError> {
        let conn = self.lock()?;
        let n: i64 = conn.query_row("SELECT COUNT(*) FROM articles", [], |r| r.get(0))?;
        Ok(n as usize)
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Connection>, DomainError> {
        self.conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))
    }

    /// Unit-length copy of `v`, or `None` for an empty or zero vector.
    fn normalize(v: &[f32]) -> Option<Vec<f32>> {
        let norm = v.iter().map(|x| (*x as f64) * (*x as f64)).sum::<f64>().sqrt();
        if norm == 0.0 || !norm.is_finite() {
            return None;
        }
        Some(v.iter().map(|x| (*x as f64 / norm) as f32).collect())
    }

    fn unit_vector(v: &[f32]) -> Result<Vec<f32>, DomainError> {
        Self::normalize(v).ok_or_else(|| {
            DomainError::InvalidInput("text has no indexable content".into())
        })
    }

    fn squared_distance(a: &[f32], b: &[f32]) -> Option<f64> {
        if a.len() != b.len() || a.is_empty() {
            return None;
        }
        Some(
            a.iter()
                .zip(b.iter())
                .map(|(x, y)| {
                    let d = *x as f64 - *y as f64;
                    d * d
                })
                .sum(),
        )
    }

    fn serialize_vector(v: &[f32]) -> Vec<u8> {
        v.iter().flat_map(|f| f.to_le_bytes()).collect()
    }

    fn deserialize_vector(bytes: &[u8]) -> Vec<f32> {
        bytes.chunks_exact(4)
            .map(|chunk| f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
            .collect()
    }

    async fn embed(&self, texts: &[String], input_type: InputType) -> Result<Vec<Vec<f32>>, DomainError> {
        let vectors = self
            .embedder
            .embed(texts, input_type)
            .await
            .map_err(DomainError::Embedding)?;
        if vectors.len() != texts.len() {
            return Err(DomainError::Embedding(format!(
                "expected {} vectors, got {}",
                texts.len(),
                vectors.len()
            )));
        }
        Ok(vectors)
    }
}

#[async_trait]
impl ArticleStore for SqliteArticleStore {
    async fn add(&self, texts: &[String], metadata: &[RecordMetadata]) -> Result<(), DomainError> {
        if texts.len() != metadata.len() {
            return Err(DomainError::InvalidInput(format!(
                "{} texts but {} metadata entries",
                texts.len(),
                metadata.len()
            )));
        }
        let vectors = self
            .embed(texts, InputType::Document)
            .await?
            .iter()
            .map(|v| Self::unit_vector(v))
            .collect::<Result<Vec<_>, _>>()?;

        let conn = self.lock()?;
        for ((text, meta), vector) in texts.iter().zip(metadata).zip(vectors) {
            let record = StoredRecord::new(text.clone(), meta.clone());
            let blob = Self::serialize_vector(&vector);
            conn.execute(
                "INSERT INTO articles (id, content, companies, sectors, vector, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    record.id,
                    record.content,
                    record.metadata.companies,
                    record.metadata.sectors,
                    blob,
                    record.created_at.to_rfc3339(),
                ],
            )?;
        }
        Ok(())
    }

    async fn query(&self, text: &str, k: usize) -> Result<Vec<ScoredRecord>, DomainError> {
        let vectors = self.embed(&[text.to_string()], InputType::Query).await?;
        let query = Self::unit_vector(&vectors[0])?;

        let conn = self.lock()?;
        let mut stmt = conn.prepare(
            "SELECT id, content, companies, sectors, vector, created_at FROM articles",
        )?;
        let rows = stmt.query_map([], |row| {
            let blob: Vec<u8> = row.get(4)?;
            let created: String = row.get(5)?;
            Ok((
                StoredRecord {
                    id: row.get(0)?,
                    content: row.get(1)?,
                    metadata: RecordMetadata {
                        companies: row.get(2)?,
                        sectors: row.get(3)?,
                    },
                    created_at: DateTime::parse_from_rfc3339(&created)
                        .map(|d| d.to_utc())
                        .unwrap_or_default(),
                },
                blob,
            ))
        })?;

        let mut results: Vec<ScoredRecord> = Vec::new();
        for row in rows {
            let (record, blob) = row?;
            let stored = Self::deserialize_vector(&blob);
            if stored.iter().all(|x| *x == 0.0) {
                continue;
            }
            if let Some(distance) = Self::squared_distance(&query, &stored) {
                results.push(ScoredRecord { record, distance });
            }
        }

        results.sort_by(|a, b| a.distance.partial_cmp(&b.distance).unwrap_or(std::cmp::Ordering::Equal));
        results.truncate(k);
        Ok(results)
    }

    fn close(&self) -> Result<(), DomainError> {
        let conn = self.lock()?;
        conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        tracing::info!("article store closed");
        Ok(())
    }
}
