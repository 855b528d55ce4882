//! Storage layer: the `TextStore` seam and its implementations.
//!
//! Handlers talk to a trait, not to the pool directly, so they can run
//! against a substitute handle (`MemoryStore`) in tests while
//! production wires in the sqlx pool.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::MySqlPool;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::error::InitError;

/// A single stored text entry.
///
/// The service only ever writes these; reads exist for tests.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct TextRecord {
    pub id: i64,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("store unavailable")]
    Unavailable,
}

/// The shared handle request handlers issue inserts through.
#[async_trait]
pub trait TextStore: Send + Sync {
    /// Persist one record with the given content. Always inserts a new
    /// row, even for repeated identical content.
    async fn insert_text(&self, content: &str) -> Result<(), StoreError>;
}

const CREATE_TEXTS_TABLE: &str = "\
CREATE TABLE IF NOT EXISTS texts (
    id INT AUTO_INCREMENT PRIMARY KEY,
    content TEXT NOT NULL,
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)";

/// MySQL-backed store.
#[derive(Clone)]
pub struct MySqlStore {
    pool: MySqlPool,
}

impl MySqlStore {
    /// Open a connection pool against `url`.
    pub async fn connect(url: &str) -> Result<Self, InitError> {
        let pool = MySqlPool::connect(url).await.map_err(InitError::Connect)?;
        debug!("database connection established");
        Ok(Self { pool })
    }

    /// Create the `texts` table if it does not exist yet.
    ///
    /// Safe to run on every start; an existing table is left untouched.
    pub async fn ensure_schema(&self) -> Result<(), InitError> {
        sqlx::query(CREATE_TEXTS_TABLE)
            .execute(&self.pool)
            .await
            .map_err(InitError::Schema)?;
        info!("texts table ready");
        Ok(())
    }
}

#[async_trait]
impl TextStore for MySqlStore {
    async fn insert_text(&self, content: &str) -> Result<(), StoreError> {
        sqlx::query("INSERT INTO texts (content) VALUES (?)")
            .bind(content)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

/// In-memory store, the substitute handle for tests.
///
/// Mimics the table's behavior: incrementing ids and an insertion
/// timestamp per record.
#[derive(Default)]
pub struct MemoryStore {
    records: Mutex<Vec<TextRecord>>,
    severed: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent insert fail, as if the database connection
    /// died after startup.
    pub fn sever(&self) {
        self.severed.store(true, Ordering::SeqCst);
    }

    pub async fn records(&self) -> Vec<TextRecord> {
        self.records.lock().await.clone()
    }
}

#[async_trait]
impl TextStore for MemoryStore {
    async fn insert_text(&self, content: &str) -> Result<(), StoreError> {
        if self.severed.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable);
        }
        let mut records = self.records.lock().await;
        let id = records.len() as i64 + 1;
        records.push(TextRecord {
            id,
            content: content.to_owned(),
            created_at: Utc::now(),
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn memory_store_assigns_incrementing_ids() {
        let store = MemoryStore::new();
        store.insert_text("first").await.unwrap();
        store.insert_text("second").await.unwrap();

        let records = store.records().await;
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, 1);
        assert_eq!(records[0].content, "first");
        assert_eq!(records[1].id, 2);
        assert_eq!(records[1].content, "second");
    }

    #[tokio::test]
    async fn severed_memory_store_rejects_inserts() {
        let store = MemoryStore::new();
        store.sever();

        let result = store.insert_text("lost").await;
        assert!(matches!(result, Err(StoreError::Unavailable)));
        assert!(store.records().await.is_empty());
    }
}
