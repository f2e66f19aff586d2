use std::io;
use std::path::PathBuf;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::application::ports::{StoreError, TabStore};
use crate::domain::TabRecord;

/// File-backed store keeping the whole collection in one JSON document.
/// `persist` writes to a sibling temp file and renames it over the target, so
/// a commit is either fully visible on reload or not at all.
pub struct JsonFileTabStore {
    path: PathBuf,
    inner: Mutex<Inner>,
}

struct Inner {
    records: Vec<TabRecord>,
    persisted: usize,
}

#[derive(Serialize, Deserialize)]
struct TabDocument {
    saved_at: DateTime<Utc>,
    tabs: Vec<TabRecord>,
}

impl JsonFileTabStore {
    /// Opens the store, loading any previously persisted document.
    pub async fn open(path: PathBuf) -> Result<Self, StoreError> {
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let records = match tokio::fs::read(&path).await {
            Ok(bytes) => {
                let document: TabDocument = serde_json::from_slice(&bytes)
                    .map_err(|e| StoreError::Serialization(e.to_string()))?;
                document.tabs
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(StoreError::Io(e)),
        };

        let persisted = records.len();
        Ok(Self {
            path,
            inner: Mutex::new(Inner { records, persisted }),
        })
    }
}

#[async_trait]
impl TabStore for JsonFileTabStore {
    async fn current_count(&self) -> u64 {
        self.inner.lock().await.persisted as u64
    }

    async fn append(&self, batch: &[TabRecord]) {
        self.inner.lock().await.records.extend_from_slice(batch);
    }

    async fn persist(&self) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().await;

        let document = TabDocument {
            saved_at: Utc::now(),
            tabs: inner.records.clone(),
        };
        let bytes = serde_json::to_vec_pretty(&document)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;

        let tmp_path = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp_path, &bytes).await?;
        tokio::fs::rename(&tmp_path, &self.path).await?;

        inner.persisted = inner.records.len();
        Ok(())
    }
}
