use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::application::ports::{StoreError, TabStore};
use crate::domain::TabRecord;

/// Volatile store for tests and scaffold wiring. `persist` moves the
/// durability watermark to the end of the working set; `current_count` only
/// reports records behind the watermark.
pub struct InMemoryTabStore {
    inner: Mutex<Inner>,
}

struct Inner {
    records: Vec<TabRecord>,
    persisted: usize,
}

impl InMemoryTabStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                records: Vec::new(),
                persisted: 0,
            }),
        }
    }

    /// Seeds the store with already-persisted records.
    pub async fn preload(&self, records: Vec<TabRecord>) {
        let mut inner = self.inner.lock().await;
        inner.persisted = records.len();
        inner.records = records;
    }

    pub async fn persisted_records(&self) -> Vec<TabRecord> {
        let inner = self.inner.lock().await;
        inner.records[..inner.persisted].to_vec()
    }
}

impl Default for InMemoryTabStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TabStore for InMemoryTabStore {
    async fn current_count(&self) -> u64 {
        self.inner.lock().await.persisted as u64
    }

    async fn append(&self, batch: &[TabRecord]) {
        self.inner.lock().await.records.extend_from_slice(batch);
    }

    async fn persist(&self) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().await;
        inner.persisted = inner.records.len();
        Ok(())
    }
}
