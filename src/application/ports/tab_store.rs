use async_trait::async_trait;

use crate::domain::TabRecord;

use super::StoreError;

/// Authoritative collection of generated records. The controller treats
/// `append` followed by `persist` as one logical commit per batch and only
/// advances published progress after `persist` succeeds.
#[async_trait]
pub trait TabStore: Send + Sync {
    /// Number of durably persisted records. Appended-but-unpersisted records
    /// are not counted.
    async fn current_count(&self) -> u64;

    /// Extends the in-memory working set. No durability on its own.
    async fn append(&self, batch: &[TabRecord]);

    /// Durably commits the current working set.
    async fn persist(&self) -> Result<(), StoreError>;
}
