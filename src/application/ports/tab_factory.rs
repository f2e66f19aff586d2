use crate::domain::TabRecord;

/// Derives a record from its index. Deterministic and total: the same index
/// always yields the same record and there is no error path. Stateless, so a
/// future parallel batch producer may call it concurrently for distinct
/// indices.
pub trait TabFactory: Send + Sync {
    fn produce(&self, index: u64) -> TabRecord;
}
