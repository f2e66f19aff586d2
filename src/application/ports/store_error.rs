use std::io;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("serialization failed: {0}")]
    Serialization(String),
    #[error("commit failed: {0}")]
    CommitFailed(String),
}
