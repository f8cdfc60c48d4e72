use thiserror::Error;

pub type Result<T> = std::result::Result<T, TavlaError>;

/// Errors surfaced by tavla-core.
///
/// Only persistence can fail. Unknown column or task ids are not errors;
/// board operations resolve them as silent no-ops.
#[derive(Debug, Error)]
pub enum TavlaError {
    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}
