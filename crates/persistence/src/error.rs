//! Persistence error type.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("Storage error for key {key}: {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error for key {key}: {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

impl PersistenceError {
    pub(crate) fn io(key: &str, source: std::io::Error) -> Self {
        PersistenceError::Io {
            key: key.to_string(),
            source,
        }
    }
}
