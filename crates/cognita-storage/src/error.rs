use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("object not found: {key}")]
    NotFound { key: String },

    #[error("invalid key: {0:?}")]
    InvalidKey(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("read error for {key}: {source}")]
    GetObject {
        key: String,
        source: std::io::Error,
    },

    #[error("write error for {key}: {source}")]
    PutObject {
        key: String,
        source: std::io::Error,
    },

    #[error("delete error for {key}: {source}")]
    DeleteObject {
        key: String,
        source: std::io::Error,
    },

    #[error("list error under {prefix}: {source}")]
    ListObjects {
        prefix: String,
        source: std::io::Error,
    },

    #[error("cannot open data directory {path}: {source}")]
    Open {
        path: String,
        source: std::io::Error,
    },

    #[error("backup format {found} is newer than supported ({supported})")]
    UnsupportedBackup { found: u32, supported: u32 },
}
