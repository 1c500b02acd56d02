//! Error types for the mgq CLI.

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Magnet(#[from] magneturi::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Logging setup failed: {0}")]
    Logging(#[from] tracing::subscriber::SetGlobalDefaultError),

    #[error("missing required prefixes: {}", .0.join(", "))]
    MissingPrefixes(Vec<String>),
}

pub type Result<T> = std::result::Result<T, Error>;
