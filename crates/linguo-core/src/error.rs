use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum PatchError {
    #[error("Failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Missing section: {path}")]
    MissingSection { path: String },

    #[error("Section is not an object: {path}")]
    NotAnObject { path: String },

    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
