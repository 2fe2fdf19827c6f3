//! Error types for configuration and catalog loading.
//!
//! The slot rows themselves never fail; everything here comes from
//! reading files off disk at startup (or on F5 reload).

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid RON: {0}")]
    Ron(#[from] ron::error::SpannedError),

    #[error("Failed to serialize RON: {0}")]
    RonWrite(#[from] ron::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Option catalog has no entries")]
    EmptyCatalog,

    #[error("Catalog entry {index} has a blank {field}")]
    BlankEntry {
        index: usize,
        field: &'static str,
    },
}

impl ConfigError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
