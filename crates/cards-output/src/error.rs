use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while writing the card document.
#[derive(Debug, Error)]
pub enum OutputError {
    /// A card value has no JSON representation.
    #[error("failed to serialize cards: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The finished temporary file could not replace the target.
    #[error("failed to replace {path}: {source}")]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl OutputError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, OutputError>;
