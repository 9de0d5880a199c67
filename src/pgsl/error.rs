//! Error types for the pgsl front end.
//!
//! Lexing itself cannot fail: every character is a word, whitespace, comment or
//! operator. Only reading the source can.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PgslError {
    /// The source could not be opened or read
    #[error("unable to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The source is not valid UTF-8
    #[error("{} is not valid UTF-8", path.display())]
    InvalidEncoding { path: PathBuf },

    /// The processor was asked for an output format it does not have
    #[error("unknown output format '{0}'")]
    UnknownFormat(String),

    /// Tokens could not be rendered as JSON
    #[error("unable to serialize tokens: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl PgslError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        PgslError::Io {
            path: path.into(),
            source,
        }
    }

    /// The kind of the underlying I/O failure, if this is one
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            PgslError::Io { source, .. } => Some(source.kind()),
            PgslError::InvalidEncoding { .. } => Some(io::ErrorKind::InvalidData),
            PgslError::UnknownFormat(_) | PgslError::Serialize(_) => None,
        }
    }
}
