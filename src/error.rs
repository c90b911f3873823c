//! Library error types.

use std::path::PathBuf;
use thiserror::Error;

use crate::render::IndexFormat;

/// Errors raised while loading term trees or writing index files.
///
/// Unresolved see references are not errors; they are reported alongside
/// the rendered output.
#[derive(Error, Debug)]
pub enum IndexError {
    #[error("failed to render {format} index to {}", path.display())]
    Render {
        format: IndexFormat,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to render {format} index to output sink")]
    Sink {
        format: IndexFormat,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid term tree in {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl IndexError {
    /// Create an I/O error with context.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }
}

/// Result type for library operations.
pub type IndexResult<T> = Result<T, IndexError>;
