//! Error types for the tree and the word-count driver.

use std::path::PathBuf;
use thiserror::Error;

/// Errors reported by [`AvlTree`](crate::AvlTree) operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// The requested operation is not implemented by this tree.
    #[error("unsupported operation: {operation}")]
    Unsupported { operation: &'static str },
}

/// Errors raised while counting words from an input source.
#[derive(Error, Debug)]
pub enum VocabError {
    /// The input file does not exist.
    #[error("could not find file {}", path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Any other I/O failure while opening or reading a source.
    #[error("error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl VocabError {
    /// Classifies an I/O error raised for `path`.
    pub(crate) fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            VocabError::NotFound { path, source }
        } else {
            VocabError::Io { path, source }
        }
    }

    /// The source the error was raised for.
    pub fn path(&self) -> &std::path::Path {
        match self {
            VocabError::NotFound { path, .. } | VocabError::Io { path, .. } => path,
        }
    }
}
