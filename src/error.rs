//! Error types for context-splitter.
//!
//! Splitting itself never fails. These errors come from the edges: parsing
//! configuration, reading sources, and writing chunks out.

use std::path::PathBuf;

/// Errors raised around the splitter.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Unrecognized split mode string.
    #[error("invalid split mode: {0:?} (expected \"token\" or \"char\")")]
    InvalidMode(String),

    /// No preset with the given key.
    #[error("unknown preset: {0:?}")]
    UnknownPreset(String),

    /// Lookback fraction outside `[0, 1]`.
    #[error("invalid lookback fraction: {0} (must be within 0..=1)")]
    InvalidLookback(f64),

    /// Pasted text was empty or whitespace only.
    #[error("input is empty")]
    EmptyInput,

    /// Bulk export was asked to write zero chunks.
    #[error("no chunks to export")]
    NothingToExport,

    /// A chunk index that does not exist in the current list.
    #[error("chunk {index} out of range (have {count})")]
    IndexOutOfRange {
        /// The requested 1-based index.
        index: usize,
        /// How many chunks exist.
        count: usize,
    },

    /// Filesystem failure.
    #[error("i/o error on {}: {source}", .path.display())]
    Io {
        /// The path being read or written.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Malformed configuration file.
    #[error("invalid config file {}: {source}", .path.display())]
    Config {
        /// The config file path.
        path: PathBuf,
        /// Underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// Archive writer failure.
    #[cfg(feature = "export")]
    #[error("archive error: {0}")]
    Archive(#[from] zip::result::ZipError),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for context-splitter operations.
pub type Result<T> = std::result::Result<T, Error>;
