//! Input sources.
//!
//! A [`Source`] is the text to split plus the name that output files are
//! derived from. It comes from a file, a reader, or pasted text.

use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use crate::naming::DEFAULT_SOURCE_NAME;
use crate::{Error, Result};

/// Name given to pasted text.
pub const PASTED_NAME: &str = "pasted-content.txt";

const BOM: char = '\u{feff}';

/// Text plus the file name it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    content: Arc<str>,
    file_name: String,
}

impl Source {
    /// Wrap already-loaded text.
    #[must_use]
    pub fn new(content: impl Into<Arc<str>>, file_name: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            file_name: file_name.into(),
        }
    }

    /// Read a file as text.
    ///
    /// Invalid UTF-8 is replaced with U+FFFD and a leading byte-order mark is
    /// dropped. The file name is the last path component.
    ///
    /// # Errors
    ///
    /// [`Error::Io`] if the file cannot be read.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| Error::io(path, e))?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| DEFAULT_SOURCE_NAME.to_string());

        debug!(path = %path.display(), bytes = bytes.len(), "read source");
        Ok(Self::new(decode(&bytes), file_name))
    }

    /// Read everything from `reader` (e.g. stdin).
    ///
    /// # Errors
    ///
    /// [`Error::Io`] on read failure, [`Error::EmptyInput`] if the input is
    /// blank.
    pub fn from_reader(mut reader: impl Read, file_name: impl Into<String>) -> Result<Self> {
        let file_name = file_name.into();
        let mut bytes = Vec::new();
        reader
            .read_to_end(&mut bytes)
            .map_err(|e| Error::io(&file_name, e))?;
        let text = decode(&bytes);
        if text.trim().is_empty() {
            return Err(Error::EmptyInput);
        }
        Ok(Self::new(text, file_name))
    }

    /// Pasted text, named [`PASTED_NAME`].
    ///
    /// # Errors
    ///
    /// [`Error::EmptyInput`] if the text is blank.
    pub fn from_pasted(text: &str) -> Result<Self> {
        if text.trim().is_empty() {
            return Err(Error::EmptyInput);
        }
        Ok(Self::new(text, PASTED_NAME))
    }

    /// The text.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Shared handle to the text, cheap to send to another thread.
    #[must_use]
    pub fn shared_content(&self) -> Arc<str> {
        Arc::clone(&self.content)
    }

    /// The name output files are derived from.
    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }
}

fn decode(bytes: &[u8]) -> String {
    let decoded = String::from_utf8_lossy(bytes);
    let text: &str = &decoded;
    text.strip_prefix(BOM).unwrap_or(text).to_string()
}
