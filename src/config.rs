//! Split configuration.
//!
//! ## Units
//!
//! A chunk size is given either in characters or in estimated tokens.
//! Token sizes are converted to characters up front using the same
//! 4 chars/token ratio as [`estimate_tokens`](crate::estimate_tokens), so the
//! splitter only ever works with a character limit:
//!
//! ```text
//! mode = char,  size = 10_000  ->  limit = 10_000 chars
//! mode = token, size = 100     ->  limit = 400 chars
//! ```
//!
//! A limit of zero is legal and produces no chunks.
//!
//! ## Overlap
//!
//! `overlap` is accepted and stored but not applied: consecutive chunks
//! never share text. It is kept so configurations stay forward-compatible.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::estimate::tokens_to_chars;
use crate::preset::Preset;
use crate::{Error, Result};

/// Unit in which [`SplitConfig::size`] is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SplitMode {
    /// Estimated tokens (4 chars each).
    #[default]
    Token,
    /// Characters.
    Char,
}

impl SplitMode {
    /// Human-facing unit name.
    #[must_use]
    pub const fn unit(self) -> &'static str {
        match self {
            Self::Token => "token",
            Self::Char => "char",
        }
    }
}

impl fmt::Display for SplitMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.unit())
    }
}

impl FromStr for SplitMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "token" | "tokens" => Ok(Self::Token),
            "char" | "chars" | "character" | "characters" => Ok(Self::Char),
            _ => Err(Error::InvalidMode(s.to_string())),
        }
    }
}

/// Configuration for one split operation.
///
/// # Examples
///
/// ```rust
/// use context_splitter::{SplitConfig, SplitMode};
///
/// let cfg = SplitConfig::tokens(100);
/// assert_eq!(cfg.mode, SplitMode::Token);
/// assert_eq!(cfg.limit(), 400);
///
/// let cfg = SplitConfig::chars(2);
/// assert_eq!(cfg.limit(), 2);
///
/// // Defaults to a 128k-token budget
/// assert_eq!(SplitConfig::default().limit(), 512_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitConfig {
    /// Unit of `size`.
    pub mode: SplitMode,
    /// Maximum units per chunk.
    pub size: usize,
    /// Reserved. Not applied to chunk boundaries.
    pub overlap: usize,
}

impl SplitConfig {
    /// Initial size used when nothing else is configured.
    pub const DEFAULT_SIZE: usize = 128_000;

    /// A config measured in characters.
    #[must_use]
    pub const fn chars(size: usize) -> Self {
        Self {
            mode: SplitMode::Char,
            size,
            overlap: 0,
        }
    }

    /// A config measured in estimated tokens.
    #[must_use]
    pub const fn tokens(size: usize) -> Self {
        Self {
            mode: SplitMode::Token,
            size,
            overlap: 0,
        }
    }

    /// Replace the unit.
    #[must_use]
    pub const fn with_mode(self, mode: SplitMode) -> Self {
        Self { mode, ..self }
    }

    /// Replace the size.
    #[must_use]
    pub const fn with_size(self, size: usize) -> Self {
        Self { size, ..self }
    }

    /// Replace the reserved overlap value.
    #[must_use]
    pub const fn with_overlap(self, overlap: usize) -> Self {
        Self { overlap, ..self }
    }

    /// Switch to a preset's budget. Presets are always token budgets.
    #[must_use]
    pub const fn apply_preset(self, preset: &Preset) -> Self {
        Self {
            mode: SplitMode::Token,
            size: preset.size,
            ..self
        }
    }

    /// Effective maximum characters per chunk.
    #[must_use]
    pub const fn limit(&self) -> usize {
        match self.mode {
            SplitMode::Token => tokens_to_chars(self.size),
            SplitMode::Char => self.size,
        }
    }

    /// Load a config from a JSON file. Missing fields take their defaults.
    ///
    /// ```json
    /// { "mode": "char", "size": 10000 }
    /// ```
    ///
    /// # Errors
    ///
    /// [`Error::Io`] if the file cannot be read, [`Error::Config`] if it is
    /// not valid JSON for this type.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        serde_json::from_str(&raw).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self::tokens(Self::DEFAULT_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_by_mode() {
        assert_eq!(SplitConfig::chars(10_000).limit(), 10_000);
        assert_eq!(SplitConfig::tokens(100).limit(), 400);
        assert_eq!(SplitConfig::tokens(0).limit(), 0);
        assert_eq!(SplitConfig::tokens(usize::MAX).limit(), usize::MAX);
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!("token".parse::<SplitMode>().unwrap(), SplitMode::Token);
        assert_eq!("Chars".parse::<SplitMode>().unwrap(), SplitMode::Char);
        assert!(matches!(
            "words".parse::<SplitMode>(),
            Err(Error::InvalidMode(_))
        ));
    }

    #[test]
    fn test_builders_keep_other_fields() {
        let cfg = SplitConfig::chars(50).with_overlap(5).with_mode(SplitMode::Token);
        assert_eq!(cfg.size, 50);
        assert_eq!(cfg.overlap, 5);
        assert_eq!(cfg.limit(), 200);
    }

    #[test]
    fn test_apply_preset_forces_token_mode() {
        let preset = Preset::find("standard-8k").unwrap();
        let cfg = SplitConfig::chars(10).with_overlap(3).apply_preset(preset);
        assert_eq!(cfg.mode, SplitMode::Token);
        assert_eq!(cfg.size, 7_000);
        assert_eq!(cfg.overlap, 3);
    }

    #[test]
    fn test_json_partial_fields() {
        let cfg: SplitConfig = serde_json::from_str(r#"{"mode":"char","size":10000}"#).unwrap();
        assert_eq!(cfg, SplitConfig::chars(10_000));

        let cfg: SplitConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, SplitConfig::default());
    }

    #[test]
    fn test_json_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("split.json");

        assert!(matches!(
            SplitConfig::from_json_file(&path),
            Err(Error::Io { .. })
        ));

        std::fs::write(&path, "{ mode: nope").unwrap();
        assert!(matches!(
            SplitConfig::from_json_file(&path),
            Err(Error::Config { .. })
        ));

        std::fs::write(&path, r#"{"size": 99}"#).unwrap();
        let cfg = SplitConfig::from_json_file(&path).unwrap();
        assert_eq!(cfg.size, 99);
        assert_eq!(cfg.mode, SplitMode::Token);
    }
}
