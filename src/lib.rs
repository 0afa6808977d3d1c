//! # context-splitter
//!
//! Split long documents into pieces that fit a language model's context
//! window.
//!
//! ## The Problem
//!
//! Models accept a bounded amount of input. A 2 MB CSV export or a long
//! transcript has to be cut into parts, each under the budget, and the parts
//! have to add back up to the original: no dropped rows, no duplicated
//! lines, no reordering.
//!
//! Cutting every N characters satisfies the bound but slices lines in half,
//! which is painful for CSV rows and code. Cutting only at newlines keeps
//! lines whole but can produce wildly uneven parts when lines are long.
//!
//! ## The Approach
//!
//! Take a window of `limit` characters. If a newline falls in the last 10%
//! of the window, cut just after it; otherwise cut exactly at the limit.
//!
//! ```text
//! limit = 10_000 chars, lookback = 1_000
//!
//! |------------------ 10_000 ------------------|
//!                                   |- 1_000 --|
//!                                        \n     <- cut here, newline kept
//! ```
//!
//! Chunks never overlap and never skip text. Concatenating them in index
//! order reproduces the input byte for byte.
//!
//! ## Units
//!
//! Sizes are given in characters or in estimated tokens. There is no
//! tokenizer: a token is taken as 4 characters, so a budget of 100 tokens
//! becomes a 400-character window.
//!
//! | Mode | size | limit (chars) |
//! |------|------|---------------|
//! | `char` | 10_000 | 10_000 |
//! | `token` | 100 | 400 |
//! | `token` | 128_000 | 512_000 |
//!
//! Curated [`PRESETS`] give token budgets for common models with a
//! 1k-2k token reserve already subtracted.
//!
//! ## Quick Start
//!
//! ```rust
//! use context_splitter::{estimate_tokens, split_content, SplitConfig};
//!
//! let text = "row 1\nrow 2\nrow 3\n".repeat(100);
//! let chunks = split_content(&text, &SplitConfig::chars(500));
//!
//! for chunk in &chunks {
//!     assert!(chunk.char_count() <= 501);
//!     assert_eq!(chunk.estimated_tokens(), estimate_tokens(chunk.content()));
//! }
//!
//! let joined: String = chunks.iter().map(|c| c.content()).collect();
//! assert_eq!(joined, text);
//! ```
//!
//! ## Beyond the Core
//!
//! - [`Source`] reads files, readers and pasted text.
//! - [`Session`] keeps a source and config and re-splits on every change,
//!   with generation stamps for running splits on another thread.
//! - [`naming`] derives `<base>_part_<n>.<ext>` output names.
//! - `export` (feature `export`, on by default) writes parts or a zip.

mod boundary;
mod chunk;
mod config;
mod error;
mod estimate;
pub mod naming;
mod preset;
mod session;
mod source;
mod splitter;

#[cfg(feature = "export")]
pub mod export;

pub use boundary::{BreakPoint, NewlineLookback};
pub use chunk::{group_thousands, Chunk, ChunkCard, ChunkId, DEFAULT_PREVIEW_LEN};
pub use config::{SplitConfig, SplitMode};
pub use error::{Error, Result};
pub use estimate::{estimate_tokens, estimate_tokens_for_len, tokens_to_chars, TOKEN_TO_CHAR_RATIO};
pub use preset::{Preset, PRESETS};
pub use session::{Change, Session, SplitOutcome, SplitRequest, Summary};
pub use source::{Source, PASTED_NAME};
pub use splitter::Splitter;

/// Split `content` with the default newline lookback.
///
/// Shorthand for `Splitter::new(*config).split(content)`. Returns an empty
/// list when `content` is empty or the configured limit is zero.
///
/// ```rust
/// use context_splitter::{split_content, SplitConfig};
///
/// assert!(split_content("", &SplitConfig::chars(10)).is_empty());
/// assert!(split_content("abc", &SplitConfig::chars(0)).is_empty());
/// assert_eq!(split_content("abc", &SplitConfig::chars(10)).len(), 1);
/// ```
#[must_use]
pub fn split_content(content: &str, config: &SplitConfig) -> Vec<Chunk> {
    Splitter::new(*config).split(content)
}
