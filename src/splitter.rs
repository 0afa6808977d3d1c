//! Limit-bounded splitting with newline preference.
//!
//! ## How It Works
//!
//! ```text
//! limit = 30 chars, lookback = 3
//!
//! Document: "Pack my box with five dozens\nliquor jugs and a quick brown fox jumps over"
//!
//! Chunk 1: "Pack my box with five dozens\n"  [0..29]   <- '\n' at 28 is in the lookback
//! Chunk 2: "liquor jugs and a quick brown "  [29..59]  <- no newline, hard cut
//! Chunk 3: "fox jumps over"                  [59..73]  <- final chunk takes the rest
//! ```
//!
//! Each window starts exactly where the previous one ended. Nothing is
//! dropped or repeated, so joining the chunks gives back the document.
//!
//! ## Units
//!
//! Windows are measured in characters (Unicode scalar values), never bytes,
//! and cuts always fall on char boundaries. Token budgets are converted to
//! characters by [`SplitConfig::limit`] before the loop starts.

use std::sync::Arc;

use tracing::{debug, trace};

use crate::boundary::{BreakPoint, NewlineLookback};
use crate::{Chunk, SplitConfig};

/// Splits text into chunks of at most `limit` characters.
///
/// ## Example
///
/// ```rust
/// use context_splitter::{SplitConfig, Splitter};
///
/// let splitter = Splitter::new(SplitConfig::chars(2));
/// let chunks = splitter.split("abcde");
///
/// let parts: Vec<&str> = chunks.iter().map(|c| c.content()).collect();
/// assert_eq!(parts, ["ab", "cd", "e"]);
/// assert_eq!(chunks[2].char_count(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Splitter {
    config: SplitConfig,
    break_point: Arc<dyn BreakPoint>,
}

impl Splitter {
    /// A splitter using the default 10% newline lookback.
    #[must_use]
    pub fn new(config: SplitConfig) -> Self {
        Self::with_break_point(config, NewlineLookback::default())
    }

    /// A splitter with a custom break-point strategy.
    #[must_use]
    pub fn with_break_point(config: SplitConfig, break_point: impl BreakPoint + 'static) -> Self {
        Self {
            config,
            break_point: Arc::new(break_point),
        }
    }

    /// Same break-point strategy, different configuration.
    #[must_use]
    pub fn with_config(&self, config: SplitConfig) -> Self {
        Self {
            config,
            break_point: Arc::clone(&self.break_point),
        }
    }

    /// The configuration in use.
    #[must_use]
    pub fn config(&self) -> &SplitConfig {
        &self.config
    }

    /// Effective character limit per chunk.
    #[must_use]
    pub fn limit(&self) -> usize {
        self.config.limit()
    }

    /// Split `text` into chunks.
    ///
    /// Returns an empty list for empty text or a zero limit.
    #[must_use]
    pub fn split(&self, text: &str) -> Vec<Chunk> {
        let limit = self.limit();
        if limit == 0 {
            debug!(mode = %self.config.mode, size = self.config.size, "zero limit, no chunks");
            return vec![];
        }
        if self.config.overlap > 0 {
            debug!(overlap = self.config.overlap, "overlap is reserved and not applied");
        }

        let mut chunks = Vec::with_capacity(self.estimate_chunks(text));
        let mut start = 0;
        let mut index = 1;

        while start < text.len() {
            let end = match text[start..].char_indices().nth(limit) {
                // Not the last chunk: `tentative` is the char `limit` places on
                Some((offset, _)) => self.cut(text, start, start + offset, limit),
                None => text.len(),
            };

            chunks.push(Chunk::new(text, start, end, index));
            start = end;
            index += 1;
        }

        debug!(limit, bytes = text.len(), chunks = chunks.len(), "split complete");
        chunks
    }

    /// Capacity hint for the chunk list: char count over the limit.
    ///
    /// Not a bound. Newline cuts shorten chunks, so a split may produce more.
    #[must_use]
    pub fn estimate_chunks(&self, text: &str) -> usize {
        match self.limit() {
            0 => 0,
            limit => text.chars().count().div_ceil(limit),
        }
    }

    fn cut(&self, text: &str, start: usize, tentative: usize, limit: usize) -> usize {
        match self.break_point.adjust(text, start, tentative, limit) {
            Some(end) if end > start && end <= text.len() && text.is_char_boundary(end) => {
                trace!(start, tentative, end, "moved cut to break point");
                end
            }
            _ => {
                trace!(start, end = tentative, "hard cut");
                tentative
            }
        }
    }
}
