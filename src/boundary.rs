//! Break-point selection.
//!
//! The splitter first takes a full window of `limit` characters. Before
//! cutting there, it asks a [`BreakPoint`] whether a nicer cut exists nearby.
//!
//! ## Newline Lookback
//!
//! The default strategy looks for a newline in the last 10% of the window:
//!
//! ```text
//! limit = 20, lookback = 2
//!
//!              window (20 chars)
//! |-----------------------------------|
//! "The quick brown fox\njumps over..."
//!                    ^^
//!                    last 2 chars + the char at the cut
//!
//! '\n' at offset 19 > 0 + (20 - 2)  ->  cut after it, at 20
//! ```
//!
//! The newline stays with the earlier chunk, so the next chunk begins on a
//! fresh line. A newline further back is ignored and the window is cut hard
//! at `limit`. Searching only a bounded tail keeps chunk sizes close to the
//! limit even for text with few line breaks.
//!
//! The char *at* the tentative cut is also a candidate. When it is a newline
//! the chunk grows to `limit + 1` characters.

use std::fmt;

use crate::{Error, Result};

/// Chooses where a non-final chunk ends.
///
/// Implementations receive byte offsets. `end` is the tentative cut, always
/// a char boundary strictly inside `text`, and `limit` is the window size in
/// characters. Returning `None` keeps the hard cut. A returned offset is
/// ignored unless it lies in `start + 1..=text.len()` on a char boundary.
pub trait BreakPoint: Send + Sync + fmt::Debug {
    /// Propose a replacement for the cut at `end`.
    fn adjust(&self, text: &str, start: usize, end: usize, limit: usize) -> Option<usize>;
}

/// Prefer cutting just after a newline near the end of the window.
///
/// ```rust
/// use context_splitter::{BreakPoint, NewlineLookback};
///
/// let text = format!("{}\n{}", "a".repeat(19), "b".repeat(10));
/// let lookback = NewlineLookback::default();
///
/// // 20-char window, 2-char lookback: the newline at 19 qualifies.
/// assert_eq!(lookback.adjust(&text, 0, 20, 20), Some(20));
/// // With a hard-cut strategy nothing moves.
/// assert_eq!(NewlineLookback::hard_cut().adjust(&text, 0, 20, 20), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewlineLookback {
    fraction: f64,
}

impl NewlineLookback {
    /// Share of the window searched for a newline.
    pub const DEFAULT_FRACTION: f64 = 0.1;

    /// Search the last `fraction` of each window.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidLookback`] unless `0.0 <= fraction <= 1.0`.
    pub fn new(fraction: f64) -> Result<Self> {
        if (0.0..=1.0).contains(&fraction) {
            Ok(Self { fraction })
        } else {
            Err(Error::InvalidLookback(fraction))
        }
    }

    /// Never move a cut.
    #[must_use]
    pub const fn hard_cut() -> Self {
        Self { fraction: 0.0 }
    }

    /// The configured fraction.
    #[must_use]
    pub const fn fraction(&self) -> f64 {
        self.fraction
    }

    /// Number of trailing characters searched for a window of `limit`.
    #[must_use]
    pub fn window(&self, limit: usize) -> usize {
        (limit as f64 * self.fraction).floor() as usize
    }
}

impl Default for NewlineLookback {
    fn default() -> Self {
        Self {
            fraction: Self::DEFAULT_FRACTION,
        }
    }
}

impl BreakPoint for NewlineLookback {
    fn adjust(&self, text: &str, _start: usize, end: usize, limit: usize) -> Option<usize> {
        let lookback = self.window(limit);
        if lookback == 0 {
            return None;
        }

        // Candidates: the char at `end`, then backwards. `lookback <= limit`
        // keeps every candidate after `start`.
        let at_end = text[end..].chars().next().map(|c| (end, c));
        at_end
            .into_iter()
            .chain(text[..end].char_indices().rev())
            .take(lookback)
            .find(|&(_, c)| c == '\n')
            .map(|(pos, _)| pos + 1)
    }
}
