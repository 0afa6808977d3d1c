//! The Chunk type: one contiguous slice of the source with its size metrics.

use std::fmt;

use serde::Serialize;
use unicode_segmentation::UnicodeSegmentation;
use uuid::Uuid;

use crate::estimate::estimate_tokens_for_len;

/// Identifier for a chunk within one rendered list.
///
/// Random per split. Two splits of the same text yield different ids.
pub type ChunkId = Uuid;

/// Graphemes shown by [`Chunk::preview`] in listings.
pub const DEFAULT_PREVIEW_LEN: usize = 300;

/// A contiguous slice of the source text.
///
/// Concatenating every chunk's [`content`](Chunk::content) in index order
/// reproduces the source exactly:
///
/// ```rust
/// use context_splitter::{split_content, SplitConfig};
///
/// let text = "abcde";
/// let chunks = split_content(text, &SplitConfig::chars(2));
///
/// let joined: String = chunks.iter().map(|c| c.content()).collect();
/// assert_eq!(joined, text);
/// assert_eq!(chunks[2].index(), 3);
/// assert_eq!(&text[chunks[1].span()], "cd");
/// ```
///
/// Chunks are read-only once built; a new split produces a new list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Chunk {
    id: ChunkId,
    index: usize,
    content: String,
    char_count: usize,
    estimated_tokens: usize,
    start: usize,
    end: usize,
}

impl Chunk {
    /// Build a chunk from `source[start..end]`. `index` is 1-based.
    pub(crate) fn new(source: &str, start: usize, end: usize, index: usize) -> Self {
        let content = &source[start..end];
        let char_count = content.chars().count();
        Self {
            id: Uuid::new_v4(),
            index,
            content: content.to_string(),
            char_count,
            estimated_tokens: estimate_tokens_for_len(char_count),
            start,
            end,
        }
    }

    /// List identity.
    #[must_use]
    pub fn id(&self) -> ChunkId {
        self.id
    }

    /// 1-based position in the split that produced this chunk.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// The chunk text.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Length of the content in characters.
    #[must_use]
    pub fn char_count(&self) -> usize {
        self.char_count
    }

    /// Estimated tokens at 4 chars per token.
    #[must_use]
    pub fn estimated_tokens(&self) -> usize {
        self.estimated_tokens
    }

    /// Byte offset of the first byte in the source.
    #[must_use]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Byte offset one past the last byte in the source.
    #[must_use]
    pub fn end(&self) -> usize {
        self.end
    }

    /// Length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.content.len()
    }

    /// Whether the content is empty. Never true for splitter output.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Byte span in the source.
    #[must_use]
    pub fn span(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }

    /// The first `max` grapheme clusters, with `...` appended if cut short.
    #[must_use]
    pub fn preview(&self, max: usize) -> String {
        let mut graphemes = self.content.graphemes(true);
        let mut out: String = graphemes.by_ref().take(max).collect();
        if graphemes.next().is_some() {
            out.push_str("...");
        }
        out
    }

    /// A one-line summary for listings, given the total chunk count.
    #[must_use]
    pub fn card(&self, total: usize) -> ChunkCard<'_> {
        ChunkCard { chunk: self, total }
    }

    /// Consume the chunk, keeping only its text.
    #[must_use]
    pub fn into_content(self) -> String {
        self.content
    }
}

impl fmt::Display for Chunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Chunk {{ index: {}, span: {}..{}, chars: {}, tokens: ~{} }}",
            self.index, self.start, self.end, self.char_count, self.estimated_tokens
        )
    }
}

/// Listing header for a chunk: `Part 2 / 5 · ~1,024 tokens · 4,096 chars`.
#[derive(Debug, Clone, Copy)]
pub struct ChunkCard<'a> {
    chunk: &'a Chunk,
    total: usize,
}

impl fmt::Display for ChunkCard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Part {} / {} · ~{} tokens · {} chars",
            self.chunk.index,
            self.total,
            group_thousands(self.chunk.estimated_tokens),
            group_thousands(self.chunk.char_count)
        )
    }
}

/// Format `n` with comma thousands separators.
#[must_use]
pub fn group_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
