//! Property-based tests for splitting.
//!
//! These tests verify the invariants every split must keep:
//! - Reconstruction: chunks concatenate back to the input
//! - Contiguity: indices run 1, 2, 3, ... and spans tile the input
//! - Bounds: non-final chunks stay within the limit (+1 for a newline at the cut)
//! - Metrics: char and token counts match the content

use std::collections::HashSet;

use proptest::prelude::*;
use context_splitter::{
    estimate_tokens, split_content, Chunk, NewlineLookback, SplitConfig, SplitMode, Splitter,
};

// =============================================================================
// Test Generators
// =============================================================================

/// Arbitrary text, including multibyte chars
fn arbitrary_text() -> impl Strategy<Value = String> {
    prop::string::string_regex("(.|\n){0,600}").unwrap()
}

/// Text made of lines, the shape CSVs and logs have
fn line_text() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::string::string_regex("[a-z0-9,; ]{0,40}").unwrap(), 0..60)
        .prop_map(|lines| lines.join("\n"))
}

fn any_config() -> impl Strategy<Value = SplitConfig> {
    (prop_oneof![Just(SplitMode::Char), Just(SplitMode::Token)], 1usize..120)
        .prop_map(|(mode, size)| SplitConfig::chars(size).with_mode(mode))
}

// =============================================================================
// Invariant Helpers
// =============================================================================

fn reconstructs(chunks: &[Chunk], text: &str) -> bool {
    let joined: String = chunks.iter().map(Chunk::content).collect();
    joined == text
}

fn spans_tile(chunks: &[Chunk], text: &str) -> bool {
    if chunks.is_empty() {
        return text.is_empty();
    }
    chunks[0].start() == 0
        && chunks.last().map(Chunk::end) == Some(text.len())
        && chunks.windows(2).all(|w| w[0].end() == w[1].start())
        && chunks.iter().all(|c| &text[c.span()] == c.content())
}

fn indices_contiguous(chunks: &[Chunk]) -> bool {
    chunks.iter().enumerate().all(|(i, c)| c.index() == i + 1)
}

// =============================================================================
// Core invariants
// =============================================================================

proptest! {
    #[test]
    fn concatenation_reproduces_input(text in arbitrary_text(), config in any_config()) {
        let chunks = split_content(&text, &config);
        prop_assert!(reconstructs(&chunks, &text));
    }

    #[test]
    fn spans_tile_input(text in line_text(), config in any_config()) {
        let chunks = split_content(&text, &config);
        prop_assert!(spans_tile(&chunks, &text));
    }

    #[test]
    fn indices_start_at_one(text in arbitrary_text(), config in any_config()) {
        let chunks = split_content(&text, &config);
        prop_assert!(indices_contiguous(&chunks));
    }

    #[test]
    fn respects_limit(text in line_text(), config in any_config()) {
        let limit = config.limit();
        let chunks = split_content(&text, &config);

        for chunk in chunks.iter().take(chunks.len().saturating_sub(1)) {
            prop_assert!(
                chunk.char_count() <= limit + 1,
                "chunk of {} chars exceeds limit {}",
                chunk.char_count(),
                limit
            );
            // Only a newline at the cut may push a chunk past the limit
            if chunk.char_count() == limit + 1 {
                prop_assert!(chunk.content().ends_with('\n'));
            }
        }
        if let Some(last) = chunks.last() {
            prop_assert!(last.char_count() <= limit);
        }
    }

    #[test]
    fn cuts_stay_in_lookback(text in line_text(), size in 10usize..120) {
        let config = SplitConfig::chars(size);
        let lookback = NewlineLookback::default().window(size);
        let chunks = split_content(&text, &config);

        for chunk in chunks.iter().take(chunks.len().saturating_sub(1)) {
            // a shortened chunk must end on a newline from the lookback
            if chunk.char_count() < size {
                prop_assert!(chunk.content().ends_with('\n'));
                prop_assert!(chunk.char_count() > size - lookback);
            }
        }
    }

    #[test]
    fn metrics_match_content(text in arbitrary_text(), config in any_config()) {
        for chunk in split_content(&text, &config) {
            prop_assert!(!chunk.is_empty());
            prop_assert_eq!(chunk.char_count(), chunk.content().chars().count());
            prop_assert_eq!(chunk.estimated_tokens(), estimate_tokens(chunk.content()));
        }
    }

    #[test]
    fn single_chunk_when_it_fits(text in arbitrary_text()) {
        let len = text.chars().count();
        prop_assume!(len > 0);
        let chunks = split_content(&text, &SplitConfig::chars(len));
        prop_assert_eq!(chunks.len(), 1);
        prop_assert_eq!(chunks[0].content(), text.as_str());
    }

    #[test]
    fn ids_unique(text in line_text()) {
        let chunks = split_content(&text, &SplitConfig::chars(7));
        let ids: HashSet<_> = chunks.iter().map(Chunk::id).collect();
        prop_assert_eq!(ids.len(), chunks.len());
    }

    #[test]
    fn hard_cut_is_exact(text in arbitrary_text(), size in 1usize..50) {
        let splitter = Splitter::with_break_point(SplitConfig::chars(size), NewlineLookback::hard_cut());
        let chunks = splitter.split(&text);
        for chunk in chunks.iter().take(chunks.len().saturating_sub(1)) {
            prop_assert_eq!(chunk.char_count(), size);
        }
        prop_assert!(reconstructs(&chunks, &text));
    }

    #[test]
    fn token_estimate_monotonic(a in 0usize..10_000, b in 0usize..10_000) {
        let (short, long) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(
            estimate_tokens(&"x".repeat(short)) <= estimate_tokens(&"x".repeat(long))
        );
    }
}

// =============================================================================
// Edge Cases
// =============================================================================

#[test]
fn empty_input_produces_no_chunks() {
    for config in [SplitConfig::chars(1), SplitConfig::tokens(100), SplitConfig::default()] {
        assert!(split_content("", &config).is_empty());
    }
}

#[test]
fn zero_size_produces_no_chunks() {
    let text = "some text\nmore text";
    assert!(split_content(text, &SplitConfig::chars(0)).is_empty());
    assert!(split_content(text, &SplitConfig::tokens(0)).is_empty());
}

#[test]
fn splitting_is_deterministic_except_ids() {
    let text = "The quick brown fox\njumps over the lazy dog.\n".repeat(20);
    let config = SplitConfig::chars(64);

    let first = split_content(&text, &config);
    let second = split_content(&text, &config);

    assert_eq!(first.len(), second.len());
    for (a, b) in first.iter().zip(&second) {
        assert_eq!(a.content(), b.content());
        assert_eq!(a.span(), b.span());
        assert_ne!(a.id(), b.id());
    }
}
