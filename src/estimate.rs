//! Token estimation.
//!
//! There is no tokenizer here. A token is taken to be four characters,
//! which is close enough for English prose and generous for code. The same
//! ratio converts a token budget into a character limit before splitting.

/// Characters per estimated token.
pub const TOKEN_TO_CHAR_RATIO: usize = 4;

/// Estimate the token count of `text`.
///
/// Counts Unicode scalar values, then rounds up:
///
/// ```rust
/// use context_splitter::estimate_tokens;
///
/// assert_eq!(estimate_tokens(""), 0);
/// assert_eq!(estimate_tokens("abcd"), 1);
/// assert_eq!(estimate_tokens("abcde"), 2);
/// ```
#[must_use]
pub fn estimate_tokens(text: &str) -> usize {
    estimate_tokens_for_len(text.chars().count())
}

/// Estimate tokens for a text of `char_len` characters.
#[must_use]
pub const fn estimate_tokens_for_len(char_len: usize) -> usize {
    char_len.div_ceil(TOKEN_TO_CHAR_RATIO)
}

/// Convert a token budget into the equivalent character budget.
#[must_use]
pub const fn tokens_to_chars(tokens: usize) -> usize {
    tokens.saturating_mul(TOKEN_TO_CHAR_RATIO)
}
