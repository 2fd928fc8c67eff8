//! Approximate token counting for transcript and summary text.
//!
//! This is deliberately NOT a real model tokenizer: the original workflow
//! estimates tokens as word count times a fixed multiplier, and the usage
//! counters exposed by the API depend on that exact formula.

/// Fixed tokens-per-word multiplier used by the estimate.
pub const TOKENS_PER_WORD: f64 = 1.5;

/// Estimate the token count of `text` as `round(word_count * 1.5)`.
///
/// Words are separated by Unicode whitespace; an empty or whitespace-only
/// string counts as zero tokens.
pub fn count_tokens(text: &str) -> u64 {
    let words = text.split_whitespace().count();
    (words as f64 * TOKENS_PER_WORD).round() as u64
}
