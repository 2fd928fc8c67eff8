// Tests for the token estimation heuristic.
//
// The counters shown to the user depend on the exact formula
// round(word_count * 1.5), so these pin it down.

use podscribe::tokens::{count_tokens, TOKENS_PER_WORD};

#[test]
fn test_empty_string_counts_zero() {
    assert_eq!(count_tokens(""), 0);
}

#[test]
fn test_whitespace_only_counts_zero() {
    assert_eq!(count_tokens("   \t\n  "), 0);
}

#[test]
fn test_single_word_rounds_up() {
    // round(1 * 1.5) = 2
    assert_eq!(count_tokens("hello"), 2);
}

#[test]
fn test_two_words() {
    // round(2 * 1.5) = 3
    assert_eq!(count_tokens("hello world"), 3);
}

#[test]
fn test_word_count_ignores_extra_whitespace() {
    assert_eq!(count_tokens("  hello   world  "), 3);
    assert_eq!(count_tokens("hello\nworld"), 3);
}

#[test]
fn test_longer_text() {
    // 8 words -> round(12.0) = 12
    let text = "the quick brown fox jumps over the dog";
    assert_eq!(count_tokens(text), 12);
}

#[test]
fn test_punctuation_sticks_to_words() {
    // Punctuation is not split off; "world!" is one word.
    assert_eq!(count_tokens("hello, world!"), 3);
}

#[test]
fn test_matches_formula_for_any_word_count() {
    for n in 0..50 {
        let text = vec!["word"; n].join(" ");
        let expected = (n as f64 * TOKENS_PER_WORD).round() as u64;
        assert_eq!(count_tokens(&text), expected, "word count {}", n);
    }
}
