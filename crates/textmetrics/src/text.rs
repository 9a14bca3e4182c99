//! Text processing utilities.
//!
//! Provides word extraction, sentence splitting, and the character,
//! unique-word and long-word counts the readability formulas consume.
//! Everything here is a pure function of the input string.

use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

/// A maximal run of word characters (letters, digits, underscore).
static WORD_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+").expect("valid regex"));

/// Terminal punctuation, an optional closing quote, one or two whitespace
/// characters, then the capital letter that opens the next sentence.
///
/// The capital is part of the match only because `regex` has no lookahead;
/// [`sentences`] hands it back to the following sentence.
static SENTENCE_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[.!?]['"]?\s{1,2}[A-Z]"#).expect("valid regex"));

/// Extract word tokens in order of appearance, preserving case.
///
/// Equivalent to replacing every non-word character with a space and
/// splitting on whitespace.
pub fn words(text: &str) -> Vec<&str> {
    WORD_PATTERN.find_iter(text).map(|m| m.as_str()).collect()
}

/// Split text into sentences.
///
/// A boundary is `.`, `!` or `?`, optionally followed by `'` or `"`, then one
/// or two whitespace characters, then an uppercase ASCII letter. The
/// delimiter is dropped; the capital letter stays with the next sentence.
///
/// Always returns at least one fragment, even for empty input. This is a
/// heuristic: abbreviations such as "Mr. Smith" are split.
pub fn sentences(text: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;

    for boundary in SENTENCE_BOUNDARY.find_iter(text) {
        parts.push(&text[start..boundary.start()]);
        // The trailing [A-Z] is a single ASCII byte.
        start = boundary.end() - 1;
    }
    parts.push(&text[start..]);

    parts
}

/// Number of word tokens in text.
pub fn word_count(text: &str) -> usize {
    WORD_PATTERN.find_iter(text).count()
}

/// Number of sentences in text. Never zero.
pub fn sentence_count(text: &str) -> usize {
    sentences(text).len()
}

/// Number of characters left after stripping every non-word character.
pub fn char_count(text: &str) -> usize {
    char_count_words(&words(text))
}

/// Total character length of a list of words.
pub fn char_count_words<S: AsRef<str>>(words: &[S]) -> usize {
    words.iter().map(|w| w.as_ref().chars().count()).sum()
}

/// Distinct word tokens. Case-sensitive: "The" and "the" are both kept.
pub fn unique_words(text: &str) -> BTreeSet<&str> {
    WORD_PATTERN.find_iter(text).map(|m| m.as_str()).collect()
}

/// Number of distinct word tokens.
pub fn unique_word_count(text: &str) -> usize {
    unique_words(text).len()
}

/// Number of word tokens with more than `threshold` characters.
pub fn long_word_count(text: &str, threshold: usize) -> usize {
    WORD_PATTERN
        .find_iter(text)
        .filter(|m| m.as_str().chars().count() > threshold)
        .count()
}
