//! Heuristic syllable estimation.
//!
//! English syllabification needs a pronunciation dictionary to be exact.
//! This module approximates it with zero external data: count vowel groups,
//! then correct the count with three ordered rule tables.
//!
//! The pipeline for a single word:
//!
//! 1. Lowercase and strip non-word characters.
//! 2. Return early if the word is in the exception table
//!    ([`dictionaries::syllable_exceptions`](crate::dictionaries::syllable_exceptions)).
//! 3. Strip prefixes and suffixes ([`AFFIX_RULES`]), counting one syllable
//!    per removal.
//! 4. Drop everything outside `a-z`.
//! 5. Subtract one for each over-count pattern that matches ([`OVER_COUNT_RULES`]).
//! 6. Add one for each under-count pattern that matches ([`UNDER_COUNT_RULES`]).
//! 7. Count vowel groups (a lone character counts as one).
//!
//! The result is the sum of steps 3, 5, 6 and 7. It is not clamped, so a
//! token with no vowels (an acronym such as "HTML") estimates to zero.

use regex::Regex;
use std::sync::LazyLock;

use crate::config::DEFAULT_COMPLEX_WORD_SYLLABLES;
use crate::dictionaries::syllable_exceptions::lookup_exception;
use crate::text;

/// What a matching rule does to the estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Remove the matched text; each removal is one syllable.
    Strip,
    /// The vowel-group count is one too high.
    Decrement,
    /// The vowel-group count is one too low.
    Increment,
}

/// A pattern paired with its effect on the syllable count.
#[derive(Debug)]
pub struct SyllableRule {
    /// Compiled pattern, matched against the lowercase working word.
    pub pattern: Regex,
    /// Effect of a match.
    pub effect: Effect,
}

impl SyllableRule {
    /// Apply the rule, returning its contribution to the count.
    ///
    /// Strip rules rewrite `word`; the others only test it.
    fn apply(&self, word: &mut String) -> i64 {
        match self.effect {
            Effect::Strip => {
                let removed = self.pattern.find_iter(word).count();
                if removed > 0 {
                    *word = self.pattern.replace_all(word, "").into_owned();
                }
                removed as i64
            }
            Effect::Decrement => -i64::from(self.pattern.is_match(word)),
            Effect::Increment => i64::from(self.pattern.is_match(word)),
        }
    }
}

fn compile(effect: Effect, patterns: &[&str]) -> Vec<SyllableRule> {
    patterns
        .iter()
        .map(|p| SyllableRule {
            pattern: Regex::new(p).expect("valid regex"),
            effect,
        })
        .collect()
}

/// Prefixes and suffixes stripped before vowel counting. Order matters:
/// each pattern sees the word left behind by the previous one.
const AFFIX_PATTERNS: &[&str] = &["^un", "^fore", "ly$", "less$", "ful$", "ers?$", "ings?$"];

/// Patterns where vowel-group counting gives one syllable too many.
const OVER_COUNT_PATTERNS: &[&str] = &[
    "cial",
    "tia",
    "cius",
    "cious",
    "giu",
    "ion",
    "iou",
    "^evevry",
    "sia$",
    ".ely$",
    "[^szaeiou]es$",
    "[^tdaeiou]ed$",
    "^ninet",
    "^awe",
];

/// Patterns where vowel-group counting gives one syllable too few.
const UNDER_COUNT_PATTERNS: &[&str] = &[
    "ia",
    "rie[rt]",
    "dien",
    "ieth",
    "iu",
    "io",
    "ii",
    "les?$",
    "[aeiouym][bp]l$",
    "[aeiou]{3}",
    "ndl(ed)?$",
    "mpl(ed)?$",
    "^mc",
    "ism$",
    // A doubled consonant before a final "l" or "led" (`regex` has no backreferences).
    "(bb|cc|dd|ff|gg|hh|jj|kk|ll|mm|nn|pp|qq|rr|ss|tt|vv|ww|xx|zz)l(ed)?$",
    "[^l]lien",
    "^coa[dglx].",
    "[^gq]ua[^aeiou]",
    "[sd]nt$",
    r"\wshes$",
    r"\wches$",
    r"\wghes$",
    // Listed twice; both entries fire.
    r"\wches$",
    r"\w[aeiouy]ings?$",
];

/// Affix-stripping rules, applied in order.
pub static AFFIX_RULES: LazyLock<Vec<SyllableRule>> =
    LazyLock::new(|| compile(Effect::Strip, AFFIX_PATTERNS));

/// Over-count corrections, each checked independently.
pub static OVER_COUNT_RULES: LazyLock<Vec<SyllableRule>> =
    LazyLock::new(|| compile(Effect::Decrement, OVER_COUNT_PATTERNS));

/// Under-count corrections, each checked independently.
pub static UNDER_COUNT_RULES: LazyLock<Vec<SyllableRule>> =
    LazyLock::new(|| compile(Effect::Increment, UNDER_COUNT_PATTERNS));

static NON_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\W").expect("valid regex"));

static NON_LOWERCASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[^a-z]").expect("valid regex"));

static VOWEL_GROUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[aeiouy]+").expect("valid regex"));

/// Estimate the number of syllables in a single word.
///
/// Case-insensitive and pure. Never fails; input with no letters yields 0.
pub fn syllable_count(word: &str) -> i64 {
    let mut word = NON_WORD.replace_all(&word.to_lowercase(), "").into_owned();

    if let Some(count) = lookup_exception(&word) {
        tracing::trace!(word = %word, count, "syllable exception");
        return count;
    }

    let affix_count: i64 = AFFIX_RULES.iter().map(|rule| rule.apply(&mut word)).sum();

    let mut word = NON_LOWERCASE.replace_all(&word, "").into_owned();

    let adjustment: i64 = OVER_COUNT_RULES
        .iter()
        .chain(UNDER_COUNT_RULES.iter())
        .map(|rule| rule.apply(&mut word))
        .sum();

    vowel_groups(&word) + affix_count + adjustment
}

/// Base count: one per run of vowels, or one for a single character.
fn vowel_groups(word: &str) -> i64 {
    if word.len() == 1 {
        return 1;
    }
    VOWEL_GROUP.find_iter(word).count() as i64
}

/// Sum of estimated syllables over every word in text.
pub fn total_syllables(text: &str) -> i64 {
    text::words(text).into_iter().map(syllable_count).sum()
}

/// Number of words with at least three estimated syllables.
pub fn complex_word_count(text: &str) -> usize {
    words_with_min_syllables(text, DEFAULT_COMPLEX_WORD_SYLLABLES)
}

/// Number of words with at least `min_syllables` estimated syllables.
pub fn words_with_min_syllables(text: &str, min_syllables: i64) -> usize {
    text::words(text)
        .into_iter()
        .filter(|w| syllable_count(w) >= min_syllables)
        .count()
}
