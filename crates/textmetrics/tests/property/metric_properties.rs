//! Property tests for tokenizer, syllable and formula invariants.

use proptest::prelude::*;
use textmetrics::{
    MetricsConfig, TextStats, check_readability, flesch_kincaid_grade, flesch_reading_ease,
    lexical_diversity, sentence_count, sentences, syllable_count, word_count, words,
};

proptest! {
    #[test]
    fn syllable_count_is_deterministic(word in "\\PC{0,20}") {
        prop_assert_eq!(syllable_count(&word), syllable_count(&word));
    }

    #[test]
    fn syllable_count_ignores_ascii_case(word in "[a-zA-Z]{1,15}") {
        prop_assert_eq!(
            syllable_count(&word),
            syllable_count(&word.to_ascii_lowercase())
        );
    }

    #[test]
    fn at_least_one_sentence(text in "\\PC{0,200}") {
        prop_assert!(sentence_count(&text) >= 1);
    }

    #[test]
    fn counts_match_token_lists(text in "\\PC{0,200}") {
        prop_assert_eq!(word_count(&text), words(&text).len());
        prop_assert_eq!(sentence_count(&text), sentences(&text).len());
    }

    #[test]
    fn lexical_diversity_never_exceeds_one(text in "[a-zA-Z ,.!?]{0,200}") {
        match lexical_diversity(&text) {
            Ok(ratio) => prop_assert!(ratio > 0.0 && ratio <= 1.0),
            Err(_) => prop_assert_eq!(word_count(&text), 0),
        }
    }

    #[test]
    fn flesch_scores_are_finite(text in "[A-Za-z]{1,12}( [a-z]{1,12}){0,30}[.!?]") {
        prop_assert!(flesch_reading_ease(&text).unwrap().is_finite());
        prop_assert!(flesch_kincaid_grade(&text).unwrap().is_finite());
    }

    #[test]
    fn longer_sentences_lower_reading_ease(
        words in 10usize..500,
        syllables in 10i64..1000,
        sentences in 2usize..20,
    ) {
        let fewer = TextStats {
            words,
            sentences,
            syllables,
            complex_words: 0,
            characters: words * 4,
            long_words: 0,
            unique_words: words,
        };
        let more = TextStats { sentences: sentences - 1, ..fewer };
        prop_assert!(more.flesch_reading_ease().unwrap() < fewer.flesch_reading_ease().unwrap());
    }

    #[test]
    fn report_is_repeatable(text in "[A-Za-z ,.!?]{0,200}") {
        let config = MetricsConfig::default();
        let first = check_readability(&text, &config);
        let second = check_readability(&text, &config);
        prop_assert_eq!(first, second);
    }
}
