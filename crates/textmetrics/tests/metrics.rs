//! End-to-end checks of the public API against the documented behavior.

use std::collections::BTreeSet;

use textmetrics::{
    ConfigLoader, MetricsConfig, MetricsError, ReadabilityReport, char_count, check_readability,
    complex_word_count, flesch_kincaid_grade, flesch_reading_ease, gunning_fog, lexical_diversity,
    lix, sentence_count, sentences, smog_index, syllable_count, total_syllables, unique_words,
    word_count, words,
};

const PASSAGE: &str = "The implementation of the comprehensive organizational restructuring \
                       initiative necessitated the establishment of interdepartmental \
                       communication protocols. Nobody was happy. Everyone left early!";

#[test]
fn tokenizer_examples() {
    assert_eq!(words("Hello, world! 123"), vec!["Hello", "world", "123"]);
    assert_eq!(word_count("Hello, world! 123"), 3);
    assert_eq!(sentence_count("Hello. World is great! Yes?"), 3);
    assert_eq!(char_count("Hi, there."), 7);
}

#[test]
fn counts_agree_with_token_lists() {
    for text in ["", "One.", PASSAGE, "a b c. D e f? G!"] {
        assert_eq!(word_count(text), words(text).len());
        assert_eq!(sentence_count(text), sentences(text).len());
    }
}

#[test]
fn unique_words_keep_case() {
    let expected: BTreeSet<&str> = ["Go", "go", "now"].into_iter().collect();
    assert_eq!(unique_words("Go go now go"), expected);
}

#[test]
fn syllables_sum_over_words() {
    let text = "Every family has something.";
    let expected: i64 = words(text).into_iter().map(syllable_count).sum();
    assert_eq!(total_syllables(text), expected);
    // every, family, something are table lookups; "has" is one vowel group.
    assert_eq!(expected, 7);
    assert_eq!(complex_word_count(text), 0);
}

#[test]
fn complex_prose_scores_harder_than_simple_prose() {
    let simple = "The cat sat on the mat. The dog ran fast.";
    assert!(flesch_reading_ease(PASSAGE).unwrap() < flesch_reading_ease(simple).unwrap());
    assert!(flesch_kincaid_grade(PASSAGE).unwrap() > flesch_kincaid_grade(simple).unwrap());
    assert!(gunning_fog(PASSAGE).unwrap() > gunning_fog(simple).unwrap());
    assert!(smog_index(PASSAGE).unwrap() > smog_index(simple).unwrap());
    assert!(lix(PASSAGE).unwrap() > lix(simple).unwrap());
}

#[test]
fn scores_are_finite_for_real_text() {
    let report = check_readability(PASSAGE, &MetricsConfig::default()).unwrap();
    let s = report.scores;
    for score in [
        s.avg_words_per_sentence,
        s.lexical_diversity,
        s.unique_words_per,
        s.flesch_reading_ease,
        s.flesch_kincaid_grade,
        s.smog_index,
        s.gunning_fog,
        s.automated_readability_index,
        s.coleman_liau_index,
        s.lix,
    ] {
        assert!(score.is_finite());
    }
    assert!(s.lexical_diversity <= 1.0);
}

#[test]
fn empty_text_uses_zero_division_policy() {
    assert_eq!(word_count(""), 0);
    assert_eq!(sentence_count(""), 1);
    assert_eq!(
        lexical_diversity(""),
        Err(MetricsError::NoWords {
            metric: "lexical_diversity"
        })
    );
    let err = check_readability("", &MetricsConfig::default()).unwrap_err();
    assert_eq!(err.to_string(), "avg_words_per_sentence: text contains no words");
}

#[test]
fn loaded_config_feeds_the_report() {
    let config = ConfigLoader::new()
        .with_env(false)
        .with_toml("long_word_threshold = 100\ncomplex_word_syllables = 1")
        .load()
        .unwrap();
    let report = check_readability(PASSAGE, &config).unwrap();
    assert_eq!(report.stats.long_words, 0);
    assert_eq!(report.stats.complex_words, report.stats.words);
}

#[test]
fn report_serializes_to_json() {
    let report = check_readability("The cat sat. It slept.", &MetricsConfig::default()).unwrap();
    let json = serde_json::to_string(&report).unwrap();
    assert!(json.contains("\"flesch_kincaid_grade\""));
    let back: ReadabilityReport = serde_json::from_str(&json).unwrap();
    assert_eq!(back.stats, report.stats);
}
