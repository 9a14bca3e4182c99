//! Lexical statistics and readability formulas for English text.
//!
//! Splits text into words and sentences, estimates syllables with a
//! rule-based heuristic, and computes the standard readability scores.
//!
//! # Modules
//!
//! - [`text`] - Word and sentence tokenization, character and word counts
//! - [`syllables`] - Heuristic syllable estimation
//! - [`readability`] - Aggregate counts and readability formulas
//! - [`config`] - Metric thresholds and configuration loading
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use textmetrics::{MetricsConfig, check_readability, syllable_count};
//!
//! assert_eq!(syllable_count("family"), 2);
//!
//! let report = check_readability("The cat sat on the mat. The dog ran.", &MetricsConfig::default())
//!     .expect("text has words");
//! assert_eq!(report.stats.sentences, 2);
//! assert!(report.scores.flesch_reading_ease > 90.0);
//! ```
#![deny(unsafe_code)]

pub mod config;
pub mod dictionaries;
pub mod error;
pub mod readability;
pub mod syllables;
pub mod text;

pub use config::{ConfigLoader, MetricsConfig};
pub use error::{ConfigError, ConfigResult, MetricsError, MetricsResult};
pub use readability::{
    ReadabilityReport, ReadabilityScores, TextStats, automated_readability_index,
    avg_words_per_sentence, check_readability, coleman_liau_index, flesch_kincaid_grade,
    flesch_reading_ease, gunning_fog, lexical_diversity, lix, smog_index, unique_words_per,
};
pub use syllables::{complex_word_count, syllable_count, total_syllables};
pub use text::{
    char_count, char_count_words, long_word_count, sentence_count, sentences, unique_word_count,
    unique_words, word_count, words,
};
