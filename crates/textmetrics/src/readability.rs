//! Readability scoring.
//!
//! Aggregates word, sentence, syllable and character counts and feeds them
//! into the standard closed-form readability formulas:
//!
//! | Metric | Formula |
//! |---|---|
//! | Flesch Reading Ease | `206.835 - 1.015 * (W/S) - 84.6 * (Y/W)` |
//! | Flesch-Kincaid Grade | `0.39 * (W/S) + 11.8 * (Y/W) - 15.59` |
//! | SMOG | `1.043 * sqrt(C * (30/S) + 3.1291)` |
//! | Gunning Fog | `0.4 * ((W/S) + 100 * (C/W))` |
//! | ARI | `4.71 * (L/W) + 0.5 * (W/S) - 21.43` |
//! | Coleman-Liau | `0.0588 * (100 * L/W) - 0.296 * (100 * S/W) - 15.8` |
//! | LIX | `W/S + 100 * G/W` |
//!
//! `W` words, `S` sentences, `Y` syllables, `C` complex words, `L` word
//! characters, `G` long words.
//!
//! Every free function recomputes its counts from the text. Use
//! [`TextStats::collect`] or [`check_readability`] to compute them once and
//! read several scores.
//!
//! Any metric over a text with no words fails with
//! [`MetricsError::NoWords`] instead of returning `NaN` or infinity.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::config::MetricsConfig;
use crate::error::{MetricsError, MetricsResult};
use crate::syllables;
use crate::text;

/// Aggregate counts over one text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TextStats {
    /// Number of word tokens.
    pub words: usize,
    /// Number of sentences (at least one).
    pub sentences: usize,
    /// Estimated syllables over all words.
    pub syllables: i64,
    /// Words with at least `complex_word_syllables` syllables.
    pub complex_words: usize,
    /// Word characters (punctuation and whitespace excluded).
    pub characters: usize,
    /// Words longer than `long_word_threshold` characters.
    pub long_words: usize,
    /// Distinct word tokens, case-sensitive.
    pub unique_words: usize,
}

impl TextStats {
    /// Count everything the formulas need in one pass over `text`.
    #[tracing::instrument(skip_all, fields(text_len = text.len()))]
    pub fn collect(text: &str, config: &MetricsConfig) -> Self {
        let words = text::words(text);
        let syllable_counts: Vec<i64> = words
            .iter()
            .map(|w| syllables::syllable_count(w))
            .collect();

        let stats = Self {
            words: words.len(),
            sentences: text::sentence_count(text),
            syllables: syllable_counts.iter().sum(),
            complex_words: syllable_counts
                .iter()
                .filter(|&&count| count >= config.complex_word_syllables)
                .count(),
            characters: text::char_count_words(&words),
            long_words: words
                .iter()
                .filter(|w| w.chars().count() > config.long_word_threshold)
                .count(),
            unique_words: text::unique_word_count(text),
        };
        tracing::debug!(
            words = stats.words,
            sentences = stats.sentences,
            syllables = stats.syllables,
            "collected text statistics"
        );
        stats
    }

    /// Word and sentence counts as floats, or the zero-division error.
    fn denominators(&self, metric: &'static str) -> MetricsResult<(f64, f64)> {
        if self.words == 0 {
            return Err(MetricsError::NoWords { metric });
        }
        if self.sentences == 0 {
            return Err(MetricsError::NoSentences { metric });
        }
        Ok((self.words as f64, self.sentences as f64))
    }

    /// Average words per sentence.
    pub fn avg_words_per_sentence(&self) -> MetricsResult<f64> {
        let (words, sentences) = self.denominators("avg_words_per_sentence")?;
        Ok(words / sentences)
    }

    /// Distinct words over total words. At most 1.0.
    pub fn lexical_diversity(&self) -> MetricsResult<f64> {
        let (words, _) = self.denominators("lexical_diversity")?;
        Ok(self.unique_words as f64 / words)
    }

    /// Expected number of distinct words per `n` words.
    pub fn unique_words_per(&self, n: usize) -> MetricsResult<f64> {
        let (words, _) = self.denominators("unique_words_per")?;
        Ok(n as f64 * (self.unique_words as f64 / words))
    }

    /// Flesch Reading Ease. Higher is easier.
    pub fn flesch_reading_ease(&self) -> MetricsResult<f64> {
        let (words, sentences) = self.denominators("flesch_reading_ease")?;
        let syllables_per_word = self.syllables as f64 / words;
        let words_per_sentence = words / sentences;
        Ok(84.6f64.mul_add(
            -syllables_per_word,
            1.015f64.mul_add(-words_per_sentence, 206.835),
        ))
    }

    /// Flesch-Kincaid Grade Level.
    pub fn flesch_kincaid_grade(&self) -> MetricsResult<f64> {
        let (words, sentences) = self.denominators("flesch_kincaid_grade")?;
        let words_per_sentence = words / sentences;
        let syllables_per_word = self.syllables as f64 / words;
        Ok(0.39f64.mul_add(words_per_sentence, 11.8 * syllables_per_word) - 15.59)
    }

    /// SMOG grade.
    pub fn smog_index(&self) -> MetricsResult<f64> {
        let (_, sentences) = self.denominators("smog_index")?;
        let polysyllables = self.complex_words as f64 * (30.0 / sentences);
        Ok(1.043 * (polysyllables + 3.1291).sqrt())
    }

    /// Gunning Fog index.
    pub fn gunning_fog(&self) -> MetricsResult<f64> {
        let (words, sentences) = self.denominators("gunning_fog")?;
        let complex_ratio = self.complex_words as f64 / words;
        Ok(0.4 * 100.0f64.mul_add(complex_ratio, words / sentences))
    }

    /// Automated Readability Index.
    pub fn automated_readability_index(&self) -> MetricsResult<f64> {
        let (words, sentences) = self.denominators("automated_readability_index")?;
        let chars_per_word = self.characters as f64 / words;
        Ok(4.71f64.mul_add(chars_per_word, 0.5 * (words / sentences)) - 21.43)
    }

    /// Coleman-Liau index.
    pub fn coleman_liau_index(&self) -> MetricsResult<f64> {
        let (words, sentences) = self.denominators("coleman_liau_index")?;
        let letters_per_100 = self.characters as f64 / words * 100.0;
        let sentences_per_100 = sentences / words * 100.0;
        Ok(0.0588f64.mul_add(letters_per_100, -0.296 * sentences_per_100) - 15.8)
    }

    /// LIX (Läsbarhetsindex).
    pub fn lix(&self) -> MetricsResult<f64> {
        let (words, sentences) = self.denominators("lix")?;
        Ok(words / sentences + self.long_words as f64 * 100.0 / words)
    }
}

/// Every score computed from one [`TextStats`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReadabilityScores {
    /// Average words per sentence.
    pub avg_words_per_sentence: f64,
    /// Distinct words over total words.
    pub lexical_diversity: f64,
    /// Distinct words per `unique_words_scale` words.
    pub unique_words_per: f64,
    /// Flesch Reading Ease.
    pub flesch_reading_ease: f64,
    /// Flesch-Kincaid Grade Level.
    pub flesch_kincaid_grade: f64,
    /// SMOG grade.
    pub smog_index: f64,
    /// Gunning Fog index.
    pub gunning_fog: f64,
    /// Automated Readability Index.
    pub automated_readability_index: f64,
    /// Coleman-Liau index.
    pub coleman_liau_index: f64,
    /// LIX.
    pub lix: f64,
}

/// Result of readability analysis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReadabilityReport {
    /// The counts the scores were computed from.
    pub stats: TextStats,
    /// Every readability score.
    pub scores: ReadabilityScores,
}

/// Compute all counts and scores for `text` in one pass.
///
/// Fails with [`MetricsError::NoWords`] if the text has no words.
#[tracing::instrument(skip(text, config), fields(text_len = text.len()))]
pub fn check_readability(text: &str, config: &MetricsConfig) -> MetricsResult<ReadabilityReport> {
    let stats = TextStats::collect(text, config);

    let scores = ReadabilityScores {
        avg_words_per_sentence: stats.avg_words_per_sentence()?,
        lexical_diversity: stats.lexical_diversity()?,
        unique_words_per: stats.unique_words_per(config.unique_words_scale)?,
        flesch_reading_ease: stats.flesch_reading_ease()?,
        flesch_kincaid_grade: stats.flesch_kincaid_grade()?,
        smog_index: stats.smog_index()?,
        gunning_fog: stats.gunning_fog()?,
        automated_readability_index: stats.automated_readability_index()?,
        coleman_liau_index: stats.coleman_liau_index()?,
        lix: stats.lix()?,
    };

    Ok(ReadabilityReport { stats, scores })
}

fn stats(text: &str) -> TextStats {
    TextStats::collect(text, &MetricsConfig::default())
}

/// Average words per sentence.
pub fn avg_words_per_sentence(text: &str) -> MetricsResult<f64> {
    stats(text).avg_words_per_sentence()
}

/// Distinct words over total words.
pub fn lexical_diversity(text: &str) -> MetricsResult<f64> {
    stats(text).lexical_diversity()
}

/// Lexical diversity scaled to `n` words.
pub fn unique_words_per(text: &str, n: usize) -> MetricsResult<f64> {
    stats(text).unique_words_per(n)
}

/// Flesch Reading Ease.
pub fn flesch_reading_ease(text: &str) -> MetricsResult<f64> {
    stats(text).flesch_reading_ease()
}

/// Flesch-Kincaid Grade Level.
pub fn flesch_kincaid_grade(text: &str) -> MetricsResult<f64> {
    stats(text).flesch_kincaid_grade()
}

/// SMOG grade.
pub fn smog_index(text: &str) -> MetricsResult<f64> {
    stats(text).smog_index()
}

/// Gunning Fog index.
pub fn gunning_fog(text: &str) -> MetricsResult<f64> {
    stats(text).gunning_fog()
}

/// Automated Readability Index.
pub fn automated_readability_index(text: &str) -> MetricsResult<f64> {
    stats(text).automated_readability_index()
}

/// Coleman-Liau index.
pub fn coleman_liau_index(text: &str) -> MetricsResult<f64> {
    stats(text).coleman_liau_index()
}

/// LIX, counting words over six characters as long.
pub fn lix(text: &str) -> MetricsResult<f64> {
    stats(text).lix()
}
