//! Metric configuration.
//!
//! The readability formulas have a few tunable thresholds. [`MetricsConfig`]
//! holds them with the conventional defaults, and [`ConfigLoader`] layers
//! overrides on top of those defaults via figment.
//!
//! # Sources (in order of precedence, highest first)
//! - `TEXTMETRICS_*` environment variables
//! - In-memory TOML/JSON documents, later ones overriding earlier ones
//! - [`MetricsConfig::default()`]
//!
//! The loader never touches the filesystem; callers that keep settings in a
//! file read it themselves and pass the contents in.
//!
//! # Example
//! ```
//! use textmetrics::config::ConfigLoader;
//!
//! let config = ConfigLoader::new()
//!     .with_env(false)
//!     .with_toml("long_word_threshold = 7")
//!     .load()
//!     .unwrap();
//! assert_eq!(config.long_word_threshold, 7);
//! ```

use figment::Figment;
use figment::providers::{Env, Format, Json, Serialized, Toml};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// Word length above which LIX counts a word as long.
pub const DEFAULT_LONG_WORD_THRESHOLD: usize = 6;

/// Syllable count at which a word counts as complex (SMOG, Gunning Fog).
pub const DEFAULT_COMPLEX_WORD_SYLLABLES: i64 = 3;

/// Word count that `unique_words_per` scales the type-token ratio to.
pub const DEFAULT_UNIQUE_WORDS_SCALE: usize = 100;

/// Environment variable prefix, e.g. `TEXTMETRICS_LONG_WORD_THRESHOLD=7`.
const ENV_PREFIX: &str = "TEXTMETRICS_";

/// Thresholds used when aggregating text statistics.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, JsonSchema)]
#[serde(default)]
pub struct MetricsConfig {
    /// Words with more characters than this are "long" (LIX).
    pub long_word_threshold: usize,
    /// Words with at least this many estimated syllables are "complex".
    pub complex_word_syllables: i64,
    /// Scale for the report's unique-words-per-N figure.
    pub unique_words_scale: usize,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            long_word_threshold: DEFAULT_LONG_WORD_THRESHOLD,
            complex_word_syllables: DEFAULT_COMPLEX_WORD_SYLLABLES,
            unique_words_scale: DEFAULT_UNIQUE_WORDS_SCALE,
        }
    }
}

impl MetricsConfig {
    /// Reject settings no metric can work with.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.complex_word_syllables < 1 {
            return Err(ConfigError::InvalidThreshold {
                field: "complex_word_syllables",
                value: self.complex_word_syllables.to_string(),
            });
        }
        Ok(())
    }
}

/// A document handed to the loader, kept in insertion order.
#[derive(Debug, Clone)]
enum Source {
    Toml(String),
    Json(String),
}

/// Builder for layering configuration sources.
#[derive(Debug)]
pub struct ConfigLoader {
    /// In-memory documents, lowest precedence first.
    sources: Vec<Source>,
    /// Whether `TEXTMETRICS_*` environment variables are merged last.
    include_env: bool,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// Create a loader that reads only defaults and the environment.
    pub const fn new() -> Self {
        Self {
            sources: Vec::new(),
            include_env: true,
        }
    }

    /// Set whether to merge `TEXTMETRICS_*` environment variables.
    pub const fn with_env(mut self, include: bool) -> Self {
        self.include_env = include;
        self
    }

    /// Add a TOML document. Later documents take precedence.
    pub fn with_toml<S: Into<String>>(mut self, document: S) -> Self {
        self.sources.push(Source::Toml(document.into()));
        self
    }

    /// Add a JSON document. Later documents take precedence.
    pub fn with_json<S: Into<String>>(mut self, document: S) -> Self {
        self.sources.push(Source::Json(document.into()));
        self
    }

    /// Merge all sources and validate the result.
    #[tracing::instrument(skip(self), fields(sources = self.sources.len(), env = self.include_env))]
    pub fn load(self) -> ConfigResult<MetricsConfig> {
        tracing::debug!("loading metrics configuration");
        let mut figment = Figment::new().merge(Serialized::defaults(MetricsConfig::default()));

        for source in &self.sources {
            figment = match source {
                Source::Toml(doc) => figment.merge(Toml::string(doc)),
                Source::Json(doc) => figment.merge(Json::string(doc)),
            };
        }

        if self.include_env {
            figment = figment.merge(Env::prefixed(ENV_PREFIX).lowercase(true));
        }

        let config: MetricsConfig = figment
            .extract()
            .map_err(|e| ConfigError::Deserialize(Box::new(e)))?;
        config.validate()?;

        tracing::debug!(
            long_word_threshold = config.long_word_threshold,
            complex_word_syllables = config.complex_word_syllables,
            unique_words_scale = config.unique_words_scale,
            "configuration loaded"
        );
        Ok(config)
    }
}
