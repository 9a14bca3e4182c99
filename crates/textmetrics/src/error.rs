//! Error types for textmetrics.

use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// A threshold was set to a value no metric can use.
    #[error("invalid value for {field}: {value}")]
    InvalidThreshold {
        /// The configuration field that was rejected.
        field: &'static str,
        /// The rejected value, formatted for display.
        value: String,
    },
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur when computing a ratio-based metric.
///
/// Every formula divides by the word count, the sentence count, or both.
/// Rather than letting `NaN` or infinity leak out, the metric fails.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MetricsError {
    /// The text contains no word tokens.
    #[error("{metric}: text contains no words")]
    NoWords {
        /// Name of the metric that was requested.
        metric: &'static str,
    },

    /// The text contains no sentences.
    #[error("{metric}: text contains no sentences")]
    NoSentences {
        /// Name of the metric that was requested.
        metric: &'static str,
    },
}

/// Result type alias using [`MetricsError`].
pub type MetricsResult<T> = Result<T, MetricsError>;
