//! Dictionaries for text analysis.
//!
//! Curated word tables consulted before the syllable heuristics run.

pub mod syllable_exceptions;
