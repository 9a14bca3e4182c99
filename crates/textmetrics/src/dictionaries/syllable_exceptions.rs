//! Words the syllable heuristic is known to miscount.
//!
//! Deliberately tiny. This is a correction list for a handful of very common
//! words, not a pronunciation dictionary.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Known syllable counts that override the heuristic.
pub static SYLLABLE_EXCEPTIONS: LazyLock<HashMap<&'static str, i64>> =
    LazyLock::new(|| HashMap::from([("every", 2), ("family", 2), ("something", 2)]));

/// Look up a cleaned, lowercase word in the exception table.
pub fn lookup_exception(word: &str) -> Option<i64> {
    SYLLABLE_EXCEPTIONS.get(word).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_exceptions() {
        assert_eq!(lookup_exception("every"), Some(2));
        assert_eq!(lookup_exception("family"), Some(2));
        assert_eq!(lookup_exception("something"), Some(2));
    }

    #[test]
    fn lookup_is_exact() {
        assert_eq!(lookup_exception("Every"), None);
        assert_eq!(lookup_exception("everything"), None);
        assert_eq!(lookup_exception(""), None);
    }
}
