use deunicode::deunicode;
use regex::Regex;
use std::sync::OnceLock;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

fn whitespace_run() -> Option<&'static Regex> {
    static WHITESPACE_RUN: OnceLock<Option<Regex>> = OnceLock::new();
    WHITESPACE_RUN
        .get_or_init(|| Regex::new(r"\s+").ok())
        .as_ref()
}

/// Vertical tab, form feed, next line, and the line/paragraph separators.
/// `\s` already matches all of these, but not every regex engine has a
/// vertical-space class, so the pass compiles separately and downgrades to
/// a no-op if the pattern is unsupported.
fn vertical_space_run() -> Option<&'static Regex> {
    static VERTICAL_SPACE_RUN: OnceLock<Option<Regex>> = OnceLock::new();
    VERTICAL_SPACE_RUN
        .get_or_init(|| Regex::new(r"[\x0B\x0C\u{85}\u{2028}\u{2029}]+").ok())
        .as_ref()
}

/// Collapses every run of whitespace into a single ASCII space and trims
/// the ends. Best-effort: a normalization pass whose pattern failed to
/// compile is skipped rather than surfaced as an error.
pub fn standardize_whitespace(text: &str) -> String {
    let mut text = text.to_string();
    if let Some(re) = whitespace_run() {
        text = re.replace_all(&text, " ").into_owned();
    }
    if let Some(re) = vertical_space_run() {
        text = re.replace_all(&text, " ").into_owned();
    }
    text.trim().to_string()
}

/// Reduces text toward a plain-Latin baseline so visually similar names
/// compare equal: romanize, strip combining diacritics, lowercase.
pub fn reduce_confusables(text: &str) -> String {
    let romanized = deunicode(text);
    let deaccented: String = romanized
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect();
    deaccented.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_runs_collapse_to_single_spaces() {
        assert_eq!(standardize_whitespace("Super\t\tUsers"), "Super Users");
        assert_eq!(standardize_whitespace("a \n b\r\nc"), "a b c");
        assert_eq!(standardize_whitespace("  Moderators  "), "Moderators");
    }

    #[test]
    fn test_vertical_space_collapses() {
        assert_eq!(standardize_whitespace("a\x0Bb"), "a b");
        assert_eq!(standardize_whitespace("a\x0Cb"), "a b");
        assert_eq!(standardize_whitespace("a\u{2028}b"), "a b");
        assert_eq!(standardize_whitespace("a\u{2029}b"), "a b");
    }

    #[test]
    fn test_standardize_whitespace_is_idempotent() {
        for input in ["  a \t b  ", "plain", "", "a\u{2028}\u{2029} b"] {
            let once = standardize_whitespace(input);
            assert_eq!(standardize_whitespace(&once), once);
        }
    }

    #[test]
    fn test_accents_reduce_to_plain_latin() {
        assert_eq!(reduce_confusables("Ádmins"), "admins");
        assert_eq!(reduce_confusables("café"), "cafe");
    }

    #[test]
    fn test_cyrillic_romanizes() {
        assert_eq!(reduce_confusables("Админ"), "admin");
    }

    #[test]
    fn test_plain_ascii_passes_through_lowercased() {
        assert_eq!(reduce_confusables("Moderators"), "moderators");
    }

    #[test]
    fn test_reduce_confusables_is_deterministic_and_idempotent() {
        for input in ["Ádmins", "Админ", "plain"] {
            let once = reduce_confusables(input);
            assert_eq!(reduce_confusables(input), once);
            assert_eq!(reduce_confusables(&once), once);
        }
    }
}
