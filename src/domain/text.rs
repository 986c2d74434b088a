// src/domain/text.rs
//
// Text folding used by every search and by list membership checks.

use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

// Anything that is not a letter or a decimal digit. Other numerics such as
// "Ⅱ", "²" or "½" are dropped too.
static NOT_LETTER_OR_DIGIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\p{L}\p{Nd}]").expect("static pattern"));

/// Fold a string into its comparison key.
///
/// Decomposes the text, drops combining marks, lower-cases it and keeps
/// only letters and decimal digits (whitespace and punctuation disappear).
/// Two strings are equivalent iff their keys are equal.
pub fn normalize(texto: &str) -> String {
    let folded: String = texto
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect();
    NOT_LETTER_OR_DIGIT.replace_all(&folded, "").into_owned()
}

/// Equivalence under [`normalize`]
pub fn equivalent(a: &str, b: &str) -> bool {
    normalize(a) == normalize(b)
}

/// True if the key of `needle` is a substring of the key of `haystack`
pub fn contains_normalized(haystack: &str, needle: &str) -> bool {
    normalize(haystack).contains(&normalize(needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_accents_case_and_spaces() {
        assert_eq!(normalize("Ficção Científica"), "ficcaocientifica");
        assert_eq!(normalize("  O Pequeno PRÍNCIPE "), "opequenoprincipe");
    }

    #[test]
    fn test_strips_punctuation() {
        assert_eq!(normalize("978-85-359-0277-1"), "9788535902771");
        assert_eq!(normalize("J.R.R. Tolkien"), "jrrtolkien");
        assert_eq!(normalize("Steins;Gate"), "steinsgate");
    }

    #[test]
    fn test_keeps_only_letters_and_decimal_digits() {
        assert_eq!(normalize("Rocky Ⅱ"), "rocky");
        assert_eq!(normalize("x²"), "x");
        assert_eq!(normalize("½"), "");
        assert_eq!(normalize("Blade Runner 2049"), "bladerunner2049");
        assert!(equivalent("Rocky Ⅱ", "ROCKY"));
    }

    #[test]
    fn test_idempotent() {
        for s in ["Ação", "Sátira!", "Apple TV+", "Bráulio Mantovani", "", "   ", "Rocky Ⅱ", "½"] {
            let once = normalize(s);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn test_equivalent_and_contains() {
        assert!(equivalent("Christopher Nolan", "christopher nolán"));
        assert!(!equivalent("Nolan", "Christopher Nolan"));
        assert!(contains_normalized("Ficção Científica", "ficcao"));
        assert!(contains_normalized("Drama", ""));
        assert!(!contains_normalized("Drama", "Crime"));
    }
}
