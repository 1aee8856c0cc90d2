//! Property-based tests for amount-in-words conversion.
//!
//! - Lexicon totality over `0..=99`
//! - Hundred-group composition law
//! - Formatting determinism and label fallback

use proptest::prelude::*;

use crate::labels::LabelCatalog;
use crate::language::Language;
use crate::router::NumberToWords;

/// Strategy to pick a supported language.
fn language() -> impl Strategy<Value = Language> {
    prop::sample::select(Language::ALL.to_vec())
}

/// Strategy to generate amount text with an optional two-digit fraction.
fn amount_text() -> impl Strategy<Value = String> {
    (0i64..1_000_000_000_000, prop::option::of(0i64..100)).prop_map(|(whole, fraction)| {
        match fraction {
            Some(fraction) => format!("{whole}.{fraction:02}"),
            None => whole.to_string(),
        }
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// *For any* language and `0 <= n <= 99`, the lexicon has a non-empty word.
    #[test]
    fn prop_two_digit_is_total(language in language(), n in 0i64..100) {
        let words = language.profile().words_for_two_digit(n);
        prop_assert!(words.as_deref().is_some_and(|w| !w.is_empty()));
        prop_assert_eq!(words, language.profile().words_for_two_digit(n));
    }

    /// *For any* `100 <= n < 1000` off the Gujarati two-hundred path,
    /// `words(n) == words(n / 100) + " Hundred " + two(n % 100)`.
    #[test]
    fn prop_hundred_composition(language in language(), n in 100i64..1000) {
        prop_assume!(n % 100 != 0);
        let profile = language.profile();
        prop_assume!(profile.two_hundred().is_none() || n / 100 != 2);

        let hundred = profile.magnitudes()[3].name;
        let expected = format!(
            "{} {hundred} {}",
            profile.words_for_magnitude(n / 100).unwrap(),
            profile.words_for_two_digit(n % 100).unwrap()
        );
        prop_assert_eq!(profile.words_for_magnitude(n).unwrap(), expected);
    }

    /// *For any* `n >= 100` with a non-zero remainder, the last two digits are
    /// appended after the rendering of the rounded-down hundred.
    #[test]
    fn prop_remainder_suffix(language in language(), n in 100i64..i64::MAX) {
        prop_assume!(n % 100 != 0);
        let profile = language.profile();
        let expected = format!(
            "{} {}",
            profile.words_for_magnitude(n - n % 100).unwrap(),
            profile.words_for_two_digit(n % 100).unwrap()
        );
        prop_assert_eq!(profile.words_for_magnitude(n).unwrap(), expected);
    }

    /// *For any* non-negative `n`, the rendering is non-empty and single-spaced.
    #[test]
    fn prop_magnitude_well_formed(language in language(), n in 0i64..=i64::MAX) {
        let words = language.profile().words_for_magnitude(n).unwrap();
        prop_assert!(!words.is_empty());
        prop_assert!(!words.contains("  "), "double space in {:?}", words);
        prop_assert_eq!(words.trim(), words.as_str());
    }

    /// Formatting the same amount twice yields identical output.
    #[test]
    fn prop_format_is_deterministic(language in language(), amount in amount_text()) {
        let converter = NumberToWords::bundled();
        let first = converter.number_to_words(&amount, language.code()).unwrap();
        let second = converter.number_to_words(&amount, language.code()).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Output always ends with the language's "only" word.
    #[test]
    fn prop_format_ends_with_only(language in language(), amount in amount_text()) {
        let converter = NumberToWords::new(LabelCatalog::empty());
        let words = converter.number_to_words(&amount, language.code()).unwrap();
        let expected_suffix = format!(" {}", language.profile().only());
        prop_assert!(words.ends_with(&expected_suffix));
    }

    /// An unknown currency code renders exactly like no currency code.
    #[test]
    fn prop_unknown_currency_uses_defaults(
        language in language(),
        amount in amount_text(),
        code in "[A-Z]{3}",
    ) {
        let converter = NumberToWords::bundled();
        prop_assume!(converter.catalog().labels(language).get(&code).is_none());
        prop_assert_eq!(
            converter.number_to_words_with_currency(&amount, language.code(), Some(code.as_str())).unwrap(),
            converter.number_to_words(&amount, language.code()).unwrap()
        );
    }

    /// Gujarati uses the contracted word exactly when the hundred count is two.
    #[test]
    fn prop_gujarati_two_hundred(n in 100i64..10_000_000) {
        let profile = Language::Gujarati.profile();
        let words = profile.words_for_magnitude(n).unwrap();
        let contracted = profile.two_hundred().unwrap();
        let hundred_count = (n % 1000) / 100;
        prop_assert_eq!(words.contains(contracted), hundred_count == 2, "{}: {}", n, words);
    }
}
