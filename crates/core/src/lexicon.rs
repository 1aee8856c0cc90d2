//! Two-digit word lookup.
//!
//! Every language answers the same question, "what is `n` in words for
//! `0 <= n <= 99`", either by composing English-style ones/teens/tens or by
//! indexing a direct hundred-entry table.

use std::borrow::Cow;

/// Word table for the closed range `0..=99`.
#[derive(Debug, Clone, Copy)]
pub enum Lexicon {
    /// Built from ones, teens (11 to 19) and multiples of ten (10 to 90).
    Composed {
        /// Words for 0 to 9.
        ones: &'static [&'static str; 10],
        /// Words for 11 to 19.
        teens: &'static [&'static str; 9],
        /// Words for 10, 20, ... 90.
        tens: &'static [&'static str; 9],
    },
    /// One entry per value, for languages whose two-digit words are irregular.
    Direct(&'static [&'static str; 100]),
}

impl Lexicon {
    /// Returns the words for `n`, or `None` when `n` is outside `0..=99`.
    #[must_use]
    pub fn words(&self, n: i64) -> Option<Cow<'static, str>> {
        let index = usize::try_from(n).ok().filter(|&i| i < 100)?;
        let words = match self {
            Self::Direct(table) => Cow::Borrowed(table[index]),
            Self::Composed { ones, teens, tens } => {
                if index < 10 {
                    Cow::Borrowed(ones[index])
                } else if index % 10 == 0 {
                    Cow::Borrowed(tens[index / 10 - 1])
                } else if index < 20 {
                    Cow::Borrowed(teens[index - 11])
                } else {
                    Cow::Owned(format!("{} {}", tens[index / 10 - 1], ones[index % 10]))
                }
            }
        };
        Some(words)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::Language;
    use rstest::rstest;

    #[rstest]
    #[case(0, "Zero")]
    #[case(7, "Seven")]
    #[case(10, "Ten")]
    #[case(11, "Eleven")]
    #[case(19, "Nineteen")]
    #[case(20, "Twenty")]
    #[case(21, "Twenty One")]
    #[case(45, "Forty Five")]
    #[case(90, "Ninety")]
    #[case(99, "Ninety Nine")]
    fn test_english_composition(#[case] n: i64, #[case] expected: &str) {
        let lexicon = Language::English.profile().lexicon();
        assert_eq!(lexicon.words(n).as_deref(), Some(expected));
    }

    #[rstest]
    #[case(Language::Hindi, 0, "शून्य")]
    #[case(Language::Hindi, 25, "पच्चीस")]
    #[case(Language::Hindi, 99, "निन्यानवे")]
    #[case(Language::Gujarati, 0, "શૂન્ય")]
    #[case(Language::Gujarati, 39, "ઓગણ ચાલીસ")]
    #[case(Language::Gujarati, 99, "નવ્વાણું")]
    fn test_direct_tables(#[case] language: Language, #[case] n: i64, #[case] expected: &str) {
        let lexicon = language.profile().lexicon();
        assert_eq!(lexicon.words(n).as_deref(), Some(expected));
    }

    #[rstest]
    #[case(-1)]
    #[case(100)]
    #[case(i64::MAX)]
    #[case(i64::MIN)]
    fn test_out_of_range_is_none(#[case] n: i64) {
        for language in Language::ALL {
            assert!(language.profile().lexicon().words(n).is_none());
        }
    }

    #[test]
    fn test_composed_matches_spelled_out_table() {
        const SPELLED: [&str; 100] = [
            "Zero", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine",
            "Ten", "Eleven", "Twelve", "Thirteen", "Fourteen", "Fifteen", "Sixteen",
            "Seventeen", "Eighteen", "Nineteen", "Twenty", "Twenty One", "Twenty Two",
            "Twenty Three", "Twenty Four", "Twenty Five", "Twenty Six", "Twenty Seven",
            "Twenty Eight", "Twenty Nine", "Thirty", "Thirty One", "Thirty Two",
            "Thirty Three", "Thirty Four", "Thirty Five", "Thirty Six", "Thirty Seven",
            "Thirty Eight", "Thirty Nine", "Forty", "Forty One", "Forty Two", "Forty Three",
            "Forty Four", "Forty Five", "Forty Six", "Forty Seven", "Forty Eight",
            "Forty Nine", "Fifty", "Fifty One", "Fifty Two", "Fifty Three", "Fifty Four",
            "Fifty Five", "Fifty Six", "Fifty Seven", "Fifty Eight", "Fifty Nine", "Sixty",
            "Sixty One", "Sixty Two", "Sixty Three", "Sixty Four", "Sixty Five", "Sixty Six",
            "Sixty Seven", "Sixty Eight", "Sixty Nine", "Seventy", "Seventy One",
            "Seventy Two", "Seventy Three", "Seventy Four", "Seventy Five", "Seventy Six",
            "Seventy Seven", "Seventy Eight", "Seventy Nine", "Eighty", "Eighty One",
            "Eighty Two", "Eighty Three", "Eighty Four", "Eighty Five", "Eighty Six",
            "Eighty Seven", "Eighty Eight", "Eighty Nine", "Ninety", "Ninety One",
            "Ninety Two", "Ninety Three", "Ninety Four", "Ninety Five", "Ninety Six",
            "Ninety Seven", "Ninety Eight", "Ninety Nine",
        ];
        let composed = Language::English.profile().lexicon();
        let direct = Lexicon::Direct(&SPELLED);
        for n in 0..100 {
            assert_eq!(composed.words(n), direct.words(n), "mismatch at {n}");
        }
    }
}
