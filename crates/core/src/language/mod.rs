//! Language profiles.
//!
//! A profile bundles everything needed to render an amount in one language:
//! the two-digit lexicon, the magnitude table, default currency labels and the
//! closing "only" word. Profiles are `static` and never change.

mod english;
mod gujarati;
mod hindi;

use std::borrow::Cow;

use crate::lexicon::Lexicon;

/// Supported output languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    /// English (`en`), the fallback for unknown codes.
    #[default]
    English,
    /// Hindi (`hi`)
    Hindi,
    /// Gujarati (`gu`)
    Gujarati,
}

impl Language {
    /// Every supported language.
    pub const ALL: [Self; 3] = [Self::English, Self::Hindi, Self::Gujarati];

    /// Resolves a language code, falling back to English for unknown codes.
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        code.parse().unwrap_or_else(|_| {
            tracing::debug!(code, "Unknown language code, using English");
            Self::English
        })
    }

    /// Two-letter language code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Hindi => "hi",
            Self::Gujarati => "gu",
        }
    }

    /// File name of this language's currency label resource.
    #[must_use]
    pub const fn resource_name(self) -> &'static str {
        match self {
            Self::English => "currency-text-en.json",
            Self::Hindi => "currency-text-hi.json",
            Self::Gujarati => "currency-text-gu.json",
        }
    }

    /// Rendering profile for this language.
    #[must_use]
    pub fn profile(self) -> &'static LanguageProfile {
        match self {
            Self::English => &english::PROFILE,
            Self::Hindi => &hindi::PROFILE,
            Self::Gujarati => &gujarati::PROFILE,
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Self::English),
            "hi" => Ok(Self::Hindi),
            "gu" => Ok(Self::Gujarati),
            _ => Err(format!("Unknown language: {s}")),
        }
    }
}

/// A named power of ten used to group digits.
#[derive(Debug, Clone, Copy)]
pub struct MagnitudeUnit {
    /// Value of one unit, e.g. `100_000` for a lakh.
    pub value: i64,
    /// Word appended after the unit count.
    pub name: &'static str,
}

/// Indian grouping values, largest first.
pub(crate) const CRORE: i64 = 10_000_000;
pub(crate) const LAKH: i64 = 100_000;
pub(crate) const THOUSAND: i64 = 1_000;
pub(crate) const HUNDRED: i64 = 100;

/// Everything needed to render numbers and amounts in one language.
#[derive(Debug)]
pub struct LanguageProfile {
    language: Language,
    lexicon: Lexicon,
    magnitudes: &'static [MagnitudeUnit; 4],
    whole_label: &'static str,
    fraction_label: &'static str,
    only: &'static str,
    /// Replaces "two hundred" with a single contracted word.
    two_hundred: Option<&'static str>,
    /// Configured currency labels are title-cased.
    capitalize_labels: bool,
}

impl LanguageProfile {
    /// Language this profile renders.
    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }

    /// Two-digit lexicon.
    #[must_use]
    pub const fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Magnitude table, strictly descending.
    #[must_use]
    pub const fn magnitudes(&self) -> &'static [MagnitudeUnit] {
        self.magnitudes
    }

    /// Default whole-unit currency label, e.g. "Rupees".
    #[must_use]
    pub const fn whole_label(&self) -> &'static str {
        self.whole_label
    }

    /// Default fractional-unit currency label, e.g. "Paise".
    #[must_use]
    pub const fn fraction_label(&self) -> &'static str {
        self.fraction_label
    }

    /// Closing word, e.g. "Only".
    #[must_use]
    pub const fn only(&self) -> &'static str {
        self.only
    }

    /// Contracted word for a hundred-group count of two, if the language has one.
    #[must_use]
    pub const fn two_hundred(&self) -> Option<&'static str> {
        self.two_hundred
    }

    /// Whether configured currency labels are title-cased before use.
    #[must_use]
    pub const fn capitalizes_labels(&self) -> bool {
        self.capitalize_labels
    }

    /// Words for `0..=99`; `None` outside that range.
    #[must_use]
    pub fn words_for_two_digit(&self, n: i64) -> Option<Cow<'static, str>> {
        self.lexicon.words(n)
    }
}
