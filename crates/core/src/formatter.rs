//! Amount rendering with currency labels.

use std::borrow::Cow;

use crate::amount::Amount;
use crate::error::ConversionError;
use crate::labels::CurrencyLabels;
use crate::language::{Language, LanguageProfile};

/// Whole and fractional unit words after override resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitLabels<'a> {
    /// Whole-unit word, e.g. "Rupees".
    pub whole: Cow<'a, str>,
    /// Fractional-unit word, e.g. "Paise". Blank means none is written.
    pub fraction: Cow<'a, str>,
}

/// Renders amounts in one language.
///
/// # Example
///
/// ```
/// use shabd_core::{AmountFormatter, CurrencyLabels, Language};
///
/// let labels = CurrencyLabels::empty();
/// let formatter = AmountFormatter::new(Language::English, &labels);
/// assert_eq!(
///     formatter.format("100.25", None).unwrap(),
///     "One Hundred Rupees Twenty Five Paise Only"
/// );
/// ```
#[derive(Debug, Clone, Copy)]
pub struct AmountFormatter<'a> {
    profile: &'static LanguageProfile,
    labels: &'a CurrencyLabels,
}

impl<'a> AmountFormatter<'a> {
    /// Creates a formatter for `language` using its label overrides.
    #[must_use]
    pub fn new(language: Language, labels: &'a CurrencyLabels) -> Self {
        Self {
            profile: language.profile(),
            labels,
        }
    }

    /// Language this formatter renders.
    #[must_use]
    pub fn language(&self) -> Language {
        self.profile.language()
    }

    /// Formats `amount_text` with the language's default currency labels.
    pub fn format_default(&self, amount_text: &str) -> Result<String, ConversionError> {
        self.format(amount_text, None)
    }

    /// Formats `amount_text` (`<digits>` or `<digits>.<digits>`), using the
    /// labels configured for `currency_code` when present.
    pub fn format(
        &self,
        amount_text: &str,
        currency_code: Option<&str>,
    ) -> Result<String, ConversionError> {
        let amount: Amount = amount_text.parse()?;
        Ok(self.format_amount(amount, currency_code))
    }

    /// Formats an already-parsed amount.
    #[must_use]
    pub fn format_amount(&self, amount: Amount, currency_code: Option<&str>) -> String {
        let labels = self.resolve_labels(currency_code);
        let profile = self.profile;

        let mut words: Vec<Cow<'_, str>> = Vec::with_capacity(6);
        words.extend(profile.words_for_magnitude(amount.whole()).map(Cow::Owned));
        words.push(labels.whole);
        if amount.has_fraction() {
            words.extend(profile.words_for_magnitude(amount.fraction()).map(Cow::Owned));
            if !labels.fraction.trim().is_empty() {
                words.push(labels.fraction);
            }
        }
        words.push(Cow::Borrowed(profile.only()));

        words.join(" ")
    }

    /// Resolves the unit words for `currency_code`.
    ///
    /// Blank or unknown codes, and entries without any label key, use the
    /// language defaults. An entry missing only its whole-unit word keeps the
    /// default whole word; one missing its fractional word writes none.
    #[must_use]
    pub fn resolve_labels(&self, currency_code: Option<&str>) -> UnitLabels<'a> {
        let profile = self.profile;
        let record = currency_code
            .filter(|code| !code.trim().is_empty())
            .and_then(|code| self.labels.get(code));

        let Some(record) = record else {
            return UnitLabels {
                whole: Cow::Borrowed(profile.whole_label()),
                fraction: Cow::Borrowed(profile.fraction_label()),
            };
        };

        let whole = match record.whole.as_deref() {
            Some(text) if !text.trim().is_empty() => self.label_text(text),
            _ => Cow::Borrowed(profile.whole_label()),
        };
        let fraction = self.label_text(record.decimal.as_deref().unwrap_or_default());

        UnitLabels { whole, fraction }
    }

    fn label_text(&self, text: &'a str) -> Cow<'a, str> {
        if self.profile.capitalizes_labels() {
            Cow::Owned(capitalize_words(text))
        } else {
            Cow::Borrowed(text)
        }
    }
}

/// Upper-cases the first letter of every whitespace-separated word.
fn capitalize_words(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for ch in text.chars() {
        if ch.is_whitespace() {
            at_word_start = true;
            out.push(ch);
        } else if at_word_start {
            out.extend(ch.to_uppercase());
            at_word_start = false;
        } else {
            out.push(ch);
        }
    }
    out
}
