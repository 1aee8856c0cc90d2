//! Dispatch by language code.

use crate::error::ConversionError;
use crate::formatter::AmountFormatter;
use crate::labels::LabelCatalog;
use crate::language::Language;

/// Entry point for amount-in-words conversion.
///
/// Holds the label catalog loaded at start-up; every conversion only reads it,
/// so one instance can be shared across threads.
///
/// # Example
///
/// ```
/// use shabd_core::{LabelCatalog, NumberToWords};
///
/// let converter = NumberToWords::new(LabelCatalog::empty());
/// assert_eq!(
///     converter.number_to_words("1200", "gu").unwrap(),
///     "એક હજાર બસ્સો રૂપિયા કેવળ"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct NumberToWords {
    catalog: LabelCatalog,
}

impl NumberToWords {
    /// Creates a converter over `catalog`.
    #[must_use]
    pub fn new(catalog: LabelCatalog) -> Self {
        Self { catalog }
    }

    /// Creates a converter over the label resources compiled into the binary.
    #[must_use]
    pub fn bundled() -> Self {
        Self::new(LabelCatalog::bundled())
    }

    /// Label catalog in use.
    #[must_use]
    pub fn catalog(&self) -> &LabelCatalog {
        &self.catalog
    }

    /// Formatter for a known language.
    #[must_use]
    pub fn formatter(&self, language: Language) -> AmountFormatter<'_> {
        AmountFormatter::new(language, self.catalog.labels(language))
    }

    /// English formatter.
    #[must_use]
    pub fn english(&self) -> AmountFormatter<'_> {
        self.formatter(Language::English)
    }

    /// Hindi formatter.
    #[must_use]
    pub fn hindi(&self) -> AmountFormatter<'_> {
        self.formatter(Language::Hindi)
    }

    /// Gujarati formatter.
    #[must_use]
    pub fn gujarati(&self) -> AmountFormatter<'_> {
        self.formatter(Language::Gujarati)
    }

    /// Converts `amount` in the language named by `language_code`, with that
    /// language's default currency labels. Unknown codes render English.
    pub fn number_to_words(
        &self,
        amount: &str,
        language_code: &str,
    ) -> Result<String, ConversionError> {
        self.number_to_words_with_currency(amount, language_code, None)
    }

    /// Converts `amount` using the labels configured for `currency_code`.
    pub fn number_to_words_with_currency(
        &self,
        amount: &str,
        language_code: &str,
        currency_code: Option<&str>,
    ) -> Result<String, ConversionError> {
        self.formatter(Language::from_code(language_code))
            .format(amount, currency_code)
    }
}
