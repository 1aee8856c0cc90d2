//! Currency label resources.
//!
//! Each language has a JSON resource mapping a currency code to the words used
//! for its whole and fractional units:
//!
//! ```json
//! { "USD": { "wholeValText": "dollars", "decimalValText": "cents" } }
//! ```
//!
//! Resources are loaded once. A missing or malformed resource is logged and
//! replaced by an empty set, so every lookup falls back to the language
//! defaults instead of failing the conversion.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::ConversionError;
use crate::language::Language;

/// Label override for one currency.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LabelRecord {
    /// Whole-unit word, e.g. "dollars".
    #[serde(rename = "wholeValText", default)]
    pub whole: Option<String>,
    /// Fractional-unit word, e.g. "cents".
    #[serde(rename = "decimalValText", default)]
    pub decimal: Option<String>,
}

impl LabelRecord {
    /// Returns true if neither label key was present.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.whole.is_none() && self.decimal.is_none()
    }
}

/// Label overrides for one language, keyed by currency code.
#[derive(Debug, Clone, Default)]
pub struct CurrencyLabels {
    entries: HashMap<String, LabelRecord>,
}

impl CurrencyLabels {
    /// An empty set; every lookup misses.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parses a label resource.
    pub fn from_json(json: &str) -> Result<Self, ConversionError> {
        let entries: HashMap<String, LabelRecord> = serde_json::from_str(json)?;
        Ok(Self { entries })
    }

    /// Reads and parses a label resource file.
    pub fn from_file(path: &Path) -> Result<Self, ConversionError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConversionError::LabelRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Looks up a currency code (exact, case-sensitive).
    ///
    /// Entries without any recognized key are treated as missing.
    #[must_use]
    pub fn get(&self, currency_code: &str) -> Option<&LabelRecord> {
        self.entries
            .get(currency_code)
            .filter(|record| !record.is_empty())
    }

    /// Number of currency entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Where label resources come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelSource<'a> {
    /// Resources compiled into the binary.
    Bundled,
    /// `currency-text-<code>.json` files in a directory.
    Directory(&'a Path),
}

/// Currency labels for every supported language.
#[derive(Debug, Clone, Default)]
pub struct LabelCatalog {
    english: CurrencyLabels,
    hindi: CurrencyLabels,
    gujarati: CurrencyLabels,
}

impl LabelCatalog {
    /// A catalog with no overrides; every language uses its default labels.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Loads the resources compiled into the binary.
    #[must_use]
    pub fn bundled() -> Self {
        Self::load(&LabelSource::Bundled)
    }

    /// Loads `currency-text-<code>.json` from `dir`.
    #[must_use]
    pub fn from_dir(dir: &Path) -> Self {
        Self::load(&LabelSource::Directory(dir))
    }

    /// Loads every language's labels, degrading to an empty set per language
    /// on failure.
    #[must_use]
    pub fn load(source: &LabelSource<'_>) -> Self {
        let load = |language: Language| {
            let result = match source {
                LabelSource::Bundled => CurrencyLabels::from_json(bundled_resource(language)),
                LabelSource::Directory(dir) => {
                    CurrencyLabels::from_file(&dir.join(language.resource_name()))
                }
            };
            labels_or_empty(language, result)
        };

        Self {
            english: load(Language::English),
            hindi: load(Language::Hindi),
            gujarati: load(Language::Gujarati),
        }
    }

    /// Builds a catalog from already-parsed label sets.
    #[must_use]
    pub fn from_parts(
        english: CurrencyLabels,
        hindi: CurrencyLabels,
        gujarati: CurrencyLabels,
    ) -> Self {
        Self {
            english,
            hindi,
            gujarati,
        }
    }

    /// Labels for one language.
    #[must_use]
    pub fn labels(&self, language: Language) -> &CurrencyLabels {
        match language {
            Language::English => &self.english,
            Language::Hindi => &self.hindi,
            Language::Gujarati => &self.gujarati,
        }
    }
}

fn bundled_resource(language: Language) -> &'static str {
    match language {
        Language::English => include_str!("../resources/currency-text-en.json"),
        Language::Hindi => include_str!("../resources/currency-text-hi.json"),
        Language::Gujarati => include_str!("../resources/currency-text-gu.json"),
    }
}

fn labels_or_empty(
    language: Language,
    result: Result<CurrencyLabels, ConversionError>,
) -> CurrencyLabels {
    match result {
        Ok(labels) => {
            tracing::info!(
                language = %language,
                resource = language.resource_name(),
                currencies = labels.len(),
                "Currency labels loaded"
            );
            labels
        }
        Err(e) => {
            tracing::warn!(
                language = %language,
                resource = language.resource_name(),
                error = %e,
                "Currency labels unavailable, using language defaults"
            );
            CurrencyLabels::empty()
        }
    }
}
