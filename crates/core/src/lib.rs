//! Amount-in-words conversion for Shabd.
//!
//! Renders a monetary amount such as `1234567.50` as words using the Indian
//! grouping (Crore, Lacs, Thousand, Hundred) in English, Hindi or Gujarati.
//! The conversion path is pure: currency labels are loaded once into a
//! [`LabelCatalog`] and passed in explicitly.
//!
//! # Modules
//!
//! - `amount` - Parsing of `<whole>[.<fraction>]` amount text
//! - `language` - Language profiles and their lexicon tables
//! - `lexicon` - Two-digit word lookup
//! - `magnitude` - Crore/lakh/thousand/hundred decomposition
//! - `labels` - Currency label resources
//! - `formatter` - Amount rendering with currency labels
//! - `router` - Dispatch by language code

pub mod amount;
pub mod error;
pub mod formatter;
pub mod labels;
pub mod language;
pub mod lexicon;
pub mod magnitude;
pub mod router;

#[cfg(test)]
mod props;

pub use amount::Amount;
pub use error::ConversionError;
pub use formatter::AmountFormatter;
pub use labels::{CurrencyLabels, LabelCatalog, LabelRecord, LabelSource};
pub use language::{Language, LanguageProfile};
pub use router::NumberToWords;
