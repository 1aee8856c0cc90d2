//! English words, built compositionally.

use super::{CRORE, HUNDRED, LAKH, Language, LanguageProfile, MagnitudeUnit, THOUSAND};
use crate::lexicon::Lexicon;

static ONES: [&str; 10] = [
    "Zero", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine",
];

static TEENS: [&str; 9] = [
    "Eleven", "Twelve", "Thirteen", "Fourteen", "Fifteen", "Sixteen", "Seventeen", "Eighteen",
    "Nineteen",
];

static TENS: [&str; 9] = [
    "Ten", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

static MAGNITUDES: [MagnitudeUnit; 4] = [
    MagnitudeUnit { value: CRORE, name: "Crore" },
    MagnitudeUnit { value: LAKH, name: "Lacs" },
    MagnitudeUnit { value: THOUSAND, name: "Thousand" },
    MagnitudeUnit { value: HUNDRED, name: "Hundred" },
];

pub(super) static PROFILE: LanguageProfile = LanguageProfile {
    language: Language::English,
    lexicon: Lexicon::Composed {
        ones: &ONES,
        teens: &TEENS,
        tens: &TENS,
    },
    magnitudes: &MAGNITUDES,
    whole_label: "Rupees",
    fraction_label: "Paise",
    only: "Only",
    two_hundred: None,
    capitalize_labels: true,
};
