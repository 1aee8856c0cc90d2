//! Hindi words. Two-digit numbers are irregular, so the table is direct.

use super::{CRORE, HUNDRED, LAKH, Language, LanguageProfile, MagnitudeUnit, THOUSAND};
use crate::lexicon::Lexicon;

#[rustfmt::skip]
static WORDS: [&str; 100] = [
    "शून्य", "एक", "दो", "तीन", "चार", "पांच", "छह", "सात", "आठ", "नौ",
    "दस", "ग्यारह", "बारह", "तेरह", "चौदह", "पंद्रह", "सोलह", "सत्रह", "अठारह", "उन्नीस",
    "बीस", "इक्कीस", "बाईस", "तेईस", "चौबीस", "पच्चीस", "छब्बीस", "सत्ताईस", "अट्ठाइस", "उन्तीस",
    "तीस", "इकत्तीस", "बत्तीस", "तेंतीस", "चौंतीस", "पैंतीस", "छत्तीस", "सैंतीस", "अड़तीस", "उनतालीस",
    "चालीस", "इकतालीस", "बयालीस", "तैंतालीस", "चवालीस", "पैंतालीस", "छियालीस", "सैंतालीस", "अड़तालीस", "उनचास",
    "पचास", "इक्यावन", "बावन", "तिरपन", "चौवन", "पचपन", "छप्पन", "सत्तावन", "अट्ठावन", "उनसठ",
    "साठ", "इकसठ", "बासठ", "तिरसठ", "चौंसठ", "पैसठ", "छियासठ", "सड़सठ", "अड़सठ", "उनहत्तर",
    "सत्तर", "इकहत्तर", "बहत्तर", "तिहत्तर", "चौहत्तर", "पचहत्तर", "छिहत्तर", "सतहत्तर", "अठहत्तर", "उन्यासी",
    "अस्सी", "इक्यासी", "बयासी", "तिरासी", "चौरासी", "पचासी", "छियासी", "सत्तासी", "अठासी", "नवासी",
    "नब्बे", "इक्यानबे", "बयान्वे", "तिरानवे", "चौरानवे", "पंचानवे", "छियानबे", "सत्तानवे", "अठानवे", "निन्यानवे",
];

static MAGNITUDES: [MagnitudeUnit; 4] = [
    MagnitudeUnit { value: CRORE, name: "करोड़" },
    MagnitudeUnit { value: LAKH, name: "लाख" },
    MagnitudeUnit { value: THOUSAND, name: "हज़ार" },
    MagnitudeUnit { value: HUNDRED, name: "सौ" },
];

pub(super) static PROFILE: LanguageProfile = LanguageProfile {
    language: Language::Hindi,
    lexicon: Lexicon::Direct(&WORDS),
    magnitudes: &MAGNITUDES,
    whole_label: "रुपये",
    fraction_label: "पैसे",
    only: "केवल",
    two_hundred: None,
    capitalize_labels: false,
};
