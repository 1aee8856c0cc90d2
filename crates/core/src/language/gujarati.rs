//! Gujarati words.

use super::{CRORE, HUNDRED, LAKH, Language, LanguageProfile, MagnitudeUnit, THOUSAND};
use crate::lexicon::Lexicon;

#[rustfmt::skip]
static WORDS: [&str; 100] = [
    "શૂન્ય", "એક", "બે", "ત્રણ", "ચાર", "પાંચ", "છ", "સાત", "આઠ", "નવ",
    "દસ", "અગિયાર", "બાર", "તેર", "ચૌદ", "પંદર", "સોળ", "સત્તર", "અઢાર", "ઓગણીસ",
    "વીસ", "એકવીસ", "બાવીસ", "ત્રેવીસ", "ચોવીસ", "પચ્ચિસ", "છવ્વીસ", "સત્તાવીસ", "અઠયાવીસ", "ઓગણત્રીસ",
    "ત્રીસ", "એકત્રીસ", "બત્રીસ", "તેત્રીસ", "ચોત્રીસ", "પાત્રીસ", "છત્રીસ", "સાડત્રીસ", "આડત્રીસ", "ઓગણ ચાલીસ",
    "ચાલીસ", "એકતાળીસ", "બેતાલીસ", "તેતાલીસ", "ચુમ્માલીસ", "પિસ્તાલીસ", "છેતાલીસ", "સુડતાલીસ", "અડતાલીસ", "ઓગણપચાસ",
    "પચાસ", "એકાવન", "બાવન", "ત્રેપન", "ચોપન", "પંચાવન", "છપ્પન", "સત્તાવન", "અઠાવન", "ઓગણસાઠ",
    "સાઇઠ", "એકસઠ", "બાસઠ", "ત્રેસઠ", "ચોસઠ", "પાસંઠ", "છાસઠ", "સડસઠ", "અડસઠ", "ઓગણ સિતેર",
    "સિત્તેર", "એકોતેર", "બોતેર", "તોતેર", "ચુમોતેર", "પંચોતેર", "છોતેર", "સિત્યોતેર", "ઇઠ્યોતેર", "ઓગણાએંસી",
    "એંસી", "એક્યાસી", "બ્યાશી", "ત્રયાંસી", "ચોર્યાસી", "પંચાસી", "છ્યાસી", "સિત્યાસી", "ઈઠ્યાસી", "નેવ્યાસી",
    "નેવું", "એકાણું", "બાણું", "ત્રાણુ", "ચોરાણું", "પંચાણું", "છન્નું", "સત્તાણું", "અઠ્ઠાણું", "નવ્વાણું",
];

static MAGNITUDES: [MagnitudeUnit; 4] = [
    MagnitudeUnit { value: CRORE, name: "કરોડ઼" },
    MagnitudeUnit { value: LAKH, name: "લાખ" },
    MagnitudeUnit { value: THOUSAND, name: "હજાર" },
    MagnitudeUnit { value: HUNDRED, name: "સો" },
];

pub(super) static PROFILE: LanguageProfile = LanguageProfile {
    language: Language::Gujarati,
    lexicon: Lexicon::Direct(&WORDS),
    magnitudes: &MAGNITUDES,
    whole_label: "રૂપિયા",
    fraction_label: "પૈસા",
    only: "કેવળ",
    // "two hundred" is spoken as one word
    two_hundred: Some("બસ્સો"),
    capitalize_labels: false,
};
