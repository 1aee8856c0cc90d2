//! Magnitude decomposition.
//!
//! Splits a non-negative integer into crore, lakh, thousand and hundred groups
//! and renders each group count followed by its unit name. Counts above 99
//! (beyond 99 crore) are rendered recursively, so `100_00_00_000` reads as
//! "One Hundred Crore".

use std::borrow::Cow;

use crate::language::{HUNDRED, LanguageProfile};

impl LanguageProfile {
    /// Words for a non-negative integer; `None` when `n` is negative.
    ///
    /// # Example
    ///
    /// ```
    /// use shabd_core::Language;
    ///
    /// let words = Language::English.profile().words_for_magnitude(1_234_567);
    /// assert_eq!(
    ///     words.as_deref(),
    ///     Some("Twelve Lacs Thirty Four Thousand Five Hundred Sixty Seven")
    /// );
    /// ```
    #[must_use]
    pub fn words_for_magnitude(&self, n: i64) -> Option<String> {
        if n < 0 {
            return None;
        }
        if n < 100 {
            return self.words_for_two_digit(n).map(Cow::into_owned);
        }

        let mut tokens: Vec<Cow<'static, str>> = Vec::new();
        let mut rest = n;
        for unit in self.magnitudes() {
            let count = rest / unit.value;
            if count > 0 {
                if count > 99 {
                    tokens.extend(self.words_for_magnitude(count).map(Cow::Owned));
                }
                match self.two_hundred() {
                    Some(word) if unit.value == HUNDRED && count == 2 => {
                        tokens.push(Cow::Borrowed(word));
                    }
                    _ => {
                        // no contribution when count > 99, the recursion above covers it
                        tokens.extend(self.words_for_two_digit(count));
                        tokens.push(Cow::Borrowed(unit.name));
                    }
                }
            }
            rest %= unit.value;
        }
        if rest > 0 {
            tokens.extend(self.words_for_two_digit(rest));
        }

        Some(tokens.join(" ").trim().to_string())
    }
}
