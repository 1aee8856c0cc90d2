//! Amount parsing.
//!
//! An amount is two non-negative integers: the whole units and the count of
//! minor units after the decimal point. The fraction is taken as written, so
//! `"10.5"` is ten rupees and five paise, not fifty.

use std::str::FromStr;

use crate::error::ConversionError;

/// A monetary amount split into whole and fractional parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Amount {
    whole: i64,
    fraction: i64,
}

impl Amount {
    /// Creates an amount from its two parts.
    ///
    /// # Errors
    ///
    /// Returns `MalformedAmount` if either part is negative.
    pub fn new(whole: i64, fraction: i64) -> Result<Self, ConversionError> {
        if whole < 0 || fraction < 0 {
            return Err(ConversionError::MalformedAmount(format!("{whole}.{fraction}")));
        }
        Ok(Self { whole, fraction })
    }

    /// Whole currency units.
    #[must_use]
    pub const fn whole(&self) -> i64 {
        self.whole
    }

    /// Minor currency units.
    #[must_use]
    pub const fn fraction(&self) -> i64 {
        self.fraction
    }

    /// Returns true if there is a non-zero fractional part.
    #[must_use]
    pub const fn has_fraction(&self) -> bool {
        self.fraction > 0
    }
}

impl FromStr for Amount {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split('.');
        let whole = parse_part(parts.next().unwrap_or_default(), s)?;
        let fraction = match parts.next() {
            Some(part) => parse_part(part, s)?,
            None => 0,
        };
        if parts.next().is_some() {
            return Err(ConversionError::MalformedAmount(s.to_string()));
        }
        Ok(Self { whole, fraction })
    }
}

fn parse_part(part: &str, input: &str) -> Result<i64, ConversionError> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ConversionError::MalformedAmount(input.to_string()));
    }
    part.parse::<i64>()
        .map_err(|_| ConversionError::AmountOutOfRange(input.to_string()))
}
