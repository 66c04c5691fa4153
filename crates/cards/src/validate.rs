use std::{fmt, ops::Deref, str::FromStr};

use masking::{PeekInterface, Strategy, StrongSecret, WithType};
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

const CARD_NUMBER_LENGTHS: std::ops::RangeInclusive<usize> = 12..=19;
const VISIBLE_PREFIX: usize = 6;
const VISIBLE_SUFFIX: usize = 4;

#[derive(Debug, Error)]
#[error("not a valid credit card number")]
pub struct CCValError;

/// A primary account number that passed the length and Luhn checks. Whitespace is stripped
/// on parsing.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct CardNumber(StrongSecret<String, CardNumberStrategy>);

impl CardNumber {
    /// Issuer identification number, the first six digits.
    pub fn get_card_isin(&self) -> String {
        self.0
            .peek()
            .get(..VISIBLE_PREFIX)
            .unwrap_or_default()
            .to_owned()
    }

    pub fn get_last4(&self) -> String {
        let number = self.0.peek();
        number
            .get(number.len().saturating_sub(VISIBLE_SUFFIX)..)
            .unwrap_or_default()
            .to_owned()
    }
}

impl FromStr for CardNumber {
    type Err = CCValError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let number: String = value.split_whitespace().collect();

        let is_valid = CARD_NUMBER_LENGTHS.contains(&number.len())
            && number.bytes().all(|byte| byte.is_ascii_digit())
            && luhn::valid(&number);

        is_valid
            .then(|| Self(StrongSecret::new(number)))
            .ok_or(CCValError)
    }
}

impl TryFrom<String> for CardNumber {
    type Error = CCValError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl Deref for CardNumber {
    type Target = StrongSecret<String, CardNumberStrategy>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'de> Deserialize<'de> for CardNumber {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer)?
            .parse()
            .map_err(serde::de::Error::custom)
    }
}

/// Keeps the first six and the last four digits, the parts a receipt or a dashboard shows.
/// Anything that is not shaped like a card number is masked whole.
pub enum CardNumberStrategy {}

impl<T: AsRef<str>> Strategy<T> for CardNumberStrategy {
    fn fmt(value: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let number = value.as_ref();

        let hidden = number.len().saturating_sub(VISIBLE_PREFIX + VISIBLE_SUFFIX);
        let visible = number
            .get(..VISIBLE_PREFIX)
            .zip(number.get(VISIBLE_PREFIX + hidden..));

        match visible {
            Some((prefix, suffix)) if CARD_NUMBER_LENGTHS.contains(&number.len()) => {
                write!(f, "{prefix}{}{suffix}", "*".repeat(hidden))
            }
            _ => WithType::fmt(value, f),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use masking::Secret;

    use super::*;

    #[test]
    fn parses_amex_with_whitespace() {
        let card_number: CardNumber = "3714 4963 5398 431".parse().unwrap();

        assert_eq!(card_number.peek(), "371449635398431");
        assert_eq!(card_number.get_card_isin(), "371449");
        assert_eq!(card_number.get_last4(), "8431");
        assert_eq!(format!("{card_number:?}"), "CardNumber(371449*****8431)");
    }

    #[test]
    fn rejects_bad_checksums_and_lengths() {
        assert_eq!(
            "4242424242424241".parse::<CardNumber>().unwrap_err().to_string(),
            "not a valid credit card number"
        );
        // passes the checksum but is far too short
        assert!("18".parse::<CardNumber>().is_err());
        assert!("4242-4242-4242-4242".parse::<CardNumber>().is_err());
    }

    #[test]
    fn masks_the_middle_digits() {
        let visa: Secret<String, CardNumberStrategy> = Secret::new("4242424242424242".into());
        assert_eq!(format!("{visa:?}"), "424242******4242");

        let short: Secret<String, CardNumberStrategy> = Secret::new("424242424242".into());
        assert_eq!(format!("{short:?}"), "424242**4242");

        let not_a_card: Secret<String, CardNumberStrategy> = Secret::new("1234567890".into());
        assert_eq!(format!("{not_a_card:?}"), "*** alloc::string::String ***");
    }

    #[test]
    fn serializes_in_clear_and_masks_in_logs() {
        let card_number = serde_json::from_str::<CardNumber>(r#""4000 0566 5566 5556""#).unwrap();

        assert_eq!(
            serde_json::to_string(&card_number).unwrap(),
            r#""4000056655665556""#
        );
        assert_eq!(
            masking::masked_serialize(&card_number).unwrap(),
            serde_json::json!("400005******5556")
        );
        assert_eq!(
            serde_json::from_str::<CardNumber>(r#""1234 5678""#)
                .unwrap_err()
                .to_string(),
            "not a valid credit card number"
        );
    }
}
