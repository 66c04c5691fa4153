//! Personal Identifiable Information protection.

use std::{convert::AsRef, fmt, ops, str::FromStr};

use error_stack::ResultExt;
use masking::{ExposeInterface, Secret, Strategy, WithType};
#[cfg(feature = "logs")]
use client_env::logger;

use crate::errors::{self, ValidationError};

pub use crate::consts::REDACTED;

/// Strategy for masking a PhoneNumber
#[derive(Debug)]
pub enum PhoneNumberStrategy {}

impl<T> Strategy<T> for PhoneNumberStrategy
where
    T: AsRef<str> + fmt::Debug,
{
    fn fmt(val: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let val_str: &str = val.as_ref();

        if let Some(last_four) = val_str
            .len()
            .checked_sub(4)
            .and_then(|start| val_str.get(start..))
        {
            // masks everything but the last 4 digits
            write!(f, "{}{}", "*".repeat(val_str.len() - 4), last_four)
        } else {
            WithType::fmt(val, f)
        }
    }
}

/// Strategy for masking Email
#[derive(Debug)]
pub enum EmailStrategy {}

impl<T> Strategy<T> for EmailStrategy
where
    T: AsRef<str> + fmt::Debug,
{
    fn fmt(val: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let val_str: &str = val.as_ref();
        match val_str.split_once('@') {
            Some((a, b)) => write!(f, "{}@{}", "*".repeat(a.len()), b),
            None => WithType::fmt(val, f),
        }
    }
}

/// Strategy for masking an IBAN: the country code and the last four characters stay visible.
#[derive(Debug)]
pub enum IbanStrategy {}

impl<T> Strategy<T> for IbanStrategy
where
    T: AsRef<str>,
{
    fn fmt(val: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let val_str: &str = val.as_ref();
        let len = val_str.len();

        match (val_str.get(..2), len.checked_sub(4).and_then(|i| val_str.get(i..))) {
            (Some(country), Some(last_four)) if len > 8 => {
                write!(f, "{country}{}{last_four}", "*".repeat(len - 6))
            }
            _ => {
                #[cfg(feature = "logs")]
                logger::warn!("Attempted to mask a malformed iban");
                WithType::fmt(val, f)
            }
        }
    }
}

/// International bank account number.
///
/// Whitespace is stripped and letters are upper-cased on construction; only the shape of the
/// value (country code, check digits, length) is checked locally.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String")]
pub struct Iban(Secret<String, IbanStrategy>);

impl FromStr for Iban {
    type Err = error_stack::Report<ValidationError>;

    fn from_str(iban: &str) -> Result<Self, Self::Err> {
        let normalized: String = iban
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| c.to_ascii_uppercase())
            .collect();

        let well_formed = (15..=34).contains(&normalized.len())
            && normalized.chars().all(|c| c.is_ascii_alphanumeric())
            && normalized.chars().take(2).all(|c| c.is_ascii_alphabetic())
            && normalized.chars().skip(2).take(2).all(|c| c.is_ascii_digit());

        if well_formed {
            Ok(Self(Secret::new(normalized)))
        } else {
            Err(error_stack::report!(ValidationError::InvalidValue {
                message: "Invalid iban format".into()
            }))
        }
    }
}

impl TryFrom<String> for Iban {
    type Error = error_stack::Report<errors::ParsingError>;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_str(&value).change_context(errors::ParsingError::IbanParsingError)
    }
}

impl ExposeInterface<Secret<String, IbanStrategy>> for Iban {
    fn expose(self) -> Secret<String, IbanStrategy> {
        self.0
    }
}

impl ops::Deref for Iban {
    type Target = Secret<String, IbanStrategy>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
