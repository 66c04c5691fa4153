#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR" ), "/", "README.md"))]

pub mod validate;

use common_utils::errors::{self, CustomResult};
use error_stack::report;
use masking::{PeekInterface, StrongSecret};
use serde::{Deserialize, Serialize};

pub use crate::validate::{CCValError, CardNumber, CardNumberStrategy};

/// Card verification code, three or four digits. Kept as a string so leading zeros survive.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub struct CardSecurityCode(StrongSecret<String>);

impl CardSecurityCode {
    pub fn new(secret: StrongSecret<String>) -> CustomResult<Self, errors::ValidationError> {
        let csc = secret.peek();

        if (3..=4).contains(&csc.len()) && csc.chars().all(|c| c.is_ascii_digit()) {
            Ok(Self(secret))
        } else {
            Err(report!(errors::ValidationError::InvalidValue {
                message: "invalid card security code".to_string()
            }))
        }
    }
}

impl TryFrom<String> for CardSecurityCode {
    type Error = error_stack::Report<errors::ValidationError>;

    fn try_from(csc: String) -> Result<Self, Self::Error> {
        Self::new(StrongSecret::new(csc))
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "u8")]
pub struct CardExpirationMonth(StrongSecret<u8>);

impl CardExpirationMonth {
    pub fn new(secret: StrongSecret<u8>) -> CustomResult<Self, errors::ValidationError> {
        common_utils::validation::validate_range("exp_month", *secret.peek(), 1, 12)?;

        Ok(Self(secret))
    }

    pub fn two_digits(&self) -> String {
        format!("{:02}", self.0.peek())
    }
}

impl TryFrom<u8> for CardExpirationMonth {
    type Error = error_stack::Report<errors::ValidationError>;

    fn try_from(month: u8) -> Result<Self, Self::Error> {
        Self::new(StrongSecret::new(month))
    }
}

/// Expiration year, either two or four digits.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "u16")]
pub struct CardExpirationYear(StrongSecret<u16>);

impl CardExpirationYear {
    pub fn new(secret: StrongSecret<u16>) -> CustomResult<Self, errors::ValidationError> {
        let year = *secret.peek();

        if year <= 99 || (1000..=9999).contains(&year) {
            Ok(Self(secret))
        } else {
            Err(report!(errors::ValidationError::InvalidValue {
                message: "card expiration year must have two or four digits".to_string()
            }))
        }
    }

    pub fn four_digits(&self) -> String {
        match *self.0.peek() {
            year @ 0..=99 => (2000 + year).to_string(),
            year => year.to_string(),
        }
    }

    pub fn two_digits(&self) -> String {
        format!("{:02}", self.0.peek() % 100)
    }
}

impl TryFrom<u16> for CardExpirationYear {
    type Error = error_stack::Report<errors::ValidationError>;

    fn try_from(year: u16) -> Result<Self, Self::Error> {
        Self::new(StrongSecret::new(year))
    }
}

impl PeekInterface<StrongSecret<String>> for CardSecurityCode {
    fn peek(&self) -> &StrongSecret<String> {
        &self.0
    }
}

impl PeekInterface<StrongSecret<u8>> for CardExpirationMonth {
    fn peek(&self) -> &StrongSecret<u8> {
        &self.0
    }
}

impl PeekInterface<StrongSecret<u16>> for CardExpirationYear {
    fn peek(&self) -> &StrongSecret<u16> {
        &self.0
    }
}
