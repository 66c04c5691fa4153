//! Payment methods, API version `2019-11-05`.
//!
//! A payment method represents a customer's payment instrument: a card, a card read in
//! person, an iDEAL bank or a SEPA debit account. Raw instrument data is only ever sent on
//! creation; the objects returned carry non sensitive details such as the brand and the last
//! four digits.

use cards::{CardExpirationMonth, CardExpirationYear, CardNumber, CardSecurityCode};
use common_utils::{
    errors::{CustomResult, ValidationError},
    pii::{EmailStrategy, Iban, PhoneNumberStrategy},
    validation,
};
use error_stack::report;
use masking::Secret;
use serde::{Deserialize, Serialize};
use stripe_enums::{
    CardBrand, CardFunding, CheckResult, IdealBank, IdealBic, PaymentMethodType, WalletType,
};

use crate::{
    common::{impl_list_params, Address, AddressParams, Customer, Expandable, Metadata, Object},
    validate::{unconstrained, Validate},
};

/// API version the payment method shapes were written against.
pub const API_VERSION: &str = "2019-11-05";

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethod {
    pub billing_details: Option<BillingDetails>,
    pub card: Option<Card>,
    pub card_present: Option<CardPresent>,
    pub created: Option<i64>,
    pub customer: Option<Expandable<Customer>>,
    pub id: Option<String>,
    pub ideal: Option<Ideal>,
    pub livemode: Option<bool>,
    pub metadata: Option<Metadata>,
    pub object: Option<String>,
    pub sepa_debit: Option<SepaDebit>,
    #[serde(rename = "type")]
    pub payment_method_type: Option<PaymentMethodType>,
}

impl Object for PaymentMethod {
    const OBJECT: &'static str = "payment_method";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingDetails {
    pub address: Option<Address>,
    pub email: Option<Secret<String, EmailStrategy>>,
    pub name: Option<Secret<String>>,
    pub phone: Option<Secret<String, PhoneNumberStrategy>>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub brand: CardBrand,
    pub checks: Option<Checks>,
    /// Two-letter ISO code of the issuing country.
    pub country: Option<String>,
    pub description: Option<String>,
    pub exp_month: u8,
    pub exp_year: u16,
    /// Uniquely identifies this card number within the account.
    pub fingerprint: Option<String>,
    pub funding: CardFunding,
    pub iin: Option<String>,
    pub issuer: Option<String>,
    pub last4: String,
    pub three_d_secure_usage: Option<ThreeDSecureUsage>,
    pub wallet: Option<Wallet>,
}

/// Results of the checks run against the details the card was created with.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checks {
    pub address_line1_check: Option<CheckResult>,
    pub address_postal_code_check: Option<CheckResult>,
    pub cvc_check: Option<CheckResult>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreeDSecureUsage {
    pub supported: bool,
}

/// Wallet the card was tokenized by. Only the hash named by `type` is present.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wallet {
    pub amex_express_checkout: Option<NoDetails>,
    pub apple_pay: Option<NoDetails>,
    /// Last four digits of the device account number, when the wallet uses one.
    pub dynamic_last4: Option<String>,
    pub google_pay: Option<NoDetails>,
    pub masterpass: Option<WalletDetails>,
    pub samsung_pay: Option<NoDetails>,
    #[serde(rename = "type")]
    pub wallet_type: WalletType,
    pub visa_checkout: Option<WalletDetails>,
}

/// Hash without fields of its own.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoDetails {}

/// Owner details verified or provided by the wallet. They cannot be set or mutated.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletDetails {
    pub billing_address: Option<Address>,
    pub email: Option<Secret<String, EmailStrategy>>,
    pub name: Option<Secret<String>>,
    pub shipping_address: Option<Address>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardPresent {}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ideal {
    pub bank: Option<IdealBank>,
    pub bic: Option<IdealBic>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SepaDebit {
    pub bank_code: Option<String>,
    pub branch_code: Option<String>,
    pub country: Option<String>,
    pub fingerprint: Option<String>,
    pub last4: Option<String>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingDetailsParams {
    pub address: Option<AddressParams>,
    pub email: Option<Secret<String, EmailStrategy>>,
    pub name: Option<Secret<String>>,
    pub phone: Option<Secret<String, PhoneNumberStrategy>>,
}

/// The `card` hash of a create request: raw card details, or a token created beforehand.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CardParams {
    Details(CardDetailsParams),
    Token(CardTokenParams),
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CardDetailsParams {
    pub cvc: Option<CardSecurityCode>,
    pub exp_month: CardExpirationMonth,
    pub exp_year: CardExpirationYear,
    pub number: CardNumber,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardTokenParams {
    pub token: String,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdealParams {
    pub bank: Option<IdealBank>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SepaDebitParams {
    pub iban: Iban,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PaymentMethodCreateParams {
    pub billing_details: Option<BillingDetailsParams>,
    pub card: Option<CardParams>,
    /// Customer the payment method is cloned for, together with `payment_method`.
    pub customer: Option<String>,
    pub expand: Option<Vec<String>>,
    pub ideal: Option<IdealParams>,
    pub metadata: Option<Metadata>,
    /// Existing payment method to clone, used by connected accounts.
    pub payment_method: Option<String>,
    pub sepa_debit: Option<SepaDebitParams>,
    #[serde(rename = "type")]
    pub payment_method_type: Option<PaymentMethodType>,
}

impl PaymentMethodCreateParams {
    pub fn card(card: CardParams) -> Self {
        Self {
            card: Some(card),
            payment_method_type: Some(PaymentMethodType::Card),
            ..Default::default()
        }
    }

    pub fn ideal(ideal: IdealParams) -> Self {
        Self {
            ideal: Some(ideal),
            payment_method_type: Some(PaymentMethodType::Ideal),
            ..Default::default()
        }
    }

    pub fn sepa_debit(iban: Iban) -> Self {
        Self {
            sepa_debit: Some(SepaDebitParams { iban }),
            payment_method_type: Some(PaymentMethodType::SepaDebit),
            ..Default::default()
        }
    }
}

impl Validate for PaymentMethodCreateParams {
    fn validate(&self) -> CustomResult<(), ValidationError> {
        if self.payment_method_type.is_none() && self.payment_method.is_none() {
            return Err(report!(ValidationError::MissingRequiredField {
                field_name: "type".to_string(),
            }));
        }

        let hashes = [
            ("card", self.card.is_some(), PaymentMethodType::Card),
            ("ideal", self.ideal.is_some(), PaymentMethodType::Ideal),
            ("sepa_debit", self.sepa_debit.is_some(), PaymentMethodType::SepaDebit),
        ];

        for (field_name, present, expected_type) in hashes {
            if present && self.payment_method_type != Some(expected_type) {
                return Err(report!(ValidationError::IncorrectValueProvided { field_name })
                    .attach_printable(format!(
                        "`{field_name}` may only be supplied when `type` is `{expected_type}`"
                    )));
            }
        }

        Ok(())
    }
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentMethodListParams {
    pub customer: String,
    pub ending_before: Option<String>,
    pub expand: Option<Vec<String>>,
    pub limit: Option<u32>,
    pub starting_after: Option<String>,
    #[serde(rename = "type")]
    pub payment_method_type: PaymentMethodType,
}

impl PaymentMethodListParams {
    pub fn new(customer: impl Into<String>, payment_method_type: PaymentMethodType) -> Self {
        Self {
            customer: customer.into(),
            ending_before: None,
            expand: None,
            limit: None,
            starting_after: None,
            payment_method_type,
        }
    }
}

impl Validate for PaymentMethodListParams {
    fn validate(&self) -> CustomResult<(), ValidationError> {
        validation::validate_identifier("customer", &self.customer)?;
        validation::validate_list_limit(self.limit)
    }
}

impl_list_params!(PaymentMethodListParams);

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentMethodRetrieveParams {
    pub expand: Option<Vec<String>>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PaymentMethodUpdateParams {
    pub billing_details: Option<BillingDetailsParams>,
    pub card: Option<CardUpdateParams>,
    pub expand: Option<Vec<String>>,
    pub metadata: Option<Metadata>,
    pub sepa_debit: Option<SepaDebitUpdateParams>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CardUpdateParams {
    pub exp_month: Option<CardExpirationMonth>,
    pub exp_year: Option<CardExpirationYear>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SepaDebitUpdateParams {}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentMethodAttachParams {
    /// Customer the payment method is attached to.
    pub customer: String,
    pub expand: Option<Vec<String>>,
}

impl PaymentMethodAttachParams {
    pub fn new(customer: impl Into<String>) -> Self {
        Self {
            customer: customer.into(),
            expand: None,
        }
    }
}

impl Validate for PaymentMethodAttachParams {
    fn validate(&self) -> CustomResult<(), ValidationError> {
        validation::validate_identifier("customer", &self.customer)
    }
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentMethodDetachParams {
    pub expand: Option<Vec<String>>,
}

unconstrained!(
    PaymentMethodRetrieveParams,
    PaymentMethodUpdateParams,
    PaymentMethodDetachParams,
);

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use std::str::FromStr;

    use super::*;

    fn card_details() -> CardParams {
        CardParams::Details(CardDetailsParams {
            cvc: Some(CardSecurityCode::try_from("314".to_string()).unwrap()),
            exp_month: CardExpirationMonth::try_from(12_u8).unwrap(),
            exp_year: CardExpirationYear::try_from(2034_u16).unwrap(),
            number: CardNumber::from_str("4242424242424242").unwrap(),
        })
    }

    #[test]
    fn type_or_payment_method_is_required() {
        let params = PaymentMethodCreateParams::default();
        assert_eq!(
            params.validate().unwrap_err().current_context(),
            &ValidationError::MissingRequiredField {
                field_name: "type".to_string()
            }
        );

        let params = PaymentMethodCreateParams {
            payment_method: Some("pm_123".to_string()),
            customer: Some("cus_123".to_string()),
            ..Default::default()
        };
        assert!(params.validate().is_ok());
    }

    #[test]
    fn only_matching_hash_may_be_supplied() {
        assert!(PaymentMethodCreateParams::card(card_details()).validate().is_ok());

        let params = PaymentMethodCreateParams {
            ideal: Some(IdealParams {
                bank: Some(IdealBank::Ing),
            }),
            ..PaymentMethodCreateParams::card(card_details())
        };
        assert_eq!(
            params.validate().unwrap_err().current_context(),
            &ValidationError::IncorrectValueProvided {
                field_name: "ideal"
            }
        );

        let params = PaymentMethodCreateParams {
            card: Some(card_details()),
            payment_method: Some("pm_123".to_string()),
            ..Default::default()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn list_params_require_customer() {
        let params = PaymentMethodListParams::new(" ", PaymentMethodType::Card);
        assert!(params.validate().is_err());

        let params = PaymentMethodListParams::new("cus_123", PaymentMethodType::Card);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn card_details_are_masked() {
        let params = PaymentMethodCreateParams::card(card_details());
        let debug = format!("{params:?}");
        assert!(!debug.contains("4242424242424242"));
        assert!(!debug.contains("314"));

        let masked = masking::masked_serialize(&params).unwrap();
        assert_eq!(masked["card"]["number"], "424242******4242");
        assert_eq!(masked["card"]["cvc"], "*** alloc::string::String ***");
        assert_eq!(masked["type"], "card");
    }
}
