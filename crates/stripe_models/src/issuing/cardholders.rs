//! Issuing cardholders, API version `2019-11-05`.
//!
//! A cardholder is an individual or business entity that issued cards can be attached to. It
//! carries the billing address cards are verified against and the authorization controls
//! (allowed and blocked merchant categories, spending limits) applied to its cards.

use common_utils::{
    errors::{CustomResult, ValidationError},
    pii::{EmailStrategy, PhoneNumberStrategy},
    validation,
};
use masking::{PeekInterface, Secret};
use serde::{Deserialize, Serialize};
use stripe_enums::{
    CardholderStatus, CardholderType, DisabledReason, MerchantCategory, PastDueField,
    SettableCardholderStatus, SpendingLimitInterval,
};

use crate::{
    common::{
        impl_list_params, Address, Expandable, File, Metadata, Object, RangeQuery,
        RequiredAddressParams,
    },
    validate::{unconstrained, Validate},
};

/// API version the cardholder shapes were written against.
pub const API_VERSION: &str = "2019-11-05";

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Cardholder {
    pub authorization_controls: Option<AuthorizationControls>,
    pub billing: Option<Billing>,
    pub company: Option<Company>,
    pub created: Option<i64>,
    pub email: Option<Secret<String, EmailStrategy>>,
    pub id: Option<String>,
    pub individual: Option<Individual>,
    /// Whether this is the default cardholder of the account.
    pub is_default: Option<bool>,
    pub livemode: Option<bool>,
    pub metadata: Option<Metadata>,
    pub name: Option<String>,
    pub object: Option<String>,
    pub phone_number: Option<Secret<String, PhoneNumberStrategy>>,
    pub requirements: Option<Requirements>,
    pub status: Option<CardholderStatus>,
    #[serde(rename = "type")]
    pub cardholder_type: Option<CardholderType>,
}

impl Object for Cardholder {
    const OBJECT: &'static str = "issuing.cardholder";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

/// Rules applied to authorizations of the cardholder's cards.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorizationControls {
    /// Categories to allow, every other category is declined.
    pub allowed_categories: Option<Vec<MerchantCategory>>,
    /// Categories to decline, every other category is allowed.
    pub blocked_categories: Option<Vec<MerchantCategory>>,
    pub spending_limits: Option<Vec<SpendingLimit>>,
    /// Currency of the amounts within `spending_limits`.
    pub spending_limits_currency: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpendingLimit {
    /// Maximum amount allowed to spend per `interval`, in the smallest currency unit.
    pub amount: i64,
    /// Categories the limit applies to, all categories when absent.
    pub categories: Option<Vec<MerchantCategory>>,
    pub interval: SpendingLimitInterval,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Billing {
    pub address: Address,
    pub name: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub tax_id_provided: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Individual {
    pub dob: Option<Dob>,
    pub first_name: Secret<String>,
    pub last_name: Secret<String>,
    pub verification: Option<Verification>,
}

/// Date of birth. Parts are absent until collected.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dob {
    pub day: Option<Secret<u8>>,
    pub month: Option<Secret<u8>>,
    pub year: Option<Secret<u16>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Verification {
    pub document: Option<Document>,
}

/// Identity document, front and back uploaded as files.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub back: Option<Expandable<File>>,
    pub front: Option<Expandable<File>>,
}

/// Information still to be collected before the cardholder's cards can be activated.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requirements {
    pub disabled_reason: Option<DisabledReason>,
    pub past_due: Option<Vec<PastDueField>>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorizationControlsParams {
    pub allowed_categories: Option<Vec<MerchantCategory>>,
    pub blocked_categories: Option<Vec<MerchantCategory>>,
    pub spending_limits: Option<Vec<SpendingLimitParams>>,
    pub spending_limits_currency: Option<String>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpendingLimitParams {
    pub amount: i64,
    pub categories: Option<Vec<MerchantCategory>>,
    pub interval: SpendingLimitInterval,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingParams {
    pub address: RequiredAddressParams,
    /// Deprecated, the cardholder name is used instead.
    pub name: Option<String>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyParams {
    pub tax_id: Option<Secret<String>>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndividualParams {
    pub dob: Option<DobParams>,
    pub first_name: Secret<String>,
    pub last_name: Secret<String>,
    pub verification: Option<VerificationParams>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DobParams {
    pub day: Secret<u8>,
    pub month: Secret<u8>,
    pub year: Secret<u16>,
}

impl DobParams {
    pub fn new(day: u8, month: u8, year: u16) -> Self {
        Self {
            day: Secret::new(day),
            month: Secret::new(month),
            year: Secret::new(year),
        }
    }
}

impl Validate for DobParams {
    fn validate(&self) -> CustomResult<(), ValidationError> {
        validation::validate_range("individual.dob.day", *self.day.peek(), 1, 31)?;
        validation::validate_range("individual.dob.month", *self.month.peek(), 1, 12)?;
        validation::validate_range("individual.dob.year", *self.year.peek(), 1000, 9999)
    }
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationParams {
    pub document: Option<DocumentParams>,
}

/// IDs of uploaded files with the `identity_document` purpose.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentParams {
    pub back: Option<String>,
    pub front: Option<String>,
}

impl Validate for IndividualParams {
    fn validate(&self) -> CustomResult<(), ValidationError> {
        self.dob.validate()
    }
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardholderCreateParams {
    pub authorization_controls: Option<AuthorizationControlsParams>,
    pub billing: BillingParams,
    pub company: Option<CompanyParams>,
    pub email: Option<Secret<String, EmailStrategy>>,
    pub expand: Option<Vec<String>>,
    pub individual: Option<IndividualParams>,
    pub is_default: Option<bool>,
    pub metadata: Option<Metadata>,
    /// Name printed on cards and shown to merchants.
    pub name: String,
    pub phone_number: Option<Secret<String, PhoneNumberStrategy>>,
    pub status: Option<SettableCardholderStatus>,
    #[serde(rename = "type")]
    pub cardholder_type: CardholderType,
}

impl CardholderCreateParams {
    /// Parameters holding only the required fields.
    pub fn new(
        name: impl Into<String>,
        cardholder_type: CardholderType,
        address: RequiredAddressParams,
    ) -> Self {
        Self {
            authorization_controls: None,
            billing: BillingParams {
                address,
                name: None,
            },
            company: None,
            email: None,
            expand: None,
            individual: None,
            is_default: None,
            metadata: None,
            name: name.into(),
            phone_number: None,
            status: None,
            cardholder_type,
        }
    }
}

impl Validate for CardholderCreateParams {
    fn validate(&self) -> CustomResult<(), ValidationError> {
        self.individual.validate()
    }
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardholderListParams {
    pub created: Option<RangeQuery<i64>>,
    pub email: Option<Secret<String, EmailStrategy>>,
    pub ending_before: Option<String>,
    pub expand: Option<Vec<String>>,
    pub is_default: Option<bool>,
    pub limit: Option<u32>,
    pub phone_number: Option<Secret<String, PhoneNumberStrategy>>,
    pub starting_after: Option<String>,
    pub status: Option<CardholderStatus>,
    #[serde(rename = "type")]
    pub cardholder_type: Option<CardholderType>,
}

impl Validate for CardholderListParams {
    fn validate(&self) -> CustomResult<(), ValidationError> {
        validation::validate_list_limit(self.limit)
    }
}

impl_list_params!(CardholderListParams);

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardholderRetrieveParams {
    pub expand: Option<Vec<String>>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardholderUpdateParams {
    pub authorization_controls: Option<AuthorizationControlsParams>,
    pub billing: Option<BillingParams>,
    pub company: Option<CompanyParams>,
    pub email: Option<Secret<String, EmailStrategy>>,
    pub expand: Option<Vec<String>>,
    pub individual: Option<IndividualParams>,
    pub is_default: Option<bool>,
    pub metadata: Option<Metadata>,
    pub phone_number: Option<Secret<String, PhoneNumberStrategy>>,
    pub status: Option<SettableCardholderStatus>,
}

impl Validate for CardholderUpdateParams {
    fn validate(&self) -> CustomResult<(), ValidationError> {
        self.individual.validate()
    }
}

unconstrained!(CardholderRetrieveParams);
