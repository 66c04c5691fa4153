//! Disputes, API version `2019-12-03`.
//!
//! A dispute is raised when a customer questions a charge with their card issuer. The account
//! can respond by submitting evidence, or accept the dispute by closing it.

use common_utils::{
    errors::{CustomResult, ValidationError},
    validation,
};
use serde::{Deserialize, Serialize};
use stripe_enums::{DisputeReason, DisputeStatus};

use crate::{
    common::{
        impl_list_params, BalanceTransaction, Charge, Expandable, File, Metadata, Object,
        PaymentIntent, RangeQuery,
    },
    validate::{unconstrained, Validate},
};

/// API version the dispute shapes were written against.
pub const API_VERSION: &str = "2019-12-03";

/// Largest number of characters accepted by the free text evidence fields.
pub const EVIDENCE_TEXT_MAX_LENGTH: usize = 20_000;
/// Largest number of characters accepted by all evidence fields together.
pub const EVIDENCE_TOTAL_MAX_LENGTH: usize = 150_000;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Dispute {
    pub id: String,
    pub object: String,
    /// Disputed amount, in the smallest currency unit.
    pub amount: i64,
    /// Balance transactions describing the impact of the dispute on the account balance.
    pub balance_transactions: Vec<BalanceTransaction>,
    pub charge: Expandable<Charge>,
    pub created: i64,
    pub currency: String,
    pub evidence: DisputeEvidence,
    pub evidence_details: EvidenceDetails,
    /// Whether the disputed charge can still be refunded.
    pub is_charge_refundable: bool,
    pub livemode: bool,
    pub metadata: Metadata,
    #[serde(default)]
    pub network_reason_code: Option<String>,
    pub payment_intent: Option<Expandable<PaymentIntent>>,
    pub reason: DisputeReason,
    pub status: DisputeStatus,
}

impl Object for Dispute {
    const OBJECT: &'static str = "dispute";

    fn id(&self) -> Option<&str> {
        Some(&self.id)
    }
}

/// Evidence submitted so far.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DisputeEvidence {
    pub access_activity_log: Option<String>,
    pub billing_address: Option<String>,
    pub cancellation_policy: Option<Expandable<File>>,
    pub cancellation_policy_disclosure: Option<String>,
    pub cancellation_rebuttal: Option<String>,
    pub customer_communication: Option<Expandable<File>>,
    pub customer_email_address: Option<String>,
    pub customer_name: Option<String>,
    pub customer_purchase_ip: Option<String>,
    pub customer_signature: Option<Expandable<File>>,
    pub duplicate_charge_documentation: Option<Expandable<File>>,
    pub duplicate_charge_explanation: Option<String>,
    pub duplicate_charge_id: Option<String>,
    pub product_description: Option<String>,
    pub receipt: Option<Expandable<File>>,
    pub refund_policy: Option<Expandable<File>>,
    pub refund_policy_disclosure: Option<String>,
    pub refund_refusal_explanation: Option<String>,
    pub service_date: Option<String>,
    pub service_documentation: Option<Expandable<File>>,
    pub shipping_address: Option<String>,
    pub shipping_carrier: Option<String>,
    pub shipping_date: Option<String>,
    pub shipping_documentation: Option<Expandable<File>>,
    pub shipping_tracking_number: Option<String>,
    pub uncategorized_file: Option<Expandable<File>>,
    pub uncategorized_text: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvidenceDetails {
    /// Unix timestamp evidence must be submitted by, absent when no evidence is expected.
    pub due_by: Option<i64>,
    pub has_evidence: bool,
    /// Whether the last evidence submission arrived after the deadline.
    pub past_due: bool,
    pub submission_count: u32,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisputeRetrieveParams {
    pub expand: Option<Vec<String>>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisputeUpdateParams {
    /// Updating any field of the evidence submits the whole hash for review.
    pub evidence: Option<DisputeEvidenceParams>,
    pub expand: Option<Vec<String>>,
    pub metadata: Option<Metadata>,
    /// Submit the evidence to the bank immediately instead of staging it.
    pub submit: Option<bool>,
}

/// Evidence to upload. File fields take the ID of a file uploaded beforehand.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisputeEvidenceParams {
    pub access_activity_log: Option<String>,
    pub billing_address: Option<String>,
    pub cancellation_policy: Option<String>,
    pub cancellation_policy_disclosure: Option<String>,
    pub cancellation_rebuttal: Option<String>,
    pub customer_communication: Option<String>,
    pub customer_email_address: Option<String>,
    pub customer_name: Option<String>,
    pub customer_purchase_ip: Option<String>,
    pub customer_signature: Option<String>,
    pub duplicate_charge_documentation: Option<String>,
    pub duplicate_charge_explanation: Option<String>,
    pub duplicate_charge_id: Option<String>,
    pub product_description: Option<String>,
    pub receipt: Option<String>,
    pub refund_policy: Option<String>,
    pub refund_policy_disclosure: Option<String>,
    pub refund_refusal_explanation: Option<String>,
    pub service_date: Option<String>,
    pub service_documentation: Option<String>,
    pub shipping_address: Option<String>,
    pub shipping_carrier: Option<String>,
    pub shipping_date: Option<String>,
    pub shipping_documentation: Option<String>,
    pub shipping_tracking_number: Option<String>,
    pub uncategorized_file: Option<String>,
    pub uncategorized_text: Option<String>,
}

impl DisputeEvidenceParams {
    /// Free text fields limited to [`EVIDENCE_TEXT_MAX_LENGTH`] characters.
    fn text_fields(&self) -> [(&'static str, Option<&str>); 8] {
        [
            ("evidence.access_activity_log", self.access_activity_log.as_deref()),
            (
                "evidence.cancellation_policy_disclosure",
                self.cancellation_policy_disclosure.as_deref(),
            ),
            ("evidence.cancellation_rebuttal", self.cancellation_rebuttal.as_deref()),
            (
                "evidence.duplicate_charge_explanation",
                self.duplicate_charge_explanation.as_deref(),
            ),
            ("evidence.product_description", self.product_description.as_deref()),
            (
                "evidence.refund_policy_disclosure",
                self.refund_policy_disclosure.as_deref(),
            ),
            (
                "evidence.refund_refusal_explanation",
                self.refund_refusal_explanation.as_deref(),
            ),
            ("evidence.uncategorized_text", self.uncategorized_text.as_deref()),
        ]
    }

    fn all_fields(&self) -> [Option<&str>; 27] {
        [
            self.access_activity_log.as_deref(),
            self.billing_address.as_deref(),
            self.cancellation_policy.as_deref(),
            self.cancellation_policy_disclosure.as_deref(),
            self.cancellation_rebuttal.as_deref(),
            self.customer_communication.as_deref(),
            self.customer_email_address.as_deref(),
            self.customer_name.as_deref(),
            self.customer_purchase_ip.as_deref(),
            self.customer_signature.as_deref(),
            self.duplicate_charge_documentation.as_deref(),
            self.duplicate_charge_explanation.as_deref(),
            self.duplicate_charge_id.as_deref(),
            self.product_description.as_deref(),
            self.receipt.as_deref(),
            self.refund_policy.as_deref(),
            self.refund_policy_disclosure.as_deref(),
            self.refund_refusal_explanation.as_deref(),
            self.service_date.as_deref(),
            self.service_documentation.as_deref(),
            self.shipping_address.as_deref(),
            self.shipping_carrier.as_deref(),
            self.shipping_date.as_deref(),
            self.shipping_documentation.as_deref(),
            self.shipping_tracking_number.as_deref(),
            self.uncategorized_file.as_deref(),
            self.uncategorized_text.as_deref(),
        ]
    }

    /// Combined character count of every field.
    pub fn char_count(&self) -> usize {
        self.all_fields()
            .into_iter()
            .flatten()
            .map(|value| value.chars().count())
            .sum()
    }
}

impl Validate for DisputeEvidenceParams {
    fn validate(&self) -> CustomResult<(), ValidationError> {
        for (field_name, value) in self.text_fields() {
            if let Some(value) = value {
                validation::validate_char_count(field_name, value, EVIDENCE_TEXT_MAX_LENGTH)?;
            }
        }

        if self.char_count() > EVIDENCE_TOTAL_MAX_LENGTH {
            return Err(error_stack::report!(ValidationError::TooLong {
                field_name: "evidence".to_string(),
                max_length: EVIDENCE_TOTAL_MAX_LENGTH,
            }));
        }

        Ok(())
    }
}

impl Validate for DisputeUpdateParams {
    fn validate(&self) -> CustomResult<(), ValidationError> {
        self.evidence.validate()
    }
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisputeListParams {
    /// Only return disputes of this charge.
    pub charge: Option<String>,
    pub created: Option<RangeQuery<i64>>,
    pub ending_before: Option<String>,
    pub expand: Option<Vec<String>>,
    pub limit: Option<u32>,
    /// Only return disputes of this payment intent.
    pub payment_intent: Option<String>,
    pub starting_after: Option<String>,
}

impl Validate for DisputeListParams {
    fn validate(&self) -> CustomResult<(), ValidationError> {
        validation::validate_list_limit(self.limit)
    }
}

impl_list_params!(DisputeListParams);

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisputeCloseParams {
    pub expand: Option<Vec<String>>,
}

unconstrained!(DisputeRetrieveParams, DisputeCloseParams);

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn evidence_text_limit() {
        let params = DisputeUpdateParams {
            evidence: Some(DisputeEvidenceParams {
                product_description: Some("x".repeat(EVIDENCE_TEXT_MAX_LENGTH + 1)),
                ..Default::default()
            }),
            ..Default::default()
        };

        let error = params.validate().unwrap_err();
        assert_eq!(
            error.current_context(),
            &ValidationError::TooLong {
                field_name: "evidence.product_description".to_string(),
                max_length: EVIDENCE_TEXT_MAX_LENGTH,
            }
        );
    }

    #[test]
    fn short_fields_are_not_limited_individually() {
        // not one of the documented free text fields
        let evidence = DisputeEvidenceParams {
            shipping_address: Some("x".repeat(EVIDENCE_TEXT_MAX_LENGTH + 1)),
            ..Default::default()
        };

        assert!(evidence.validate().is_ok());
    }

    #[test]
    fn evidence_total_limit() {
        let text = "y".repeat(EVIDENCE_TEXT_MAX_LENGTH);
        let evidence = DisputeEvidenceParams {
            access_activity_log: Some(text.clone()),
            cancellation_policy_disclosure: Some(text.clone()),
            cancellation_rebuttal: Some(text.clone()),
            duplicate_charge_explanation: Some(text.clone()),
            product_description: Some(text.clone()),
            refund_policy_disclosure: Some(text.clone()),
            refund_refusal_explanation: Some(text.clone()),
            uncategorized_text: Some(text),
            shipping_address: Some("z".repeat(10_001)),
            ..Default::default()
        };

        assert_eq!(evidence.char_count(), 170_001);
        let error = evidence.validate().unwrap_err();
        assert_eq!(
            error.current_context(),
            &ValidationError::TooLong {
                field_name: "evidence".to_string(),
                max_length: EVIDENCE_TOTAL_MAX_LENGTH,
            }
        );
    }

    #[test]
    fn evidence_total_limit_is_inclusive() {
        let text = "y".repeat(EVIDENCE_TEXT_MAX_LENGTH);
        let mut evidence = DisputeEvidenceParams {
            access_activity_log: Some(text.clone()),
            cancellation_policy_disclosure: Some(text.clone()),
            cancellation_rebuttal: Some(text.clone()),
            duplicate_charge_explanation: Some(text.clone()),
            product_description: Some(text.clone()),
            refund_policy_disclosure: Some(text.clone()),
            refund_refusal_explanation: Some(text),
            // counted in characters, not bytes
            shipping_address: Some("é".repeat(10_000)),
            ..Default::default()
        };

        assert_eq!(evidence.char_count(), EVIDENCE_TOTAL_MAX_LENGTH);
        assert!(evidence.validate().is_ok());

        evidence.shipping_carrier = Some("z".to_string());
        assert_eq!(evidence.char_count(), EVIDENCE_TOTAL_MAX_LENGTH + 1);
        assert!(evidence.validate().is_err());
    }

    #[test]
    fn list_limit() {
        let params = DisputeListParams {
            limit: Some(101),
            ..Default::default()
        };
        assert!(params.validate().is_err());

        let params = DisputeListParams {
            limit: Some(100),
            ..Default::default()
        };
        assert!(params.validate().is_ok());
    }
}
