#![allow(clippy::unwrap_used)]

use std::str::FromStr;

use masking::PeekInterface;
use stripe_models::{
    common::{ApiList, RangeQuery, RequiredAddressParams},
    disputes::{Dispute, DisputeEvidenceParams, DisputeListParams, DisputeUpdateParams},
    enums::{
        CardBrand, CardholderType, CheckResult, DisabledReason, DisputeReason, DisputeStatus,
        IdealBank, MerchantCategory, PastDueField, PaymentMethodType, SpendingLimitInterval,
        WalletType,
    },
    issuing::cardholders::{
        AuthorizationControlsParams, Cardholder, CardholderCreateParams, SpendingLimitParams,
    },
    payment_methods::{
        CardDetailsParams, CardParams, PaymentMethod, PaymentMethodCreateParams,
    },
    Expandable, ListParams, Object,
};

const DISPUTE: &str = include_str!("fixtures/dispute.json");
const CARDHOLDER: &str = include_str!("fixtures/cardholder.json");
const PAYMENT_METHOD_LIST: &str = include_str!("fixtures/payment_method_list.json");

/// Form encoding with brackets, underscores and spaces left readable.
fn form(value: &impl serde::Serialize) -> String {
    serde_qs::to_string(value)
        .unwrap()
        .replace("%5B", "[")
        .replace("%5D", "]")
        .replace("%5F", "_")
        .replace("%20", " ")
        .replace('+', " ")
}

#[test]
fn dispute_from_json() {
    let dispute: Dispute = serde_json::from_str(DISPUTE).unwrap();

    assert_eq!(dispute.id(), Some("dp_1FtA5z2eZvKYlo2Cq6mQ0Jh2"));
    assert_eq!(dispute.object, Dispute::OBJECT);
    assert_eq!(dispute.status, DisputeStatus::NeedsResponse);
    assert_eq!(dispute.reason, DisputeReason::ProductNotReceived);
    assert_eq!(dispute.charge.id(), Some("ch_1FtA5y2eZvKYlo2CXhu7ZlQS"));
    assert!(dispute.payment_intent.is_none());
    assert_eq!(dispute.balance_transactions[0].fields["fee"], 1500);
    assert_eq!(dispute.evidence.receipt.unwrap().id(), Some("file_1FtA6I2eZvKYlo2CbEoO2zUP"));
    assert_eq!(dispute.evidence_details.due_by, Some(1_578_700_799));
    assert_eq!(dispute.metadata["order_id"], "6735");
}

#[test]
fn cardholder_from_json() {
    let cardholder: Cardholder = serde_json::from_str(CARDHOLDER).unwrap();

    let controls = cardholder.authorization_controls.unwrap();
    assert_eq!(
        controls.blocked_categories.unwrap(),
        vec![
            MerchantCategory::BettingCasinoGambling,
            MerchantCategory::HeatingPlumbingAirConditioning
        ]
    );
    let limits = controls.spending_limits.unwrap();
    let limit = &limits[0];
    assert_eq!(limit.interval, SpendingLimitInterval::Monthly);
    assert_eq!(limit.categories, Some(vec![MerchantCategory::TaxicabsLimousines]));

    let individual = cardholder.individual.unwrap();
    assert_eq!(individual.first_name.peek(), "Jenny");
    assert_eq!(individual.dob.unwrap().year.map(|y| *y.peek()), Some(1985));
    assert!(individual
        .verification
        .and_then(|v| v.document)
        .and_then(|d| d.back)
        .is_none());

    let requirements = cardholder.requirements.unwrap();
    assert_eq!(requirements.disabled_reason, Some(DisabledReason::RejectedListed));
    assert_eq!(
        requirements.past_due.unwrap(),
        vec![
            PastDueField::IndividualDobDay,
            PastDueField::IndividualVerificationDocument
        ]
    );
    assert_eq!(cardholder.cardholder_type, Some(CardholderType::Individual));
    assert_eq!(
        format!("{:?}", cardholder.phone_number.unwrap()),
        "********5309"
    );
}

#[test]
fn payment_method_list_from_json() {
    let list: ApiList<PaymentMethod> = serde_json::from_str(PAYMENT_METHOD_LIST).unwrap();

    assert!(list.has_more);
    assert_eq!(list.data.len(), 3);
    assert_eq!(list.first_id(), Some("pm_1FtAEN2eZvKYlo2CgI6Qc1eU"));
    assert_eq!(list.last_id(), Some("pm_1FtAEP2eZvKYlo2C1bbPmv5L"));

    let card = list.data[0].card.as_ref().unwrap();
    assert_eq!(card.brand, CardBrand::Visa);
    assert_eq!(
        card.checks.as_ref().unwrap().address_postal_code_check,
        Some(CheckResult::Pass)
    );
    let wallet = card.wallet.as_ref().unwrap();
    assert_eq!(wallet.wallet_type, WalletType::ApplePay);
    assert!(wallet.apple_pay.is_some());

    let ideal = &list.data[1];
    assert_eq!(ideal.payment_method_type, Some(PaymentMethodType::Ideal));
    assert_eq!(ideal.ideal.unwrap().bank, Some(IdealBank::VanLanschot));
    assert!(matches!(ideal.customer, Some(Expandable::Object(_))));

    let sepa = &list.data[2];
    assert_eq!(sepa.sepa_debit.as_ref().unwrap().last4.as_deref(), Some("3000"));
    assert!(sepa.customer.is_none());
}

#[test]
fn dispute_update_form_encoding() {
    let params = DisputeUpdateParams {
        evidence: Some(DisputeEvidenceParams {
            customer_name: Some("Jenny Rosen".to_string()),
            receipt: Some("file_123".to_string()),
            ..Default::default()
        }),
        expand: Some(vec!["charge".to_string(), "payment_intent".to_string()]),
        metadata: Some([("order_id".to_string(), "6735".to_string())].into()),
        submit: Some(true),
    };

    assert_eq!(
        form(&params),
        "evidence[customer_name]=Jenny Rosen&evidence[receipt]=file_123\
         &expand[0]=charge&expand[1]=payment_intent&metadata[order_id]=6735&submit=true"
    );
}

#[test]
fn list_query_encoding() {
    let params = DisputeListParams {
        created: Some(RangeQuery::gte(1_576_000_000)),
        limit: Some(3),
        ..Default::default()
    };

    assert_eq!(form(&params), "created[gte]=1576000000&limit=3");
}

#[test]
fn list_cursor_direction() {
    let mut params = DisputeListParams::default();
    assert!(!params.is_backwards());

    params.set_ending_before("dp_1".to_string());
    assert!(params.is_backwards());

    params.set_starting_after("dp_2".to_string());
    assert!(!params.is_backwards());
}

#[test]
fn cardholder_create_form_encoding() {
    let mut params = CardholderCreateParams::new(
        "Jenny Rosen",
        CardholderType::Individual,
        RequiredAddressParams {
            city: "San Francisco".to_string(),
            country: "US".to_string(),
            line1: "1234 Main Street".to_string(),
            postal_code: "94111".to_string(),
            ..Default::default()
        },
    );
    params.authorization_controls = Some(AuthorizationControlsParams {
        spending_limits: Some(vec![SpendingLimitParams {
            amount: 50_000,
            categories: None,
            interval: SpendingLimitInterval::Daily,
        }]),
        ..Default::default()
    });

    assert_eq!(
        form(&params),
        "authorization_controls[spending_limits][0][amount]=50000\
         &authorization_controls[spending_limits][0][interval]=daily\
         &billing[address][city]=San Francisco&billing[address][country]=US\
         &billing[address][line1]=1234 Main Street&billing[address][postal_code]=94111\
         &name=Jenny Rosen&type=individual"
    );
}

#[test]
fn payment_method_card_form_encoding() {
    let params = PaymentMethodCreateParams::card(CardParams::Details(CardDetailsParams {
        cvc: None,
        exp_month: cards::CardExpirationMonth::try_from(8_u8).unwrap(),
        exp_year: cards::CardExpirationYear::try_from(2030_u16).unwrap(),
        number: cards::CardNumber::from_str("4242 4242 4242 4242").unwrap(),
    }));

    assert_eq!(
        form(&params),
        "card[exp_month]=8&card[exp_year]=2030&card[number]=4242424242424242&type=card"
    );
}
