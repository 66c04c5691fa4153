#![allow(clippy::unwrap_used)]

mod utils;

use masking::{PeekInterface, Secret};
use stripe_client::{
    models::{
        common::RequiredAddressParams,
        enums::{CardholderStatus, CardholderType, MerchantCategory, SettableCardholderStatus},
        issuing::cardholders::{
            CardholderCreateParams, CardholderListParams, CardholderRetrieveParams,
            CardholderUpdateParams, DobParams, IndividualParams,
        },
    },
    RequestOptions, StripeClientError, StripeErrorType,
};
use wiremock::{
    matchers::{header, method, path, query_param},
    Mock, ResponseTemplate,
};

use crate::utils::MockConfig;

fn address() -> RequiredAddressParams {
    RequiredAddressParams {
        city: "San Francisco".into(),
        country: "US".into(),
        line1: "1234 Main Street".into(),
        postal_code: "94111".into(),
        ..Default::default()
    }
}

#[tokio::test]
async fn should_create_cardholder() {
    let (server, client) = utils::start_server(MockConfig::default()).await;
    Mock::given(method("POST"))
        .and(path("/v1/issuing/cardholders"))
        .and(header("stripe-version", "2019-11-05"))
        .and(header("stripe-account", "acct_1032D82eZvKYlo2C"))
        .and(header("idempotency-key", "create-jenny-rosen"))
        .and(utils::form_param("name", "Jenny Rosen"))
        .and(utils::form_param("type", "individual"))
        .and(utils::form_param("billing[address][city]", "San Francisco"))
        .and(utils::form_param("individual[first_name]", "Jenny"))
        .and(utils::form_param("individual[dob][month]", "7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(utils::fixture("cardholder")))
        .expect(1)
        .mount(&server)
        .await;

    let mut params =
        CardholderCreateParams::new("Jenny Rosen", CardholderType::Individual, address());
    params.individual = Some(IndividualParams {
        dob: Some(DobParams::new(1, 7, 1985)),
        first_name: Secret::new("Jenny".into()),
        last_name: Secret::new("Rosen".into()),
        verification: None,
    });

    let options = RequestOptions::default()
        .stripe_account("acct_1032D82eZvKYlo2C")
        .idempotency_key("create-jenny-rosen");
    let cardholder = client.cardholders().create(&params, &options).await.unwrap();

    assert_eq!(cardholder.id.as_deref(), Some("ich_1FtAB42eZvKYlo2CmTgZ1xKL"));
    assert_eq!(cardholder.status, Some(CardholderStatus::Active));
    let controls = cardholder.authorization_controls.unwrap();
    assert_eq!(
        controls.blocked_categories.unwrap_or_default(),
        [
            MerchantCategory::BettingCasinoGambling,
            MerchantCategory::HeatingPlumbingAirConditioning
        ]
    );
    assert_eq!(
        cardholder.email.unwrap().peek().as_str(),
        "jenny.rosen@example.com"
    );
}

#[tokio::test]
async fn should_reject_impossible_birth_date() {
    let (server, client) = utils::start_server(MockConfig::default()).await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let mut params =
        CardholderCreateParams::new("Jenny Rosen", CardholderType::Individual, address());
    params.individual = Some(IndividualParams {
        dob: Some(DobParams::new(1, 13, 1985)),
        ..Default::default()
    });

    let error = client
        .cardholders()
        .create(&params, &RequestOptions::default())
        .await
        .unwrap_err();
    assert!(matches!(
        error.current_context(),
        StripeClientError::InvalidRequestParams
    ));
}

#[tokio::test]
async fn should_list_cardholders_by_status() {
    let (server, client) = utils::start_server(MockConfig::default()).await;
    Mock::given(method("GET"))
        .and(path("/v1/issuing/cardholders"))
        .and(query_param("status", "active"))
        .and(query_param("type", "individual"))
        .respond_with(ResponseTemplate::new(200).set_body_json(utils::list(
            "/v1/issuing/cardholders",
            vec![utils::fixture("cardholder")],
            false,
        )))
        .expect(1)
        .mount(&server)
        .await;

    let params = CardholderListParams {
        status: Some(CardholderStatus::Active),
        cardholder_type: Some(CardholderType::Individual),
        ..Default::default()
    };
    let page = client
        .cardholders()
        .list(&params, &RequestOptions::default())
        .await
        .unwrap();

    assert!(!page.has_more);
    assert_eq!(page.first_id(), Some("ich_1FtAB42eZvKYlo2CmTgZ1xKL"));
}

#[tokio::test]
async fn should_update_cardholder_status() {
    let (server, client) = utils::start_server(MockConfig::default()).await;
    let mut inactive = utils::fixture("cardholder");
    inactive["status"] = "inactive".into();
    Mock::given(method("POST"))
        .and(path("/v1/issuing/cardholders/ich_1FtAB42eZvKYlo2CmTgZ1xKL"))
        .and(utils::form_param("status", "inactive"))
        .respond_with(ResponseTemplate::new(200).set_body_json(inactive))
        .expect(1)
        .mount(&server)
        .await;

    let params = CardholderUpdateParams {
        status: Some(SettableCardholderStatus::Inactive),
        ..Default::default()
    };
    let cardholder = client
        .cardholders()
        .update(
            "ich_1FtAB42eZvKYlo2CmTgZ1xKL",
            &params,
            &RequestOptions::default(),
        )
        .await
        .unwrap();

    assert_eq!(cardholder.status, Some(CardholderStatus::Inactive));
}

#[tokio::test]
async fn should_surface_api_errors() {
    let (server, client) = utils::start_server(MockConfig::default()).await;
    Mock::given(method("GET"))
        .and(path("/v1/issuing/cardholders/ich_missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "error": {
                "type": "invalid_request_error",
                "code": "resource_missing",
                "message": "No such issuing cardholder: ich_missing",
                "param": "id",
                "doc_url": "https://stripe.com/docs/error-codes/resource-missing"
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let error = client
        .cardholders()
        .retrieve(
            "ich_missing",
            &CardholderRetrieveParams::default(),
            &RequestOptions::default(),
        )
        .await
        .unwrap_err();

    let context = error.current_context();
    assert_eq!(context.status_code(), Some(404));
    let api_error = context.api_error().unwrap();
    assert_eq!(api_error.error_type, StripeErrorType::InvalidRequestError);
    assert_eq!(api_error.code.as_deref(), Some("resource_missing"));
    assert_eq!(api_error.param.as_deref(), Some("id"));
}
