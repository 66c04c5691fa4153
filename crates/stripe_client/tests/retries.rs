#![allow(clippy::unwrap_used)]

mod utils;

use std::time::Duration;

use stripe_client::{
    errors::ApiClientError,
    models::disputes::{DisputeCloseParams, DisputeRetrieveParams},
    RequestOptions, StripeClientError,
};
use wiremock::{
    matchers::{header, header_exists, method, path},
    Mock, ResponseTemplate,
};

use crate::utils::{MockConfig, API_KEY};

const DISPUTE_ID: &str = "dp_1FtA5z2eZvKYlo2Cq6mQ0Jh2";

fn with_retries(max_network_retries: u32) -> MockConfig {
    MockConfig {
        max_network_retries,
    }
}

#[tokio::test]
async fn should_retry_server_errors_with_one_idempotency_key() {
    let (server, client) = utils::start_server(with_retries(2)).await;
    Mock::given(method("POST"))
        .and(path(format!("/v1/disputes/{DISPUTE_ID}/close")))
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(1)
        .with_priority(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(format!("/v1/disputes/{DISPUTE_ID}/close")))
        .respond_with(ResponseTemplate::new(200).set_body_json(utils::dispute(DISPUTE_ID)))
        .mount(&server)
        .await;

    client
        .disputes()
        .close(
            DISPUTE_ID,
            &DisputeCloseParams::default(),
            &RequestOptions::default(),
        )
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2);
    let keys = requests
        .iter()
        .map(|request| utils::header_value(request, "idempotency-key"))
        .collect::<Vec<_>>();
    assert!(keys.iter().all(Option::is_some));
    assert_eq!(keys.first(), keys.last());
}

#[tokio::test]
async fn should_keep_caller_idempotency_key() {
    let (server, client) = utils::start_server(with_retries(1)).await;
    Mock::given(method("POST"))
        .and(header("idempotency-key", "close-dp-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(utils::dispute(DISPUTE_ID)))
        .expect(1)
        .mount(&server)
        .await;

    client
        .disputes()
        .close(
            DISPUTE_ID,
            &DisputeCloseParams::default(),
            &RequestOptions::default().idempotency_key("close-dp-1"),
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn should_not_generate_idempotency_key_without_retries() {
    let (server, client) = utils::start_server(MockConfig::default()).await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(utils::dispute(DISPUTE_ID)))
        .expect(1)
        .mount(&server)
        .await;

    client
        .disputes()
        .close(
            DISPUTE_ID,
            &DisputeCloseParams::default(),
            &RequestOptions::default(),
        )
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert!(requests
        .iter()
        .all(|request| utils::header_value(request, "idempotency-key").is_none()));
}

#[tokio::test]
async fn should_retry_conflicts_on_get_without_idempotency_key() {
    let (server, client) = utils::start_server(with_retries(1)).await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(409))
        .up_to_n_times(1)
        .with_priority(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(utils::dispute(DISPUTE_ID)))
        .mount(&server)
        .await;

    client
        .disputes()
        .retrieve(
            DISPUTE_ID,
            &DisputeRetrieveParams::default(),
            &RequestOptions::default(),
        )
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2);
    assert!(requests
        .iter()
        .all(|request| utils::header_value(request, "idempotency-key").is_none()));
}

#[tokio::test]
async fn should_stop_after_max_network_retries() {
    let (server, client) = utils::start_server(with_retries(2)).await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .expect(3)
        .mount(&server)
        .await;

    let error = client
        .disputes()
        .retrieve(
            DISPUTE_ID,
            &DisputeRetrieveParams::default(),
            &RequestOptions::default(),
        )
        .await
        .unwrap_err();

    assert_eq!(error.current_context().status_code(), Some(503));
    assert_eq!(
        error
            .current_context()
            .api_error()
            .and_then(|api_error| api_error.message.as_deref()),
        Some("service_unavailable")
    );
}

#[tokio::test]
async fn should_honour_should_retry_header() {
    let (server, client) = utils::start_server(with_retries(2)).await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500).insert_header("Stripe-Should-Retry", "false"))
        .expect(1)
        .mount(&server)
        .await;

    let result = client
        .disputes()
        .retrieve(
            DISPUTE_ID,
            &DisputeRetrieveParams::default(),
            &RequestOptions::default(),
        )
        .await;

    assert!(result.is_err());
}

#[tokio::test]
async fn should_not_retry_client_errors() {
    let (server, client) = utils::start_server(with_retries(2)).await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "error": {
                "type": "invalid_request_error",
                "message": "Received unknown parameter: foo",
                "param": "foo"
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let error = client
        .disputes()
        .retrieve(
            DISPUTE_ID,
            &DisputeRetrieveParams::default(),
            &RequestOptions::default(),
        )
        .await
        .unwrap_err();

    assert_eq!(error.current_context().status_code(), Some(400));
}

#[tokio::test]
async fn should_time_out_slow_responses() {
    let (server, client) = utils::start_server(MockConfig::default()).await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(utils::dispute(DISPUTE_ID))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&server)
        .await;

    let error = client
        .disputes()
        .retrieve(
            DISPUTE_ID,
            &DisputeRetrieveParams::default(),
            &RequestOptions::default().timeout(Duration::from_millis(50)),
        )
        .await
        .unwrap_err();

    assert!(matches!(
        error.current_context(),
        StripeClientError::ProcessingStepFailed
    ));
    assert!(error.contains::<ApiClientError>());
    assert_eq!(
        error.downcast_ref::<ApiClientError>(),
        Some(&ApiClientError::RequestTimeoutReceived)
    );
}

#[tokio::test]
async fn request_options_override_settings() {
    let (server, client) = utils::start_server(MockConfig::default()).await;
    Mock::given(method("GET"))
        .and(header("authorization", "Bearer sk_test_connected"))
        .and(header("stripe-version", "2020-03-02"))
        .and(header("stripe-account", "acct_1032D82eZvKYlo2C"))
        .respond_with(ResponseTemplate::new(200).set_body_json(utils::dispute(DISPUTE_ID)))
        .expect(1)
        .mount(&server)
        .await;

    let options = RequestOptions::default()
        .api_key("sk_test_connected")
        .api_version("2020-03-02")
        .stripe_account("acct_1032D82eZvKYlo2C");
    client
        .disputes()
        .retrieve(DISPUTE_ID, &DisputeRetrieveParams::default(), &options)
        .await
        .unwrap();
}

#[tokio::test]
async fn should_send_user_agent_and_default_key() {
    let (server, client) = utils::start_server(MockConfig::default()).await;
    Mock::given(method("GET"))
        .and(header("authorization", format!("Bearer {API_KEY}").as_str()))
        .and(header_exists("user-agent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(utils::dispute(DISPUTE_ID)))
        .expect(1)
        .mount(&server)
        .await;

    client
        .disputes()
        .retrieve(
            DISPUTE_ID,
            &DisputeRetrieveParams::default(),
            &RequestOptions::default(),
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn should_name_client_errors_without_an_error_body() {
    let (server, client) = utils::start_server(MockConfig::default()).await;
    Mock::given(method("GET"))
        .and(path(format!("/v1/disputes/{DISPUTE_ID}")))
        .respond_with(ResponseTemplate::new(404).set_body_string("<html>Not Found</html>"))
        .expect(1)
        .mount(&server)
        .await;

    let error = client
        .disputes()
        .retrieve(
            DISPUTE_ID,
            &DisputeRetrieveParams::default(),
            &RequestOptions::default(),
        )
        .await
        .unwrap_err();

    assert_eq!(error.current_context().status_code(), Some(404));
    assert_eq!(
        error
            .current_context()
            .api_error()
            .and_then(|api_error| api_error.message.as_deref()),
        Some("not_found")
    );
}

#[tokio::test]
async fn should_name_rate_limited_responses_without_a_body() {
    let (server, client) = utils::start_server(MockConfig::default()).await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(429))
        .expect(1)
        .mount(&server)
        .await;

    let error = client
        .disputes()
        .retrieve(
            DISPUTE_ID,
            &DisputeRetrieveParams::default(),
            &RequestOptions::default(),
        )
        .await
        .unwrap_err();

    assert!(matches!(
        error.current_context(),
        StripeClientError::ApiError {
            status_code: 429,
            ..
        }
    ));
    assert_eq!(
        error
            .current_context()
            .api_error()
            .and_then(|api_error| api_error.message.as_deref()),
        Some("too_many_requests")
    );
}
