#![allow(clippy::unwrap_used, dead_code)]

use std::collections::HashMap;

use serde_json::Value;
use stripe_client::{Settings, StripeClient};
use wiremock::{Match, MockServer, Request};

pub const API_KEY: &str = "sk_test_4eC39HqLyjWDarjtT1zdp7dc";

pub struct MockConfig {
    pub max_network_retries: u32,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            max_network_retries: 0,
        }
    }
}

/// Starts a mock API and a client pointed at it.
pub async fn start_server(config: MockConfig) -> (MockServer, StripeClient) {
    let server = MockServer::start().await;

    let mut settings = Settings::default();
    settings.api.base_url = server.uri();
    settings.api.api_key = API_KEY.to_string().into();
    settings.api.max_network_retries = config.max_network_retries;
    settings.api.initial_network_retry_delay = 1;
    settings.api.max_network_retry_delay = 5;

    let client = StripeClient::new(settings).unwrap();
    (server, client)
}

pub fn fixture(name: &str) -> Value {
    let contents = match name {
        "dispute" => include_str!("../../../stripe_models/tests/fixtures/dispute.json"),
        "cardholder" => include_str!("../../../stripe_models/tests/fixtures/cardholder.json"),
        "payment_method_list" => {
            include_str!("../../../stripe_models/tests/fixtures/payment_method_list.json")
        }
        _ => panic!("unknown fixture {name}"),
    };
    serde_json::from_str(contents).unwrap()
}

/// The dispute fixture under another ID.
pub fn dispute(id: &str) -> Value {
    let mut dispute = fixture("dispute");
    dispute["id"] = Value::from(id);
    dispute
}

pub fn list(url: &str, data: Vec<Value>, has_more: bool) -> Value {
    serde_json::json!({
        "object": "list",
        "url": url,
        "has_more": has_more,
        "data": data,
    })
}

/// Matches a form encoded body holding `key=value`, comparing decoded keys such as
/// `evidence[receipt]`.
pub struct FormParam {
    key: String,
    value: String,
}

pub fn form_param(key: impl Into<String>, value: impl Into<String>) -> FormParam {
    FormParam {
        key: key.into(),
        value: value.into(),
    }
}

impl Match for FormParam {
    fn matches(&self, request: &Request) -> bool {
        form_body(request).get(&self.key) == Some(&self.value)
    }
}

pub fn form_body(request: &Request) -> HashMap<String, String> {
    url::form_urlencoded::parse(&request.body)
        .into_owned()
        .collect()
}

pub fn header_value(request: &Request, name: &str) -> Option<String> {
    request
        .headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(ToOwned::to_owned)
}
