use std::time::Duration;

use masking::{ApiKey, StrongSecret};
use serde::{Deserialize, Serialize};

/// Flow markers, one per kind of operation. Integrations are implemented per
/// `(flow, params, response)` triple.
pub mod api {
    #[derive(Clone, Copy, Debug)]
    pub struct Create;
    #[derive(Clone, Copy, Debug)]
    pub struct Retrieve;
    #[derive(Clone, Copy, Debug)]
    pub struct Update;
    #[derive(Clone, Copy, Debug)]
    pub struct List;
    #[derive(Clone, Copy, Debug)]
    pub struct Close;
    #[derive(Clone, Copy, Debug)]
    pub struct Attach;
    #[derive(Clone, Copy, Debug)]
    pub struct Detach;
}

/// Raw response, before it is parsed into an object or an error.
#[derive(Clone, Debug)]
pub struct Response {
    pub headers: Option<http::HeaderMap>,
    pub response: bytes::Bytes,
    pub status_code: u16,
}

/// What an operation acts on: the object in the path, if any, and its parameters.
#[derive(Debug)]
pub struct RequestData<'a, P> {
    pub resource_id: Option<&'a str>,
    pub params: &'a P,
}

impl<'a, P> RequestData<'a, P> {
    pub fn new(params: &'a P) -> Self {
        Self {
            resource_id: None,
            params,
        }
    }

    pub fn for_resource(resource_id: &'a str, params: &'a P) -> Self {
        Self {
            resource_id: Some(resource_id),
            params,
        }
    }
}

/// Per-request overrides of the client settings.
#[derive(Clone, Debug, Default)]
pub struct RequestOptions {
    pub api_key: Option<StrongSecret<String, ApiKey>>,
    /// Sent as `Idempotency-Key`. One is generated for retried `POST` requests when absent.
    pub idempotency_key: Option<String>,
    pub stripe_account: Option<String>,
    pub api_version: Option<String>,
    pub timeout: Option<Duration>,
    pub max_network_retries: Option<u32>,
}

impl RequestOptions {
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(StrongSecret::new(api_key.into()));
        self
    }

    pub fn idempotency_key(mut self, idempotency_key: impl Into<String>) -> Self {
        self.idempotency_key = Some(idempotency_key.into());
        self
    }

    pub fn stripe_account(mut self, stripe_account: impl Into<String>) -> Self {
        self.stripe_account = Some(stripe_account.into());
        self
    }

    pub fn api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = Some(api_version.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn max_network_retries(mut self, max_network_retries: u32) -> Self {
        self.max_network_retries = Some(max_network_retries);
        self
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum StripeErrorType {
    ApiConnectionError,
    #[default]
    ApiError,
    AuthenticationError,
    CardError,
    IdempotencyError,
    InvalidRequestError,
    RateLimitError,
    #[serde(other)]
    Unknown,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct StripeError {
    #[serde(rename = "type", default)]
    pub error_type: StripeErrorType,
    pub code: Option<String>,
    pub decline_code: Option<String>,
    pub message: Option<String>,
    pub param: Option<String>,
    pub doc_url: Option<String>,
}

impl std::fmt::Display for StripeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error_type)?;
        if let Some(code) = &self.code {
            write!(f, " ({code})")?;
        }
        if let Some(message) = &self.message {
            write!(f, ": {message}")?;
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct StripeErrorResponse {
    pub error: StripeError,
}
