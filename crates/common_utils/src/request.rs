//! Outgoing HTTP request representation, independent of the HTTP client that sends it.

use std::time::Duration;

#[cfg(feature = "logs")]
use client_env::logger;
use error_stack::ResultExt;
use masking::{Maskable, Secret};
use serde::{Deserialize, Serialize};

use crate::errors;

/// Header name and value pairs of a request; values may be masked in logs
pub type Headers = std::collections::HashSet<(String, Maskable<String>)>;

/// HTTP methods used by the client
#[derive(
    Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize, strum::Display, strum::EnumString,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum Method {
    #[allow(missing_docs)]
    Get,
    #[allow(missing_docs)]
    Post,
    #[allow(missing_docs)]
    Put,
    #[allow(missing_docs)]
    Delete,
}

impl Method {
    /// Whether the request carries its parameters in the body rather than the query string
    pub fn has_body(&self) -> bool {
        matches!(self, Self::Post | Self::Put)
    }
}

/// Body encodings understood by the client
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub enum ContentType {
    /// `application/x-www-form-urlencoded`
    FormUrlEncoded,
}

impl ContentType {
    /// The value of the `Content-Type` header for this encoding
    pub fn mime(&self) -> mime::Mime {
        match self {
            Self::FormUrlEncoded => mime::APPLICATION_WWW_FORM_URLENCODED,
        }
    }
}

fn default_request_headers() -> [(String, Maskable<String>); 1] {
    use http::header;

    [(
        header::USER_AGENT.to_string(),
        crate::consts::USER_AGENT.to_string().into(),
    )]
}

/// Request body, kept in its typed form until it is sent so that it can also be logged masked
pub enum RequestContent {
    /// Form encoded body, nested values use bracket notation
    FormUrlEncoded(Box<dyn masking::ErasedMaskSerialize + Send>),
}

impl std::fmt::Debug for RequestContent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::FormUrlEncoded(_) => "FormUrlEncodedRequestBody",
        })
    }
}

impl RequestContent {
    /// The content type the body is encoded with
    pub fn content_type(&self) -> ContentType {
        match self {
            Self::FormUrlEncoded(_) => ContentType::FormUrlEncoded,
        }
    }

    /// Encode the body for the wire
    pub fn get_inner_value(&self) -> errors::CustomResult<Secret<String>, errors::ParsingError> {
        match self {
            Self::FormUrlEncoded(body) => serde_qs::to_string(body)
                .change_context(errors::ParsingError::EncodeError("url-encoded"))
                .map(Secret::new),
        }
    }

    /// The body with every secret masked, for logs
    pub fn masked_value(&self) -> serde_json::Value {
        let body = match self {
            Self::FormUrlEncoded(body) => body,
        };

        body.masked_serialize().unwrap_or_else(|_error| {
            #[cfg(feature = "logs")]
            logger::error!(error=?_error, "Failed to mask request body");
            serde_json::Value::String(crate::consts::REDACTED.to_string())
        })
    }
}

/// A request ready to be handed to an HTTP client
#[derive(Debug)]
pub struct Request {
    /// Absolute URL, including the query string for `GET` requests
    pub url: String,
    /// Headers to send
    pub headers: Headers,
    /// HTTP method
    pub method: Method,
    /// Body of `POST` / `PUT` requests
    pub body: Option<RequestContent>,
    /// Per-request timeout, the client default applies when absent
    pub timeout: Option<Duration>,
}

impl Request {
    /// Create a request without headers or body
    pub fn new(method: Method, url: &str) -> Self {
        Self {
            method,
            url: String::from(url),
            headers: std::collections::HashSet::new(),
            body: None,
            timeout: None,
        }
    }

    /// Set the body of the request
    pub fn set_body<T: Into<RequestContent>>(&mut self, body: T) {
        self.body.replace(body.into());
    }

    /// Add the headers every request carries
    pub fn add_default_headers(&mut self) {
        self.headers.extend(default_request_headers());
    }

    /// Add a single header
    pub fn add_header(&mut self, header: &str, value: Maskable<String>) {
        self.headers.insert((String::from(header), value));
    }

    /// Look a header value up by case-insensitive name
    pub fn get_header(&self, header: &str) -> Option<&Maskable<String>> {
        self.headers
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(header))
            .map(|(_, value)| value)
    }
}

/// Builder for [`Request`]
#[derive(Debug)]
pub struct RequestBuilder {
    url: String,
    headers: Headers,
    method: Method,
    body: Option<RequestContent>,
    timeout: Option<Duration>,
}

impl RequestBuilder {
    /// Start a `GET` request without URL
    pub fn new() -> Self {
        Self {
            method: Method::Get,
            url: String::with_capacity(1024),
            headers: std::collections::HashSet::new(),
            body: None,
            timeout: None,
        }
    }

    #[allow(missing_docs)]
    pub fn url(mut self, url: &str) -> Self {
        self.url = url.into();
        self
    }

    #[allow(missing_docs)]
    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    #[allow(missing_docs)]
    pub fn attach_default_headers(mut self) -> Self {
        self.headers.extend(default_request_headers());
        self
    }

    #[allow(missing_docs)]
    pub fn header(mut self, header: &str, value: &str) -> Self {
        self.headers.insert((header.into(), value.into()));
        self
    }

    #[allow(missing_docs)]
    pub fn headers(mut self, headers: Vec<(String, Maskable<String>)>) -> Self {
        self.headers.extend(headers);
        self
    }

    #[allow(missing_docs)]
    pub fn set_optional_body<T: Into<RequestContent>>(mut self, body: Option<T>) -> Self {
        body.map(|body| self.body.replace(body.into()));
        self
    }

    #[allow(missing_docs)]
    pub fn set_body<T: Into<RequestContent>>(mut self, body: T) -> Self {
        self.body.replace(body.into());
        self
    }

    #[allow(missing_docs)]
    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Finish the request
    pub fn build(self) -> Request {
        Request {
            method: self.method,
            url: self.url,
            headers: self.headers,
            body: self.body,
            timeout: self.timeout,
        }
    }
}

impl Default for RequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
