pub use common_utils::errors::{ApiClientError, CustomResult, ParsingError, ValidationError};

use crate::types::StripeError;

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Configuration error: {0}")]
    ConfigurationError(#[from] ::config::ConfigError),

    #[error("Invalid configuration value provided: {0}")]
    InvalidConfigurationValueError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum StripeClientError {
    #[error("Request parameters failed validation")]
    InvalidRequestParams,
    #[error("Invalid object id provided for {0}")]
    InvalidId(&'static str),
    #[error("No API key was configured or supplied with the request")]
    MissingApiKey,
    #[error("Failed to construct the HTTP client")]
    ClientConstructionFailed,
    #[error("Failed to build the request URL")]
    UrlConstructionFailed,
    #[error("Failed to encode the request")]
    RequestEncodingFailed,
    #[error("Failed to deserialize the response")]
    ResponseDeserializationFailed,
    #[error("Failed to send the request or read its response")]
    ProcessingStepFailed,
    #[error("API request failed with status {status_code}: {error}")]
    ApiError {
        status_code: u16,
        error: StripeError,
    },
}

impl StripeClientError {
    /// The error object returned by the API, when the request reached it.
    pub fn api_error(&self) -> Option<&StripeError> {
        match self {
            Self::ApiError { error, .. } => Some(error),
            _ => None,
        }
    }

    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::ApiError { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }
}
