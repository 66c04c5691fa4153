//! Errors and error specific types for universal use

/// Custom Result
/// A custom datatype that wraps the error variant <E> into a report, allowing
/// error_stack::Report<E> specific extendability
///
/// Effectively, equivalent to `Result<T, error_stack::Report<E>>`
///
pub type CustomResult<T, E> = error_stack::Result<T, E>;

/// Parsing errors.
#[derive(Debug, thiserror::Error)]
pub enum ParsingError {
    /// Failed to parse struct
    #[error("Failed to parse struct: {0}")]
    StructParseFailure(&'static str),
    /// Failed to encode data to given format
    #[error("Failed to serialize to {0} format")]
    EncodeError(&'static str),
    /// Failed to parse IBAN
    #[error("Failed to parse iban")]
    IbanParsingError,
}

/// Validation errors.
#[allow(missing_docs)] // Only to prevent warnings about struct fields not being documented
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The provided input is missing a required field.
    #[error("Missing required field: {field_name}")]
    MissingRequiredField { field_name: String },

    /// An incorrect value was provided for the field specified by `field_name`.
    #[error("Incorrect value provided for field: {field_name}")]
    IncorrectValueProvided { field_name: &'static str },

    /// A value fell outside of the range accepted for `field_name`.
    #[error("Value for {field_name} must be between {min} and {max}")]
    OutOfRange {
        field_name: &'static str,
        min: i64,
        max: i64,
    },

    /// A text field exceeded the number of characters it may hold.
    #[error("{field_name} may not exceed {max_length} characters")]
    TooLong {
        field_name: String,
        max_length: usize,
    },

    /// An invalid input was provided.
    #[error("{message}")]
    InvalidValue { message: String },
}

/// Errors raised while building, sending or reading an outgoing HTTP request.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ApiClientError {
    /// A header name or value could not be encoded
    #[error("Header map construction failed")]
    HeaderMapConstructionFailed,
    /// The proxy URLs in the configuration are invalid
    #[error("Invalid proxy configuration")]
    InvalidProxyConfiguration,
    /// The HTTP client could not be built
    #[error("Client construction failed")]
    ClientConstructionFailed,
    /// The request URL could not be parsed or extended
    #[error("URL encoding of request failed")]
    UrlEncodingFailed,
    /// The request body could not be encoded
    #[error("Failed to encode request body")]
    BodyEncodingFailed,
    /// The request never reached the server
    #[error("Failed to send request: {0}")]
    RequestNotSent(String),
    /// The response body could not be read
    #[error("Failed to decode response")]
    ResponseDecodingFailed,
    /// The server did not answer within the configured timeout
    #[error("Server responded with Request Timeout")]
    RequestTimeoutReceived,
    /// The connection was closed before the response completed
    #[error("connection closed before a message could complete")]
    ConnectionClosed,
    /// The server answered with a status the client does not handle
    #[error("Unexpected server response")]
    UnexpectedServerResponse,
    /// The client reached a state it cannot proceed from
    #[error("Unexpected state reached/Invariants conflicted")]
    UnexpectedState,
}

impl ApiClientError {
    /// Whether the server failed to answer in time
    pub fn is_upstream_timeout(&self) -> bool {
        self == &Self::RequestTimeoutReceived
    }

    /// Whether the request failed at the network level, in which case resending it is safe
    /// as long as it carries an idempotency key
    pub fn is_network_error(&self) -> bool {
        matches!(
            self,
            Self::RequestTimeoutReceived | Self::ConnectionClosed | Self::RequestNotSent(_)
        )
    }
}
