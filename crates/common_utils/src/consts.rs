//! Commonly used constants

/// Smallest page size accepted by list endpoints
pub const LIST_MIN_LIMIT: u32 = 1;

/// Largest page size accepted by list endpoints
pub const LIST_MAX_LIMIT: u32 = 100;

/// Default timeout for outgoing requests, in seconds
pub const REQUEST_TIME_OUT: u64 = 80;

/// Name reported in the `User-Agent` header of outgoing requests
pub const USER_AGENT: &str = concat!("stripe-rs/", env!("CARGO_PKG_VERSION"));

/// Placeholder shown instead of a redacted value
pub const REDACTED: &str = "Redacted";
