/// Version of the public API, prefixing every path.
pub const API_PATH_PREFIX: &str = "v1";

pub(crate) mod headers {
    pub const AUTHORIZATION: &str = "Authorization";
    pub const IDEMPOTENCY_KEY: &str = "Idempotency-Key";
    pub const REQUEST_ID: &str = "Request-Id";
    pub const STRIPE_ACCOUNT: &str = "Stripe-Account";
    pub const STRIPE_SHOULD_RETRY: &str = "Stripe-Should-Retry";
    pub const STRIPE_VERSION: &str = "Stripe-Version";
}
