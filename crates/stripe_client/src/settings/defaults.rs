use common_utils::consts;

impl Default for super::ApiSettings {
    fn default() -> Self {
        Self {
            base_url: "https://api.stripe.com".into(),
            api_key: String::new().into(),
            api_version: None,
            stripe_account: None,
            timeout: consts::REQUEST_TIME_OUT,
            max_network_retries: 0,
            initial_network_retry_delay: 500,
            max_network_retry_delay: 2_000,
        }
    }
}
