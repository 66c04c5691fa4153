pub mod api;

pub use self::api::{
    call_stripe_api, execute_processing_step, list_auto_paging, send_request, ApiClient,
    ProxyClient, ResourceCommon, StripeIntegration,
};
