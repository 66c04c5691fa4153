use std::sync::Arc;

use common_utils::errors::CustomResult;
use error_stack::ResultExt;

use crate::{
    errors::StripeClientError,
    resources::{CardholdersResource, DisputesResource, PaymentMethodsResource},
    services::{ApiClient, ProxyClient},
    settings::Settings,
};

/// Entry point of the crate: the settings every request starts from and the HTTP client that
/// sends them. Cheap to clone.
#[derive(Clone)]
pub struct StripeClient {
    pub conf: Arc<Settings>,
    pub api_client: Box<dyn ApiClient>,
}

impl StripeClient {
    pub fn new(conf: Settings) -> CustomResult<Self, StripeClientError> {
        let api_client = ProxyClient::new(&conf.proxy)
            .change_context(StripeClientError::ClientConstructionFailed)?;

        Ok(Self::with_api_client(conf, Box::new(api_client)))
    }

    pub fn with_api_client(conf: Settings, api_client: Box<dyn ApiClient>) -> Self {
        Self {
            conf: Arc::new(conf),
            api_client,
        }
    }

    pub fn disputes(&self) -> DisputesResource<'_> {
        DisputesResource::new(self)
    }

    pub fn cardholders(&self) -> CardholdersResource<'_> {
        CardholdersResource::new(self)
    }

    pub fn payment_methods(&self) -> PaymentMethodsResource<'_> {
        PaymentMethodsResource::new(self)
    }
}

impl std::fmt::Debug for StripeClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StripeClient")
            .field("conf", &self.conf)
            .finish_non_exhaustive()
    }
}
