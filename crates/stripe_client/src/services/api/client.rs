use std::time::Duration;

use common_utils::{
    errors::{ApiClientError, CustomResult},
    request::Request,
};
use error_stack::ResultExt;

use crate::settings::Proxy;

fn get_client_builder(proxy_config: &Proxy) -> CustomResult<reqwest::ClientBuilder, ApiClientError> {
    let mut client_builder = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .pool_idle_timeout(proxy_config.idle_pool_connection_timeout.map(Duration::from_secs));

    // Proxy all HTTPS traffic through the configured HTTPS proxy
    if let Some(url) = proxy_config.https_url.as_ref() {
        client_builder = client_builder.proxy(
            reqwest::Proxy::https(url)
                .change_context(ApiClientError::InvalidProxyConfiguration)
                .attach_printable("HTTPS proxy configuration error")?,
        );
    }

    // Proxy all HTTP traffic through the configured HTTP proxy
    if let Some(url) = proxy_config.http_url.as_ref() {
        client_builder = client_builder.proxy(
            reqwest::Proxy::http(url)
                .change_context(ApiClientError::InvalidProxyConfiguration)
                .attach_printable("HTTP proxy configuration error")?,
        );
    }

    Ok(client_builder)
}

#[async_trait::async_trait]
pub trait ApiClient: dyn_clone::DynClone
where
    Self: Send + Sync,
{
    async fn send_request(
        &self,
        request: Request,
    ) -> CustomResult<reqwest::Response, ApiClientError>;
}

dyn_clone::clone_trait_object!(ApiClient);

/// [`ApiClient`] backed by a pooled `reqwest` client, routed through the configured proxies.
#[derive(Clone, Debug)]
pub struct ProxyClient {
    client: reqwest::Client,
}

impl ProxyClient {
    pub fn new(proxy_config: &Proxy) -> CustomResult<Self, ApiClientError> {
        let client = get_client_builder(proxy_config)?
            .build()
            .change_context(ApiClientError::ClientConstructionFailed)
            .attach_printable("Failed to construct base client")?;

        Ok(Self { client })
    }
}

#[async_trait::async_trait]
impl ApiClient for ProxyClient {
    async fn send_request(
        &self,
        request: Request,
    ) -> CustomResult<reqwest::Response, ApiClientError> {
        super::send_request(&self.client, request).await
    }
}
