use client_env::Flow;
use common_utils::{errors::CustomResult, request::Method};
use stripe_models::{
    issuing::cardholders::{
        self, Cardholder, CardholderCreateParams, CardholderListParams, CardholderRetrieveParams,
        CardholderUpdateParams,
    },
    ApiList,
};

use crate::{
    client::StripeClient,
    errors::StripeClientError,
    services::{self, ResourceCommon, StripeIntegration},
    types::{api, RequestData, RequestOptions},
};

#[derive(Clone, Copy, Debug)]
pub struct Cardholders;

impl ResourceCommon for Cardholders {
    fn api_version(&self) -> &'static str {
        cardholders::API_VERSION
    }

    fn resource_path(&self) -> &'static [&'static str] {
        &["issuing", "cardholders"]
    }
}

impl StripeIntegration<api::Create, CardholderCreateParams, Cardholder> for Cardholders {
    fn get_flow(&self) -> Flow {
        Flow::CardholdersCreate
    }

    fn get_http_method(&self) -> Method {
        Method::Post
    }
}

impl StripeIntegration<api::List, CardholderListParams, ApiList<Cardholder>> for Cardholders {
    fn get_flow(&self) -> Flow {
        Flow::CardholdersList
    }
}

impl StripeIntegration<api::Retrieve, CardholderRetrieveParams, Cardholder> for Cardholders {
    fn get_flow(&self) -> Flow {
        Flow::CardholdersRetrieve
    }
}

impl StripeIntegration<api::Update, CardholderUpdateParams, Cardholder> for Cardholders {
    fn get_flow(&self) -> Flow {
        Flow::CardholdersUpdate
    }

    fn get_http_method(&self) -> Method {
        Method::Post
    }
}

/// Operations on issuing cardholders.
#[derive(Clone, Copy, Debug)]
pub struct CardholdersResource<'a> {
    client: &'a StripeClient,
}

impl<'a> CardholdersResource<'a> {
    pub(crate) fn new(client: &'a StripeClient) -> Self {
        Self { client }
    }

    pub async fn create(
        &self,
        params: &CardholderCreateParams,
        options: &RequestOptions,
    ) -> CustomResult<Cardholder, StripeClientError> {
        services::execute_processing_step::<api::Create, _, _, _>(
            self.client,
            &Cardholders,
            RequestData::new(params),
            options,
        )
        .await
    }

    pub async fn list(
        &self,
        params: &CardholderListParams,
        options: &RequestOptions,
    ) -> CustomResult<ApiList<Cardholder>, StripeClientError> {
        services::execute_processing_step::<api::List, _, _, _>(
            self.client,
            &Cardholders,
            RequestData::new(params),
            options,
        )
        .await
    }

    pub async fn list_auto_paging(
        &self,
        params: &CardholderListParams,
        options: &RequestOptions,
        max_items: Option<usize>,
    ) -> CustomResult<Vec<Cardholder>, StripeClientError> {
        services::list_auto_paging(self.client, &Cardholders, params, options, max_items).await
    }

    pub async fn retrieve(
        &self,
        id: &str,
        params: &CardholderRetrieveParams,
        options: &RequestOptions,
    ) -> CustomResult<Cardholder, StripeClientError> {
        services::execute_processing_step::<api::Retrieve, _, _, _>(
            self.client,
            &Cardholders,
            RequestData::for_resource(id, params),
            options,
        )
        .await
    }

    /// Parameters left unset are not changed.
    pub async fn update(
        &self,
        id: &str,
        params: &CardholderUpdateParams,
        options: &RequestOptions,
    ) -> CustomResult<Cardholder, StripeClientError> {
        services::execute_processing_step::<api::Update, _, _, _>(
            self.client,
            &Cardholders,
            RequestData::for_resource(id, params),
            options,
        )
        .await
    }
}
