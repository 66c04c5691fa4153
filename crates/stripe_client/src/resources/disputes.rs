use client_env::Flow;
use common_utils::{errors::CustomResult, request::Method};
use stripe_models::{
    disputes::{
        self, Dispute, DisputeCloseParams, DisputeListParams, DisputeRetrieveParams,
        DisputeUpdateParams,
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
pub struct Disputes;

impl ResourceCommon for Disputes {
    fn api_version(&self) -> &'static str {
        disputes::API_VERSION
    }

    fn resource_path(&self) -> &'static [&'static str] {
        &["disputes"]
    }
}

impl StripeIntegration<api::Retrieve, DisputeRetrieveParams, Dispute> for Disputes {
    fn get_flow(&self) -> Flow {
        Flow::DisputesRetrieve
    }
}

impl StripeIntegration<api::Update, DisputeUpdateParams, Dispute> for Disputes {
    fn get_flow(&self) -> Flow {
        Flow::DisputesUpdate
    }

    fn get_http_method(&self) -> Method {
        Method::Post
    }
}

impl StripeIntegration<api::List, DisputeListParams, ApiList<Dispute>> for Disputes {
    fn get_flow(&self) -> Flow {
        Flow::DisputesList
    }
}

impl StripeIntegration<api::Close, DisputeCloseParams, Dispute> for Disputes {
    fn get_flow(&self) -> Flow {
        Flow::DisputesClose
    }

    fn get_http_method(&self) -> Method {
        Method::Post
    }

    fn get_action(&self) -> Option<&'static str> {
        Some("close")
    }
}

/// Operations on disputes.
#[derive(Clone, Copy, Debug)]
pub struct DisputesResource<'a> {
    client: &'a StripeClient,
}

impl<'a> DisputesResource<'a> {
    pub(crate) fn new(client: &'a StripeClient) -> Self {
        Self { client }
    }

    pub async fn retrieve(
        &self,
        id: &str,
        params: &DisputeRetrieveParams,
        options: &RequestOptions,
    ) -> CustomResult<Dispute, StripeClientError> {
        services::execute_processing_step::<api::Retrieve, _, _, _>(
            self.client,
            &Disputes,
            RequestData::for_resource(id, params),
            options,
        )
        .await
    }

    /// Updates the evidence or metadata of a dispute. Evidence is only staged unless `submit`
    /// is set.
    pub async fn update(
        &self,
        id: &str,
        params: &DisputeUpdateParams,
        options: &RequestOptions,
    ) -> CustomResult<Dispute, StripeClientError> {
        services::execute_processing_step::<api::Update, _, _, _>(
            self.client,
            &Disputes,
            RequestData::for_resource(id, params),
            options,
        )
        .await
    }

    pub async fn list(
        &self,
        params: &DisputeListParams,
        options: &RequestOptions,
    ) -> CustomResult<ApiList<Dispute>, StripeClientError> {
        services::execute_processing_step::<api::List, _, _, _>(
            self.client,
            &Disputes,
            RequestData::new(params),
            options,
        )
        .await
    }

    pub async fn list_auto_paging(
        &self,
        params: &DisputeListParams,
        options: &RequestOptions,
        max_items: Option<usize>,
    ) -> CustomResult<Vec<Dispute>, StripeClientError> {
        services::list_auto_paging(self.client, &Disputes, params, options, max_items).await
    }

    /// Accepts the dispute as lost. Cannot be undone.
    pub async fn close(
        &self,
        id: &str,
        params: &DisputeCloseParams,
        options: &RequestOptions,
    ) -> CustomResult<Dispute, StripeClientError> {
        services::execute_processing_step::<api::Close, _, _, _>(
            self.client,
            &Disputes,
            RequestData::for_resource(id, params),
            options,
        )
        .await
    }
}
