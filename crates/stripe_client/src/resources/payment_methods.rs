use client_env::Flow;
use common_utils::{errors::CustomResult, request::Method};
use stripe_models::{
    payment_methods::{
        self, PaymentMethod, PaymentMethodAttachParams, PaymentMethodCreateParams,
        PaymentMethodDetachParams, PaymentMethodListParams, PaymentMethodRetrieveParams,
        PaymentMethodUpdateParams,
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
pub struct PaymentMethods;

impl ResourceCommon for PaymentMethods {
    fn api_version(&self) -> &'static str {
        payment_methods::API_VERSION
    }

    fn resource_path(&self) -> &'static [&'static str] {
        &["payment_methods"]
    }
}

impl StripeIntegration<api::Create, PaymentMethodCreateParams, PaymentMethod> for PaymentMethods {
    fn get_flow(&self) -> Flow {
        Flow::PaymentMethodsCreate
    }

    fn get_http_method(&self) -> Method {
        Method::Post
    }
}

impl StripeIntegration<api::List, PaymentMethodListParams, ApiList<PaymentMethod>>
    for PaymentMethods
{
    fn get_flow(&self) -> Flow {
        Flow::PaymentMethodsList
    }
}

impl StripeIntegration<api::Retrieve, PaymentMethodRetrieveParams, PaymentMethod>
    for PaymentMethods
{
    fn get_flow(&self) -> Flow {
        Flow::PaymentMethodsRetrieve
    }
}

impl StripeIntegration<api::Update, PaymentMethodUpdateParams, PaymentMethod> for PaymentMethods {
    fn get_flow(&self) -> Flow {
        Flow::PaymentMethodsUpdate
    }

    fn get_http_method(&self) -> Method {
        Method::Post
    }
}

impl StripeIntegration<api::Attach, PaymentMethodAttachParams, PaymentMethod> for PaymentMethods {
    fn get_flow(&self) -> Flow {
        Flow::PaymentMethodsAttach
    }

    fn get_http_method(&self) -> Method {
        Method::Post
    }

    fn get_action(&self) -> Option<&'static str> {
        Some("attach")
    }
}

impl StripeIntegration<api::Detach, PaymentMethodDetachParams, PaymentMethod> for PaymentMethods {
    fn get_flow(&self) -> Flow {
        Flow::PaymentMethodsDetach
    }

    fn get_http_method(&self) -> Method {
        Method::Post
    }

    fn get_action(&self) -> Option<&'static str> {
        Some("detach")
    }
}

/// Operations on payment methods.
#[derive(Clone, Copy, Debug)]
pub struct PaymentMethodsResource<'a> {
    client: &'a StripeClient,
}

impl<'a> PaymentMethodsResource<'a> {
    pub(crate) fn new(client: &'a StripeClient) -> Self {
        Self { client }
    }

    /// Creates a payment method from raw card details, a card token or bank details, or
    /// clones one onto a connected account when `payment_method` is set.
    pub async fn create(
        &self,
        params: &PaymentMethodCreateParams,
        options: &RequestOptions,
    ) -> CustomResult<PaymentMethod, StripeClientError> {
        services::execute_processing_step::<api::Create, _, _, _>(
            self.client,
            &PaymentMethods,
            RequestData::new(params),
            options,
        )
        .await
    }

    /// Payment methods of one type attached to a customer.
    pub async fn list(
        &self,
        params: &PaymentMethodListParams,
        options: &RequestOptions,
    ) -> CustomResult<ApiList<PaymentMethod>, StripeClientError> {
        services::execute_processing_step::<api::List, _, _, _>(
            self.client,
            &PaymentMethods,
            RequestData::new(params),
            options,
        )
        .await
    }

    pub async fn list_auto_paging(
        &self,
        params: &PaymentMethodListParams,
        options: &RequestOptions,
        max_items: Option<usize>,
    ) -> CustomResult<Vec<PaymentMethod>, StripeClientError> {
        services::list_auto_paging(self.client, &PaymentMethods, params, options, max_items).await
    }

    pub async fn retrieve(
        &self,
        id: &str,
        params: &PaymentMethodRetrieveParams,
        options: &RequestOptions,
    ) -> CustomResult<PaymentMethod, StripeClientError> {
        services::execute_processing_step::<api::Retrieve, _, _, _>(
            self.client,
            &PaymentMethods,
            RequestData::for_resource(id, params),
            options,
        )
        .await
    }

    pub async fn update(
        &self,
        id: &str,
        params: &PaymentMethodUpdateParams,
        options: &RequestOptions,
    ) -> CustomResult<PaymentMethod, StripeClientError> {
        services::execute_processing_step::<api::Update, _, _, _>(
            self.client,
            &PaymentMethods,
            RequestData::for_resource(id, params),
            options,
        )
        .await
    }

    pub async fn attach(
        &self,
        id: &str,
        params: &PaymentMethodAttachParams,
        options: &RequestOptions,
    ) -> CustomResult<PaymentMethod, StripeClientError> {
        services::execute_processing_step::<api::Attach, _, _, _>(
            self.client,
            &PaymentMethods,
            RequestData::for_resource(id, params),
            options,
        )
        .await
    }

    /// Detached payment methods can no longer be used or attached again.
    pub async fn detach(
        &self,
        id: &str,
        params: &PaymentMethodDetachParams,
        options: &RequestOptions,
    ) -> CustomResult<PaymentMethod, StripeClientError> {
        services::execute_processing_step::<api::Detach, _, _, _>(
            self.client,
            &PaymentMethods,
            RequestData::for_resource(id, params),
            options,
        )
        .await
    }
}
