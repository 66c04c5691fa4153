mod client;
pub mod request;

use std::{
    error::Error,
    fmt::Debug,
    time::{Duration, Instant},
};

pub use client::{ApiClient, ProxyClient};
use client_env::{instrument, logger, tracing, Flow, Tag};
use common_utils::{
    errors::{ApiClientError, CustomResult},
    ext_traits::{BytesExt, Encode},
    fp_utils::when,
    request::{Method, Request, RequestBuilder, RequestContent},
    validation,
};
use error_stack::{report, ResultExt};
use masking::{ExposeInterface, Mask, Maskable, PeekInterface};
use serde::{de::DeserializeOwned, Serialize};
use stripe_models::{ApiList, ListParams, Object, Validate};

use self::request::{HeaderExt, RequestBuilderExt};
use crate::{
    client::StripeClient,
    consts::{self, headers},
    errors::StripeClientError,
    settings::{ApiSettings, Settings},
    types::{api, RequestData, RequestOptions, Response, StripeError, StripeErrorResponse},
};

/// What every operation of one resource shares: the path it lives under and the API version
/// its objects are shaped after.
pub trait ResourceCommon {
    fn api_version(&self) -> &'static str;

    /// Path segments below `/v1`.
    fn resource_path(&self) -> &'static [&'static str];

    fn build_error_response(
        &self,
        res: Response,
    ) -> CustomResult<StripeError, StripeClientError> {
        let response: StripeErrorResponse = res
            .response
            .parse_struct("StripeErrorResponse")
            .change_context(StripeClientError::ResponseDeserializationFailed)?;

        Ok(response.error)
    }
}

/// One operation of a resource: flow `F`, taking parameters `P` and answering with `R`.
pub trait StripeIntegration<F, P, R>: ResourceCommon + Send + Sync
where
    P: Validate + Serialize + Clone + Debug + Send + 'static,
    R: DeserializeOwned,
{
    fn get_flow(&self) -> Flow;

    fn get_http_method(&self) -> Method {
        Method::Get
    }

    /// Trailing path segment naming an action on the object, such as `close`.
    fn get_action(&self) -> Option<&'static str> {
        None
    }

    fn get_url(
        &self,
        req: &RequestData<'_, P>,
        base_url: &str,
    ) -> CustomResult<String, StripeClientError> {
        if let Some(resource_id) = req.resource_id {
            validation::validate_identifier("id", resource_id)
                .change_context(StripeClientError::InvalidId("id"))?;
        }

        let mut url = url::Url::parse(base_url)
            .change_context(StripeClientError::UrlConstructionFailed)
            .attach_printable_lazy(|| format!("Invalid base url {base_url}"))?;

        {
            let mut segments = url.path_segments_mut().map_err(|()| {
                report!(StripeClientError::UrlConstructionFailed)
                    .attach_printable("Base url cannot carry a path")
            })?;
            segments
                .pop_if_empty()
                .push(consts::API_PATH_PREFIX)
                .extend(self.resource_path());
            // each id is a single, percent-encoded segment
            if let Some(resource_id) = req.resource_id {
                segments.push(resource_id);
            }
            if let Some(action) = self.get_action() {
                segments.push(action);
            }
        }

        if !self.get_http_method().has_body() {
            let query = req
                .params
                .url_encode()
                .change_context(StripeClientError::RequestEncodingFailed)?;
            url.set_query((!query.is_empty()).then_some(query.as_str()));
        }

        Ok(url.into())
    }

    fn get_headers(
        &self,
        _req: &RequestData<'_, P>,
        settings: &Settings,
        options: &RequestOptions,
    ) -> CustomResult<Vec<(String, Maskable<String>)>, StripeClientError> {
        let api_key = options.api_key.as_ref().unwrap_or(&settings.api.api_key);
        when(api_key.peek().trim().is_empty(), || {
            Err(report!(StripeClientError::MissingApiKey))
        })?;

        let api_version = options
            .api_version
            .as_deref()
            .or(settings.api.api_version.as_deref())
            .unwrap_or_else(|| self.api_version());

        let mut header = vec![
            (
                headers::AUTHORIZATION.to_string(),
                format!("Bearer {}", api_key.peek()).into_masked(),
            ),
            (headers::STRIPE_VERSION.to_string(), api_version.into()),
        ];

        if let Some(stripe_account) = options
            .stripe_account
            .as_ref()
            .or(settings.api.stripe_account.as_ref())
        {
            header.push((headers::STRIPE_ACCOUNT.to_string(), stripe_account.clone().into()));
        }

        if let Some(idempotency_key) = &options.idempotency_key {
            header.push((
                headers::IDEMPOTENCY_KEY.to_string(),
                idempotency_key.clone().into(),
            ));
        }

        Ok(header)
    }

    fn get_request_body(
        &self,
        req: &RequestData<'_, P>,
    ) -> CustomResult<Option<RequestContent>, StripeClientError> {
        Ok(self
            .get_http_method()
            .has_body()
            .then(|| RequestContent::FormUrlEncoded(Box::new(req.params.clone()))))
    }

    fn build_request(
        &self,
        req: &RequestData<'_, P>,
        settings: &Settings,
        options: &RequestOptions,
    ) -> CustomResult<Request, StripeClientError> {
        let timeout = options
            .timeout
            .unwrap_or_else(|| Duration::from_secs(settings.api.timeout));

        Ok(RequestBuilder::new()
            .method(self.get_http_method())
            .url(&self.get_url(req, &settings.api.base_url)?)
            .attach_default_headers()
            .headers(self.get_headers(req, settings, options)?)
            .set_optional_body(self.get_request_body(req)?)
            .timeout(Some(timeout))
            .build())
    }

    fn handle_response(
        &self,
        _req: &RequestData<'_, P>,
        res: Response,
    ) -> CustomResult<R, StripeClientError> {
        res.response
            .parse_struct(std::any::type_name::<R>())
            .change_context(StripeClientError::ResponseDeserializationFailed)
    }

    fn get_error_response(&self, res: Response) -> CustomResult<StripeError, StripeClientError> {
        self.build_error_response_or_status(res)
    }

    fn get_5xx_error_response(
        &self,
        res: Response,
    ) -> CustomResult<StripeError, StripeClientError> {
        self.build_error_response_or_status(res)
    }

    /// The error object of the body, or one carrying only the status name when the answer
    /// came from something other than the API, such as a proxy or an edge rate limiter.
    fn build_error_response_or_status(
        &self,
        res: Response,
    ) -> CustomResult<StripeError, StripeClientError> {
        let status_code = res.status_code;
        self.build_error_response(res).or_else(|error| {
            logger::warn!(?error, status_code, "Error response without an error body");
            Ok(StripeError {
                message: Some(status_message(status_code).to_string()),
                ..Default::default()
            })
        })
    }
}

fn status_message(status_code: u16) -> &'static str {
    match status_code {
        400 => "bad_request",
        401 => "unauthorized",
        402 => "payment_required",
        403 => "forbidden",
        404 => "not_found",
        405 => "method_not_allowed",
        408 => "request_timeout",
        409 => "conflict",
        413 => "payload_too_large",
        415 => "unsupported_media_type",
        422 => "unprocessable_entity",
        429 => "too_many_requests",
        400..=499 => "unknown_client_error",
        500 => "internal_server_error",
        501 => "not_implemented",
        502 => "bad_gateway",
        503 => "service_unavailable",
        504 => "gateway_timeout",
        505 => "http_version_not_supported",
        506 => "variant_also_negotiates",
        507 => "insufficient_storage",
        508 => "loop_detected",
        510 => "not_extended",
        511 => "network_authentication_required",
        _ => "unknown_server_error",
    }
}

/// Validates the parameters, then sends the request (retrying when allowed) and turns the
/// answer into `R` or into [`StripeClientError::ApiError`].
#[instrument(
    skip_all,
    fields(
        flow = %integration.get_flow(),
        resource_id = req.resource_id,
        request_id = tracing::field::Empty,
        idempotency_key = tracing::field::Empty,
        attempt = tracing::field::Empty,
    )
)]
pub async fn execute_processing_step<F, P, R, I>(
    client: &StripeClient,
    integration: &I,
    req: RequestData<'_, P>,
    options: &RequestOptions,
) -> CustomResult<R, StripeClientError>
where
    I: StripeIntegration<F, P, R> + ?Sized,
    P: Validate + Serialize + Clone + Debug + Send + 'static,
    R: DeserializeOwned,
{
    req.params
        .validate()
        .change_context(StripeClientError::InvalidRequestParams)?;

    let settings = client.conf.as_ref();
    let max_network_retries = options
        .max_network_retries
        .unwrap_or(settings.api.max_network_retries);

    // every attempt of a retried POST must carry the same key
    let mut options = options.clone();
    if integration.get_http_method() == Method::Post
        && max_network_retries > 0
        && options.idempotency_key.is_none()
    {
        options.idempotency_key = Some(common_utils::generate_uuid_v4());
    }
    if let Some(idempotency_key) = &options.idempotency_key {
        tracing::Span::current().record("idempotency_key", idempotency_key.as_str());
    }

    let mut attempt: u32 = 0;
    let response = loop {
        tracing::Span::current().record("attempt", attempt);
        let request = integration.build_request(&req, settings, &options)?;
        logger::debug!(
            tag = ?Tag::ApiOutgoingRequest,
            method = %request.method,
            headers = ?request.headers,
            body = ?request.body.as_ref().map(RequestContent::masked_value),
        );

        let response = call_stripe_api(client.api_client.as_ref(), request).await;

        if attempt < max_network_retries && should_retry(&response) {
            attempt += 1;
            let delay = retry_delay(attempt, &settings.api);
            logger::warn!(tag = ?Tag::Retry, attempt, ?delay, "Retrying request");
            tokio::time::sleep(delay).await;
            continue;
        }

        break response;
    };

    match response {
        Ok(Ok(body)) => {
            record_request_id(&body);
            integration.handle_response(&req, body)
        }
        Ok(Err(body)) => {
            record_request_id(&body);
            let status_code = body.status_code;
            let error = match status_code {
                500..=599 => integration.get_5xx_error_response(body)?,
                _ => integration.get_error_response(body)?,
            };
            logger::info!(
                tag = ?Tag::ApiIncomingResponse,
                status_code,
                error_type = %error.error_type,
                error_code = ?error.code,
            );
            Err(report!(StripeClientError::ApiError { status_code, error }))
        }
        Err(error) => Err(error.change_context(StripeClientError::ProcessingStepFailed)),
    }
}

/// Walks a list operation page by page, following the `has_more` cursor. Lists started with
/// only `ending_before` are walked backwards. Stops after `max_items` objects when given.
pub async fn list_auto_paging<P, T, I>(
    client: &StripeClient,
    integration: &I,
    params: &P,
    options: &RequestOptions,
    max_items: Option<usize>,
) -> CustomResult<Vec<T>, StripeClientError>
where
    I: StripeIntegration<api::List, P, ApiList<T>> + ?Sized,
    P: ListParams + Validate + Serialize + Debug + Send + 'static,
    T: Object + DeserializeOwned,
{
    let mut params = params.clone();
    let backwards = params.is_backwards();
    let mut items = Vec::new();

    loop {
        let page = execute_processing_step::<api::List, _, ApiList<T>, _>(
            client,
            integration,
            RequestData::new(&params),
            options,
        )
        .await?;

        let cursor = if backwards {
            page.first_id()
        } else {
            page.last_id()
        }
        .map(ToOwned::to_owned);
        let has_more = page.has_more;

        if backwards {
            items.extend(page.data.into_iter().rev());
        } else {
            items.extend(page.data);
        }

        logger::debug!(tag = ?Tag::Pagination, fetched = items.len(), has_more);

        if let Some(max_items) = max_items {
            if items.len() >= max_items {
                items.truncate(max_items);
                break;
            }
        }

        match (has_more, cursor) {
            (true, Some(cursor)) if backwards => params.set_ending_before(cursor),
            (true, Some(cursor)) => params.set_starting_after(cursor),
            _ => break,
        }
    }

    Ok(items)
}

fn record_request_id(response: &Response) {
    if let Some(request_id) = response
        .headers
        .as_ref()
        .and_then(|header_map| header_map.get(headers::REQUEST_ID))
        .and_then(|value| value.to_str().ok())
    {
        tracing::Span::current().record("request_id", request_id);
    }
}

/// Network failures, conflicts, rate limits and server errors are retried, unless the
/// `Stripe-Should-Retry` header says otherwise.
fn should_retry(response: &CustomResult<Result<Response, Response>, ApiClientError>) -> bool {
    match response {
        Err(error) => error.current_context().is_network_error(),
        Ok(Ok(_)) => false,
        Ok(Err(response)) => {
            let should_retry_header = response
                .headers
                .as_ref()
                .and_then(|header_map| header_map.get(headers::STRIPE_SHOULD_RETRY))
                .and_then(|value| value.to_str().ok());

            match should_retry_header {
                Some("true") => true,
                Some("false") => false,
                _ => matches!(response.status_code, 409 | 429 | 500..=599),
            }
        }
    }
}

/// Delay before attempt number `attempt` (starting at 1): the initial delay doubled on every
/// attempt, capped at the maximum delay.
fn retry_delay(attempt: u32, api: &ApiSettings) -> Duration {
    let factor = 2_u64.saturating_pow(attempt.saturating_sub(1));
    Duration::from_millis(
        api.initial_network_retry_delay
            .saturating_mul(factor)
            .min(api.max_network_retry_delay),
    )
}

#[instrument(skip_all)]
pub async fn call_stripe_api(
    api_client: &dyn ApiClient,
    request: Request,
) -> CustomResult<Result<Response, Response>, ApiClientError> {
    let current_time = Instant::now();

    let response = api_client.send_request(request).await;

    let elapsed_time = current_time.elapsed();
    logger::info!(request_time=?elapsed_time);

    handle_response(response).await
}

pub async fn send_request(
    client: &reqwest::Client,
    request: Request,
) -> CustomResult<reqwest::Response, ApiClientError> {
    let url = reqwest::Url::parse(&request.url).change_context(ApiClientError::UrlEncodingFailed)?;
    // the query string may carry personal data
    logger::debug!(method=?request.method, path=%url.path());

    let headers = request.headers.construct_header_map()?;
    let timeout = request
        .timeout
        .unwrap_or_else(|| Duration::from_secs(common_utils::consts::REQUEST_TIME_OUT));

    let request_builder = match request.method {
        Method::Get => client.get(url),
        Method::Post => client.post(url),
        Method::Put => client.put(url),
        Method::Delete => client.delete(url),
    };

    let request_builder = match request.body {
        Some(body) => {
            let payload = body
                .get_inner_value()
                .change_context(ApiClientError::BodyEncodingFailed)
                .attach_printable("Unable to encode the request body")?;
            request_builder
                .header(
                    reqwest::header::CONTENT_TYPE,
                    body.content_type().mime().essence_str(),
                )
                .body(payload.expose())
        }
        None => request_builder,
    };

    request_builder
        .add_headers(headers)
        .timeout(timeout)
        .send()
        .await
        .map_err(|error| match error {
            error if error.is_timeout() => ApiClientError::RequestTimeoutReceived,
            error if is_connection_closed(&error) => ApiClientError::ConnectionClosed,
            _ => ApiClientError::RequestNotSent(error.to_string()),
        })
        .attach_printable("Unable to send request to Stripe")
}

fn is_connection_closed(error: &reqwest::Error) -> bool {
    let mut source = error.source();
    while let Some(err) = source {
        if let Some(hyper_err) = err.downcast_ref::<hyper::Error>() {
            if hyper_err.is_incomplete_message() {
                return true;
            }
        }
        source = err.source();
    }
    false
}

#[instrument(skip_all)]
async fn handle_response(
    response: CustomResult<reqwest::Response, ApiClientError>,
) -> CustomResult<Result<Response, Response>, ApiClientError> {
    let response = response?;
    let status_code = response.status().as_u16();
    let headers = Some(response.headers().to_owned());
    logger::info!(tag = ?Tag::ApiIncomingResponse, status_code);

    match status_code {
        200..=299 => {
            let response = response
                .bytes()
                .await
                .change_context(ApiClientError::ResponseDecodingFailed)
                .attach_printable("Error while waiting for response")?;
            Ok(Ok(Response {
                headers,
                response,
                status_code,
            }))
        }

        400..=599 => {
            let bytes = response
                .bytes()
                .await
                .change_context(ApiClientError::ResponseDecodingFailed)
                .attach_printable("Client error response received")?;
            Ok(Err(Response {
                headers,
                response: bytes,
                status_code,
            }))
        }

        _ => Err(report!(ApiClientError::UnexpectedServerResponse)
            .attach_printable("Unexpected response from server")),
    }
}
