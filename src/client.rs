//! Request dispatcher.
//!
//! `ApiClient` bundles the public operations: `request_api` with its four
//! method helpers, and `file_upload` (see `upload.rs`). Every failure of a
//! dispatched request is reshaped into `ErrorResponse` exactly once, here.

use serde::de::DeserializeOwned;
use std::sync::Arc;

use crate::error::{ErrorResponse, TransportError};
use crate::execution::http::headers::authorization_headers;
use crate::execution::http::query;
use crate::execution::http::{HttpTransport, HttpTransportRequest, ReqwestTransport, RequestBody};
use crate::types::{ApiConfig, HttpMethod, Params, ParamsPlacement, RequestOptions};

/// HTTP request helper bound to one base endpoint and one transport.
#[derive(Clone)]
pub struct ApiClient {
    config: Arc<ApiConfig>,
    transport: Arc<dyn HttpTransport>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.config.base_url)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Create a client using the default `reqwest` transport.
    pub fn new(config: ApiConfig) -> Result<Self, TransportError> {
        let transport = ReqwestTransport::from_config(&config)?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Create a client from `API_END_POINT` (and optional `API_TIMEOUT_SECS`).
    pub fn from_env() -> Result<Self, TransportError> {
        Self::new(ApiConfig::from_env()?)
    }

    /// Create a client with an explicit transport.
    pub fn with_transport(config: ApiConfig, transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            config: Arc::new(config),
            transport,
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub(crate) fn transport(&self) -> &dyn HttpTransport {
        self.transport.as_ref()
    }

    /// Base endpoint joined with `path`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    /// Send one request and decode the response body as `T`.
    ///
    /// GET and DELETE send `params` as the query string; POST and PUT send
    /// them as the JSON body. A present token is sent as
    /// `Authorization: Bearer <token>`.
    ///
    /// # Errors
    /// Every failure is an `ErrorResponse`: error responses keep the server's
    /// `message`, `time` and status, while failures without a response use
    /// the client-error fallback.
    pub async fn request_api<T: DeserializeOwned>(
        &self,
        method: HttpMethod,
        options: RequestOptions,
        access_token: Option<&str>,
    ) -> Result<T, ErrorResponse> {
        let RequestOptions { url, params } = options;
        self.send(method, &url, params, access_token)
            .await
            .map_err(|err| self.normalize(method, &url, err))
    }

    /// Like `request_api`, with the method given by name.
    ///
    /// Names are matched exactly; anything but `get`, `post`, `put` or `delete` fails with an
    /// empty-message `ErrorResponse` before anything is sent.
    pub async fn request_api_named<T: DeserializeOwned>(
        &self,
        method: &str,
        options: RequestOptions,
        access_token: Option<&str>,
    ) -> Result<T, ErrorResponse> {
        let method = method.parse::<HttpMethod>()?;
        self.request_api(method, options, access_token).await
    }

    /// GET `options.url` with params as the query string.
    pub async fn get<T: DeserializeOwned>(
        &self,
        options: RequestOptions,
        access_token: Option<&str>,
    ) -> Result<T, ErrorResponse> {
        self.request_api(HttpMethod::Get, options, access_token)
            .await
    }

    /// POST `options.url` with params as the JSON body.
    pub async fn post<T: DeserializeOwned>(
        &self,
        options: RequestOptions,
        access_token: Option<&str>,
    ) -> Result<T, ErrorResponse> {
        self.request_api(HttpMethod::Post, options, access_token)
            .await
    }

    /// PUT `options.url` with params as the JSON body.
    pub async fn put<T: DeserializeOwned>(
        &self,
        options: RequestOptions,
        access_token: Option<&str>,
    ) -> Result<T, ErrorResponse> {
        self.request_api(HttpMethod::Put, options, access_token)
            .await
    }

    /// DELETE `options.url` with params as the query string.
    pub async fn delete<T: DeserializeOwned>(
        &self,
        options: RequestOptions,
        access_token: Option<&str>,
    ) -> Result<T, ErrorResponse> {
        self.request_api(HttpMethod::Delete, options, access_token)
            .await
    }

    async fn send<T: DeserializeOwned>(
        &self,
        method: HttpMethod,
        path: &str,
        params: Option<Params>,
        access_token: Option<&str>,
    ) -> Result<T, TransportError> {
        let headers = authorization_headers(
            method,
            access_token,
            self.config.send_empty_authorization,
        )?;
        let (query, body) = match (method.params_placement(), params) {
            (_, None) => (Vec::new(), RequestBody::Empty),
            (ParamsPlacement::Query, Some(params)) => (query::stringify(&params), RequestBody::Empty),
            (ParamsPlacement::Body, Some(params)) => (
                Vec::new(),
                RequestBody::Json(serde_json::Value::Object(params)),
            ),
        };

        let request = HttpTransportRequest {
            method,
            url: self.endpoint(path),
            query,
            headers,
            body,
            on_upload_progress: None,
        };
        tracing::debug!(target: "request_api::http", %method, url = %request.url, "sending request");

        let response = self.transport.execute(request).await?.error_for_status()?;
        tracing::debug!(target: "request_api::http", %method, path, status = response.status, "response received");
        response.json()
    }

    fn normalize(&self, method: HttpMethod, path: &str, err: TransportError) -> ErrorResponse {
        tracing::debug!(target: "request_api::http", %method, path, err = %err, "request error");
        ErrorResponse::from_transport_error(&err, &self.config.client_error_message)
    }
}
