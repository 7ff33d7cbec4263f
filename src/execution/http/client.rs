//! `reqwest`-backed transport.

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::{CONTENT_LENGTH, HeaderValue};

use crate::defaults;
use crate::error::TransportError;
use crate::types::ApiConfig;

use super::headers::HttpHeaderBuilder;
use super::transport::{
    HttpTransport, HttpTransportRequest, HttpTransportResponse, ProgressFn, RequestBody,
    progress_fraction,
};

/// Build a `reqwest::Client` from `ApiConfig`.
pub fn build_http_client(cfg: &ApiConfig) -> Result<reqwest::Client, TransportError> {
    let mut builder = reqwest::Client::builder();

    if let Some(timeout) = cfg.timeout {
        builder = builder.timeout(timeout);
    }
    if let Some(connect_timeout) = cfg.connect_timeout {
        builder = builder.connect_timeout(connect_timeout);
    }
    if let Some(user_agent) = &cfg.user_agent {
        builder = builder.user_agent(user_agent);
    }
    builder = builder.cookie_store(cfg.with_credentials);

    // Default headers
    if !cfg.headers.is_empty() {
        let headers = HttpHeaderBuilder::new()
            .with_custom_headers(&cfg.headers)
            .map_err(|e| TransportError::Configuration(e.to_string()))?
            .build();
        builder = builder.default_headers(headers);
    }

    builder
        .build()
        .map_err(|e| TransportError::Configuration(format!("Failed to build HTTP client: {e}")))
}

/// Default transport backed by a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    pub fn from_config(cfg: &ApiConfig) -> Result<Self, TransportError> {
        Ok(Self::new(build_http_client(cfg)?))
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute(
        &self,
        request: HttpTransportRequest,
    ) -> Result<HttpTransportResponse, TransportError> {
        let HttpTransportRequest {
            method,
            url,
            query,
            mut headers,
            body,
            on_upload_progress,
        } = request;

        let parsed = reqwest::Url::parse(&url).map_err(|e| TransportError::InvalidUrl {
            url: url.clone(),
            reason: e.to_string(),
        })?;

        let mut builder = self.client.request(method.as_reqwest(), parsed);
        if !query.is_empty() {
            builder = builder.query(&query);
        }
        builder = match (body, on_upload_progress) {
            (RequestBody::Empty, _) => builder,
            (RequestBody::Json(value), _) => builder.json(&value),
            (RequestBody::Bytes(data), Some(on_progress)) => {
                headers.insert(CONTENT_LENGTH, HeaderValue::from(data.len()));
                builder.body(progress_body(data, on_progress))
            }
            (RequestBody::Bytes(data), None) => builder.body(data),
        };
        let builder = builder.headers(headers);

        let resp = builder.send().await?;
        let status = resp.status().as_u16();
        let headers = resp.headers().clone();
        let body = resp.bytes().await?;
        tracing::trace!(target: "request_api::http", %url, status, bytes = body.len(), "transport response");

        Ok(HttpTransportResponse {
            status,
            headers,
            body,
        })
    }
}

/// Stream `data` in fixed-size chunks, reporting progress as each chunk is
/// handed to the connection.
fn progress_body(data: Bytes, on_progress: ProgressFn) -> reqwest::Body {
    let total = data.len();
    let chunks: Vec<Bytes> = (0..total)
        .step_by(defaults::upload::CHUNK_SIZE)
        .map(|start| data.slice(start..(start + defaults::upload::CHUNK_SIZE).min(total)))
        .collect();

    let mut sent = 0usize;
    let stream = futures::stream::iter(chunks.into_iter().map(move |chunk| {
        sent += chunk.len();
        on_progress(progress_fraction(sent as u64, Some(total as u64)));
        Ok::<Bytes, std::io::Error>(chunk)
    }));
    reqwest::Body::wrap_stream(stream)
}
