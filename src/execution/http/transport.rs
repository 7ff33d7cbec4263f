//! HTTP transport abstraction.
//!
//! Dispatching and uploads never talk to `reqwest` directly: they hand a fully
//! shaped `HttpTransportRequest` to an injected `HttpTransport` and get back
//! the raw response. `ReqwestTransport` is the default implementation; tests
//! substitute a recording fake.

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;
use std::fmt;
use std::sync::Arc;

use crate::error::TransportError;
use crate::types::HttpMethod;

/// Upload progress callback, called with a fraction in `[0, 1]`.
pub type ProgressFn = Arc<dyn Fn(f64) + Send + Sync>;

/// Request payload.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Empty,
    Json(serde_json::Value),
    Bytes(Bytes),
}

/// Transport-level request data.
#[derive(Clone)]
pub struct HttpTransportRequest {
    pub method: HttpMethod,
    /// Absolute URL, without query string.
    pub url: String,
    /// Query pairs in serialization order; percent-encoding is left to the transport.
    pub query: Vec<(String, String)>,
    pub headers: HeaderMap,
    pub body: RequestBody,
    pub on_upload_progress: Option<ProgressFn>,
}

impl fmt::Debug for HttpTransportRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpTransportRequest")
            .field("method", &self.method)
            .field("url", &self.url)
            .field("query", &self.query)
            .field("headers", &self.headers)
            .field("body", &self.body)
            .field("on_upload_progress", &self.on_upload_progress.is_some())
            .finish()
    }
}

/// Transport-level response data.
#[derive(Debug, Clone)]
pub struct HttpTransportResponse {
    pub status: u16,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl HttpTransportResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Turn a non-2xx response into `TransportError::Status`.
    pub fn error_for_status(self) -> Result<Self, TransportError> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(TransportError::Status(Box::new(self)))
        }
    }

    /// Decode the body as JSON. An empty body decodes from `null`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, TransportError> {
        if self.body.iter().all(u8::is_ascii_whitespace) {
            return Ok(serde_json::from_value(serde_json::Value::Null)?);
        }
        Ok(serde_json::from_slice(&self.body)?)
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Custom HTTP transport.
///
/// Contract:
/// - Any received response is returned as `Ok`, whatever its status; callers
///   apply `error_for_status`.
/// - `Err` means no response was obtained.
/// - `on_upload_progress`, when set, is called as the request body is sent.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn execute(
        &self,
        request: HttpTransportRequest,
    ) -> Result<HttpTransportResponse, TransportError>;
}

/// Progress ratio, or 0 when the total is unknown.
pub fn progress_fraction(loaded: u64, total: Option<u64>) -> f64 {
    match total {
        Some(total) if total > 0 => (loaded as f64 / total as f64).min(1.0),
        _ => 0.0,
    }
}
