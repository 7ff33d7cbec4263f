//! Error types.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::defaults;
use crate::execution::http::transport::HttpTransportResponse;

/// Normalized failure returned by every dispatched request.
///
/// Serializes as `{ message, time?, statusCode, errorCode? }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(rename_all = "camelCase")]
#[error("{message} (status {status_code})")]
pub struct ErrorResponse {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<DateTime<Utc>>,
    pub status_code: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
}

impl ErrorResponse {
    /// Reshape an HTTP error response.
    ///
    /// `message` and `time` are read from a JSON body when present; a missing
    /// or non-JSON body yields an empty message and no time. A `time` without
    /// an offset is taken as UTC. A zero status is reported as 400.
    pub fn from_response(status: u16, body: &[u8]) -> Self {
        let parsed = serde_json::from_slice::<serde_json::Value>(body).ok();
        let message = parsed
            .as_ref()
            .and_then(|v| v.get("message"))
            .and_then(|v| v.as_str())
            .unwrap_or_default()
            .to_string();
        let time = parsed
            .as_ref()
            .and_then(|v| v.get("time"))
            .and_then(|v| v.as_str())
            .and_then(parse_server_time);
        let status_code = if status == 0 {
            defaults::errors::MISSING_STATUS
        } else {
            status
        };

        Self {
            message,
            time,
            status_code,
            error_code: None,
        }
    }

    /// Fallback used when no HTTP response was obtained.
    pub fn client_error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            time: Some(Utc::now()),
            status_code: defaults::errors::CLIENT_ERROR_STATUS,
            error_code: Some(defaults::errors::CLIENT_ERROR_CODE.to_string()),
        }
    }

    /// Failure for a verb outside `get`/`post`/`put`/`delete`.
    pub fn invalid_method() -> Self {
        Self {
            message: String::new(),
            time: None,
            status_code: defaults::errors::INVALID_METHOD_STATUS,
            error_code: None,
        }
    }

    /// Reshape any transport failure.
    ///
    /// Failures that carry a received response keep the server's message,
    /// time and status; everything else becomes the client-error fallback
    /// with `fallback_message`.
    pub fn from_transport_error(err: &TransportError, fallback_message: &str) -> Self {
        match err.response() {
            Some(resp) => Self::from_response(resp.status, &resp.body),
            None => Self::client_error(fallback_message),
        }
    }

    /// True for the client-error fallback shape.
    pub fn is_client_error(&self) -> bool {
        self.error_code.as_deref() == Some(defaults::errors::CLIENT_ERROR_CODE)
    }
}

/// RFC 3339 first, then an offset-less local date-time read as UTC.
fn parse_server_time(raw: &str) -> Option<DateTime<Utc>> {
    raw.parse::<DateTime<Utc>>()
        .ok()
        .or_else(|| raw.parse::<NaiveDateTime>().ok().map(|t| t.and_utc()))
}

/// Failure reported by an `HttpTransport`.
#[derive(Debug, Error)]
pub enum TransportError {
    /// A response was received with a non-success status.
    #[error("HTTP error status {}", .0.status)]
    Status(Box<HttpTransportResponse>),

    /// No response was received.
    #[error("network error: {0}")]
    Network(String),

    #[error("invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("invalid header: {0}")]
    InvalidHeader(String),

    /// The response body could not be decoded.
    #[error("failed to decode response body: {0}")]
    Decode(String),

    #[error("configuration error: {0}")]
    Configuration(String),
}

impl TransportError {
    /// The HTTP response carried by this failure, if one was received.
    pub fn response(&self) -> Option<&HttpTransportResponse> {
        match self {
            Self::Status(resp) => Some(resp),
            _ => None,
        }
    }

    /// Consume the error and return the received response, if any.
    pub fn into_response(self) -> Option<HttpTransportResponse> {
        match self {
            Self::Status(resp) => Some(*resp),
            _ => None,
        }
    }
}
