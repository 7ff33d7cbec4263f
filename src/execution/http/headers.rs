//! HTTP Headers Utility
//!
//! Builds the per-request header sets: bearer authorization for dispatched
//! requests and the content type for uploads.

use crate::error::TransportError;
use crate::types::{HttpMethod, ParamsPlacement};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use std::collections::HashMap;

/// HTTP header builder for API requests
pub struct HttpHeaderBuilder {
    headers: HeaderMap,
}

impl HttpHeaderBuilder {
    /// Create a new header builder
    pub fn new() -> Self {
        Self {
            headers: HeaderMap::new(),
        }
    }

    /// Add Bearer token authorization
    pub fn with_bearer_auth(mut self, token: &str) -> Result<Self, TransportError> {
        let mut value = HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|e| TransportError::InvalidHeader(format!("Invalid access token: {e}")))?;
        value.set_sensitive(true);
        self.headers.insert(AUTHORIZATION, value);
        Ok(self)
    }

    /// Add an `Authorization` header with an empty value
    pub fn with_empty_auth(mut self) -> Self {
        self.headers
            .insert(AUTHORIZATION, HeaderValue::from_static(""));
        self
    }

    /// Add a content type
    pub fn with_content_type(mut self, content_type: &str) -> Result<Self, TransportError> {
        self.headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_str(content_type).map_err(|e| {
                TransportError::InvalidHeader(format!("Invalid content type '{content_type}': {e}"))
            })?,
        );
        Ok(self)
    }

    /// Add a custom header
    pub fn with_header(mut self, name: &str, value: &str) -> Result<Self, TransportError> {
        let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
            TransportError::InvalidHeader(format!("Invalid header name '{name}': {e}"))
        })?;
        self.headers.insert(
            header_name,
            HeaderValue::from_str(value).map_err(|e| {
                TransportError::InvalidHeader(format!("Invalid header value '{value}': {e}"))
            })?,
        );
        Ok(self)
    }

    /// Add multiple custom headers from a HashMap
    pub fn with_custom_headers(
        mut self,
        custom_headers: &HashMap<String, String>,
    ) -> Result<Self, TransportError> {
        for (key, value) in custom_headers {
            self = self.with_header(key, value)?;
        }
        Ok(self)
    }

    /// Build the final HeaderMap
    pub fn build(self) -> HeaderMap {
        self.headers
    }
}

impl Default for HttpHeaderBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Authorization headers for a dispatched request.
///
/// A token yields `Authorization: Bearer <token>`. Without one, body-carrying
/// methods send an empty header when `send_empty` is set; query-carrying
/// methods omit it.
pub fn authorization_headers(
    method: HttpMethod,
    access_token: Option<&str>,
    send_empty: bool,
) -> Result<HeaderMap, TransportError> {
    let builder = HttpHeaderBuilder::new();
    let builder = match (access_token, method.params_placement()) {
        (Some(token), _) => builder.with_bearer_auth(token)?,
        (None, ParamsPlacement::Body) if send_empty => builder.with_empty_auth(),
        (None, _) => builder,
    };
    Ok(builder.build())
}
