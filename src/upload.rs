//! File upload with progress reporting.
//!
//! Unlike dispatched requests, uploads:
//! - use `url` as given, without the base endpoint
//! - return the raw transport response, not a decoded body
//! - surface transport failures unchanged

use bytes::Bytes;

use crate::client::ApiClient;
use crate::error::TransportError;
use crate::execution::http::{
    HttpHeaderBuilder, HttpTransportRequest, HttpTransportResponse, ProgressFn, RequestBody,
};
use crate::types::HttpMethod;

impl ApiClient {
    /// POST `form_data` to `url` with `Content-Type: <content_type>`.
    ///
    /// `on_progress` receives the fraction of the body sent so far (0 when
    /// the transport cannot tell).
    ///
    /// # Errors
    /// A non-2xx response is `TransportError::Status` carrying the response;
    /// other transport failures are returned as reported.
    pub async fn file_upload(
        &self,
        url: &str,
        content_type: &str,
        form_data: impl Into<Bytes>,
        on_progress: Option<ProgressFn>,
    ) -> Result<HttpTransportResponse, TransportError> {
        let headers = HttpHeaderBuilder::new()
            .with_content_type(content_type)?
            .build();
        let body = form_data.into();
        tracing::debug!(target: "request_api::http", url, bytes = body.len(), "uploading");

        let request = HttpTransportRequest {
            method: HttpMethod::Post,
            url: url.to_string(),
            query: Vec::new(),
            headers,
            body: RequestBody::Bytes(body),
            on_upload_progress: on_progress,
        };
        self.transport().execute(request).await?.error_for_status()
    }
}
