//! Recording fake transport shared by the integration tests.
#![allow(dead_code)]

use async_trait::async_trait;
use bytes::Bytes;
use request_api::{HttpTransport, HttpTransportRequest, HttpTransportResponse, TransportError};
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

pub const BASE_URL: &str = "https://api.example.com";

pub enum MockReply {
    Response(HttpTransportResponse),
    Network(String),
}

impl MockReply {
    pub fn json(status: u16, body: serde_json::Value) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Self::Response(HttpTransportResponse {
            status,
            headers,
            body: Bytes::from(body.to_string()),
        })
    }

    pub fn text(status: u16, body: &'static str) -> Self {
        Self::Response(HttpTransportResponse {
            status,
            headers: HeaderMap::new(),
            body: Bytes::from_static(body.as_bytes()),
        })
    }

    pub fn network(reason: &str) -> Self {
        Self::Network(reason.to_string())
    }
}

#[derive(Default)]
struct MockState {
    recorded: Mutex<Vec<HttpTransportRequest>>,
    replies: Mutex<VecDeque<MockReply>>,
    progress: Mutex<Vec<f64>>,
}

/// Replays queued replies in order and records every request it receives.
#[derive(Clone, Default)]
pub struct MockTransport {
    st: Arc<MockState>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, reply: MockReply) -> Self {
        self.st.replies.lock().unwrap().push_back(reply);
        self
    }

    /// Progress fractions reported to the request's upload callback.
    pub fn progress(self, fractions: impl IntoIterator<Item = f64>) -> Self {
        self.st.progress.lock().unwrap().extend(fractions);
        self
    }

    pub fn recorded(&self) -> Vec<HttpTransportRequest> {
        self.st.recorded.lock().unwrap().clone()
    }

    pub fn only_request(&self) -> HttpTransportRequest {
        let recorded = self.recorded();
        assert_eq!(recorded.len(), 1, "expected exactly one request");
        recorded.into_iter().next().unwrap()
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn execute(
        &self,
        request: HttpTransportRequest,
    ) -> Result<HttpTransportResponse, TransportError> {
        if let Some(on_progress) = &request.on_upload_progress {
            for fraction in self.st.progress.lock().unwrap().iter() {
                on_progress(*fraction);
            }
        }
        self.st.recorded.lock().unwrap().push(request);

        match self.st.replies.lock().unwrap().pop_front() {
            Some(MockReply::Response(resp)) => Ok(resp),
            Some(MockReply::Network(reason)) => Err(TransportError::Network(reason)),
            None => panic!("MockTransport: no reply queued"),
        }
    }
}

pub fn client(transport: &MockTransport) -> request_api::ApiClient {
    client_with(transport, request_api::ApiConfig::new(BASE_URL))
}

pub fn client_with(
    transport: &MockTransport,
    config: request_api::ApiConfig,
) -> request_api::ApiClient {
    request_api::ApiClient::with_transport(config, Arc::new(transport.clone()))
}

pub fn header<'a>(request: &'a HttpTransportRequest, name: &str) -> Option<&'a str> {
    request.headers.get(name).and_then(|v| v.to_str().ok())
}
