//! HTTP configuration types.
//!
//! This module defines `ApiConfig` and its builder. The base endpoint is read
//! once when the client is built and never reloaded.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

use crate::defaults;
use crate::error::TransportError;

/// Client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base endpoint prefixed to every dispatched path
    pub base_url: String,
    /// Total request timeout; `None` lets a call run until the transport resolves
    #[serde(with = "duration_option_serde")]
    pub timeout: Option<Duration>,
    /// Connection timeout
    #[serde(with = "duration_option_serde")]
    pub connect_timeout: Option<Duration>,
    /// Headers sent with every request
    pub headers: HashMap<String, String>,
    /// User agent
    pub user_agent: Option<String>,
    /// Store cookies returned by the API and send them back
    pub with_credentials: bool,
    /// Message reported when no HTTP response was obtained
    pub client_error_message: String,
    /// Send an empty `Authorization` header on POST/PUT when no token is given.
    ///
    /// GET and DELETE always omit the header in that case.
    pub send_empty_authorization: bool,
}

impl ApiConfig {
    /// Configuration with defaults for everything but the base endpoint.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: None,
            connect_timeout: Some(defaults::http::CONNECT_TIMEOUT),
            headers: HashMap::new(),
            user_agent: Some(defaults::http::USER_AGENT.to_string()),
            with_credentials: defaults::http::WITH_CREDENTIALS,
            client_error_message: defaults::errors::CLIENT_ERROR_MESSAGE.to_string(),
            send_empty_authorization: true,
        }
    }

    /// Returns a builder for constructing `ApiConfig`
    pub fn builder() -> ApiConfigBuilder {
        ApiConfigBuilder::new()
    }

    /// Read the configuration from the process environment.
    ///
    /// `API_END_POINT` is required; `API_TIMEOUT_SECS` is optional.
    pub fn from_env() -> Result<Self, TransportError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, TransportError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup(defaults::env::BASE_ENDPOINT).ok_or_else(|| {
            TransportError::Configuration(format!(
                "{} is not set",
                defaults::env::BASE_ENDPOINT
            ))
        })?;

        let mut builder = Self::builder().base_url(base_url);
        if let Some(raw) = lookup(defaults::env::TIMEOUT_SECS) {
            let secs: u64 = raw.trim().parse().map_err(|e| {
                TransportError::Configuration(format!(
                    "invalid {} '{raw}': {e}",
                    defaults::env::TIMEOUT_SECS
                ))
            })?;
            builder = builder.timeout(Some(Duration::from_secs(secs)));
        }
        builder.build()
    }
}

/// Builder for `ApiConfig`
#[derive(Debug, Clone, Default)]
pub struct ApiConfigBuilder {
    base_url: Option<String>,
    timeout: Option<Option<Duration>>,
    connect_timeout: Option<Option<Duration>>,
    headers: HashMap<String, String>,
    user_agent: Option<Option<String>>,
    with_credentials: Option<bool>,
    client_error_message: Option<String>,
    send_empty_authorization: Option<bool>,
}

impl ApiConfigBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    pub fn base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = Some(base_url.into());
        self
    }
    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = Some(timeout);
        self
    }
    pub fn connect_timeout(mut self, connect_timeout: Option<Duration>) -> Self {
        self.connect_timeout = Some(connect_timeout);
        self
    }
    pub fn user_agent<S: Into<String>>(mut self, user_agent: Option<S>) -> Self {
        self.user_agent = Some(user_agent.map(|s| s.into()));
        self
    }
    pub fn header<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }
    pub fn headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers.extend(headers);
        self
    }
    pub fn with_credentials(mut self, enabled: bool) -> Self {
        self.with_credentials = Some(enabled);
        self
    }
    /// Localized message for failures where no HTTP response was obtained.
    pub fn client_error_message<S: Into<String>>(mut self, message: S) -> Self {
        self.client_error_message = Some(message.into());
        self
    }
    pub fn send_empty_authorization(mut self, enabled: bool) -> Self {
        self.send_empty_authorization = Some(enabled);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<ApiConfig, TransportError> {
        let base_url = self
            .base_url
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| TransportError::Configuration("base URL not specified".to_string()))?;

        let base = ApiConfig::new(base_url);
        let mut headers = base.headers;
        headers.extend(self.headers);

        Ok(ApiConfig {
            base_url: base.base_url,
            timeout: self.timeout.unwrap_or(base.timeout),
            connect_timeout: self.connect_timeout.unwrap_or(base.connect_timeout),
            headers,
            user_agent: self.user_agent.unwrap_or(base.user_agent),
            with_credentials: self.with_credentials.unwrap_or(base.with_credentials),
            client_error_message: self
                .client_error_message
                .unwrap_or(base.client_error_message),
            send_empty_authorization: self
                .send_empty_authorization
                .unwrap_or(base.send_empty_authorization),
        })
    }
}

// Helper module for Duration serialization
mod duration_option_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Option<Duration>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match duration {
            Some(d) => d.as_secs().serialize(serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Duration>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs: Option<u64> = Option::deserialize(deserializer)?;
        Ok(secs.map(Duration::from_secs))
    }
}
