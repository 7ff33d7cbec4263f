//! Request descriptor types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ErrorResponse;

/// Request parameters in insertion order.
pub type Params = serde_json::Map<String, serde_json::Value>;

/// Supported request methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// Where a method places its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamsPlacement {
    Query,
    Body,
}

impl HttpMethod {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::Post => "post",
            Self::Put => "put",
            Self::Delete => "delete",
        }
    }

    pub fn as_reqwest(self) -> reqwest::Method {
        match self {
            Self::Get => reqwest::Method::GET,
            Self::Post => reqwest::Method::POST,
            Self::Put => reqwest::Method::PUT,
            Self::Delete => reqwest::Method::DELETE,
        }
    }

    /// GET and DELETE serialize params into the query string; POST and PUT
    /// send them as the JSON body.
    pub const fn params_placement(self) -> ParamsPlacement {
        match self {
            Self::Get | Self::Delete => ParamsPlacement::Query,
            Self::Post | Self::Put => ParamsPlacement::Body,
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = ErrorResponse;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [Self::Get, Self::Post, Self::Put, Self::Delete]
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(ErrorResponse::invalid_method)
    }
}

/// Path and parameters for one dispatched request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestOptions {
    /// Path appended to the configured base endpoint.
    pub url: String,
    pub params: Option<Params>,
}

impl RequestOptions {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            params: None,
        }
    }

    pub fn with_params(mut self, params: Params) -> Self {
        self.params = Some(params);
        self
    }

    /// Append one parameter, keeping insertion order.
    pub fn param(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.params
            .get_or_insert_with(Params::new)
            .insert(key.into(), value.into());
        self
    }
}
