//! # request-api - A thin HTTP request helper
//!
//! Wraps an HTTP transport with the conventions a web API client needs on
//! every call: base-URL resolution, query-string serialization, bearer-token
//! injection and a single normalized error shape.
#![deny(unsafe_code)]

//! ## Features
//!
//! - **One error shape**: every dispatched request fails with `ErrorResponse`.
//! - **Closed method set**: `HttpMethod` is `Get`, `Post`, `Put` or `Delete`.
//! - **Injectable transport**: `reqwest` by default, any `HttpTransport` in tests.
//! - **Uploads with progress**: `file_upload` reports the fraction sent.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use request_api::prelude::*;
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct User {
//!     id: u64,
//!     name: String,
//! }
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api = ApiClient::new(ApiConfig::new("https://api.example.com"))?;
//!
//!     let users: Vec<User> = api
//!         .request_api(
//!             HttpMethod::Get,
//!             RequestOptions::new("/users").param("active", true),
//!             Some("access-token"),
//!         )
//!         .await?;
//!     for user in users {
//!         println!("{}: {}", user.id, user.name);
//!     }
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod defaults;
pub mod error;
pub mod execution;
pub mod types;
mod upload;

pub use client::ApiClient;
pub use error::{ErrorResponse, TransportError};
pub use execution::http::{
    HttpTransport, HttpTransportRequest, HttpTransportResponse, ProgressFn, ReqwestTransport,
    RequestBody,
};
pub use types::{ApiConfig, ApiConfigBuilder, HttpMethod, Params, RequestOptions};

/// Commonly used items
pub mod prelude {
    pub use crate::client::ApiClient;
    pub use crate::error::{ErrorResponse, TransportError};
    pub use crate::execution::http::{HttpTransportResponse, ProgressFn};
    pub use crate::types::{ApiConfig, HttpMethod, Params, RequestOptions};
}
