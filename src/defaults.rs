//! Default Configuration Values
//!
//! Centralizes the default values used by the request helpers so they can be
//! adjusted in one place.

use std::time::Duration;

/// HTTP client defaults
pub mod http {
    use super::*;

    /// Default connection timeout
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Default User-Agent string
    pub const USER_AGENT: &str = concat!("request-api/", env!("CARGO_PKG_VERSION"));

    /// Whether cookies set by the API are stored and replayed.
    pub const WITH_CREDENTIALS: bool = true;
}

/// Environment variables read by `ApiConfig::from_env`
pub mod env {
    /// Base endpoint prefixed to every dispatched request path.
    pub const BASE_ENDPOINT: &str = "API_END_POINT";

    /// Optional request timeout, in whole seconds.
    pub const TIMEOUT_SECS: &str = "API_TIMEOUT_SECS";
}

/// Values used when reshaping failures into `ErrorResponse`
pub mod errors {
    /// Message reported when no HTTP response was obtained.
    pub const CLIENT_ERROR_MESSAGE: &str = "a client-side problem occurred";

    /// Error code reported when no HTTP response was obtained.
    pub const CLIENT_ERROR_CODE: &str = "000000";

    /// Status reported when no HTTP response was obtained.
    ///
    /// Existing callers key off this value, so it stays at 200 even though the
    /// call failed.
    pub const CLIENT_ERROR_STATUS: u16 = 200;

    /// Status used when an error response carries no usable status.
    pub const MISSING_STATUS: u16 = 400;

    /// Status reported for an unsupported request method.
    pub const INVALID_METHOD_STATUS: u16 = 400;
}

/// Upload defaults
pub mod upload {
    /// Size of the body chunks handed to the transport; progress is reported
    /// once per chunk.
    pub const CHUNK_SIZE: usize = 64 * 1024;
}
