//! Error Handling Module
//!
//! Two error types cross the public surface:
//! - `ErrorResponse`: the fixed shape every dispatched request fails with
//! - `TransportError`: the raw transport failure, surfaced unchanged by uploads
//!
//! # Example
//!
//! ```rust,ignore
//! use request_api::error::ErrorResponse;
//!
//! let err = ErrorResponse::from_response(404, br#"{"message":"not found"}"#);
//! assert_eq!(err.message, "not found");
//! assert_eq!(err.status_code, 404);
//! ```

mod conversions;
pub mod types;

pub use types::*;
