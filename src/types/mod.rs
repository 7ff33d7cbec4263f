//! Core types: client configuration and request descriptors.

pub mod http;
pub mod request;

pub use http::*;
pub use request::*;
