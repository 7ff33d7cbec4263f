//! HTTP Utilities
//!
//! This module contains HTTP-related utilities:
//! - The injectable transport boundary and its `reqwest` implementation
//! - Header construction
//! - Query-string serialization

pub mod client;
pub mod headers;
pub mod query;
pub mod transport;

// Re-export main types
pub use client::*;
pub use headers::*;
pub use transport::*;
