//! Mock implementations for testing.
//!
//! - [`MockHttpClient`] - HTTP client with canned per-URL responses

pub mod http;

pub use http::{MockHttpClient, MockResponse, RecordedRequest};
