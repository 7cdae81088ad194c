//! Trait abstractions for dependency injection and testability.
//!
//! - [`HttpClient`] - HTTP GET against the admin backend

pub mod http;

pub use http::{Headers, HttpClient, HttpError, Response};
