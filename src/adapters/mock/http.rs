//! Mock HTTP client for testing.
//!
//! Returns canned responses keyed by exact URL and records every request so
//! tests can assert which endpoints were hit and with which headers.

use async_trait::async_trait;
use bytes::Bytes;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::traits::{Headers, HttpClient, HttpError, Response};

/// A recorded HTTP request for verification in tests.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub url: String,
    pub headers: Headers,
}

/// Configuration for a mock response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Return the response as-is (any status)
    Success(Response),
    /// Fail at the transport level
    Error(HttpError),
}

impl MockResponse {
    /// Shorthand for a JSON response with the given status.
    pub fn json(status: u16, value: serde_json::Value) -> Self {
        MockResponse::Success(Response::new(status, Bytes::from(value.to_string())))
    }
}

/// Mock HTTP client for testing.
///
/// ```ignore
/// let client = MockHttpClient::new();
/// client.set_response(
///     "http://api.test/api/v1/courses",
///     MockResponse::json(200, serde_json::json!({"data": {"totalElements": 3}})),
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockHttpClient {
    responses: Arc<Mutex<HashMap<String, MockResponse>>>,
    default_response: Arc<Mutex<Option<MockResponse>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a response for an exact URL (query string included).
    pub fn set_response(&self, url: &str, response: MockResponse) {
        let mut responses = self.responses.lock().unwrap_or_else(|e| e.into_inner());
        responses.insert(url.to_string(), response);
    }

    /// Set a default response for URLs without a specific match.
    pub fn set_default_response(&self, response: MockResponse) {
        let mut default = self
            .default_response
            .lock()
            .unwrap_or_else(|e| e.into_inner());
        *default = Some(response);
    }

    /// Get all recorded requests, oldest first.
    pub fn get_requests(&self) -> Vec<RecordedRequest> {
        self.requests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// URLs of all recorded requests, oldest first.
    pub fn requested_urls(&self) -> Vec<String> {
        self.get_requests().into_iter().map(|r| r.url).collect()
    }

    /// Clear all recorded requests.
    pub fn clear_requests(&self) {
        self.requests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clear();
    }

    fn record_request(&self, url: &str, headers: &Headers) {
        let mut requests = self.requests.lock().unwrap_or_else(|e| e.into_inner());
        requests.push(RecordedRequest {
            url: url.to_string(),
            headers: headers.clone(),
        });
    }

    fn get_response(&self, url: &str) -> Option<MockResponse> {
        let responses = self.responses.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(response) = responses.get(url) {
            return Some(response.clone());
        }
        drop(responses);

        self.default_response
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.record_request(url, headers);

        match self.get_response(url) {
            Some(MockResponse::Success(response)) => Ok(response),
            Some(MockResponse::Error(err)) => Err(err),
            None => Err(HttpError::Other(format!("No mock response for URL: {}", url))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_with_response() {
        let client = MockHttpClient::new();
        client.set_response(
            "http://api.test/api/v1/lessons",
            MockResponse::json(200, serde_json::json!({"data": {"totalElements": 12}})),
        );

        let response = client
            .get("http://api.test/api/v1/lessons", &Headers::new())
            .await
            .unwrap();

        assert_eq!(response.status, 200);
        assert_eq!(
            crate::api::payload::total_elements(&response.body).unwrap(),
            12
        );
        assert_eq!(client.requested_urls(), vec!["http://api.test/api/v1/lessons"]);
    }

    #[tokio::test]
    async fn test_get_with_transport_error() {
        let client = MockHttpClient::new();
        client.set_response(
            "http://api.test/down",
            MockResponse::Error(HttpError::ConnectionFailed("refused".to_string())),
        );

        let result = client.get("http://api.test/down", &Headers::new()).await;
        assert_eq!(
            result.unwrap_err(),
            HttpError::ConnectionFailed("refused".to_string())
        );
    }

    #[tokio::test]
    async fn test_exact_match_only() {
        let client = MockHttpClient::new();
        client.set_response(
            "http://api.test/api/v1/learning-results/user/1",
            MockResponse::json(200, serde_json::json!({"data": []})),
        );

        let result = client
            .get("http://api.test/api/v1/learning-results/user/12", &Headers::new())
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_default_response_and_header_recording() {
        let client = MockHttpClient::new();
        client.set_default_response(MockResponse::json(404, serde_json::json!({})));

        let mut headers = Headers::new();
        headers.insert("Authorization".to_string(), "Bearer t".to_string());
        let response = client.get("http://api.test/anything", &headers).await.unwrap();

        assert_eq!(response.status, 404);
        let requests = client.get_requests();
        assert_eq!(
            requests[0].headers.get("Authorization"),
            Some(&"Bearer t".to_string())
        );

        client.clear_requests();
        assert!(client.get_requests().is_empty());
    }
}
