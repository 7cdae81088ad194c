//! Common test utilities for integration tests.
//!
//! Fixtures mirror the backend's JSON shapes. `TestHarness` wires an [`App`]
//! to a [`MockHttpClient`] and lets tests pump the async message channel by
//! hand instead of running the event loop.
//!
//! # Example
//!
//! ```ignore
//! let mut harness = TestHarness::new();
//! harness.mock.set_response(&url(USERS), users_response(&sample_users()));
//! harness.app.show_screen(Screen::LearningResults);
//! harness.pump(2).await;
//! ```

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use serde_json::{json, Value};
use tokio::sync::mpsc::UnboundedReceiver;

pub use encybara_admin::adapters::{MockHttpClient, MockResponse};
use encybara_admin::api::{AdminApi, RequestContext};
use encybara_admin::app::{App, AppMessage};

pub const BASE: &str = "http://api.test";
pub const TOKEN: &str = "test-admin-token";

/// Absolute mock URL for an API path.
pub fn url(path: &str) -> String {
    format!("{}{}", BASE, path)
}

pub fn user_json(id: i64, name: &str, email: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "email": email,
        "phone": null,
        "speciField": "Software",
        "avatar": null,
        "englishlevel": "B1"
    })
}

/// Three users with ids 1..=3.
pub fn sample_users() -> Vec<Value> {
    vec![
        user_json(1, "An Nguyen", "an@example.com"),
        user_json(2, "Binh Tran", "binh@example.com"),
        user_json(3, "Chi Le", "chi@example.com"),
    ]
}

/// `GET /api/v1/users` body carrying both `meta.total` and `result`.
pub fn users_response(users: &[Value]) -> MockResponse {
    MockResponse::json(
        200,
        json!({
            "meta": {"page": 1, "pageSize": 10, "pages": 1, "total": users.len()},
            "result": users
        }),
    )
}

pub fn result_json(id: i64, user_id: Option<i64>, score: f64) -> Value {
    let mut value = json!({
        "id": id,
        "listeningScore": score,
        "speakingScore": score,
        "readingScore": score,
        "writingScore": score,
        "lastUpdated": "2024-03-05T14:07:00Z",
        "previousListeningScore": 0.0,
        "previousSpeakingScore": 0.0,
        "previousReadingScore": 0.0,
        "previousWritingScore": 0.0,
        "listeningProgress": 0.0,
        "speakingProgress": 0.0,
        "readingProgress": 0.0,
        "writingProgress": 0.0,
        "overallProgress": 0.0
    });
    if let Some(user_id) = user_id {
        value["userId"] = json!(user_id);
    }
    value
}

/// `count` results spread round-robin over users 1..=3.
pub fn sample_results(count: usize) -> Vec<Value> {
    (0..count)
        .map(|i| result_json(100 + i as i64, Some((i % 3) as i64 + 1), 3.5))
        .collect()
}

/// Aggregate endpoint body: `{data: {content: [...]}}`.
pub fn page_response(results: Vec<Value>) -> MockResponse {
    let total = results.len();
    MockResponse::json(
        200,
        json!({"data": {"content": results, "totalElements": total}}),
    )
}

/// Per-user endpoint body: `{data: [...]}`.
pub fn list_response(results: Vec<Value>) -> MockResponse {
    MockResponse::json(200, json!({ "data": results }))
}

pub fn count_response(total: u64) -> MockResponse {
    MockResponse::json(200, json!({"data": {"totalElements": total}}))
}

pub fn request_context() -> RequestContext {
    RequestContext::new(BASE).with_token(TOKEN)
}

/// An [`App`] over a mock backend, with its message receiver detached.
pub struct TestHarness {
    pub app: App,
    pub mock: MockHttpClient,
    rx: UnboundedReceiver<AppMessage>,
}

impl TestHarness {
    pub fn new() -> Self {
        let mock = MockHttpClient::new();
        let api = AdminApi::new(Arc::new(mock.clone()));
        let mut app = App::new(api, request_context());
        let rx = app.message_rx.take().expect("fresh app owns its receiver");
        Self { app, mock, rx }
    }

    /// Receive and apply exactly `count` messages.
    pub async fn pump(&mut self, count: usize) {
        for _ in 0..count {
            let message = tokio::time::timeout(Duration::from_secs(5), self.rx.recv())
                .await
                .expect("timed out waiting for an app message")
                .expect("message channel closed");
            self.app.handle_message(message);
        }
    }

    /// Apply whatever arrives within a short grace period; returns how many.
    pub async fn drain(&mut self) -> usize {
        tokio::time::sleep(Duration::from_millis(50)).await;
        let mut applied = 0;
        while let Ok(message) = self.rx.try_recv() {
            self.app.handle_message(message);
            applied += 1;
        }
        applied
    }
}
