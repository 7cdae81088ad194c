//! Admin REST API client.
//!
//! [`AdminApi`] wraps an [`HttpClient`] and exposes one method per backend
//! read used by the console. Each call takes an explicit [`RequestContext`];
//! nothing is read from ambient storage.

mod context;
pub mod endpoints;
pub mod payload;

pub use context::RequestContext;

use std::sync::Arc;

use futures::future::join_all;
use tracing::{debug, info};

use crate::error::{ApiError, ApiResult};
use crate::models::{join_results, JoinOutcome, LearningResult, ResultTarget, SummaryTile, User};
use crate::traits::{HttpClient, Response};

#[derive(Clone)]
pub struct AdminApi {
    http: Arc<dyn HttpClient>,
}

impl std::fmt::Debug for AdminApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminApi").finish_non_exhaustive()
    }
}

impl AdminApi {
    pub fn new(http: Arc<dyn HttpClient>) -> Self {
        Self { http }
    }

    /// GET `path` and fail on transport errors or any non-2xx status.
    async fn get_ok(&self, ctx: &RequestContext, path: &str) -> ApiResult<Response> {
        let url = ctx.url(path);
        debug!(%url, authorized = ctx.has_token(), "GET");

        let response = self
            .http
            .get(&url, &ctx.headers())
            .await
            .map_err(|source| ApiError::Transport {
                endpoint: path.to_string(),
                source,
            })?;

        if !response.is_success() {
            return Err(ApiError::Status {
                endpoint: path.to_string(),
                status: response.status,
            });
        }
        Ok(response)
    }

    fn decode<T>(
        path: &str,
        response: &Response,
        decode: impl FnOnce(&[u8]) -> Result<T, serde_json::Error>,
    ) -> ApiResult<T> {
        decode(&response.body).map_err(|source| ApiError::Decode {
            endpoint: path.to_string(),
            source,
        })
    }

    /// Read one dashboard counter from its JSON path.
    pub async fn fetch_count(&self, ctx: &RequestContext, tile: SummaryTile) -> ApiResult<u64> {
        let path = endpoints::count_path(tile);
        let response = self.get_ok(ctx, path).await?;
        let count = match tile {
            SummaryTile::Users => Self::decode(path, &response, payload::users_total)?,
            _ => Self::decode(path, &response, payload::total_elements)?,
        };
        debug!(tile = tile.title(), count, "dashboard counter loaded");
        Ok(count)
    }

    /// Issue all four counter requests concurrently. Each outcome is independent.
    pub async fn fetch_summary(&self, ctx: &RequestContext) -> Vec<(SummaryTile, ApiResult<u64>)> {
        let requests = SummaryTile::ALL
            .into_iter()
            .map(|tile| async move { (tile, self.fetch_count(ctx, tile).await) });
        join_all(requests).await
    }

    /// The user list used by the results selector and join.
    pub async fn fetch_users(&self, ctx: &RequestContext) -> ApiResult<Vec<User>> {
        let response = self.get_ok(ctx, endpoints::USERS).await?;
        let users = Self::decode(endpoints::USERS, &response, payload::users_list)?;
        info!(count = users.len(), "users loaded");
        Ok(users)
    }

    /// Learning results for `target`, normalized to a flat list.
    pub async fn fetch_learning_results(
        &self,
        ctx: &RequestContext,
        target: ResultTarget,
    ) -> ApiResult<Vec<LearningResult>> {
        let path = endpoints::learning_results_path(target);
        let response = self.get_ok(ctx, &path).await?;
        let results = Self::decode(&path, &response, payload::normalize_results)?;
        info!(target_filter = %target, count = results.len(), "learning results loaded");
        Ok(results)
    }

    /// Learning results for `target` joined against `users`.
    pub async fn fetch_combined_results(
        &self,
        ctx: &RequestContext,
        target: ResultTarget,
        users: &[User],
    ) -> ApiResult<JoinOutcome> {
        let results = self.fetch_learning_results(ctx, target).await?;
        Ok(join_results(results, target, users))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{MockHttpClient, MockResponse};
    use crate::error::ErrorCategory;
    use crate::traits::HttpError;
    use serde_json::json;

    const BASE: &str = "http://api.test";

    fn setup() -> (MockHttpClient, AdminApi, RequestContext) {
        let mock = MockHttpClient::new();
        let api = AdminApi::new(Arc::new(mock.clone()));
        let ctx = RequestContext::new(BASE).with_token("tok");
        (mock, api, ctx)
    }

    #[tokio::test]
    async fn test_fetch_count_reads_tile_specific_path() {
        let (mock, api, ctx) = setup();
        mock.set_response(
            "http://api.test/api/v1/users",
            MockResponse::json(200, json!({"meta": {"total": 31}})),
        );
        mock.set_response(
            "http://api.test/api/v1/questions?point=5",
            MockResponse::json(200, json!({"data": {"totalElements": 250}})),
        );

        assert_eq!(api.fetch_count(&ctx, SummaryTile::Users).await.unwrap(), 31);
        assert_eq!(api.fetch_count(&ctx, SummaryTile::Questions).await.unwrap(), 250);
    }

    #[tokio::test]
    async fn test_fetch_summary_failures_are_independent() {
        let (mock, api, ctx) = setup();
        mock.set_response(
            "http://api.test/api/v1/courses",
            MockResponse::json(200, json!({"data": {"totalElements": 6}})),
        );
        mock.set_response(
            "http://api.test/api/v1/lessons",
            MockResponse::Error(HttpError::Timeout("15s".to_string())),
        );
        mock.set_default_response(MockResponse::json(500, json!({})));

        let outcomes = api.fetch_summary(&ctx).await;
        assert_eq!(outcomes.len(), 4);
        for (tile, outcome) in outcomes {
            match tile {
                SummaryTile::Courses => assert_eq!(outcome.unwrap(), 6),
                SummaryTile::Lessons => {
                    assert_eq!(outcome.unwrap_err().category(), ErrorCategory::Network)
                }
                _ => assert_eq!(outcome.unwrap_err().category(), ErrorCategory::Server),
            }
        }
    }

    #[tokio::test]
    async fn test_non_ok_status_is_an_error() {
        let (mock, api, ctx) = setup();
        mock.set_response(
            "http://api.test/api/v1/admin/learning-results",
            MockResponse::json(403, json!({"message": "forbidden"})),
        );

        let err = api
            .fetch_learning_results(&ctx, ResultTarget::AllUsers)
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Status { status: 403, .. }));
        assert_eq!(err.endpoint(), "/api/v1/admin/learning-results");
    }

    #[tokio::test]
    async fn test_bearer_token_is_sent() {
        let (mock, api, ctx) = setup();
        mock.set_response(
            "http://api.test/api/v1/users",
            MockResponse::json(200, json!({"result": []})),
        );

        api.fetch_users(&ctx).await.unwrap();
        let requests = mock.get_requests();
        assert_eq!(
            requests[0].headers.get("Authorization"),
            Some(&"Bearer tok".to_string())
        );
    }

    #[tokio::test]
    async fn test_fetch_combined_results_per_user() {
        let (mock, api, ctx) = setup();
        mock.set_response(
            "http://api.test/api/v1/learning-results/user/3",
            MockResponse::json(200, json!({"data": {"id": 90, "writingScore": 2.5}})),
        );
        let users = vec![User {
            id: 3,
            email: "ha@example.com".to_string(),
            name: "Ha".to_string(),
            phone: None,
            speci_field: None,
            avatar: None,
            englishlevel: None,
        }];

        let outcome = api
            .fetch_combined_results(&ctx, ResultTarget::User(3), &users)
            .await
            .unwrap();
        assert_eq!(outcome.rows.len(), 1);
        assert_eq!(outcome.rows[0].user.name, "Ha");
        assert_eq!(outcome.rows[0].result.writing_score, 2.5);
    }
}
