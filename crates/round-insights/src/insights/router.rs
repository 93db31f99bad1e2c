use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{RoundId, UserId};
use super::repository::{InsightRepository, RepositoryError, RoundSource};
use super::service::{InsightServiceError, RoundInsightService, ViewerTier};
use super::InsightRequest;

#[derive(Debug, Deserialize)]
pub(crate) struct ViewerQuery {
    user_id: String,
    #[serde(default)]
    tier: ViewerTier,
}

/// Router builder exposing round insight endpoints.
pub fn insight_router<R, S>(service: Arc<RoundInsightService<R, S>>) -> Router
where
    R: InsightRepository + 'static,
    S: RoundSource + 'static,
{
    Router::new()
        .route(
            "/api/v1/rounds/:round_id/insights",
            get(insights_handler::<R, S>),
        )
        .route(
            "/api/v1/rounds/:round_id/insights/regenerate",
            post(regenerate_handler::<R, S>),
        )
        .route("/api/v1/insights/preview", post(preview_handler::<R, S>))
        .with_state(service)
}

pub(crate) async fn insights_handler<R, S>(
    State(service): State<Arc<RoundInsightService<R, S>>>,
    Path(round_id): Path<String>,
    Query(viewer): Query<ViewerQuery>,
) -> Response
where
    R: InsightRepository + 'static,
    S: RoundSource + 'static,
{
    let round_id = RoundId(round_id);
    let user_id = UserId(viewer.user_id);
    let key = round_id.clone();
    let result = off_runtime(move || service.insights(&user_id, &key, viewer.tier)).await;
    match result {
        Ok(view) => (StatusCode::OK, axum::Json(view)).into_response(),
        Err(error) => error_response(&round_id, error),
    }
}

pub(crate) async fn regenerate_handler<R, S>(
    State(service): State<Arc<RoundInsightService<R, S>>>,
    Path(round_id): Path<String>,
    Query(viewer): Query<ViewerQuery>,
) -> Response
where
    R: InsightRepository + 'static,
    S: RoundSource + 'static,
{
    let round_id = RoundId(round_id);
    let user_id = UserId(viewer.user_id);
    let key = round_id.clone();
    let result = off_runtime(move || service.regenerate(&user_id, &key, viewer.tier)).await;
    match result {
        Ok(view) => (StatusCode::OK, axum::Json(view)).into_response(),
        Err(error) => error_response(&round_id, error),
    }
}

pub(crate) async fn preview_handler<R, S>(
    State(service): State<Arc<RoundInsightService<R, S>>>,
    axum::Json(request): axum::Json<InsightRequest>,
) -> Response
where
    R: InsightRepository + 'static,
    S: RoundSource + 'static,
{
    let outcome = service.preview(&request);
    (StatusCode::OK, axum::Json(outcome)).into_response()
}

/// Repositories are synchronous and may block, and coalesced callers wait on a
/// per-round lock, so service calls run on the blocking pool.
async fn off_runtime<T, F>(job: F) -> Result<T, InsightServiceError>
where
    F: FnOnce() -> Result<T, InsightServiceError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(job)
        .await
        .unwrap_or_else(|join| Err(InsightServiceError::Worker(join.to_string())))
}

fn error_response(round_id: &RoundId, error: InsightServiceError) -> Response {
    match error {
        InsightServiceError::Repository(RepositoryError::NotFound) => {
            let payload = json!({
                "error": "round not found",
                "round_id": round_id.0,
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        InsightServiceError::Repository(RepositoryError::Conflict) => {
            tracing::warn!(round_id = %round_id.0, "insight write rejected as conflicting");
            let payload = json!({
                "error": "insight record changed concurrently",
                "round_id": round_id.0,
            });
            (StatusCode::CONFLICT, axum::Json(payload)).into_response()
        }
        InsightServiceError::Repository(RepositoryError::Unavailable(reason)) => {
            tracing::warn!(round_id = %round_id.0, %reason, "insight storage unavailable");
            let payload = json!({
                "error": format!("storage unavailable: {reason}"),
            });
            (StatusCode::SERVICE_UNAVAILABLE, axum::Json(payload)).into_response()
        }
        other => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
