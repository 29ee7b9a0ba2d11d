use axum::extract::State;

use crate::{AppState, error::ApiResult};

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is alive", body = String, content_type = "text/plain")
    ),
    tag = "Core"
)]
pub async fn health() -> &'static str {
    "ok"
}

#[utoipa::path(
    get,
    path = "/db-health",
    responses(
        (status = 200, description = "MongoDB answers ping", body = String, content_type = "text/plain"),
        (status = 500, description = "MongoDB is unreachable", body = crate::error::ErrorBody)
    ),
    tag = "Core"
)]
pub async fn db_health(State(state): State<AppState>) -> ApiResult<&'static str> {
    state.notes.ping().await?;
    Ok("ok")
}
