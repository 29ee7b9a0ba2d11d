use axum::{Json, extract::State, response::Html};
use minijinja::context;
use utoipa::OpenApi;

use crate::{AppState, app::openapi::ApiDoc, error::ApiResult};

pub async fn swagger_ui(State(state): State<AppState>) -> ApiResult<Html<String>> {
    let page = state.templates.render(
        "docs.html",
        context! { app_name => state.app_name.as_str() },
    )?;
    Ok(Html(page))
}

pub async fn openapi_spec() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
