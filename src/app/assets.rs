use axum::http::header;
use axum::response::IntoResponse;

const SCRIPT_JS: &str = include_str!("../../static/script.js");

pub async fn script_js() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/javascript; charset=utf-8")], SCRIPT_JS)
}
