use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use utoipa::ToSchema;

use crate::notes::{id::InvalidNoteId, model::ValidationError, repo::RepoError};

#[derive(Serialize, ToSchema)]
pub struct ErrorBody {
    pub error: &'static str,
    pub message: String,
}

#[derive(Debug)]
pub enum ApiError {
    Validation(ValidationError),
    InvalidId(InvalidNoteId),
    NotFound,
    Db(RepoError),
    Render(minijinja::Error),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        ApiError::Validation(e)
    }
}

impl From<InvalidNoteId> for ApiError {
    fn from(e: InvalidNoteId) -> Self {
        ApiError::InvalidId(e)
    }
}

impl From<RepoError> for ApiError {
    fn from(e: RepoError) -> Self {
        match e {
            RepoError::NotFound => ApiError::NotFound,
            other => ApiError::Db(other),
        }
    }
}

impl From<minijinja::Error> for ApiError {
    fn from(e: minijinja::Error) -> Self {
        ApiError::Render(e)
    }
}

fn internal() -> axum::response::Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorBody {
            error: "INTERNAL",
            message: "Internal server error".to_string(),
        }),
    )
        .into_response()
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        match self {
            ApiError::Validation(e) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorBody {
                    error: "VALIDATION",
                    message: e.to_string(),
                }),
            )
                .into_response(),
            ApiError::InvalidId(_) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorBody {
                    error: "INVALID_ID",
                    message: "Invalid note ID format".to_string(),
                }),
            )
                .into_response(),
            ApiError::NotFound => (
                StatusCode::NOT_FOUND,
                Json(ErrorBody {
                    error: "NOT_FOUND",
                    message: "Note not found".to_string(),
                }),
            )
                .into_response(),
            ApiError::Db(e) => {
                tracing::error!("db error: {e}");
                internal()
            }
            ApiError::Render(e) => {
                tracing::error!("template error: {e}");
                internal()
            }
        }
    }
}
