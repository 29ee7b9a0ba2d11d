use axum::{
    Json,
    extract::{FromRequest, Request},
};
use serde_json::{Map, Value};

use crate::{error::ApiError, notes::model::ValidationError};

/// A JSON object body. Any other body (wrong content type, malformed JSON,
/// arrays, scalars) is a validation error instead of axum's plain-text rejection.
pub struct JsonObject(pub Map<String, Value>);

impl<S> FromRequest<S> for JsonObject
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(fields) = Json::<Map<String, Value>>::from_request(req, state)
            .await
            .map_err(|rejection| {
                ApiError::Validation(ValidationError::new("body", rejection.body_text()))
            })?;

        Ok(JsonObject(fields))
    }
}
