use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    AppState,
    error::ApiResult,
    extractors::json_object::JsonObject,
    notes::{
        id::parse_note_id,
        model::{validate_new, validate_patch},
    },
};

use super::dto::{CreateNoteRequest, CreatedNoteResponse, NoteDto, UpdateNoteRequest};

#[utoipa::path(
    post,
    path = "/notes",
    request_body = CreateNoteRequest,
    responses(
        (status = 201, description = "Note created", body = CreatedNoteResponse),
        (status = 400, description = "Invalid note payload", body = crate::error::ErrorBody),
        (status = 500, description = "Internal server error", body = crate::error::ErrorBody)
    ),
    tag = "Notes"
)]
pub async fn create_note(
    State(state): State<AppState>,
    JsonObject(fields): JsonObject,
) -> ApiResult<(StatusCode, Json<CreatedNoteResponse>)> {
    let note = validate_new(fields)?;
    let id = state.notes.create(note).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedNoteResponse { id: id.to_hex() }),
    ))
}

#[utoipa::path(
    get,
    path = "/notes",
    responses(
        (status = 200, description = "All notes", body = [NoteDto]),
        (status = 500, description = "Internal server error", body = crate::error::ErrorBody)
    ),
    tag = "Notes"
)]
pub async fn list_notes(
    State(state): State<AppState>,
) -> ApiResult<(StatusCode, Json<Vec<NoteDto>>)> {
    let notes = state.notes.list_all().await?;

    Ok((
        StatusCode::OK,
        Json(notes.into_iter().map(NoteDto::from).collect()),
    ))
}

#[utoipa::path(
    patch,
    path = "/notes/{id}",
    params(
        ("id" = String, Path, description = "Note id (24 hex characters)")
    ),
    request_body = UpdateNoteRequest,
    responses(
        (status = 200, description = "Note updated", body = NoteDto),
        (status = 400, description = "Invalid note id or payload", body = crate::error::ErrorBody),
        (status = 404, description = "Note not found", body = crate::error::ErrorBody),
        (status = 500, description = "Internal server error", body = crate::error::ErrorBody)
    ),
    tag = "Notes"
)]
pub async fn update_note(
    State(state): State<AppState>,
    Path(note_id): Path<String>,
    JsonObject(fields): JsonObject,
) -> ApiResult<(StatusCode, Json<NoteDto>)> {
    let note_id = parse_note_id(&note_id)?;
    let patch = validate_patch(fields)?;

    let note = state.notes.update_by_id(note_id, patch).await?;

    Ok((StatusCode::OK, Json(note.into())))
}

#[utoipa::path(
    delete,
    path = "/notes/{id}",
    params(
        ("id" = String, Path, description = "Note id (24 hex characters)")
    ),
    responses(
        (status = 204, description = "Note deleted"),
        (status = 400, description = "Invalid note id", body = crate::error::ErrorBody),
        (status = 404, description = "Note not found", body = crate::error::ErrorBody),
        (status = 500, description = "Internal server error", body = crate::error::ErrorBody)
    ),
    tag = "Notes"
)]
pub async fn delete_note(
    State(state): State<AppState>,
    Path(note_id): Path<String>,
) -> ApiResult<StatusCode> {
    let note_id = parse_note_id(&note_id)?;

    state.notes.delete_by_id(note_id).await?;

    Ok(StatusCode::NO_CONTENT) // 204
}
