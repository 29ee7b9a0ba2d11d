use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::notes::model::Note;

/// Request shape for `POST /notes`. Documentation only: handlers accept any
/// JSON object so extra fields reach the store.
#[allow(dead_code)]
#[derive(Deserialize, ToSchema)]
pub struct CreateNoteRequest {
    #[schema(min_length = 1, max_length = 200)]
    pub title: String,
    #[schema(min_length = 1, max_length = 1000)]
    pub description: String,
    pub important: Option<bool>,
}

/// Request shape for `PATCH /notes/{id}`. Only supplied fields change.
#[allow(dead_code)]
#[derive(Deserialize, ToSchema)]
pub struct UpdateNoteRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub important: Option<bool>,
}

#[derive(Serialize, ToSchema)]
pub struct CreatedNoteResponse {
    pub id: String,
}

/// What pages and JSON responses see of a note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct NoteDto {
    pub id: String,
    pub title: String,
    pub description: String,
    pub important: bool,
}

impl From<Note> for NoteDto {
    fn from(note: Note) -> Self {
        Self {
            id: note.id,
            title: note.title,
            description: note.description,
            important: note.important,
        }
    }
}
