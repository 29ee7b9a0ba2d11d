use axum::{
    Router,
    routing::{get, patch, post},
};

use crate::AppState;
mod dto;
pub(crate) mod handlers;
pub(crate) mod pages;

pub use dto::{CreateNoteRequest, CreatedNoteResponse, NoteDto, UpdateNoteRequest};
pub use handlers::{create_note, delete_note, list_notes, update_note};

/// JSON API, nested under `/notes`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_note).get(list_notes))
        .route("/{id}", patch(update_note).delete(delete_note))
}

/// Server-rendered pages and their form posts.
pub fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::index).post(pages::create_from_form))
        .route("/del/{id}", post(pages::delete_from_form))
}
