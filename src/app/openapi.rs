use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "Notes App", description = "Notes stored in MongoDB"),
    paths(
        crate::core::http::handlers::health,
        crate::core::http::handlers::db_health,
        crate::notes::http::handlers::create_note,
        crate::notes::http::handlers::list_notes,
        crate::notes::http::handlers::update_note,
        crate::notes::http::handlers::delete_note
    ),
    components(schemas(
        crate::error::ErrorBody,
        crate::notes::http::CreateNoteRequest,
        crate::notes::http::UpdateNoteRequest,
        crate::notes::http::CreatedNoteResponse,
        crate::notes::http::NoteDto
    )),
    tags(
        (name = "Core", description = "Service endpoints"),
        (name = "Notes", description = "Notes endpoints")
    )
)]
pub struct ApiDoc;
