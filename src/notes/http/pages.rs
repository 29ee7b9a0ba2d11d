use std::collections::HashMap;

use axum::{
    Form,
    extract::{Path, State},
    response::{Html, Redirect},
};
use minijinja::context;
use serde_json::{Map, Value};

use crate::{
    AppState,
    error::ApiResult,
    notes::{id::parse_note_id, model::validate_new},
};

use super::dto::NoteDto;

pub async fn index(State(state): State<AppState>) -> ApiResult<Html<String>> {
    let notes: Vec<NoteDto> = state
        .notes
        .list_all()
        .await?
        .into_iter()
        .map(NoteDto::from)
        .collect();

    let page = state.templates.render(
        "index.html",
        context! {
            app_name => state.app_name.as_str(),
            notes => notes,
        },
    )?;

    Ok(Html(page))
}

/// Form fields arrive as strings; an unchecked checkbox is simply absent.
pub fn form_to_fields(form: HashMap<String, String>) -> Map<String, Value> {
    let important = form.get("important").is_some_and(|v| v == "on");

    let mut fields: Map<String, Value> = form
        .into_iter()
        .map(|(key, value)| (key, Value::String(value)))
        .collect();
    fields.insert("important".to_string(), Value::Bool(important));
    fields
}

pub async fn create_from_form(
    State(state): State<AppState>,
    Form(form): Form<HashMap<String, String>>,
) -> ApiResult<Redirect> {
    let note = validate_new(form_to_fields(form))?;
    state.notes.create(note).await?;

    Ok(Redirect::to("/"))
}

pub async fn delete_from_form(
    State(state): State<AppState>,
    Path(note_id): Path<String>,
) -> ApiResult<Redirect> {
    let note_id = parse_note_id(&note_id)?;
    state.notes.delete_by_id(note_id).await?;

    Ok(Redirect::to("/"))
}
