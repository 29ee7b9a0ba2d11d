use mongodb::bson;
use serde_json::{Map, Value};
use thiserror::Error;

pub const TITLE_MAX_CHARS: usize = 200;
pub const DESCRIPTION_MAX_CHARS: usize = 1000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub id: String,
    pub title: String,
    pub description: String,
    pub important: bool,
}

/// A note that passed validation and is ready to be inserted.
///
/// `extra` holds any fields the client sent beyond the three known ones;
/// they are stored as-is next to them.
#[derive(Debug, Clone, PartialEq)]
pub struct NewNote {
    pub title: String,
    pub description: String,
    pub important: bool,
    pub extra: Map<String, Value>,
}

/// Fields to `$set` on an existing note. Only supplied keys are present.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotePatch {
    pub fields: Map<String, Value>,
}

impl NotePatch {
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

pub fn validate_new(mut fields: Map<String, Value>) -> Result<NewNote, ValidationError> {
    reject_client_id(&fields)?;

    let title = fields
        .remove("title")
        .ok_or_else(|| ValidationError::new("title", "field is required"))?;
    let title = check_text("title", title, TITLE_MAX_CHARS)?;

    let description = fields
        .remove("description")
        .ok_or_else(|| ValidationError::new("description", "field is required"))?;
    let description = check_text("description", description, DESCRIPTION_MAX_CHARS)?;

    let important = match fields.remove("important") {
        None | Some(Value::Null) => false,
        Some(value) => coerce_bool(&value)
            .ok_or_else(|| ValidationError::new("important", "must be a boolean"))?,
    };

    check_storable(&fields)?;

    Ok(NewNote {
        title,
        description,
        important,
        extra: fields,
    })
}

pub fn validate_patch(mut fields: Map<String, Value>) -> Result<NotePatch, ValidationError> {
    reject_client_id(&fields)?;

    if let Some(title) = fields.remove("title") {
        let title = check_text("title", title, TITLE_MAX_CHARS)?;
        fields.insert("title".to_string(), Value::String(title));
    }
    if let Some(description) = fields.remove("description") {
        let description = check_text("description", description, DESCRIPTION_MAX_CHARS)?;
        fields.insert("description".to_string(), Value::String(description));
    }
    if let Some(important) = fields.remove("important") {
        let important = coerce_bool(&important)
            .ok_or_else(|| ValidationError::new("important", "must be a boolean"))?;
        fields.insert("important".to_string(), Value::Bool(important));
    }

    check_storable(&fields)?;

    Ok(NotePatch { fields })
}

// Pass-through values must have a BSON form, e.g. integers above i64::MAX do not.
fn check_storable(fields: &Map<String, Value>) -> Result<(), ValidationError> {
    for (key, value) in fields {
        if bson::to_bson(value).is_err() {
            return Err(ValidationError::new(key, "value cannot be stored"));
        }
    }
    Ok(())
}

fn reject_client_id(fields: &Map<String, Value>) -> Result<(), ValidationError> {
    for key in ["_id", "id"] {
        if fields.contains_key(key) {
            return Err(ValidationError::new(key, "id is assigned by the store"));
        }
    }
    Ok(())
}

// The raw string is kept; trimming only decides emptiness and length.
fn check_text(field: &str, value: Value, max_chars: usize) -> Result<String, ValidationError> {
    let Value::String(text) = value else {
        return Err(ValidationError::new(field, "must be a string"));
    };

    let len = text.trim().chars().count();
    if len == 0 {
        return Err(ValidationError::new(field, "must not be empty"));
    }
    if len > max_chars {
        return Err(ValidationError::new(
            field,
            format!("must be at most {max_chars} characters"),
        ));
    }
    Ok(text)
}

fn coerce_bool(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => match n.as_i64() {
            Some(0) => Some(false),
            Some(1) => Some(true),
            _ => None,
        },
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "t" | "yes" | "y" | "on" | "1" => Some(true),
            "false" | "f" | "no" | "n" | "off" | "0" => Some(false),
            _ => None,
        },
        _ => None,
    }
}
