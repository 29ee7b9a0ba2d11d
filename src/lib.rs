use std::sync::Arc;

use crate::{app::templates::Templates, notes::repo::NoteRepository};

pub mod app;
pub mod config;
pub mod core;
pub mod error;
mod extractors;
pub mod notes;

#[derive(Clone)]
pub struct AppState {
    pub notes: Arc<dyn NoteRepository>,
    pub templates: Arc<Templates>,
    pub app_name: String,
}

impl AppState {
    pub fn new(
        notes: Arc<dyn NoteRepository>,
        app_name: impl Into<String>,
    ) -> Result<Self, minijinja::Error> {
        Ok(Self {
            notes,
            templates: Arc::new(Templates::new()?),
            app_name: app_name.into(),
        })
    }
}
