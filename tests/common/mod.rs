#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{HeaderMap, Method, Request, StatusCode, header},
};
use mongodb::bson::{self, Document, doc, oid::ObjectId};
use notes_web::{
    AppState,
    app::router::build_router,
    notes::{
        model::{NewNote, Note, NotePatch},
        repo::{NoteRepository, RepoError, note_from_document, note_to_document},
    },
};
use serde_json::Value;
use tower::ServiceExt;

pub const TEST_APP_NAME: &str = "Test Notes";

/// Keeps documents in insertion order and applies patches key by key, the
/// way `$set` does.
#[derive(Default)]
pub struct InMemoryNoteRepository {
    docs: Mutex<Vec<Document>>,
    unavailable: bool,
}

impl InMemoryNoteRepository {
    pub fn unavailable() -> Self {
        Self {
            docs: Mutex::default(),
            unavailable: true,
        }
    }

    pub fn documents(&self) -> Vec<Document> {
        self.docs.lock().expect("poisoned").clone()
    }

    pub fn insert_raw(&self, document: Document) {
        self.docs.lock().expect("poisoned").push(document);
    }

    fn check(&self) -> Result<(), RepoError> {
        if self.unavailable {
            return Err(RepoError::Persistence("store unavailable".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl NoteRepository for InMemoryNoteRepository {
    async fn list_all(&self) -> Result<Vec<Note>, RepoError> {
        self.check()?;
        Ok(self.documents().iter().map(note_from_document).collect())
    }

    async fn create(&self, note: NewNote) -> Result<ObjectId, RepoError> {
        self.check()?;
        let id = ObjectId::new();
        let mut document = doc! { "_id": id };
        for (key, value) in note_to_document(note)? {
            document.insert(key, value);
        }
        self.insert_raw(document);
        Ok(id)
    }

    async fn delete_by_id(&self, id: ObjectId) -> Result<(), RepoError> {
        self.check()?;
        let mut docs = self.docs.lock().expect("poisoned");
        let pos = docs
            .iter()
            .position(|d| d.get_object_id("_id").ok() == Some(id))
            .ok_or(RepoError::NotFound)?;
        docs.remove(pos);
        Ok(())
    }

    async fn update_by_id(&self, id: ObjectId, patch: NotePatch) -> Result<Note, RepoError> {
        self.check()?;
        let fields = bson::to_document(&patch.fields)?;
        let mut docs = self.docs.lock().expect("poisoned");
        let document = docs
            .iter_mut()
            .find(|d| d.get_object_id("_id").ok() == Some(id))
            .ok_or(RepoError::NotFound)?;
        for (key, value) in fields {
            document.insert(key, value);
        }
        Ok(note_from_document(document))
    }

    async fn ping(&self) -> Result<(), RepoError> {
        self.check()
    }
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn text(&self) -> String {
        String::from_utf8(self.body.clone()).expect("response is not valid utf-8 text")
    }

    pub fn json(&self) -> Value {
        if self.body.is_empty() {
            return Value::Null;
        }
        serde_json::from_slice(&self.body).expect("response is not valid json")
    }

    pub fn location(&self) -> Option<&str> {
        self.headers
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
    }
}

pub struct TestApp {
    app: Router,
    pub repo: Arc<InMemoryNoteRepository>,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_repo(InMemoryNoteRepository::default())
    }

    pub fn with_repo(repo: InMemoryNoteRepository) -> Self {
        let repo = Arc::new(repo);
        let state =
            AppState::new(repo.clone(), TEST_APP_NAME).expect("failed to build app state");

        Self {
            app: build_router(state),
            repo,
        }
    }

    pub async fn post_json(&self, path: &str, body: Value) -> (StatusCode, Value) {
        self.request_json(Method::POST, path, Some(body)).await
    }

    pub async fn patch_json(&self, path: &str, body: Value) -> (StatusCode, Value) {
        self.request_json(Method::PATCH, path, Some(body)).await
    }

    pub async fn get_json(&self, path: &str) -> (StatusCode, Value) {
        self.request_json(Method::GET, path, None).await
    }

    pub async fn get_text(&self, path: &str) -> (StatusCode, String) {
        let res = self.request(Method::GET, path, None).await;
        (res.status, res.text())
    }

    pub async fn delete(&self, path: &str) -> StatusCode {
        self.request(Method::DELETE, path, None).await.status
    }

    pub async fn post_form(&self, path: &str, form: &str) -> TestResponse {
        self.request(
            Method::POST,
            path,
            Some((
                "application/x-www-form-urlencoded",
                form.as_bytes().to_vec(),
            )),
        )
        .await
    }

    async fn request_json(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let body = body.map(|body| {
            (
                "application/json",
                serde_json::to_vec(&body).expect("failed to serialize request body"),
            )
        });
        let res = self.request(method, path, body).await;
        (res.status, res.json())
    }

    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<(&str, Vec<u8>)>,
    ) -> TestResponse {
        let mut req_builder = Request::builder().method(method).uri(path);

        let body = match body {
            Some((content_type, bytes)) => {
                req_builder = req_builder.header(header::CONTENT_TYPE, content_type);
                Body::from(bytes)
            }
            None => Body::empty(),
        };

        let req = req_builder.body(body).expect("failed to build request");
        let response = self
            .app
            .clone()
            .oneshot(req)
            .await
            .expect("request execution failed");

        let status = response.status();
        let headers = response.headers().clone();
        let body = to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("failed to read response body");

        TestResponse {
            status,
            headers,
            body: body.to_vec(),
        }
    }
}
