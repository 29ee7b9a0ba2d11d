use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    Collection, Database,
    bson::{self, Document, doc, oid::ObjectId},
};
use thiserror::Error;

use crate::notes::{
    id::note_id_to_string,
    model::{NewNote, Note, NotePatch},
};

pub const NOTES_COLLECTION: &str = "notes";

#[derive(Debug, Error)]
pub enum RepoError {
    #[error("note not found")]
    NotFound,

    #[error("persistence error: {0}")]
    Persistence(String),

    #[error("store error: {0}")]
    Store(#[from] mongodb::error::Error),

    #[error("document encoding error: {0}")]
    Encode(#[from] bson::ser::Error),
}

/// Access to the `notes` collection. Every call is a single round trip to
/// the store; nothing is cached between calls.
#[async_trait]
pub trait NoteRepository: Send + Sync {
    /// All notes in the store's natural order.
    async fn list_all(&self) -> Result<Vec<Note>, RepoError>;

    /// Inserts one note and returns the id the store assigned.
    async fn create(&self, note: NewNote) -> Result<ObjectId, RepoError>;

    async fn delete_by_id(&self, id: ObjectId) -> Result<(), RepoError>;

    /// Merges `patch` into the note and returns the note as stored afterwards.
    async fn update_by_id(&self, id: ObjectId, patch: NotePatch) -> Result<Note, RepoError>;

    async fn ping(&self) -> Result<(), RepoError>;
}

#[derive(Clone)]
pub struct MongoNoteRepository {
    db: Database,
    notes: Collection<Document>,
}

impl MongoNoteRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            db: db.clone(),
            notes: db.collection(NOTES_COLLECTION),
        }
    }
}

#[async_trait]
impl NoteRepository for MongoNoteRepository {
    async fn list_all(&self) -> Result<Vec<Note>, RepoError> {
        let docs: Vec<Document> = self.notes.find(doc! {}).await?.try_collect().await?;

        Ok(docs.iter().map(note_from_document).collect())
    }

    async fn create(&self, note: NewNote) -> Result<ObjectId, RepoError> {
        let document = note_to_document(note)?;
        let res = self.notes.insert_one(document).await?;

        let id = res
            .inserted_id
            .as_object_id()
            .ok_or_else(|| RepoError::Persistence("store assigned no note id".to_string()))?;

        tracing::debug!(note_id = %id, "note created");
        Ok(id)
    }

    async fn delete_by_id(&self, id: ObjectId) -> Result<(), RepoError> {
        let res = self.notes.delete_one(doc! { "_id": id }).await?;

        if res.deleted_count == 0 {
            return Err(RepoError::NotFound);
        }

        tracing::debug!(note_id = %id, "note deleted");
        Ok(())
    }

    async fn update_by_id(&self, id: ObjectId, patch: NotePatch) -> Result<Note, RepoError> {
        let filter = doc! { "_id": id };

        // MongoDB refuses an empty `$set`, so an empty patch is just a read.
        if !patch.is_empty() {
            let fields = bson::to_document(&patch.fields)?;
            let res = self
                .notes
                .update_one(filter.clone(), doc! { "$set": fields })
                .await?;

            if res.matched_count == 0 {
                return Err(RepoError::NotFound);
            }
            tracing::debug!(note_id = %id, "note updated");
        }

        let document = self
            .notes
            .find_one(filter)
            .await?
            .ok_or(RepoError::NotFound)?;

        Ok(note_from_document(&document))
    }

    async fn ping(&self) -> Result<(), RepoError> {
        self.db.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }
}

pub fn note_to_document(note: NewNote) -> Result<Document, RepoError> {
    let mut document = doc! {
        "title": note.title,
        "description": note.description,
        "important": note.important,
    };
    for (key, value) in bson::to_document(&note.extra)? {
        document.insert(key, value);
    }
    Ok(document)
}

/// Maps a stored document to a `Note`. Missing text fields read as empty
/// and a missing `important` reads as `false`.
pub fn note_from_document(document: &Document) -> Note {
    Note {
        id: document.get("_id").map(note_id_to_string).unwrap_or_default(),
        title: document.get_str("title").unwrap_or_default().to_string(),
        description: document
            .get_str("description")
            .unwrap_or_default()
            .to_string(),
        important: document.get_bool("important").unwrap_or(false),
    }
}
