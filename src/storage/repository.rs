//! Persistence of the whole note collection under a single key.

use crate::{
    domain::Note,
    storage::{KeyValueStore, KvError},
};

/// The key holding the serialized note collection.
pub const NOTES_KEY: &str = "notes";

/// Writing the note collection failed.
#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    /// The collection could not be serialized.
    #[error("failed to serialize notes: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The backing store rejected the write.
    #[error(transparent)]
    Store(#[from] KvError),
}

/// Loads and saves the note collection as one JSON array.
///
/// There are no partial writes: every save replaces the whole collection.
#[derive(Debug, Clone)]
pub struct NoteRepository<S> {
    store: S,
}

impl<S: KeyValueStore> NoteRepository<S> {
    /// Wraps a key-value store.
    #[must_use]
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// The underlying key-value store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Reads the note collection.
    ///
    /// An absent, unreadable, or malformed collection is logged and treated as
    /// empty.
    #[must_use]
    pub fn load(&self) -> Vec<Note> {
        let raw = match self.store.get(NOTES_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                tracing::debug!("no stored notes, starting empty");
                return Vec::new();
            }
            Err(e) => {
                tracing::error!("Error loading notes: {e}");
                return Vec::new();
            }
        };

        // A stored `null` is treated like an absent collection.
        match serde_json::from_str::<Option<Vec<Note>>>(&raw) {
            Ok(notes) => {
                let notes = notes.unwrap_or_default();
                tracing::debug!(count = notes.len(), "loaded notes");
                notes
            }
            Err(e) => {
                tracing::error!("Error loading notes: {e}");
                Vec::new()
            }
        }
    }

    /// Serializes `notes` and overwrites the stored collection.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or the store cannot be
    /// written.
    pub fn save(&mut self, notes: &[Note]) -> Result<(), SaveError> {
        let raw = serde_json::to_string(notes)?;
        self.store.set(NOTES_KEY, &raw)?;
        tracing::debug!(count = notes.len(), "saved notes");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn repository_with(raw: &str) -> NoteRepository<MemoryStore> {
        let mut store = MemoryStore::new();
        store.set(NOTES_KEY, raw).unwrap();
        NoteRepository::new(store)
    }

    #[test]
    fn absent_collection_is_empty() {
        let repository = NoteRepository::new(MemoryStore::new());
        assert!(repository.load().is_empty());
    }

    #[test]
    fn corrupt_collection_is_empty() {
        assert!(repository_with("{not json").load().is_empty());
        assert!(repository_with(r#"{"id": "1"}"#).load().is_empty());
    }

    #[test]
    fn null_collection_is_empty() {
        assert!(repository_with("null").load().is_empty());
    }

    #[test]
    fn save_then_reload_is_idempotent() {
        let mut repository = NoteRepository::new(MemoryStore::new());
        let mut groceries = Note::draft("Groceries", "<p>milk, eggs</p>", vec!["home".into()]);
        groceries.id = "1".into();
        let mut secret = Note::draft("Secret", "", vec![]);
        secret.id = "2".into();
        secret.is_locked = true;
        secret.encrypted_content = "opaque".to_string();

        repository.save(&[groceries, secret]).unwrap();
        let first = repository.store().get(NOTES_KEY).unwrap().unwrap();

        let reloaded = repository.load();
        repository.save(&reloaded).unwrap();
        let second = repository.store().get(NOTES_KEY).unwrap().unwrap();

        assert_eq!(first, second);
        assert_eq!(reloaded.len(), 2);
    }
}
