use chrono::Utc;

use crate::{
    domain::{Note, NoteId},
    storage::{KeyValueStore, NoteRepository},
};

/// An error raised by the [`NoteStore`].
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StoreError {
    /// No note with the given identifier exists.
    #[error("note '{0}' not found")]
    NotFound(NoteId),
}

/// The ordered, in-memory collection of notes.
///
/// The store exclusively owns the collection. Every mutation rewrites the
/// whole collection through the [`NoteRepository`]. A failed write is logged
/// and the in-memory collection stays authoritative until the next successful
/// write.
#[derive(Debug)]
pub struct NoteStore<S> {
    notes: Vec<Note>,
    repository: NoteRepository<S>,
    unsaved_changes: bool,
}

impl<S: KeyValueStore> NoteStore<S> {
    /// Loads the collection from the repository.
    #[must_use]
    pub fn load(repository: NoteRepository<S>) -> Self {
        let notes = repository.load();
        Self {
            notes,
            repository,
            unsaved_changes: false,
        }
    }

    /// All notes, in insertion order.
    #[must_use]
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Finds a note by identifier.
    #[must_use]
    pub fn get(&self, id: &NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| &note.id == id)
    }

    /// Whether the last write to the repository failed.
    #[must_use]
    pub const fn has_unsaved_changes(&self) -> bool {
        self.unsaved_changes
    }

    /// The persistence adapter backing this store.
    #[must_use]
    pub const fn repository(&self) -> &NoteRepository<S> {
        &self.repository
    }

    /// Appends a note, assigning a fresh identifier if it is a draft.
    ///
    /// Returns the identifier of the stored note.
    pub fn add(&mut self, mut note: Note) -> NoteId {
        if note.id.is_draft() {
            note.id = self.generate_id();
        }
        let id = note.id.clone();
        self.notes.push(note);
        tracing::info!(%id, "added note");
        self.persist();
        id
    }

    /// Replaces the note with identifier `id`.
    ///
    /// The stored note keeps `id` regardless of the identifier carried by
    /// `note`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no such note exists.
    pub fn update(&mut self, id: &NoteId, mut note: Note) -> Result<(), StoreError> {
        let slot = self
            .notes
            .iter_mut()
            .find(|existing| &existing.id == id)
            .ok_or_else(|| StoreError::NotFound(id.clone()))?;
        note.id = id.clone();
        *slot = note;
        tracing::info!(%id, "updated note");
        self.persist();
        Ok(())
    }

    /// Removes the note with identifier `id`, if present.
    ///
    /// Returns whether a note was removed. Removing an absent note leaves the
    /// collection and the stored data untouched.
    pub fn remove(&mut self, id: &NoteId) -> bool {
        let before = self.notes.len();
        self.notes.retain(|note| &note.id != id);
        let removed = self.notes.len() != before;
        if removed {
            tracing::info!(%id, "removed note");
            self.persist();
        } else {
            tracing::debug!(%id, "no note to remove");
        }
        removed
    }

    /// Notes whose title, any tag, or content contains `text`,
    /// case-insensitively.
    ///
    /// An empty query matches every note. Order is preserved.
    #[must_use]
    pub fn query(&self, text: &str) -> Vec<&Note> {
        let needle = text.to_lowercase();
        self.notes
            .iter()
            .filter(|note| note.matches(&needle))
            .collect()
    }

    /// Generates an identifier from the current time in milliseconds,
    /// bumped forward until it is unused.
    fn generate_id(&self) -> NoteId {
        let mut millis = Utc::now().timestamp_millis();
        loop {
            let id = NoteId::from(millis.to_string());
            if self.get(&id).is_none() {
                return id;
            }
            millis += 1;
        }
    }

    fn persist(&mut self) {
        match self.repository.save(&self.notes) {
            Ok(()) => self.unsaved_changes = false,
            Err(e) => {
                tracing::error!("Error saving notes: {e}");
                self.unsaved_changes = true;
            }
        }
    }
}
