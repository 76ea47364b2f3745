//! Local Note Taking
//!
//! Notes are kept as a single JSON collection in a local key-value store.
//! A note can be locked with a password, in which case only its ciphertext
//! is persisted.

/// Password-based encryption of note content.
pub mod cipher;

pub mod domain;
pub use domain::{Config, Note, NoteId, NoteStore, StoreError, Template, Theme};

pub mod editor;
pub use editor::{Draft, Editor, EditorError, Intent, View};

pub mod export;
pub use export::{Export, ExportError};

pub mod notification;
pub use notification::{Notification, NotificationKind, Notifier};

/// Static informational pages and the routes that reach them.
pub mod pages;
pub use pages::{Page, Route};

/// Local key-value storage and the note collection persistence adapter.
pub mod storage;
pub use storage::{FileStore, KeyValueStore, MemoryStore, NoteRepository};
