//! Domain models for note taking.
//!
//! This module contains the core domain types including notes, the note
//! store, templates, and configuration.

/// Note domain model.
pub mod note;
pub use note::{Note, NoteId};

mod config;
pub use config::Config;

/// The in-memory note collection.
pub mod store;
pub use store::{NoteStore, StoreError};

mod template;
pub use template::{Template, UnknownTemplate};

mod theme;
pub use theme::{Theme, UnknownTheme};
