mod kv;
mod repository;

pub use kv::{FileStore, KeyValueStore, KvError, MemoryStore};
pub use repository::{NoteRepository, SaveError, NOTES_KEY};
