//! End-to-end note lifecycle against the on-disk store.

#![allow(missing_docs)]

use std::path::Path;

use notekeep::{
    Config, Editor, FileStore, Intent, KeyValueStore, NoteRepository, NoteStore, Template, View,
    storage::NOTES_KEY,
};
use tempfile::TempDir;

fn open(root: &Path) -> Editor<FileStore> {
    let store = NoteStore::load(NoteRepository::new(FileStore::new(root.to_path_buf())));
    Editor::new(store, &Config::default())
}

#[test]
fn notes_survive_a_restart() {
    let tmp = TempDir::new().unwrap();

    let id = {
        let mut editor = open(tmp.path());
        editor.new_note(Template::Blank);
        let draft = editor.draft_mut().unwrap();
        draft.set_title("Groceries");
        draft.set_content("<p>milk, eggs</p>");
        draft.set_tags_from_input("home");
        editor.save().unwrap()
    };

    let editor = open(tmp.path());
    let note = editor.store().get(&id).unwrap();
    assert_eq!(note.title, "Groceries");
    assert_eq!(note.tags, vec!["home".to_string()]);
    assert!(!note.is_locked);
}

#[test]
fn locked_note_round_trip_across_restart() {
    let tmp = TempDir::new().unwrap();

    let id = {
        let mut editor = open(tmp.path());
        editor.new_note(Template::TaskList);
        editor.draft_mut().unwrap().set_lock("secret123");
        editor.save().unwrap()
    };

    let raw = FileStore::new(tmp.path().to_path_buf())
        .get(NOTES_KEY)
        .unwrap()
        .unwrap();
    assert!(!raw.contains("Tasks for Today"));

    let mut editor = open(tmp.path());
    editor.open(&id, Intent::Preview).unwrap();
    assert!(editor.submit_password("wrong").is_err());
    assert!(matches!(editor.view(), View::LockedPrompt { .. }));

    editor.submit_password("secret123").unwrap();
    let View::Previewing(note) = editor.view() else {
        panic!("expected preview");
    };
    assert!(note.content.contains("Tasks for Today"));
}

#[test]
fn corrupt_store_starts_empty_and_recovers_on_save() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("notes.json"), "{ this is not json").unwrap();

    let mut editor = open(tmp.path());
    assert!(editor.store().notes().is_empty());

    editor.new_note(Template::Journal);
    editor
        .draft_mut()
        .unwrap()
        .set_content("<h2>Today's Thoughts</h2><p>calm</p>");
    editor.save().unwrap();

    assert_eq!(open(tmp.path()).store().notes().len(), 1);
}

#[test]
fn serialized_collection_is_stable_across_reload() {
    let tmp = TempDir::new().unwrap();
    {
        let mut editor = open(tmp.path());
        for title in ["one", "two", "three"] {
            editor.new_note(Template::Blank);
            let draft = editor.draft_mut().unwrap();
            draft.set_title(title);
            draft.set_content(format!("<p>{title}</p>"));
            editor.save().unwrap();
        }
    }
    let first = std::fs::read_to_string(tmp.path().join("notes.json")).unwrap();

    let mut repository = NoteRepository::new(FileStore::new(tmp.path().to_path_buf()));
    let notes = repository.load();
    repository.save(&notes).unwrap();
    let second = std::fs::read_to_string(tmp.path().join("notes.json")).unwrap();

    assert_eq!(first, second);
}
