//! The editor/view controller.
//!
//! The [`Editor`] owns the note store and the application state: which note
//! is open and how ([`View`]), the theme, and the visible notification. The
//! open note is always a copy; it is written back to the store only by
//! [`Editor::save`].
//!
//! ```text
//!              new_note                      open(Edit|Preview), unlocked
//!   Empty ─────────────────► Editing ◄──────────────────────────── (list)
//!     ▲  ◄── save / reset ────┘  ▲
//!     │                          │ submit_password ok, Edit
//!     │ cancel             LockedPrompt ◄── open(..), locked
//!     └──────────────────────────┘  │
//!                                   │ submit_password ok, Preview
//!                                   ▼
//!                               Previewing
//! ```

use crate::{
    cipher::{self, DecryptionError},
    domain::{
        Config, Note, NoteId, NoteStore, StoreError, Template, Theme,
        note::{is_blank_markup, parse_tags},
    },
    export::{self, Export, ExportError},
    notification::{Notification, Notifier},
    storage::KeyValueStore,
};

/// Why a note was selected from the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Open the note for modification.
    Edit,
    /// Show the note read-only.
    Preview,
}

/// A note open for modification, together with the lock controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    note: Note,
    lock: bool,
    password: String,
}

impl Draft {
    fn new(note: Note) -> Self {
        Self {
            note,
            lock: false,
            password: String::new(),
        }
    }

    /// The note being edited, with plaintext content.
    #[must_use]
    pub const fn note(&self) -> &Note {
        &self.note
    }

    /// Whether the draft has never been saved.
    #[must_use]
    pub fn is_new(&self) -> bool {
        self.note.id.is_draft()
    }

    /// Sets the title.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.note.title = title.into();
    }

    /// Sets the rich-text content.
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.note.content = content.into();
    }

    /// Replaces the tags from comma-separated input.
    pub fn set_tags_from_input(&mut self, input: &str) {
        self.note.tags = parse_tags(input);
    }

    /// Sets or clears the reminder.
    pub fn set_reminder(&mut self, reminder: Option<String>) {
        self.note.reminder = reminder;
    }

    /// Requests that the note be locked with `password` on save.
    pub fn set_lock(&mut self, password: impl Into<String>) {
        self.lock = true;
        self.password = password.into();
    }

    /// Requests that the note be stored unlocked on save.
    pub fn clear_lock(&mut self) {
        self.lock = false;
        self.password.clear();
    }

    /// Whether the note will be locked on save.
    ///
    /// This requires the lock to be requested and a non-empty password.
    #[must_use]
    pub fn will_lock(&self) -> bool {
        self.lock && !self.password.is_empty()
    }

    /// Produces the note as it will be persisted.
    fn seal(&self) -> Note {
        let mut note = self.note.clone();
        if self.will_lock() {
            note.encrypted_content = cipher::lock(&note.content, &self.password);
            note.content.clear();
            note.is_locked = true;
        } else {
            note.encrypted_content.clear();
            note.is_locked = false;
        }
        note
    }
}

/// What the editor is currently showing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum View {
    /// No note is open.
    #[default]
    Empty,
    /// A draft or existing note is open for modification.
    Editing(Draft),
    /// A note is shown read-only, with plaintext content.
    Previewing(Note),
    /// A locked note was selected and its password is being requested.
    LockedPrompt {
        /// The locked note, as stored.
        note: Note,
        /// What to do once it is unlocked.
        intent: Intent,
    },
}

impl View {
    /// The identifier of the note this view holds, if any.
    #[must_use]
    pub fn note_id(&self) -> Option<&NoteId> {
        match self {
            Self::Empty => None,
            Self::Editing(draft) => Some(&draft.note.id),
            Self::Previewing(note) | Self::LockedPrompt { note, .. } => Some(&note.id),
        }
    }
}

/// An error raised by an [`Editor`] action.
///
/// Every error is recoverable by retrying the action.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum EditorError {
    /// Save was attempted with a blank title or blank content.
    #[error("Title and content cannot be empty")]
    EmptyNote,

    /// The action does not apply to the current view.
    #[error("cannot {action} while {state}")]
    InvalidState {
        /// The attempted action.
        action: &'static str,
        /// The current view.
        state: &'static str,
    },

    /// The referenced note does not exist.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The password did not unlock the note.
    #[error("Incorrect password")]
    Decryption(#[from] DecryptionError),

    /// The note could not be exported.
    #[error(transparent)]
    Export(#[from] ExportError),
}

/// The note application controller.
#[derive(Debug)]
pub struct Editor<S> {
    store: NoteStore<S>,
    view: View,
    theme: Theme,
    notifier: Notifier,
}

impl<S: KeyValueStore> Editor<S> {
    /// Creates a controller over a loaded store.
    #[must_use]
    pub fn new(store: NoteStore<S>, config: &Config) -> Self {
        Self {
            store,
            view: View::Empty,
            theme: config.theme,
            notifier: Notifier::new(config.notification_timeout()),
        }
    }

    /// The note store.
    #[must_use]
    pub const fn store(&self) -> &NoteStore<S> {
        &self.store
    }

    /// The current view.
    #[must_use]
    pub const fn view(&self) -> &View {
        &self.view
    }

    /// The open draft, if the editor is in the editing state.
    pub const fn draft_mut(&mut self) -> Option<&mut Draft> {
        match &mut self.view {
            View::Editing(draft) => Some(draft),
            _ => None,
        }
    }

    /// The current theme.
    #[must_use]
    pub const fn theme(&self) -> Theme {
        self.theme
    }

    /// Switches between dark and light themes.
    pub const fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.theme
    }

    /// The notification centre.
    #[must_use]
    pub const fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    /// The notification centre, mutably.
    pub const fn notifier_mut(&mut self) -> &mut Notifier {
        &mut self.notifier
    }

    /// Notes matching `text`; see [`NoteStore::query`].
    #[must_use]
    pub fn query(&self, text: &str) -> Vec<&Note> {
        self.store.query(text)
    }

    /// Opens a new draft seeded from `template`.
    pub fn new_note(&mut self, template: Template) {
        tracing::debug!(%template, "new draft");
        self.view = View::Editing(Draft::new(template.draft()));
    }

    /// Selects a note from the list.
    ///
    /// Unlocked notes open directly. Locked notes move to the password
    /// prompt, remembering `intent`.
    ///
    /// # Errors
    ///
    /// Returns an error if no note has the identifier `id`.
    pub fn open(&mut self, id: &NoteId, intent: Intent) -> Result<(), EditorError> {
        let note = self
            .store
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.clone()))?;

        self.view = if note.is_locked {
            tracing::debug!(%id, ?intent, "note is locked, requesting password");
            View::LockedPrompt { note, intent }
        } else {
            match intent {
                Intent::Edit => View::Editing(Draft::new(note)),
                Intent::Preview => View::Previewing(note),
            }
        };
        Ok(())
    }

    /// Reopens the previewed note for editing.
    ///
    /// A locked note goes back through the password prompt.
    ///
    /// # Errors
    ///
    /// Returns an error if no note is being previewed, or if it has since
    /// been deleted.
    pub fn edit_preview(&mut self) -> Result<(), EditorError> {
        let View::Previewing(note) = &self.view else {
            return Err(self.invalid("edit a preview"));
        };
        let id = note.id.clone();
        self.open(&id, Intent::Edit)
    }

    /// Attempts to unlock the note behind the password prompt.
    ///
    /// On success the note opens per the remembered intent, with its content
    /// decrypted. An edited note stays locked with the same password unless
    /// the lock is cleared before saving. On failure the prompt stays open
    /// and an error notification is shown.
    ///
    /// # Errors
    ///
    /// Returns an error if no prompt is open or the password is wrong.
    pub fn submit_password(&mut self, password: &str) -> Result<(), EditorError> {
        let View::LockedPrompt { note, intent } = &self.view else {
            return Err(self.invalid("submit a password"));
        };

        let content = match cipher::unlock(&note.encrypted_content, password) {
            Ok(content) => content,
            Err(e) => {
                tracing::debug!(id = %note.id, "unlock failed");
                self.notifier.show(Notification::error("Incorrect password"));
                return Err(e.into());
            }
        };

        let mut unlocked = note.clone();
        unlocked.content = content;
        let intent = *intent;
        tracing::debug!(id = %unlocked.id, ?intent, "note unlocked");

        self.view = match intent {
            Intent::Edit => {
                unlocked.encrypted_content.clear();
                unlocked.is_locked = false;
                let mut draft = Draft::new(unlocked);
                draft.set_lock(password);
                View::Editing(draft)
            }
            Intent::Preview => View::Previewing(unlocked),
        };
        Ok(())
    }

    /// Dismisses the password prompt or closes the preview.
    ///
    /// # Errors
    ///
    /// Returns an error if neither is open.
    pub fn cancel(&mut self) -> Result<(), EditorError> {
        match self.view {
            View::LockedPrompt { .. } | View::Previewing(_) => {
                self.view = View::Empty;
                Ok(())
            }
            _ => Err(self.invalid("cancel")),
        }
    }

    /// Validates and commits the open draft.
    ///
    /// A blank title or blank content is rejected and the draft stays open.
    /// Otherwise the draft is locked if requested, added or updated in the
    /// store, and the editor returns to [`View::Empty`].
    ///
    /// # Errors
    ///
    /// Returns an error if no draft is open, validation fails, or the note
    /// being updated no longer exists.
    pub fn save(&mut self) -> Result<NoteId, EditorError> {
        let View::Editing(draft) = &self.view else {
            return Err(self.invalid("save"));
        };

        if draft.note.title.trim().is_empty() || is_blank_markup(&draft.note.content) {
            self.notifier
                .show(Notification::error("Title and content cannot be empty"));
            return Err(EditorError::EmptyNote);
        }

        let sealed = draft.seal();
        let id = if draft.is_new() {
            let id = self.store.add(sealed);
            self.notifier
                .show(Notification::success("New note saved successfully"));
            id
        } else {
            let id = sealed.id.clone();
            if let Err(e) = self.store.update(&id, sealed) {
                self.notifier.show(Notification::error("Error saving note"));
                return Err(e.into());
            }
            self.notifier
                .show(Notification::success("Note updated successfully"));
            id
        };

        self.view = View::Empty;
        Ok(id)
    }

    /// Discards the open draft.
    ///
    /// # Errors
    ///
    /// Returns an error if no draft is open.
    pub fn reset(&mut self) -> Result<(), EditorError> {
        if !matches!(self.view, View::Editing(_)) {
            return Err(self.invalid("reset"));
        }
        self.view = View::Empty;
        self.notifier.show(Notification::success("Note form reset"));
        Ok(())
    }

    /// Deletes a note. Deleting an absent note is not an error.
    ///
    /// If the deleted note is open, the editor returns to [`View::Empty`].
    pub fn delete(&mut self, id: &NoteId) {
        self.store.remove(id);
        if self.view.note_id() == Some(id) {
            self.view = View::Empty;
        }
        self.notifier
            .show(Notification::success("Note deleted successfully"));
    }

    /// Exports a stored note as an HTML document in the current theme.
    ///
    /// Locked notes need their password.
    ///
    /// # Errors
    ///
    /// Returns an error if the note does not exist, is empty, or is locked
    /// and the password is missing or wrong. No document is produced.
    pub fn export(&mut self, id: &NoteId, password: Option<&str>) -> Result<Export, EditorError> {
        let result = self
            .store
            .get(id)
            .ok_or_else(|| EditorError::from(StoreError::NotFound(id.clone())))
            .and_then(|note| {
                export::export(note, password, self.theme).map_err(EditorError::from)
            });

        match &result {
            Ok(_) => self
                .notifier
                .show(Notification::success("Note downloaded successfully")),
            Err(EditorError::Store(_)) => {
                self.notifier.show(Notification::error("No note to download"));
            }
            Err(e) => self.notifier.show(Notification::error(e.to_string())),
        }
        result
    }

    fn invalid(&self, action: &'static str) -> EditorError {
        let state = match self.view {
            View::Empty => "no note is open",
            View::Editing(_) => "editing",
            View::Previewing(_) => "previewing",
            View::LockedPrompt { .. } => "a password is requested",
        };
        EditorError::InvalidState { action, state }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::{
        NotificationKind,
        storage::{MemoryStore, NoteRepository, NOTES_KEY},
    };

    fn editor() -> Editor<MemoryStore> {
        let store = NoteStore::load(NoteRepository::new(MemoryStore::new()));
        Editor::new(store, &Config::default())
    }

    fn notification(editor: &Editor<MemoryStore>) -> Notification {
        editor.notifier().current().cloned().unwrap()
    }

    fn save_groceries(editor: &mut Editor<MemoryStore>) -> NoteId {
        editor.new_note(Template::Blank);
        let draft = editor.draft_mut().unwrap();
        draft.set_title("Groceries");
        draft.set_content("<p>milk, eggs</p>");
        draft.set_tags_from_input("home");
        editor.save().unwrap()
    }

    fn save_locked(editor: &mut Editor<MemoryStore>, password: &str) -> NoteId {
        editor.new_note(Template::Blank);
        let draft = editor.draft_mut().unwrap();
        draft.set_title("Diary");
        draft.set_content("<p>dear diary</p>");
        draft.set_lock(password);
        editor.save().unwrap()
    }

    fn persisted(editor: &Editor<MemoryStore>) -> Vec<Note> {
        let raw = editor
            .store()
            .repository()
            .store()
            .get(NOTES_KEY)
            .unwrap()
            .unwrap();
        serde_json::from_str(&raw).unwrap()
    }

    proptest! {
        #[test]
        fn persisted_notes_are_locked_or_plain_never_both(
            drafts in prop::collection::vec(
                ("[a-z]{1,8}", "[a-z]{1,16}", prop::option::of("[a-z0-9]{1,8}")),
                1..6,
            ),
        ) {
            let mut editor = editor();
            let mut saved = Vec::new();
            for (title, content, password) in drafts {
                editor.new_note(Template::Blank);
                let draft = editor.draft_mut().unwrap();
                draft.set_title(title);
                draft.set_content(format!("<p>{content}</p>"));
                if let Some(password) = &password {
                    draft.set_lock(password.clone());
                }
                let id = editor.save().unwrap();
                saved.push((id, format!("<p>{content}</p>"), password));
            }

            let notes = persisted(&editor);
            prop_assert_eq!(notes.len(), saved.len());
            for (id, content, password) in saved {
                let note = notes.iter().find(|n| n.id == id).unwrap();
                prop_assert!(note.is_consistent());
                match password {
                    Some(password) => {
                        prop_assert!(note.is_locked);
                        prop_assert!(note.content.is_empty());
                        let unlocked = cipher::unlock(&note.encrypted_content, &password);
                        prop_assert_eq!(unlocked, Ok(content));
                    }
                    None => {
                        prop_assert!(!note.is_locked);
                        prop_assert_eq!(&note.content, &content);
                    }
                }
            }
        }
    }

    #[test]
    fn saving_a_new_note_assigns_id_and_returns_to_empty() {
        let mut editor = editor();

        let id = save_groceries(&mut editor);

        let note = editor.store().get(&id).unwrap();
        assert_eq!(note.title, "Groceries");
        assert_eq!(note.content, "<p>milk, eggs</p>");
        assert_eq!(note.tags, vec!["home".to_string()]);
        assert!(!note.is_locked);
        assert_eq!(editor.view(), &View::Empty);
        assert_eq!(notification(&editor).message, "New note saved successfully");
    }

    #[test]
    fn new_note_uses_template() {
        let mut editor = editor();

        editor.new_note(Template::MeetingNotes);

        let View::Editing(draft) = editor.view() else {
            panic!("expected editing");
        };
        assert!(draft.is_new());
        assert_eq!(draft.note().title, "Meeting Notes");
        assert_eq!(draft.note().tags, vec!["Meetings", "Work"]);
    }

    #[test]
    fn blank_title_is_rejected() {
        let mut editor = editor();
        editor.new_note(Template::Blank);
        let draft = editor.draft_mut().unwrap();
        draft.set_title("   ");
        draft.set_content("<p>body</p>");

        assert_eq!(editor.save(), Err(EditorError::EmptyNote));

        assert!(matches!(editor.view(), View::Editing(_)));
        assert!(editor.store().notes().is_empty());
        let shown = notification(&editor);
        assert_eq!(shown.kind, NotificationKind::Error);
        assert_eq!(shown.message, "Title and content cannot be empty");
    }

    #[test]
    fn template_skeleton_counts_as_blank_content() {
        let mut editor = editor();
        editor.new_note(Template::Blank);
        editor.draft_mut().unwrap().set_content("<p></p><p> </p>");

        assert_eq!(editor.save(), Err(EditorError::EmptyNote));
    }

    #[test]
    fn stray_angle_bracket_is_visible_content() {
        let mut editor = editor();
        editor.new_note(Template::Blank);
        let draft = editor.draft_mut().unwrap();
        draft.set_title("x");
        draft.set_content("<3 see you at 5");

        let id = editor.save().unwrap();

        assert_eq!(editor.store().get(&id).unwrap().content, "<3 see you at 5");
    }

    #[test]
    fn editing_existing_note_updates_in_place() {
        let mut editor = editor();
        let id = save_groceries(&mut editor);

        editor.open(&id, Intent::Edit).unwrap();
        editor.draft_mut().unwrap().set_title("Weekly groceries");
        let saved = editor.save().unwrap();

        assert_eq!(saved, id);
        assert_eq!(editor.store().notes().len(), 1);
        assert_eq!(editor.store().get(&id).unwrap().title, "Weekly groceries");
        assert_eq!(notification(&editor).message, "Note updated successfully");
    }

    #[test]
    fn editing_holds_a_copy_until_save() {
        let mut editor = editor();
        let id = save_groceries(&mut editor);

        editor.open(&id, Intent::Edit).unwrap();
        editor.draft_mut().unwrap().set_title("Changed");

        assert_eq!(editor.store().get(&id).unwrap().title, "Groceries");
    }

    #[test]
    fn opening_unlocked_note_for_preview() {
        let mut editor = editor();
        let id = save_groceries(&mut editor);

        editor.open(&id, Intent::Preview).unwrap();

        let View::Previewing(note) = editor.view() else {
            panic!("expected preview");
        };
        assert_eq!(note.content, "<p>milk, eggs</p>");
    }

    #[test]
    fn opening_missing_note_fails() {
        let mut editor = editor();
        assert!(matches!(
            editor.open(&"missing".into(), Intent::Edit),
            Err(EditorError::Store(StoreError::NotFound(_)))
        ));
    }

    #[test]
    fn locking_stores_only_ciphertext() {
        let mut editor = editor();

        let id = save_locked(&mut editor, "secret123");

        let note = editor.store().get(&id).unwrap();
        assert!(note.is_locked);
        assert!(note.content.is_empty());
        assert!(!note.encrypted_content.is_empty());
        assert!(persisted(&editor).iter().all(Note::is_consistent));
    }

    #[test]
    fn lock_without_password_saves_plaintext() {
        let mut editor = editor();
        editor.new_note(Template::Blank);
        let draft = editor.draft_mut().unwrap();
        draft.set_title("t");
        draft.set_content("c");
        draft.set_lock("");

        let id = editor.save().unwrap();

        let note = editor.store().get(&id).unwrap();
        assert!(!note.is_locked);
        assert_eq!(note.content, "c");
    }

    #[test]
    fn locked_note_prompts_for_password() {
        let mut editor = editor();
        let id = save_locked(&mut editor, "secret123");

        editor.open(&id, Intent::Preview).unwrap();

        assert!(matches!(
            editor.view(),
            View::LockedPrompt {
                intent: Intent::Preview,
                ..
            }
        ));
    }

    #[test]
    fn correct_password_opens_preview_with_content() {
        let mut editor = editor();
        let id = save_locked(&mut editor, "secret123");
        editor.open(&id, Intent::Preview).unwrap();

        editor.submit_password("secret123").unwrap();

        let View::Previewing(note) = editor.view() else {
            panic!("expected preview");
        };
        assert_eq!(note.content, "<p>dear diary</p>");
        // The stored note is untouched.
        assert!(editor.store().get(&id).unwrap().content.is_empty());
    }

    #[test]
    fn wrong_password_keeps_prompt_open() {
        let mut editor = editor();
        let id = save_locked(&mut editor, "secret123");
        editor.open(&id, Intent::Edit).unwrap();
        let before = editor.view().clone();

        let result = editor.submit_password("wrong");

        assert!(matches!(result, Err(EditorError::Decryption(_))));
        assert_eq!(editor.view(), &before);
        assert_eq!(editor.view().note_id(), Some(&id));
        let shown = notification(&editor);
        assert!(shown.is_error());
        assert_eq!(shown.message, "Incorrect password");
        assert!(editor.store().get(&id).unwrap().is_locked);

        // A retry with the right password still works.
        editor.submit_password("secret123").unwrap();
        assert!(matches!(editor.view(), View::Editing(_)));
    }

    #[test]
    fn unlocked_for_edit_stays_locked_on_save() {
        let mut editor = editor();
        let id = save_locked(&mut editor, "secret123");
        editor.open(&id, Intent::Edit).unwrap();
        editor.submit_password("secret123").unwrap();

        let View::Editing(draft) = editor.view() else {
            panic!("expected editing");
        };
        assert_eq!(draft.note().content, "<p>dear diary</p>");
        assert!(draft.will_lock());

        editor.draft_mut().unwrap().set_content("<p>dear diary, again</p>");
        editor.save().unwrap();

        let stored = editor.store().get(&id).unwrap();
        assert!(stored.is_locked);
        assert!(stored.content.is_empty());
        assert_eq!(
            cipher::unlock(&stored.encrypted_content, "secret123").unwrap(),
            "<p>dear diary, again</p>"
        );
    }

    #[test]
    fn clearing_lock_stores_plaintext() {
        let mut editor = editor();
        let id = save_locked(&mut editor, "secret123");
        editor.open(&id, Intent::Edit).unwrap();
        editor.submit_password("secret123").unwrap();

        editor.draft_mut().unwrap().clear_lock();
        editor.save().unwrap();

        let stored = editor.store().get(&id).unwrap();
        assert!(!stored.is_locked);
        assert!(stored.encrypted_content.is_empty());
        assert_eq!(stored.content, "<p>dear diary</p>");
    }

    #[test]
    fn cancel_prompt_returns_to_empty() {
        let mut editor = editor();
        let id = save_locked(&mut editor, "pw");
        editor.open(&id, Intent::Edit).unwrap();

        editor.cancel().unwrap();

        assert_eq!(editor.view(), &View::Empty);
    }

    #[test]
    fn submit_password_without_prompt_is_invalid() {
        let mut editor = editor();
        assert!(matches!(
            editor.submit_password("pw"),
            Err(EditorError::InvalidState { .. })
        ));
    }

    #[test]
    fn reset_discards_draft() {
        let mut editor = editor();
        editor.new_note(Template::Journal);

        editor.reset().unwrap();

        assert_eq!(editor.view(), &View::Empty);
        assert!(editor.store().notes().is_empty());
        assert_eq!(notification(&editor).message, "Note form reset");
    }

    #[test]
    fn edit_preview_reopens_for_editing() {
        let mut editor = editor();
        let id = save_groceries(&mut editor);
        editor.open(&id, Intent::Preview).unwrap();

        editor.edit_preview().unwrap();

        assert!(matches!(editor.view(), View::Editing(_)));
    }

    #[test]
    fn delete_open_note_returns_to_empty() {
        let mut editor = editor();
        let id = save_groceries(&mut editor);
        editor.open(&id, Intent::Edit).unwrap();

        editor.delete(&id);

        assert_eq!(editor.view(), &View::Empty);
        assert!(editor.store().notes().is_empty());
        assert_eq!(notification(&editor).message, "Note deleted successfully");
    }

    #[test]
    fn delete_nonexistent_changes_nothing() {
        let mut editor = editor();
        save_groceries(&mut editor);
        let before = persisted(&editor);

        editor.delete(&"nope".into());

        assert_eq!(persisted(&editor), before);
        assert_eq!(editor.store().notes(), before.as_slice());
    }

    #[test]
    fn export_locked_note_requires_password() {
        let mut editor = editor();
        let id = save_locked(&mut editor, "secret123");

        assert!(matches!(
            editor.export(&id, None),
            Err(EditorError::Export(ExportError::PasswordRequired))
        ));
        assert!(notification(&editor).is_error());

        assert!(matches!(
            editor.export(&id, Some("wrong")),
            Err(EditorError::Export(ExportError::Decryption(_)))
        ));
        assert_eq!(notification(&editor).message, "Incorrect password");

        let export = editor.export(&id, Some("secret123")).unwrap();
        assert!(export.document.contains("<p>dear diary</p>"));
        assert_eq!(notification(&editor).message, "Note downloaded successfully");
    }

    #[test]
    fn export_follows_theme() {
        let mut editor = editor();
        let id = save_groceries(&mut editor);
        assert_eq!(editor.toggle_theme(), Theme::Light);

        let export = editor.export(&id, None).unwrap();

        assert!(export.document.contains(Theme::Light.body_style()));
    }

    #[test]
    fn export_missing_note_reports_error() {
        let mut editor = editor();

        assert!(editor.export(&"missing".into(), None).is_err());
        assert_eq!(notification(&editor).message, "No note to download");
    }
}
