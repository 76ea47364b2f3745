use std::path::Path;

use notekeep::{Intent, NoteId};
use tracing::instrument;

use super::{DraftArgs, parse_note_id};

#[derive(Debug, clap::Parser)]
pub struct Command {
    /// The id of the note to edit
    #[clap(value_parser = parse_note_id)]
    id: NoteId,

    #[command(flatten)]
    fields: DraftArgs,

    /// Lock the note with a password
    ///
    /// Not needed for a note that is already locked: editing a locked note
    /// keeps it locked with its current password. Pass --unlock to store it
    /// as plain text instead.
    #[arg(long, conflicts_with = "unlock")]
    lock: bool,

    /// Store the note unlocked, removing any existing lock
    #[arg(long)]
    unlock: bool,

    /// The note's current password, or the new one when locking (prompted
    /// for if omitted)
    #[arg(long)]
    password: Option<String>,
}

impl Command {
    #[instrument(skip(self), fields(id = %self.id))]
    pub fn run(self, root: &Path) -> anyhow::Result<()> {
        let (mut editor, _) = super::open_editor(root);

        editor.open(&self.id, Intent::Edit)?;
        let was_locked = editor
            .store()
            .get(&self.id)
            .is_some_and(|note| note.is_locked);
        super::unlock_if_prompted(&mut editor, self.password.as_deref())?;

        self.fields.apply(&mut editor)?;

        if self.unlock {
            if let Some(draft) = editor.draft_mut() {
                draft.clear_lock();
            }
        } else if self.lock && !was_locked {
            let password = match self.password {
                Some(password) => password,
                None => super::prompt_new_password()?,
            };
            if let Some(draft) = editor.draft_mut() {
                draft.set_lock(password);
            }
        }

        let result = editor.save();
        super::report(&mut editor);
        result?;
        Ok(())
    }
}
