use std::path::Path;

use notekeep::NoteId;
use tracing::instrument;

use super::parse_note_id;

#[derive(Debug, clap::Parser)]
pub struct Command {
    /// The id of the note to delete
    #[clap(value_parser = parse_note_id)]
    id: NoteId,
}

impl Command {
    #[instrument(skip(self), fields(id = %self.id))]
    pub fn run(self, root: &Path) -> anyhow::Result<()> {
        let (mut editor, _) = super::open_editor(root);

        if editor.store().get(&self.id).is_none() {
            tracing::info!("note {} does not exist", self.id);
        }
        editor.delete(&self.id);
        super::report(&mut editor);
        Ok(())
    }
}
