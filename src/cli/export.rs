use std::path::{Path, PathBuf};

use notekeep::NoteId;
use tracing::instrument;

use super::parse_note_id;

#[derive(Debug, clap::Parser)]
pub struct Command {
    /// The id of the note to export
    #[clap(value_parser = parse_note_id)]
    id: NoteId,

    /// The password of a locked note (prompted for if omitted)
    #[arg(long)]
    password: Option<String>,

    /// The directory to write `<title>.html` into
    #[arg(long, short, default_value = ".")]
    out: PathBuf,
}

impl Command {
    #[instrument(skip(self), fields(id = %self.id))]
    pub fn run(self, root: &Path) -> anyhow::Result<()> {
        let (mut editor, _) = super::open_editor(root);

        let locked = editor
            .store()
            .get(&self.id)
            .is_some_and(|note| note.is_locked);
        let password = match self.password {
            Some(password) => Some(password),
            None if locked => {
                let password = dialoguer::Password::new()
                    .with_prompt("Enter password to download the note")
                    .allow_empty_password(true)
                    .interact()?;
                if password.is_empty() {
                    anyhow::bail!("Export cancelled");
                }
                Some(password)
            }
            None => None,
        };

        let result = editor.export(&self.id, password.as_deref());
        super::report(&mut editor);
        let export = result?;

        let path = self.out.join(&export.file_name);
        std::fs::create_dir_all(&self.out)
            .and_then(|()| std::fs::write(&path, &export.document))
            .map_err(|e| anyhow::anyhow!("Failed to write {}: {e}", path.display()))?;

        println!("Wrote {}", path.display());
        Ok(())
    }
}
