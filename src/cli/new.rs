use std::path::Path;

use notekeep::Template;
use tracing::instrument;

use super::DraftArgs;

#[derive(Debug, clap::Parser)]
pub struct Command {
    /// The template to start from: blank, journal, task-list, or
    /// meeting-notes
    #[arg(long, default_value = "blank")]
    template: Template,

    #[command(flatten)]
    fields: DraftArgs,

    /// Lock the note with a password
    #[arg(long)]
    lock: bool,

    /// The password to lock the note with (prompted for if omitted)
    #[arg(long, requires = "lock")]
    password: Option<String>,
}

impl Command {
    #[instrument(skip(self), fields(template = %self.template))]
    pub fn run(self, root: &Path) -> anyhow::Result<()> {
        let (mut editor, _) = super::open_editor(root);

        editor.new_note(self.template);
        self.fields.apply(&mut editor)?;

        if self.lock {
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
        let id = result?;

        println!("Added note {id}");
        Ok(())
    }
}
