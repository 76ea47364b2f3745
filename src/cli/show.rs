use std::path::Path;

use clap::Parser;
use notekeep::{Intent, Note, NoteId, View};
use tracing::instrument;

use super::{parse_note_id, terminal::Colorize};

#[derive(Debug, Parser)]
#[command(about = "Display a note read-only")]
pub struct Command {
    /// The id of the note to display
    #[clap(value_parser = parse_note_id)]
    id: NoteId,

    /// The password of a locked note (prompted for if omitted)
    #[arg(long)]
    password: Option<String>,

    /// Output format
    #[arg(long, value_name = "FORMAT", default_value = "pretty")]
    output: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Pretty,
    Json,
    Raw,
}

impl Command {
    #[instrument(level = "debug", skip(self), fields(id = %self.id))]
    pub fn run(self, root: &Path) -> anyhow::Result<()> {
        let (mut editor, _) = super::open_editor(root);

        editor.open(&self.id, Intent::Preview)?;
        super::unlock_if_prompted(&mut editor, self.password.as_deref())?;

        let View::Previewing(note) = editor.view() else {
            anyhow::bail!("Note {} could not be opened for preview", self.id);
        };

        match self.output {
            OutputFormat::Pretty => output_pretty(note),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(note)?),
            OutputFormat::Raw => println!("{}", note.content),
        }
        Ok(())
    }
}

fn output_pretty(note: &Note) {
    let lock = if note.is_locked { " 🔒" } else { "" };
    println!("# {}{lock}", note.title);
    println!("{}\n", format!("id {}", note.id).dim());

    println!("{}", note.content);

    if !note.tags.is_empty() {
        println!("\n{}", "Tags".dim());
        for tag in &note.tags {
            println!("  • {}", tag.accent());
        }
    }
    if let Some(reminder) = &note.reminder {
        println!("\n{}", "Reminder".dim());
        println!("  {reminder}");
    }
}
