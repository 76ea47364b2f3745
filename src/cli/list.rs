use std::path::Path;

use clap::Parser;
use notekeep::Note;
use tracing::instrument;

use super::terminal::{Colorize, is_narrow};

/// How much content is shown per note.
const SNIPPET_CHARS: usize = 100;

#[derive(Debug, Parser, Default)]
#[command(about = "List notes, optionally filtered by a search query")]
pub struct Command {
    /// Only show notes whose title, tags, or content contain this text
    /// (case-insensitive)
    query: Option<String>,

    /// Output format
    #[arg(long, value_name = "FORMAT", default_value = "table")]
    output: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl Command {
    #[instrument(level = "debug", skip(self))]
    pub fn run(self, root: &Path) -> anyhow::Result<()> {
        let (editor, _) = super::open_editor(root);
        let query = self.query.as_deref().unwrap_or_default();
        let notes = editor.query(query);

        match self.output {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&notes)?);
            }
            OutputFormat::Table => {
                if notes.is_empty() {
                    if editor.store().notes().is_empty() {
                        println!("No notes yet. Create one with 'note new'.");
                    } else {
                        println!("No notes match '{query}'.");
                    }
                    return Ok(());
                }
                let narrow = is_narrow();
                for note in notes {
                    print_entry(note, narrow);
                }
            }
        }
        Ok(())
    }
}

fn print_entry(note: &Note, narrow: bool) {
    let lock = if note.is_locked {
        format!(" {}", "🔒".accent())
    } else {
        String::new()
    };
    println!("{}  {}{lock}", note.id.as_str().dim(), note.title);

    if !narrow {
        println!("    {}", note.snippet(SNIPPET_CHARS).dim());
    }
    if !note.tags.is_empty() {
        let tags: Vec<String> = note.tags.iter().map(|tag| tag.accent()).collect();
        println!("    {}", tags.join(" "));
    }
}
