use std::path::{Path, PathBuf};

mod config;
mod delete;
mod edit;
mod export;
mod list;
mod new;
mod page;
mod show;
mod terminal;
mod theme;

use clap::ArgAction;
use notekeep::{Config, Editor, FileStore, NoteId, NoteRepository, NoteStore, View};
use terminal::Colorize;

/// The configuration file inside the notes root.
const CONFIG_FILE: &str = "config.toml";

/// How many times an interactive password prompt is offered.
const PASSWORD_ATTEMPTS: usize = 3;

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global=true)]
    verbose: u8,

    /// The directory holding the notes and configuration
    #[arg(short, long, default_value = ".", global = true)]
    root: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        self.command.unwrap_or_default().run(&self.root)
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

#[derive(Debug, clap::Parser)]
pub enum Command {
    /// List notes, optionally filtered by a search query (default)
    List(list::Command),

    /// Create a new note, optionally from a template
    New(new::Command),

    /// Modify an existing note
    Edit(edit::Command),

    /// Show a note read-only
    Show(show::Command),

    /// Delete a note
    Delete(delete::Command),

    /// Export a note as a standalone HTML document
    Export(export::Command),

    /// Show, set, or toggle the colour theme
    Theme(theme::Command),

    /// Show or modify configuration settings
    Config(config::Command),

    /// Show an informational page (privacy policy, terms of service, contact)
    Page(page::Command),
}

impl Default for Command {
    fn default() -> Self {
        Self::List(list::Command::default())
    }
}

impl Command {
    fn run(self, root: &Path) -> anyhow::Result<()> {
        match self {
            Self::List(command) => command.run(root)?,
            Self::New(command) => command.run(root)?,
            Self::Edit(command) => command.run(root)?,
            Self::Show(command) => command.run(root)?,
            Self::Delete(command) => command.run(root)?,
            Self::Export(command) => command.run(root)?,
            Self::Theme(command) => command.run(root)?,
            Self::Config(command) => command.run(root)?,
            Self::Page(command) => command.run()?,
        }
        Ok(())
    }
}

/// Field overrides shared by `new` and `edit`.
#[derive(Debug, Default, clap::Args)]
struct DraftArgs {
    /// The note title
    #[arg(long, short)]
    title: Option<String>,

    /// The note content (rich-text markup)
    #[arg(long, short, conflicts_with = "content_file")]
    content: Option<String>,

    /// Read the note content from a file ('-' for stdin)
    #[arg(long, value_name = "PATH")]
    content_file: Option<PathBuf>,

    /// Comma-separated tags, replacing any existing tags
    #[arg(long)]
    tags: Option<String>,

    /// A reminder timestamp, e.g. 2026-10-19T09:00
    #[arg(long)]
    reminder: Option<String>,
}

impl DraftArgs {
    fn apply(self, editor: &mut Editor<FileStore>) -> anyhow::Result<()> {
        let content = match (self.content, self.content_file) {
            (Some(content), _) => Some(content),
            (None, Some(path)) => Some(read_content(&path)?),
            (None, None) => None,
        };

        let Some(draft) = editor.draft_mut() else {
            anyhow::bail!("No note is open for editing");
        };
        if let Some(title) = self.title {
            draft.set_title(title);
        }
        if let Some(content) = content {
            draft.set_content(content);
        }
        if let Some(tags) = self.tags {
            draft.set_tags_from_input(&tags);
        }
        if let Some(reminder) = self.reminder {
            draft.set_reminder((!reminder.is_empty()).then_some(reminder));
        }
        Ok(())
    }
}

fn read_content(path: &Path) -> anyhow::Result<String> {
    use std::io::Read;

    if path == Path::new("-") {
        let mut content = String::new();
        std::io::stdin().read_to_string(&mut content)?;
        Ok(content)
    } else {
        std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {e}", path.display()))
    }
}

/// Loads the configuration and note collection under `root`.
fn open_editor(root: &Path) -> (Editor<FileStore>, Config) {
    let config = Config::load_or_default(&root.join(CONFIG_FILE));
    let store = NoteStore::load(NoteRepository::new(FileStore::new(root.to_path_buf())));
    (Editor::new(store, &config), config)
}

fn parse_note_id(s: &str) -> Result<NoteId, String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        Err("note id must not be empty".to_string())
    } else {
        Ok(NoteId::from(trimmed))
    }
}

/// Prints the pending notification, and warns if the last write failed.
fn report(editor: &mut Editor<FileStore>) {
    if let Some(notification) = editor.notifier_mut().take() {
        if notification.is_error() {
            eprintln!("{}", notification.message.error());
        } else {
            println!("{}", notification.message.success());
        }
    }
    if editor.store().has_unsaved_changes() {
        eprintln!(
            "{}",
            "⚠️  Notes could not be written to disk; this change is not saved".warning()
        );
    }
}

/// Resolves the password prompt if the editor is showing one.
///
/// A password given on the command line gets one attempt. Otherwise the user
/// is prompted up to [`PASSWORD_ATTEMPTS`] times before the prompt is
/// cancelled.
fn unlock_if_prompted(
    editor: &mut Editor<FileStore>,
    password: Option<&str>,
) -> anyhow::Result<()> {
    if !matches!(editor.view(), View::LockedPrompt { .. }) {
        return Ok(());
    }

    if let Some(password) = password {
        let result = editor.submit_password(password);
        report(editor);
        return result.map_err(anyhow::Error::from);
    }

    eprintln!("{}", "🔒 This note is locked".accent());
    for _ in 0..PASSWORD_ATTEMPTS {
        let password = dialoguer::Password::new()
            .with_prompt("Enter the password to unlock this note")
            .allow_empty_password(true)
            .interact()?;
        if editor.submit_password(&password).is_ok() {
            return Ok(());
        }
        report(editor);
    }

    editor.cancel()?;
    anyhow::bail!("Note remains locked");
}

/// Prompts for a new password to lock a note with.
fn prompt_new_password() -> anyhow::Result<String> {
    Ok(dialoguer::Password::new()
        .with_prompt("Password to lock the note")
        .with_confirmation("Confirm password", "Passwords do not match")
        .interact()?)
}
