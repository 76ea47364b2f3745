use std::path::Path;

use notekeep::Theme;
use tracing::instrument;

use super::{CONFIG_FILE, terminal::Colorize};

#[derive(Debug, clap::Parser)]
pub struct Command {
    /// The theme to switch to; shows the current theme if omitted
    choice: Option<Choice>,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum Choice {
    Dark,
    Light,
    Toggle,
}

impl Command {
    #[instrument(skip(self))]
    pub fn run(self, root: &Path) -> anyhow::Result<()> {
        let (mut editor, mut config) = super::open_editor(root);

        let theme = match self.choice {
            None => {
                println!("{}", editor.theme());
                return Ok(());
            }
            Some(Choice::Toggle) => editor.toggle_theme(),
            Some(Choice::Dark) => Theme::Dark,
            Some(Choice::Light) => Theme::Light,
        };

        config.theme = theme;
        std::fs::create_dir_all(root)?;
        config
            .save(&root.join(CONFIG_FILE))
            .map_err(|e| anyhow::anyhow!("{e}"))?;

        println!("{}", format!("Theme set to {theme}").success());
        Ok(())
    }
}
