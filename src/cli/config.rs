use std::path::Path;

use notekeep::{Config, Theme};
use tracing::instrument;

use super::{CONFIG_FILE, terminal::Colorize};

const KEYS_HELP: &str = "\
Available configuration keys:
  theme                      Colour theme, dark or light (default: dark)
  notification_timeout_secs  Seconds a notification stays visible (default: 3)";

/// Show or modify configuration
///
/// Configuration is stored in config.toml in the notes root.
#[derive(Debug, clap::Parser)]
#[command(after_long_help = KEYS_HELP)]
pub struct Command {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Debug, clap::Parser)]
enum ConfigCommand {
    /// Show all configuration values
    Show,

    /// Get a specific configuration value
    Get {
        /// Configuration key to retrieve
        #[arg(value_parser = ["theme", "notification_timeout_secs"])]
        key: String,
    },

    /// Set a configuration value
    #[command(after_long_help = "Examples:\n  note config set theme light\n  note config set notification_timeout_secs 5")]
    Set {
        /// Configuration key to set
        #[arg(value_parser = ["theme", "notification_timeout_secs"])]
        key: String,

        /// Value to set
        value: String,
    },
}

impl Command {
    #[instrument]
    pub fn run(self, root: &Path) -> anyhow::Result<()> {
        let config_path = root.join(CONFIG_FILE);

        match self.command {
            ConfigCommand::Show => Self::show_config(&config_path),
            ConfigCommand::Get { key } => Self::get_config(&config_path, &key),
            ConfigCommand::Set { key, value } => Self::set_config(&config_path, &key, &value),
        }
    }

    fn load(config_path: &Path) -> anyhow::Result<Config> {
        if config_path.exists() {
            Config::load(config_path).map_err(|e| anyhow::anyhow!("{e}"))
        } else {
            Ok(Config::default())
        }
    }

    fn show_config(config_path: &Path) -> anyhow::Result<()> {
        let config = Self::load(config_path)?;

        println!("Configuration:");
        println!("  theme: {}", config.theme);
        println!(
            "  notification_timeout_secs: {} {}",
            config.notification_timeout().as_secs(),
            "(seconds)".dim()
        );
        Ok(())
    }

    fn get_config(config_path: &Path, key: &str) -> anyhow::Result<()> {
        let config = Self::load(config_path)?;

        match key {
            "theme" => println!("{}", config.theme),
            "notification_timeout_secs" => {
                println!("{}", config.notification_timeout().as_secs());
            }
            _ => anyhow::bail!(
                "Unknown configuration key: '{key}'\nAvailable keys: theme, \
                 notification_timeout_secs"
            ),
        }
        Ok(())
    }

    fn set_config(config_path: &Path, key: &str, value: &str) -> anyhow::Result<()> {
        let mut config = Self::load(config_path)?;

        match key {
            "theme" => {
                config.theme = value.parse::<Theme>()?;
            }
            "notification_timeout_secs" => {
                let secs: u64 = value.parse().map_err(|_| {
                    anyhow::anyhow!("Invalid value for notification_timeout_secs: '{value}'")
                })?;
                config.set_notification_timeout_secs(secs);
            }
            _ => anyhow::bail!(
                "Unknown or read-only configuration key: '{key}'\nSettable keys: theme, \
                 notification_timeout_secs"
            ),
        }

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        config
            .save(config_path)
            .map_err(|e| anyhow::anyhow!("{e}"))?;

        println!("{}", format!("Set {key} = {value}").success());
        Ok(())
    }
}
