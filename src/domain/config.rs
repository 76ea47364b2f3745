use std::{path::Path, time::Duration};

use serde::{Deserialize, Serialize};

use crate::domain::Theme;

/// Configuration for the notes application.
///
/// This struct holds user preferences that persist between sessions, such as
/// the colour theme and how long notifications stay visible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Versions", into = "Versions")]
pub struct Config {
    /// The colour theme. Dark unless the user has toggled it.
    pub theme: Theme,

    /// How long a notification stays visible before it is dismissed.
    notification_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            notification_timeout_secs: default_notification_timeout_secs(),
        }
    }
}

impl Config {
    /// Loads the configuration from a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or if the TOML content is
    /// invalid.
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file: {e}"))?;
        toml::from_str(&content).map_err(|e| format!("Failed to parse config file: {e}"))
    }

    /// Loads the configuration, falling back to defaults.
    ///
    /// A missing file silently yields the defaults. An unreadable or invalid
    /// file is logged and also yields the defaults.
    #[must_use]
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        Self::load(path).unwrap_or_else(|e| {
            tracing::warn!("{e}; using default configuration");
            Self::default()
        })
    }

    /// Saves the configuration to a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be serialized to TOML or if
    /// the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), String> {
        let content =
            toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize config: {e}"))?;
        std::fs::write(path, content).map_err(|e| format!("Failed to write config file: {e}"))
    }

    /// How long a notification stays visible.
    #[must_use]
    pub const fn notification_timeout(&self) -> Duration {
        Duration::from_secs(self.notification_timeout_secs)
    }

    /// Sets how long a notification stays visible, in whole seconds.
    pub const fn set_notification_timeout_secs(&mut self, secs: u64) {
        self.notification_timeout_secs = secs;
    }
}

const fn default_notification_timeout_secs() -> u64 {
    3
}

/// The serialized versions of the configuration.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "_version")]
enum Versions {
    #[serde(rename = "1")]
    V1 {
        #[serde(default)]
        theme: Theme,

        #[serde(default = "default_notification_timeout_secs")]
        notification_timeout_secs: u64,
    },
}

impl From<Versions> for Config {
    fn from(versions: Versions) -> Self {
        match versions {
            Versions::V1 {
                theme,
                notification_timeout_secs,
            } => Self {
                theme,
                notification_timeout_secs,
            },
        }
    }
}

impl From<Config> for Versions {
    fn from(config: Config) -> Self {
        Self::V1 {
            theme: config.theme,
            notification_timeout_secs: config.notification_timeout_secs,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn load_reads_valid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"_version = \"1\"\ntheme = \"light\"\nnotification_timeout_secs = 5\n")
            .unwrap();

        let config = Config::load(file.path()).unwrap();

        assert_eq!(config.theme, Theme::Light);
        assert_eq!(config.notification_timeout(), Duration::from_secs(5));
    }

    #[test]
    fn load_missing_file_returns_error() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("missing.toml");

        let error = Config::load(&missing).unwrap_err();
        assert!(error.starts_with("Failed to read config file:"));
    }

    #[test]
    fn load_invalid_toml_returns_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"_version = \"1\"\ntheme = \"sepia\"\n").unwrap();

        let error = Config::load(file.path()).unwrap_err();
        assert!(error.starts_with("Failed to parse config file:"));
    }

    #[test]
    fn load_or_default_tolerates_bad_files() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"not toml at all [").unwrap();

        assert_eq!(Config::load_or_default(file.path()), Config::default());
    }

    #[test]
    fn empty_file_returns_default() {
        let expected = Config::default();
        let actual: Config = toml::from_str(r#"_version = "1""#).unwrap();
        assert_eq!(actual, expected);
    }

    #[test]
    fn save_then_load() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.toml");
        let mut config = Config {
            theme: Theme::Light,
            ..Config::default()
        };
        config.set_notification_timeout_secs(10);

        config.save(&path).unwrap();

        assert_eq!(Config::load(&path).unwrap(), config);
    }
}
