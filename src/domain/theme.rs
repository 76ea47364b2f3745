use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// The colour scheme used for rendering and exported documents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light text on a dark background.
    #[default]
    Dark,
    /// Dark text on a light background.
    Light,
}

impl Theme {
    /// The other theme.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Inline CSS for the body of an exported document.
    #[must_use]
    pub const fn body_style(self) -> &'static str {
        match self {
            Self::Dark => "background-color: #1f2937; color: #fff;",
            Self::Light => "background-color: #fff; color: #000;",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dark => f.write_str("dark"),
            Self::Light => f.write_str("light"),
        }
    }
}

/// The theme name was not recognised.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown theme '{0}' (expected 'dark' or 'light')")]
pub struct UnknownTheme(String);

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            _ => Err(UnknownTheme(s.to_string())),
        }
    }
}
