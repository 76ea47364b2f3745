use std::fmt;

use serde::{Deserialize, Serialize};

/// The identifier of a note within the collection.
///
/// Identifiers are opaque strings. The empty identifier marks a draft that
/// has not yet been committed to the store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(String);

impl NoteId {
    /// The identifier carried by drafts.
    #[must_use]
    pub const fn draft() -> Self {
        Self(String::new())
    }

    /// Whether this identifier marks an uncommitted draft.
    #[must_use]
    pub fn is_draft(&self) -> bool {
        self.0.is_empty()
    }

    /// The identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for NoteId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for NoteId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A user-authored note.
///
/// Exactly one of `content` and `encrypted_content` is the live payload,
/// selected by `is_locked`.
///
/// The serialized field names match the on-disk collection format.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Unique identifier, empty for drafts.
    #[serde(default)]
    pub id: NoteId,

    /// The note title. Must be non-blank at save time.
    #[serde(default)]
    pub title: String,

    /// Rich-text markup. Empty while the note is locked.
    #[serde(default)]
    pub content: String,

    /// Ordered tags.
    #[serde(default)]
    pub tags: Vec<String>,

    /// An optional reminder timestamp. Not validated.
    #[serde(default)]
    pub reminder: Option<String>,

    /// Whether `encrypted_content` is the authoritative content.
    #[serde(default)]
    pub is_locked: bool,

    /// Ciphertext produced by [`crate::cipher::lock`]. Empty while the note
    /// is unlocked.
    #[serde(default)]
    pub encrypted_content: String,
}

impl Note {
    /// Creates an unlocked draft with the given title, content and tags.
    #[must_use]
    pub fn draft(title: impl Into<String>, content: impl Into<String>, tags: Vec<String>) -> Self {
        Self {
            id: NoteId::draft(),
            title: title.into(),
            content: content.into(),
            tags,
            ..Self::default()
        }
    }

    /// Whether the locked/unlocked payload invariant holds.
    ///
    /// A locked note carries ciphertext and no plaintext. An unlocked note
    /// carries no ciphertext.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        if self.is_locked {
            self.content.is_empty() && !self.encrypted_content.is_empty()
        } else {
            self.encrypted_content.is_empty()
        }
    }

    /// Whether the note matches a lowercase search needle.
    ///
    /// The title, any tag, or the plaintext content may match.
    pub(crate) fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(needle))
            || self.content.to_lowercase().contains(needle)
    }

    /// A short preview of the content for list views.
    ///
    /// Locked notes show a placeholder instead of their content.
    #[must_use]
    pub fn snippet(&self, max_chars: usize) -> String {
        if self.content.is_empty() {
            return "Locked note".to_string();
        }
        let truncated: String = self.content.chars().take(max_chars).collect();
        format!("{truncated}...")
    }
}

/// Splits comma-separated tag input into trimmed tags.
#[must_use]
pub fn parse_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Whether rich-text markup has no visible text.
///
/// Markup tags and non-breaking space entities are ignored. A `<` with no
/// closing `>` after it is text, not the start of a tag.
#[must_use]
pub fn is_blank_markup(markup: &str) -> bool {
    let mut text = String::with_capacity(markup.len());
    let mut rest = markup;
    while let Some(open) = rest.find('<') {
        text.push_str(&rest[..open]);
        match rest[open..].find('>') {
            Some(close) => rest = &rest[open + close + 1..],
            None => {
                rest = &rest[open..];
                break;
            }
        }
    }
    text.push_str(rest);
    text.replace("&nbsp;", " ")
        .replace("&#160;", " ")
        .trim()
        .is_empty()
}
