//! Standalone HTML export of a single note.

use crate::{
    cipher::{self, DecryptionError},
    domain::{Note, Theme},
};

/// An error raised while exporting a note.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExportError {
    /// The note has no title or no content.
    #[error("No note to download")]
    Empty,

    /// The note is locked and no password was given.
    #[error("Password required to download a locked note")]
    PasswordRequired,

    /// The password did not unlock the note.
    #[error("Incorrect password")]
    Decryption(#[from] DecryptionError),
}

/// An exported document ready to be written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Export {
    /// The suggested file name, `<title>.html`.
    pub file_name: String,
    /// The HTML document.
    pub document: String,
}

/// Renders `note` as a standalone HTML document.
///
/// Locked notes are decrypted with `password` first. The title and tags are
/// escaped; the content is embedded as the markup it already is.
///
/// # Errors
///
/// Returns an error if the note is empty, or if it is locked and the password
/// is missing or wrong.
pub fn export(note: &Note, password: Option<&str>, theme: Theme) -> Result<Export, ExportError> {
    if note.title.is_empty() || (note.content.is_empty() && note.encrypted_content.is_empty()) {
        return Err(ExportError::Empty);
    }

    let content = if note.is_locked {
        let password = password
            .filter(|p| !p.is_empty())
            .ok_or(ExportError::PasswordRequired)?;
        cipher::unlock(&note.encrypted_content, password)?
    } else {
        note.content.clone()
    };

    let title = escape(&note.title);
    let tags = escape(&note.tags.join(", "));
    let style = theme.body_style();

    let document = format!(
        "<!DOCTYPE html>
<html lang=\"en\">
<head>
  <meta charset=\"UTF-8\">
  <title>{title}</title>
</head>
<body style=\"{style}\">
  <h1>{title}</h1>
  {content}
  <p>Tags: {tags}</p>
</body>
</html>
"
    );

    Ok(Export {
        file_name: file_name_for(&note.title),
        document,
    })
}

/// `<title>.html`, with characters that cannot appear in a file name replaced.
fn file_name_for(title: &str) -> String {
    let stem: String = title
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();
    let stem = stem.trim().trim_start_matches('.');
    if stem.is_empty() {
        "note.html".to_string()
    } else {
        format!("{stem}.html")
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}
