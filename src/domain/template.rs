use std::{fmt, str::FromStr};

use crate::domain::Note;

/// A preset used to seed a new draft.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Template {
    /// An empty note.
    #[default]
    Blank,
    /// A daily journal entry.
    Journal,
    /// A to-do list.
    TaskList,
    /// Notes from a meeting.
    MeetingNotes,
}

impl Template {
    /// All templates, in the order they are offered to the user.
    pub const ALL: [Self; 4] = [Self::Blank, Self::Journal, Self::TaskList, Self::MeetingNotes];

    /// The title given to drafts created from this template.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Blank => "New Note",
            Self::Journal => "Daily Journal",
            Self::TaskList => "Task List",
            Self::MeetingNotes => "Meeting Notes",
        }
    }

    /// The markup body given to drafts created from this template.
    #[must_use]
    pub const fn content(self) -> &'static str {
        match self {
            Self::Blank => "",
            Self::Journal => {
                "<h2>Today's Thoughts</h2><p></p><h3>Gratitude</h3><p></p><h3>Reflections</h3><p></p>"
            }
            Self::TaskList => "<h2>Tasks for Today</h2><ul><li>Task 1</li><li>Task 2</li></ul>",
            Self::MeetingNotes => {
                "<h2>Meeting Date</h2><p></p><h3>Attendees</h3><p></p><h3>Discussion Points</h3><p></p>"
            }
        }
    }

    /// The tags given to drafts created from this template.
    #[must_use]
    pub const fn tags(self) -> &'static [&'static str] {
        match self {
            Self::Blank => &[],
            Self::Journal => &["Journal", "Daily"],
            Self::TaskList => &["Tasks", "To-Do"],
            Self::MeetingNotes => &["Meetings", "Work"],
        }
    }

    /// Builds an unsaved draft from this template.
    #[must_use]
    pub fn draft(self) -> Note {
        Note::draft(
            self.title(),
            self.content(),
            self.tags().iter().map(ToString::to_string).collect(),
        )
    }

    const fn name(self) -> &'static str {
        match self {
            Self::Blank => "blank",
            Self::Journal => "journal",
            Self::TaskList => "task-list",
            Self::MeetingNotes => "meeting-notes",
        }
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The template name was not recognised.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown template '{0}' (expected one of: blank, journal, task-list, meeting-notes)")]
pub struct UnknownTemplate(String);

impl FromStr for Template {
    type Err = UnknownTemplate;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('_', "-");
        match normalized.as_str() {
            "blank" => Ok(Self::Blank),
            "journal" => Ok(Self::Journal),
            "task-list" | "tasklist" => Ok(Self::TaskList),
            "meeting-notes" | "meetingnotes" => Ok(Self::MeetingNotes),
            _ => Err(UnknownTemplate(s.to_string())),
        }
    }
}
