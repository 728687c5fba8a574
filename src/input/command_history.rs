//! Command recall history for the terminal prompt
//!
//! Every submitted command line is appended here, duplicates included, and
//! nothing is ever removed for the lifetime of the session (the `clear`
//! command only wipes the scrollback). Up/Down arrows walk a cursor over the
//! entries, similar to a shell's history recall.
//!
//! The cursor is `None` while the user is typing a fresh line ("live"
//! position) and `Some(i)` while a recalled entry is shown in the prompt.

/// Result of moving the recall cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recall<'a> {
    /// Nothing changed (empty history, or already at the live position)
    Unchanged,
    /// The cursor now points at this entry
    Entry(&'a str),
    /// The cursor moved past the newest entry back to the live position
    Live,
}

/// Submitted command lines plus a recall cursor
#[derive(Debug, Clone, Default)]
pub struct CommandHistory {
    /// Entries in submission order (oldest first)
    entries: Vec<String>,

    /// Recall cursor. `None` means "not browsing history".
    cursor: Option<usize>,
}

impl CommandHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a submitted command and return the cursor to the live position
    pub fn push(&mut self, entry: impl Into<String>) {
        self.entries.push(entry.into());
        self.cursor = None;
    }

    /// Move the cursor one entry back (towards older commands)
    ///
    /// From the live position this jumps to the newest entry. At the oldest
    /// entry the cursor stays put and that entry is returned again.
    pub fn recall_previous(&mut self) -> Recall<'_> {
        if self.entries.is_empty() {
            return Recall::Unchanged;
        }

        let idx = match self.cursor {
            None => self.entries.len() - 1,
            Some(idx) => idx.saturating_sub(1),
        };
        self.cursor = Some(idx);
        Recall::Entry(&self.entries[idx])
    }

    /// Move the cursor one entry forward (towards newer commands)
    ///
    /// Stepping past the newest entry returns to the live position.
    pub fn recall_next(&mut self) -> Recall<'_> {
        let Some(idx) = self.cursor else {
            return Recall::Unchanged;
        };

        let next = idx + 1;
        if next < self.entries.len() {
            self.cursor = Some(next);
            Recall::Entry(&self.entries[next])
        } else {
            self.cursor = None;
            Recall::Live
        }
    }

    /// Current cursor (`None` = live position)
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// All entries in submission order
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
