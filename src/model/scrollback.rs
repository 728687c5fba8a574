//! Scrollback log for the terminal widget
//!
//! The scrollback is an append-only list of output lines. Lines are never
//! edited after they are pushed; the only way to remove them is to wipe the
//! whole log (the `clear` command).

use serde::{Deserialize, Serialize};

/// Visual category of a scrollback line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    /// Plain informational output
    Info,
    /// Echo of a submitted command, prefixed with the prompt
    Command,
    /// Unrecognized command
    Error,
    /// Something is about to happen (e.g. a pending navigation)
    Warning,
    /// Positive confirmation output
    Success,
}

impl LineKind {
    /// Short lowercase label, used by the headless printer and the logs
    pub fn label(self) -> &'static str {
        match self {
            LineKind::Info => "info",
            LineKind::Command => "command",
            LineKind::Error => "error",
            LineKind::Warning => "warning",
            LineKind::Success => "success",
        }
    }
}

impl std::fmt::Display for LineKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A single line of terminal output.
///
/// `text` may contain embedded newlines; the view splits them when rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrollbackLine {
    text: String,
    kind: LineKind,
}

impl ScrollbackLine {
    pub fn new(text: impl Into<String>, kind: LineKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::new(text, LineKind::Info)
    }

    pub fn command(text: impl Into<String>) -> Self {
        Self::new(text, LineKind::Command)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(text, LineKind::Error)
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self::new(text, LineKind::Warning)
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(text, LineKind::Success)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn kind(&self) -> LineKind {
        self.kind
    }
}

/// Append-only scrollback
#[derive(Debug, Clone, Default)]
pub struct Scrollback {
    lines: Vec<ScrollbackLine>,
}

impl Scrollback {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line at the bottom of the log
    pub fn push(&mut self, line: ScrollbackLine) {
        self.lines.push(line);
    }

    /// Append several lines, preserving their order
    pub fn extend(&mut self, lines: impl IntoIterator<Item = ScrollbackLine>) {
        self.lines.extend(lines);
    }

    /// Drop every line, returning how many were removed
    pub fn clear(&mut self) -> usize {
        let removed = self.lines.len();
        self.lines.clear();
        removed
    }

    /// Read-only view in display order (oldest first)
    pub fn lines(&self) -> &[ScrollbackLine] {
        &self.lines
    }

    pub fn last(&self) -> Option<&ScrollbackLine> {
        self.lines.last()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of display rows once embedded newlines are split
    pub fn row_count(&self) -> usize {
        self.lines.iter().map(|l| l.text.split('\n').count()).sum()
    }
}
