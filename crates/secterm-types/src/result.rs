//! ExecResult and Dispatch — what a command produces.

use crate::error::ShellError;
use crate::event::Event;

/// The result of running one command handler.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecResult {
    /// Output lines, in order.
    pub lines: Vec<String>,
    /// Events for the host, in order.
    pub events: Vec<Event>,
    /// Set when the command failed; its text is the first entry of `lines`.
    pub error: Option<ShellError>,
}

impl ExecResult {
    /// A successful result with no output.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A successful result with one output line.
    pub fn line(line: impl Into<String>) -> Self {
        Self {
            lines: vec![line.into()],
            ..Self::default()
        }
    }

    /// A successful result with several output lines.
    pub fn lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// A successful result carrying multi-line text, split on newlines.
    pub fn text(text: &str) -> Self {
        Self::lines(text.lines())
    }

    /// A failed result. The error is rendered as the first output line;
    /// a handler may append more lines after it.
    pub fn failure(error: ShellError) -> Self {
        Self {
            lines: vec![error.to_string()],
            events: Vec::new(),
            error: Some(error),
        }
    }

    /// Append an event.
    pub fn with_event(mut self, event: Event) -> Self {
        self.events.push(event);
        self
    }

    /// Append an output line.
    pub fn push_line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// True if the command succeeded.
    pub fn ok(&self) -> bool {
        self.error.is_none()
    }
}

/// The result of one `dispatch` call, handed to the host.
///
/// The host renders `lines` verbatim, one per row, and forwards `events`
/// to its collaborators. `error` is informational.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dispatch {
    pub lines: Vec<String>,
    pub events: Vec<Event>,
    pub error: Option<ShellError>,
}

impl Dispatch {
    /// A single blank line, the answer to empty input.
    pub fn blank() -> Self {
        Self {
            lines: vec![String::new()],
            ..Self::default()
        }
    }

    /// True if no diagnostic was produced.
    pub fn ok(&self) -> bool {
        self.error.is_none()
    }
}

impl From<ExecResult> for Dispatch {
    fn from(result: ExecResult) -> Self {
        Self {
            lines: result.lines,
            events: result.events,
            error: result.error,
        }
    }
}
