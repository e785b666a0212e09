use crate::due_date::{DueDateFormatter, StampFormatter};
use chrono::NaiveDate;
use std::fmt;

pub const DONE_MARKER: char = 'X';
pub const UNDONE_MARKER: char = ' ';

/// A single todo item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    pub title: String,
    pub description: String,
    pub done: bool,
    pub due_date: Option<NaiveDate>,
}

impl Todo {
    pub fn new(title: impl Into<String>) -> Self {
        Self::with_description(title, "")
    }

    pub fn with_description(title: impl Into<String>, description: impl Into<String>) -> Self {
        Todo {
            title: title.into(),
            description: description.into(),
            done: false,
            due_date: None,
        }
    }

    /// Builder-style helper for attaching a due date.
    pub fn due(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    pub fn mark_done(&mut self) {
        self.done = true;
    }

    pub fn mark_undone(&mut self) {
        self.done = false;
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn marker(&self) -> char {
        if self.done { DONE_MARKER } else { UNDONE_MARKER }
    }

    /// Render as `[X] title` using the default due date annotation.
    pub fn render(&self) -> String {
        self.render_with(&StampFormatter::default())
    }

    /// Render with a caller-supplied due date formatter. The annotation is
    /// only appended when a due date is set.
    pub fn render_with(&self, formatter: &dyn DueDateFormatter) -> String {
        let mut result = format!("[{}] {}", self.marker(), self.title);
        if let Some(due) = self.due_date {
            result.push_str(&formatter.annotate(due));
        }
        result
    }
}

impl fmt::Display for Todo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}
