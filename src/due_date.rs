//! Due date annotations appended to rendered todos.

use crate::error::{Result, TodoError};
use chrono::NaiveDate;
use chrono::format::{Item, StrftimeItems};

/// Default annotation pattern, e.g. ` (Due: Friday January 6)`.
pub const DEFAULT_DUE_FORMAT: &str = " (Due: %A %B %-d)";

/// Turns a due date into the text appended after a todo's title.
pub trait DueDateFormatter {
    fn annotate(&self, due: NaiveDate) -> String;
}

/// Formats due dates with a chrono strftime pattern. The pattern is checked
/// on construction, so formatting never fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StampFormatter {
    pattern: String,
}

impl StampFormatter {
    pub fn new(pattern: impl Into<String>) -> Result<Self> {
        let pattern = pattern.into();
        if StrftimeItems::new(&pattern).any(|item| matches!(item, Item::Error)) {
            return Err(TodoError::InvalidDueFormat(pattern));
        }
        Ok(Self { pattern })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

impl Default for StampFormatter {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_DUE_FORMAT.to_string(),
        }
    }
}

impl DueDateFormatter for StampFormatter {
    fn annotate(&self, due: NaiveDate) -> String {
        due.format(&self.pattern).to_string()
    }
}

impl<F> DueDateFormatter for F
where
    F: Fn(NaiveDate) -> String,
{
    fn annotate(&self, due: NaiveDate) -> String {
        self(due)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn friday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 1, 6).unwrap()
    }

    #[test]
    fn test_default_annotation() {
        let formatter = StampFormatter::default();
        assert_eq!(formatter.annotate(friday()), " (Due: Friday January 6)");
    }

    #[test]
    fn test_custom_pattern() {
        let formatter = StampFormatter::new(" due %Y-%m-%d").unwrap();
        assert_eq!(formatter.annotate(friday()), " due 2023-01-06");
        assert_eq!(formatter.pattern(), " due %Y-%m-%d");
    }

    #[test]
    fn test_default_pattern_is_valid() {
        let checked = StampFormatter::new(DEFAULT_DUE_FORMAT).unwrap();
        assert_eq!(checked, StampFormatter::default());
    }

    #[test]
    fn test_unknown_specifier_rejected() {
        let result = StampFormatter::new(" (Due: %Q)");
        assert!(matches!(result, Err(TodoError::InvalidDueFormat(ref p)) if p == " (Due: %Q)"));
    }

    #[test]
    fn test_dangling_percent_rejected() {
        assert!(StampFormatter::new(" due %").is_err());
    }

    #[test]
    fn test_closure_formatter() {
        let formatter = |due: NaiveDate| format!(" <{due}>");
        assert_eq!(formatter.annotate(friday()), " <2023-01-06>");
    }
}
