//! Rendering and loading configuration.

use crate::due_date::StampFormatter;
use crate::error::Result;

const DEFAULT_TITLE: &str = "Todos";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Due date annotation pattern, already validated
    pub formatter: StampFormatter,
    /// Title used when a loaded document has none
    pub default_title: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            formatter: StampFormatter::default(),
            default_title: DEFAULT_TITLE.to_string(),
        }
    }
}

impl Config {
    /// Replace the due date pattern. Fails on patterns chrono cannot format.
    pub fn with_due_format(mut self, due_format: Option<String>) -> Result<Self> {
        if let Some(format) = due_format {
            self.formatter = StampFormatter::new(format)?;
        }
        Ok(self)
    }

    pub fn with_default_title(mut self, title: Option<String>) -> Self {
        if let Some(title) = title.filter(|t| !t.is_empty()) {
            self.default_title = title;
        }
        self
    }

    pub fn formatter(&self) -> &StampFormatter {
        &self.formatter
    }
}
