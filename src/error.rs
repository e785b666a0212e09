use thiserror::Error;

/// All possible errors in the todo list
#[derive(Error, Debug)]
pub enum TodoError {
    #[error("Position {position} is out of range for a list of {size} todos")]
    IndexOutOfBounds { position: usize, size: usize },

    #[error("Invalid due date: {0}. Expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Invalid due date format: {0:?}")]
    InvalidDueFormat(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl TodoError {
    pub fn error_code(&self) -> &'static str {
        match self {
            TodoError::IndexOutOfBounds { .. } => "IndexOutOfBounds",
            TodoError::InvalidDate(_) => "InvalidDate",
            TodoError::InvalidDueFormat(_) => "InvalidDueFormat",
            TodoError::Json(_) => "JsonError",
            TodoError::Io(_) => "IoError",
        }
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, TodoError>;
