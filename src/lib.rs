//! # todolist
//!
//! In-memory todo items and ordered, titled lists of them, with filtering,
//! lookup by title and bulk status changes. Lists can be loaded from and
//! exported to JSON documents.

pub mod cli;
pub mod cli_handlers;
pub mod config;
pub mod due_date;
pub mod error;
pub mod list;
pub mod loader;
pub mod todo;

pub use config::Config;
pub use due_date::{DueDateFormatter, StampFormatter};
pub use error::{Result, TodoError};
pub use list::{SharedTodo, TodoList};
pub use todo::Todo;
