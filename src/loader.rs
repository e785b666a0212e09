//! Builds todo lists from JSON documents and exports them back.
//!
//! ```json
//! { "title": "Today", "todos": [ { "title": "Buy milk", "due_date": "2024-01-06" } ] }
//! ```

use crate::config::Config;
use crate::error::{Result, TodoError};
use crate::list::TodoList;
use crate::todo::Todo;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// On-disk shape of a todo list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default)]
    pub todos: Vec<TodoDocument>,
}

/// On-disk shape of a single todo
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodoDocument {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub done: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
}

impl TodoDocument {
    fn into_todo(self) -> Result<Todo> {
        let due_date = self.due_date.as_deref().map(parse_date).transpose()?;
        Ok(Todo {
            title: self.title,
            description: self.description,
            done: self.done,
            due_date,
        })
    }
}

impl From<&Todo> for TodoDocument {
    fn from(todo: &Todo) -> Self {
        TodoDocument {
            title: todo.title.clone(),
            description: todo.description.clone(),
            done: todo.done,
            due_date: todo.due_date.map(|d| d.format(DATE_FORMAT).to_string()),
        }
    }
}

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|_| TodoError::InvalidDate(s.to_string()))
}

/// Build a list from an already-parsed document.
pub fn from_document(doc: ListDocument, config: &Config) -> Result<TodoList> {
    let title = doc.title.unwrap_or_else(|| config.default_title.clone());
    let mut list = TodoList::new(title);
    for item in doc.todos {
        list.add(item.into_todo()?);
    }
    Ok(list)
}

pub fn parse_list(json: &str, config: &Config) -> Result<TodoList> {
    let doc: ListDocument = serde_json::from_str(json)?;
    from_document(doc, config)
}

pub fn load_list<P: AsRef<Path>>(path: P, config: &Config) -> Result<TodoList> {
    let path = path.as_ref();
    debug!(path = %path.display(), "loading todo list");
    let json = fs::read_to_string(path)?;
    parse_list(&json, config)
}

pub fn to_document(list: &TodoList) -> ListDocument {
    ListDocument {
        title: Some(list.title().to_string()),
        todos: list
            .iter()
            .map(|todo| TodoDocument::from(&*todo.borrow()))
            .collect(),
    }
}

pub fn to_json(list: &TodoList) -> Result<String> {
    Ok(serde_json::to_string_pretty(&to_document(list))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const TODAY: &str = r#"{
        "title": "Today",
        "todos": [
            { "title": "Buy milk", "done": true },
            { "title": "Clean room", "description": "desk too", "due_date": "2023-01-06" }
        ]
    }"#;

    #[test]
    fn test_parse_list() {
        let list = parse_list(TODAY, &Config::default()).unwrap();
        assert_eq!(list.title(), "Today");
        assert_eq!(list.size(), 2);

        let second = list.item_at(1).unwrap();
        let second = second.borrow();
        assert_eq!(second.description, "desk too");
        assert!(!second.done);
        assert_eq!(second.due_date, NaiveDate::from_ymd_opt(2023, 1, 6));
        assert_eq!(
            list.render(),
            "# ---- Today ----\n[X] Buy milk\n[ ] Clean room (Due: Friday January 6)"
        );
    }

    #[test]
    fn test_missing_title_uses_config() {
        let config = Config {
            default_title: "Inbox".to_string(),
            ..Config::default()
        };
        let list = parse_list(r#"{"todos": []}"#, &config).unwrap();
        assert_eq!(list.title(), "Inbox");
        assert!(list.is_empty());
    }

    #[test]
    fn test_invalid_date() {
        let json = r#"{"todos": [{"title": "x", "due_date": "next friday"}]}"#;
        let result = parse_list(json, &Config::default());
        assert!(matches!(result, Err(TodoError::InvalidDate(ref s)) if s == "next friday"));
    }

    #[test]
    fn test_malformed_json() {
        let result = parse_list("{not json", &Config::default());
        assert!(matches!(result, Err(TodoError::Json(_))));
    }

    #[test]
    fn test_load_list_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(TODAY.as_bytes()).unwrap();

        let list = load_list(file.path(), &Config::default()).unwrap();
        assert_eq!(list.size(), 2);
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_list("/definitely/not/here.json", &Config::default());
        assert!(matches!(result, Err(TodoError::Io(_))));
    }

    #[test]
    fn test_export_reflects_mutations() {
        let mut list = parse_list(TODAY, &Config::default()).unwrap();
        list.mark_all_undone();
        list.remove_at(0).unwrap();

        let doc = to_document(&list);
        assert_eq!(doc.title.as_deref(), Some("Today"));
        assert_eq!(doc.todos.len(), 1);
        assert_eq!(doc.todos[0].title, "Clean room");
        assert_eq!(doc.todos[0].due_date.as_deref(), Some("2023-01-06"));

        let json = to_json(&list).unwrap();
        let reparsed = parse_list(&json, &Config::default()).unwrap();
        assert_eq!(reparsed.render(), list.render());
    }
}
