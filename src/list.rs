//! Ordered, mutable collection of todos.
//!
//! Items are held as [`SharedTodo`] handles. Lists derived through
//! [`TodoList::filter`] share those handles with their source, so marking an
//! item done in one list is visible in every list holding it.
//!
//! A `TodoList` is single-threaded (`Rc` based). Callers embedding it in a
//! concurrent host must wrap the whole list in their own lock.

use crate::due_date::{DueDateFormatter, StampFormatter};
use crate::error::{Result, TodoError};
use crate::todo::Todo;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use tracing::{debug, trace};

/// Handle to a todo that may be held by several lists at once.
pub type SharedTodo = Rc<RefCell<Todo>>;

/// An ordered collection of todos with a title
#[derive(Debug, Default)]
pub struct TodoList {
    title: String,
    todos: Vec<SharedTodo>,
}

impl TodoList {
    pub fn new(title: impl Into<String>) -> Self {
        TodoList {
            title: title.into(),
            todos: Vec::new(),
        }
    }

    /// Build a list from owned todos, preserving their order.
    pub fn with_items(title: impl Into<String>, items: impl IntoIterator<Item = Todo>) -> Self {
        let mut list = TodoList::new(title);
        for item in items {
            list.add(item);
        }
        list
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    // ==================== Insertion & Access ====================

    /// Append a todo to the end of the list.
    pub fn add(&mut self, task: Todo) -> &[SharedTodo] {
        self.add_shared(Rc::new(RefCell::new(task)))
    }

    /// Append an existing handle, sharing the todo with whoever else holds it.
    pub fn add_shared(&mut self, task: SharedTodo) -> &[SharedTodo] {
        debug!(list = %self.title, todo = %task.borrow().title, "adding todo");
        self.todos.push(task);
        &self.todos
    }

    pub fn size(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    pub fn first(&self) -> Option<SharedTodo> {
        self.todos.first().cloned()
    }

    pub fn last(&self) -> Option<SharedTodo> {
        self.todos.last().cloned()
    }

    /// Get the todo at a zero-based position.
    pub fn item_at(&self, position: usize) -> Result<SharedTodo> {
        self.todos
            .get(position)
            .cloned()
            .ok_or(TodoError::IndexOutOfBounds {
                position,
                size: self.todos.len(),
            })
    }

    pub fn mark_done_at(&mut self, position: usize) -> Result<()> {
        self.item_at(position)?.borrow_mut().mark_done();
        Ok(())
    }

    pub fn mark_undone_at(&mut self, position: usize) -> Result<()> {
        self.item_at(position)?.borrow_mut().mark_undone();
        Ok(())
    }

    // ==================== Removal ====================

    /// Remove and return the first todo.
    pub fn shift(&mut self) -> Option<SharedTodo> {
        if self.todos.is_empty() {
            return None;
        }
        let removed = self.todos.remove(0);
        debug!(list = %self.title, todo = %removed.borrow().title, "shifted todo");
        Some(removed)
    }

    /// Remove and return the last todo.
    pub fn pop(&mut self) -> Option<SharedTodo> {
        let removed = self.todos.pop()?;
        debug!(list = %self.title, todo = %removed.borrow().title, "popped todo");
        Some(removed)
    }

    /// Remove the todo at `position`. Equal todos elsewhere in the list are
    /// left alone.
    pub fn remove_at(&mut self, position: usize) -> Result<SharedTodo> {
        self.item_at(position)?;
        let removed = self.todos.remove(position);
        debug!(list = %self.title, position, todo = %removed.borrow().title, "removed todo");
        Ok(removed)
    }

    // ==================== Rendering ====================

    pub fn render(&self) -> String {
        self.render_with(&StampFormatter::default())
    }

    pub fn render_with(&self, formatter: &dyn DueDateFormatter) -> String {
        let mut text = format!("# ---- {} ----\n", self.title);
        let lines: Vec<String> = self
            .todos
            .iter()
            .map(|todo| todo.borrow().render_with(formatter))
            .collect();
        text.push_str(&lines.join("\n"));
        text
    }

    /// Copy of the item sequence. Reordering or truncating the copy leaves
    /// the list alone; the todos themselves are still shared.
    pub fn to_sequence(&self) -> Vec<SharedTodo> {
        self.todos.clone()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SharedTodo> {
        self.todos.iter()
    }

    // ==================== Bulk Status ====================

    pub fn mark_all_done(&mut self) {
        debug!(list = %self.title, count = self.todos.len(), "marking all done");
        self.for_each(Todo::mark_done);
    }

    pub fn mark_all_undone(&mut self) {
        debug!(list = %self.title, count = self.todos.len(), "marking all undone");
        self.for_each(Todo::mark_undone);
    }

    /// True when every todo is done. Vacuously true for an empty list.
    pub fn all_done(&self) -> bool {
        self.todos.iter().all(|todo| todo.borrow().is_done())
    }

    /// Visit each todo in order.
    ///
    /// The visitor gets each todo mutably borrowed in turn, so it must not
    /// borrow that same todo through another handle it captured.
    pub fn for_each<F>(&mut self, mut visitor: F) -> &mut Self
    where
        F: FnMut(&mut Todo),
    {
        for todo in &self.todos {
            visitor(&mut *todo.borrow_mut());
        }
        self
    }

    // ==================== Selection ====================

    /// New list with the same title holding the todos that match, in order.
    /// The source list is not modified and todos are shared, not cloned.
    pub fn filter<P>(&self, mut predicate: P) -> TodoList
    where
        P: FnMut(&Todo) -> bool,
    {
        let mut selected = TodoList::new(self.title.clone());
        for todo in &self.todos {
            if predicate(&*todo.borrow()) {
                selected.todos.push(Rc::clone(todo));
            }
        }
        trace!(list = %self.title, matched = selected.size(), total = self.size(), "filtered");
        selected
    }

    /// First todo whose title equals `title` exactly.
    pub fn find_by_title(&self, title: &str) -> Option<SharedTodo> {
        let found = self
            .todos
            .iter()
            .find(|todo| todo.borrow().title == title)
            .cloned();
        trace!(list = %self.title, title, found = found.is_some(), "find by title");
        found
    }

    /// Mark the first todo titled `title` as done. Returns whether a todo
    /// matched; no match is not an error.
    pub fn mark_done(&mut self, title: &str) -> bool {
        match self.find_by_title(title) {
            Some(todo) => {
                todo.borrow_mut().mark_done();
                true
            }
            None => false,
        }
    }

    pub fn all_done_items(&self) -> TodoList {
        self.filter(Todo::is_done)
    }

    pub fn all_not_done_items(&self) -> TodoList {
        self.filter(|todo| !todo.is_done())
    }
}

impl fmt::Display for TodoList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

impl<'a> IntoIterator for &'a TodoList {
    type Item = &'a SharedTodo;
    type IntoIter = std::slice::Iter<'a, SharedTodo>;

    fn into_iter(self) -> Self::IntoIter {
        self.todos.iter()
    }
}
