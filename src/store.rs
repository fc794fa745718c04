//! To-do State Store
//!
//! `TaskList` is the plain ordered container; `TodoState` wraps it in a
//! reactive_stores `Store` that the to-do view tree receives via context.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Task, TaskId};

/// Ordered, in-memory collection of tasks.
///
/// Invalid input is ignored: `add` with blank text and `toggle` with an
/// unknown id leave the list untouched.
#[derive(Clone, Debug, PartialEq)]
pub struct TaskList {
    tasks: Vec<Task>,
    next_id: TaskId,
}

impl Default for TaskList {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskList {
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 1,
        }
    }

    /// Append a task with the trimmed text. Returns the new id, or `None`
    /// when the text is blank.
    pub fn add(&mut self, text: &str) -> Option<TaskId> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let id = self.next_id;
        self.next_id += 1;
        self.tasks.push(Task::new(id, text.to_string()));
        Some(id)
    }

    /// Flip the completed flag. Returns `false` if no task has this id.
    pub fn toggle(&mut self, id: TaskId) -> bool {
        match self.tasks.iter_mut().find(|task| task.id == id) {
            Some(task) => {
                task.completed = !task.completed;
                true
            }
            None => false,
        }
    }

    pub fn incomplete_count(&self) -> usize {
        self.incomplete().count()
    }

    /// Tasks still open, in display order
    pub fn incomplete(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter().filter(|task| !task.completed)
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }
}

/// State of the to-do view with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct TodoState {
    pub tasks: TaskList,
}

/// Type alias for the store
pub type TodoStore = Store<TodoState>;

/// Get the to-do store from context
pub fn use_todo_store() -> TodoStore {
    expect_context::<TodoStore>()
}
