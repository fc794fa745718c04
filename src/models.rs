//! Frontend Models
//!
//! View-model structs shared by the store and the components.

/// Task identifier, unique within one task list
pub type TaskId = u32;

/// A single to-do entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    pub completed: bool,
}

impl Task {
    pub fn new(id: TaskId, text: String) -> Self {
        Self {
            id,
            text,
            completed: false,
        }
    }
}

/// One person from the people-listing API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FollowerRecord {
    pub first_name: String,
    pub last_name: String,
    pub avatar_url: String,
    pub username: String,
}

impl FollowerRecord {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
