//! Minimal todo model, used as a source of selection items.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::history::Record;

/// Default category for new todos.
pub const DEFAULT_CATEGORY: &str = "default";

/// Priority of a todo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Priority {
    /// Can wait.
    Low,
    /// Normal priority.
    #[default]
    Medium,
    /// Do first.
    High,
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
        }
    }
}

/// A task on the user's todo list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    /// Unique identifier.
    pub id: String,
    /// Short title, shown as the selection item text.
    pub title: String,
    /// Longer free-form description.
    #[serde(default)]
    pub description: String,
    /// Whether the task is done.
    #[serde(default)]
    pub is_completed: bool,
    /// Task priority.
    #[serde(default)]
    pub priority: Priority,
    /// Grouping category.
    pub category: String,
    /// Creation time.
    pub created_at: DateTime<Utc>,
}

impl Todo {
    /// Create an open todo in the default category.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            description: String::new(),
            is_completed: false,
            priority: Priority::default(),
            category: DEFAULT_CATEGORY.to_string(),
            created_at: Utc::now(),
        }
    }

    /// Set the category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Set the priority.
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Mark the todo as completed.
    pub fn completed(mut self) -> Self {
        self.is_completed = true;
        self
    }
}

impl Record for Todo {
    fn record_id(&self) -> &str {
        &self.id
    }
}
