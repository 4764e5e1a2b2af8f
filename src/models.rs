use serde::{Deserialize, Serialize};
use std::fmt;

/// A todo in the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub completed: bool,
}

impl Todo {
    pub fn icon(&self) -> &'static str {
        if self.completed { "✓" } else { "" }
    }
}

/// New todo input
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewTodo {
    pub title: String,
}

/// Category a chat message was classified into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Add,
    Show,
    Delete,
    Greeting,
    Help,
    Unknown,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Add => "add",
            Intent::Show => "show",
            Intent::Delete => "delete",
            Intent::Greeting => "greeting",
            Intent::Help => "help",
            Intent::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Reply produced by the interpreter
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatReply {
    pub response: String,
    pub action: Intent,
}

impl ChatReply {
    pub fn new(response: impl Into<String>, action: Intent) -> Self {
        Self {
            response: response.into(),
            action,
        }
    }
}
