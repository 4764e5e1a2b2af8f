//! Todo storage backends.
//!
//! Every backend serializes its mutations behind a single lock so ids stay
//! unique and strictly increasing under concurrent callers.

use crate::db::Database;
use crate::error::{Result, TodoError};
use crate::models::Todo;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Ordered collection of todos with store-assigned ids
pub trait TodoStore: Send + Sync {
    /// Append a todo with a freshly allocated id
    fn create(&self, title: &str) -> Result<Todo>;

    /// All todos in creation order
    fn list(&self) -> Result<Vec<Todo>>;

    /// Remove the todo with `id`, returning whether one was removed
    fn delete(&self, id: i64) -> Result<bool>;
}

/// Shared handle injected into the interpreter and the servers
pub type SharedStore = Arc<dyn TodoStore>;

/// Which backend to open
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreConfig {
    Memory,
    Sqlite(PathBuf),
}

impl StoreConfig {
    pub fn open(&self) -> Result<SharedStore> {
        let store: SharedStore = match self {
            StoreConfig::Memory => Arc::new(MemoryStore::new()),
            StoreConfig::Sqlite(path) => Arc::new(SqliteStore::open(path)?),
        };
        Ok(store)
    }
}

#[derive(Debug)]
struct MemoryState {
    next_id: i64,
    todos: Vec<Todo>,
}

/// Process-local store; contents are lost on exit
#[derive(Debug)]
pub struct MemoryStore {
    state: Mutex<MemoryState>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(MemoryState {
                next_id: 1,
                todos: Vec::new(),
            }),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoStore for MemoryStore {
    fn create(&self, title: &str) -> Result<Todo> {
        let mut state = self.state.lock().map_err(|_| TodoError::StorePoisoned)?;
        let todo = Todo {
            id: state.next_id,
            title: title.to_string(),
            completed: false,
        };
        state.next_id += 1;
        state.todos.push(todo.clone());
        Ok(todo)
    }

    fn list(&self) -> Result<Vec<Todo>> {
        let state = self.state.lock().map_err(|_| TodoError::StorePoisoned)?;
        Ok(state.todos.clone())
    }

    fn delete(&self, id: i64) -> Result<bool> {
        let mut state = self.state.lock().map_err(|_| TodoError::StorePoisoned)?;
        let before = state.todos.len();
        state.todos.retain(|t| t.id != id);
        Ok(state.todos.len() != before)
    }
}

/// SQLite-backed store that survives restarts
pub struct SqliteStore {
    db: Mutex<Database>,
}

impl SqliteStore {
    /// Open (and initialize if needed) the database file at `path`
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let db = Database::open(path)?;
        db.init()?;
        Ok(Self { db: Mutex::new(db) })
    }

    pub fn open_in_memory() -> Result<Self> {
        let db = Database::open_in_memory()?;
        db.init()?;
        Ok(Self { db: Mutex::new(db) })
    }
}

impl TodoStore for SqliteStore {
    fn create(&self, title: &str) -> Result<Todo> {
        let db = self.db.lock().map_err(|_| TodoError::StorePoisoned)?;
        db.create_todo(title)
    }

    fn list(&self) -> Result<Vec<Todo>> {
        let db = self.db.lock().map_err(|_| TodoError::StorePoisoned)?;
        db.get_all_todos()
    }

    fn delete(&self, id: i64) -> Result<bool> {
        let db = self.db.lock().map_err(|_| TodoError::StorePoisoned)?;
        db.delete_todo(id)
    }
}
