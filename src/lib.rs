//! todochat - a todo store driven by a rule-based chat interpreter.

pub mod cli;
pub mod cli_handlers;
pub mod db;
pub mod error;
pub mod interpreter;
pub mod mcp;
pub mod models;
pub mod server;
pub mod store;

pub use error::{Result, TodoError};
pub use interpreter::Interpreter;
pub use models::*;
pub use store::{MemoryStore, SharedStore, SqliteStore, StoreConfig, TodoStore};
