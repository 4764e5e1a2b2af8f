use thiserror::Error;

/// All possible errors in the todo service
#[derive(Error, Debug)]
pub enum TodoError {
    #[error("Todo #{0} not found")]
    TodoNotFound(i64),

    #[error("Todo title cannot be empty")]
    EmptyTitle,

    #[error("Todo store lock poisoned")]
    StorePoisoned,

    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("MCP error: {0}")]
    Mcp(String),
}

impl TodoError {
    /// Stable code used in HTTP and MCP error bodies
    pub fn error_code(&self) -> &'static str {
        match self {
            TodoError::TodoNotFound(_) => "TodoNotFound",
            TodoError::EmptyTitle => "EmptyTitle",
            TodoError::StorePoisoned => "StorePoisoned",
            TodoError::Db(_) => "DatabaseError",
            TodoError::Io(_) => "IoError",
            TodoError::Mcp(_) => "McpError",
        }
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, TodoError>;
