use crate::error::Result;
use crate::models::Todo;
use rusqlite::{Connection, Row};
use std::path::Path;

/// Database handle
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open database connection
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path)?;

        // Enable WAL mode for better concurrency
        conn.pragma_update(None, "journal_mode", "WAL")?;

        Ok(Database { conn })
    }

    /// Open a private in-memory database
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Database { conn })
    }

    /// Initialize the database schema
    pub fn init(&self) -> Result<()> {
        // AUTOINCREMENT keeps ids of deleted rows from being handed out again
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS todos (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL,
                completed BOOLEAN NOT NULL DEFAULT 0
            )",
            [],
        )?;
        Ok(())
    }

    pub fn create_todo(&self, title: &str) -> Result<Todo> {
        self.conn.execute(
            "INSERT INTO todos (title, completed) VALUES (?1, 0)",
            [title],
        )?;

        let id = self.conn.last_insert_rowid();
        Ok(Todo {
            id,
            title: title.to_string(),
            completed: false,
        })
    }

    pub fn get_all_todos(&self) -> Result<Vec<Todo>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, title, completed FROM todos ORDER BY id")?;

        let todos = stmt.query_map([], todo_from_row)?;
        todos
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| e.into())
    }

    /// Returns false when no row had `id`
    pub fn delete_todo(&self, id: i64) -> Result<bool> {
        let affected = self.conn.execute("DELETE FROM todos WHERE id = ?1", [id])?;
        Ok(affected > 0)
    }
}

fn todo_from_row(row: &Row) -> std::result::Result<Todo, rusqlite::Error> {
    Ok(Todo {
        id: row.get(0)?,
        title: row.get(1)?,
        completed: row.get(2)?,
    })
}
