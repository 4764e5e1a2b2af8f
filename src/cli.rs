use crate::store::StoreConfig;
use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "todochat")]
#[command(about = "Todo list with a chat interpreter")]
#[command(version)]
pub struct Cli {
    /// SQLite database file
    #[arg(long, global = true, env = "TODOCHAT_DB", default_value = "todos.db")]
    pub db: PathBuf,

    /// Keep todos in memory only (nothing is written to disk)
    #[arg(long, global = true)]
    pub memory: bool,

    /// Debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn store_config(&self) -> StoreConfig {
        if self.memory {
            StoreConfig::Memory
        } else {
            StoreConfig::Sqlite(self.db.clone())
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a new todo
    Add {
        /// Todo title
        title: String,
    },

    /// List todos
    List,

    /// Delete a todo
    Delete {
        /// Todo ID
        id: i64,
    },

    /// Talk to the assistant; without a message, start an interactive session
    Chat {
        /// Message words
        message: Vec<String>,
    },

    /// Run the HTTP API
    Serve {
        /// Address to listen on
        #[arg(long, env = "TODOCHAT_LISTEN", default_value = "127.0.0.1:8000")]
        listen: SocketAddr,
    },

    /// Start MCP server (stdio)
    Mcp,
}
