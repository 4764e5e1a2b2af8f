use clap::Parser;
use std::process;
use todochat::Interpreter;
use todochat::cli::{Cli, Commands};
use todochat::cli_handlers;
use todochat::mcp::run_mcp_server;
use todochat::server;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // stdout belongs to command output and the MCP transport
    let default_filter = if cli.verbose { "todochat=debug" } else { "todochat=info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let store = match cli.store_config().open() {
        Ok(store) => store,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Add { title } => cli_handlers::handle_add(store.as_ref(), &title),
        Commands::List => cli_handlers::handle_list(store.as_ref()),
        Commands::Delete { id } => cli_handlers::handle_delete(store.as_ref(), id),
        Commands::Chat { message } => {
            cli_handlers::handle_chat(&Interpreter::new(store), &message)
        }
        Commands::Serve { listen } => {
            if let Err(e) = server::serve(listen, Interpreter::new(store)).await {
                eprintln!("Server error: {e:#}");
                process::exit(1);
            }
            return;
        }
        Commands::Mcp => run_mcp_server(Interpreter::new(store)).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
