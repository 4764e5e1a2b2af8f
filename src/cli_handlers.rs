use crate::error::{Result, TodoError};
use crate::interpreter::Interpreter;
use crate::store::TodoStore;
use std::io::{BufRead, Write};

const QUIT_WORDS: &[&str] = &["quit", "exit", "bye"];

/// Handle the add command
pub fn handle_add(store: &dyn TodoStore, title: &str) -> Result<()> {
    if title.trim().is_empty() {
        return Err(TodoError::EmptyTitle);
    }
    let todo = store.create(title)?;
    println!("Created todo #{}: {}", todo.id, todo.title);
    Ok(())
}

/// Handle the list command
pub fn handle_list(store: &dyn TodoStore) -> Result<()> {
    let todos = store.list()?;
    if todos.is_empty() {
        println!("No todos yet");
        return Ok(());
    }
    for todo in &todos {
        let mark = if todo.completed { "x" } else { " " };
        println!("[{mark}] #{} {}", todo.id, todo.title);
    }
    Ok(())
}

/// Handle the delete command
pub fn handle_delete(store: &dyn TodoStore, id: i64) -> Result<()> {
    if !store.delete(id)? {
        return Err(TodoError::TodoNotFound(id));
    }
    println!("Deleted todo #{id}");
    Ok(())
}

/// Handle the chat command: one message, or an interactive session on stdin
pub fn handle_chat(interpreter: &Interpreter, message: &[String]) -> Result<()> {
    if message.is_empty() {
        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        return run_chat_loop(interpreter, stdin.lock(), stdout.lock());
    }

    let reply = interpreter.interpret(&message.join(" "))?;
    println!("{}", reply.response);
    Ok(())
}

/// Read messages line by line until EOF or a quit word, printing each reply
pub fn run_chat_loop<R: BufRead, W: Write>(
    interpreter: &Interpreter,
    input: R,
    mut output: W,
) -> Result<()> {
    writeln!(output, "Todo assistant ready. Type 'quit' to leave.")?;

    for line in input.lines() {
        let line = line?;
        let message = line.trim();
        if message.is_empty() {
            continue;
        }
        let lowered = message.to_lowercase();
        if QUIT_WORDS.iter().any(|w| *w == lowered) {
            break;
        }

        let reply = interpreter.interpret(message)?;
        writeln!(output, "{}", reply.response)?;
    }

    writeln!(output, "Goodbye!")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use std::io::Cursor;
    use std::sync::Arc;

    fn run(input: &str) -> (Interpreter, String) {
        let interpreter = Interpreter::new(Arc::new(MemoryStore::new()));
        let mut out = Vec::new();
        run_chat_loop(&interpreter, Cursor::new(input.to_string()), &mut out).unwrap();
        (interpreter, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_chat_loop_replies_per_line() {
        let (interpreter, out) = run("add todo: walk dog\n\nshow todos\n");
        assert!(out.contains("(ID: 1): walk dog"));
        assert!(out.contains("  1. walk dog"));
        assert!(out.ends_with("Goodbye!\n"));
        assert_eq!(interpreter.store().list().unwrap().len(), 1);
    }

    #[test]
    fn test_chat_loop_stops_at_quit_word() {
        let (interpreter, out) = run("add todo: a\nBye\nadd todo: b\n");
        assert_eq!(interpreter.store().list().unwrap().len(), 1);
        assert!(!out.contains("(ID: 2)"));
    }

    #[test]
    fn test_delete_missing_is_error() {
        let store = MemoryStore::new();
        let err = handle_delete(&store, 5).unwrap_err();
        assert!(matches!(err, TodoError::TodoNotFound(5)));
    }

    #[test]
    fn test_add_rejects_blank_title() {
        let store = MemoryStore::new();
        assert!(matches!(handle_add(&store, "   "), Err(TodoError::EmptyTitle)));
        assert!(store.list().unwrap().is_empty());
    }
}
