//! Chat scenarios run against every store backend.

use std::sync::Arc;
use tempfile::TempDir;
use todochat::{Intent, Interpreter, MemoryStore, SharedStore, SqliteStore};

fn backends() -> Vec<(&'static str, SharedStore, Option<TempDir>)> {
    let temp = TempDir::new().unwrap();
    let memory: SharedStore = Arc::new(MemoryStore::new());
    let sqlite: SharedStore = Arc::new(SqliteStore::open(temp.path().join("todos.db")).unwrap());
    vec![("memory", memory, None), ("sqlite", sqlite, Some(temp))]
}

#[test]
fn test_add_show_delete_scenario() {
    for (name, store, _guard) in backends() {
        let bot = Interpreter::new(store.clone());

        let reply = bot.interpret("Add todo: buy milk").unwrap();
        assert_eq!(reply.action, Intent::Add, "{name}");
        assert!(reply.response.contains('1'), "{name}");
        assert!(reply.response.contains("buy milk"), "{name}");

        let todos = store.list().unwrap();
        assert_eq!(todos.len(), 1, "{name}");
        assert_eq!(todos[0].id, 1, "{name}");
        assert_eq!(todos[0].title, "buy milk", "{name}");
        assert!(!todos[0].completed, "{name}");

        let reply = bot.interpret("Show todos").unwrap();
        assert_eq!(reply.action, Intent::Show, "{name}");
        let lines: Vec<_> = reply.response.lines().skip(1).collect();
        assert_eq!(lines.len(), 1, "{name}");
        assert!(lines[0].contains("1. buy milk"), "{name}");

        let reply = bot.interpret("Delete todo 1").unwrap();
        assert_eq!(reply.action, Intent::Delete, "{name}");
        assert!(reply.response.contains("deleted successfully"), "{name}");
        assert!(store.list().unwrap().is_empty(), "{name}");

        let reply = bot.interpret("Delete todo 1").unwrap();
        assert_eq!(reply.action, Intent::Delete, "{name}");
        assert!(reply.response.contains("not found"), "{name}");
    }
}

#[test]
fn test_every_add_grows_store_by_one() {
    for (name, store, _guard) in backends() {
        let bot = Interpreter::new(store.clone());
        let messages = [
            "add todo: first",
            "ADD TODO second",
            "add todo:third item  ",
            "  add todo   fourth",
        ];
        for (i, message) in messages.iter().enumerate() {
            let reply = bot.interpret(message).unwrap();
            assert_eq!(reply.action, Intent::Add, "{name}: {message}");
            assert_eq!(store.list().unwrap().len(), i + 1, "{name}: {message}");
            assert!(
                reply.response.contains(&format!("(ID: {})", i + 1)),
                "{name}: {message}"
            );
        }
        let titles: Vec<_> = store.list().unwrap().into_iter().map(|t| t.title).collect();
        assert_eq!(titles, vec!["first", "second", "third item", "fourth"], "{name}");
    }
}

#[test]
fn test_show_synonyms_list_each_todo_once_in_order() {
    for (name, store, _guard) in backends() {
        let bot = Interpreter::new(store.clone());
        bot.interpret("add todo: alpha").unwrap();
        bot.interpret("add todo: beta").unwrap();
        bot.interpret("add todo: gamma").unwrap();
        bot.interpret("delete todo 2").unwrap();

        for phrase in ["show todos", "List Todos", "GET TODOS", "my todos"] {
            let reply = bot.interpret(phrase).unwrap();
            assert_eq!(reply.action, Intent::Show, "{name}: {phrase}");
            assert_eq!(
                reply.response,
                "📋 Your todos:\n  1. alpha \n  3. gamma ",
                "{name}: {phrase}"
            );
        }
    }
}

#[test]
fn test_missing_delete_leaves_store_unchanged() {
    for (name, store, _guard) in backends() {
        let bot = Interpreter::new(store.clone());
        bot.interpret("add todo: keep me").unwrap();

        let reply = bot.interpret("delete todo: 42").unwrap();
        assert_eq!(reply.action, Intent::Delete, "{name}");
        assert_eq!(reply.response, "❌ Todo with ID 42 not found.", "{name}");
        assert_eq!(store.list().unwrap().len(), 1, "{name}");
    }
}

#[test]
fn test_case_permutations_classify_identically() {
    let bot = Interpreter::new(Arc::new(MemoryStore::new()));
    for (lower, variants) in [
        ("hi", vec!["HI", "Hi", "hI"]),
        ("good morning", vec!["Good Morning", "GOOD MORNING"]),
        ("show todos", vec!["Show Todos", "SHOW todos"]),
    ] {
        let expected = bot.interpret(lower).unwrap();
        for variant in variants {
            assert_eq!(bot.interpret(variant).unwrap(), expected, "{variant}");
        }
    }
}

#[test]
fn test_unmatched_text_is_unknown() {
    let bot = Interpreter::new(Arc::new(MemoryStore::new()));
    let empty = bot.interpret("").unwrap();
    assert_eq!(empty.action, Intent::Unknown);
    for message in ["what's up", "add something", "delete todo", "show todo", "hi there"] {
        assert_eq!(bot.interpret(message).unwrap(), empty, "{message}");
    }
}

#[test]
fn test_help_substring_after_other_rules() {
    let bot = Interpreter::new(Arc::new(MemoryStore::new()));
    assert_eq!(bot.interpret("I need HELP").unwrap().action, Intent::Help);
    assert_eq!(bot.interpret("add todo: help me").unwrap().action, Intent::Add);
}
