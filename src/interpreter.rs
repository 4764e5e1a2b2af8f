//! Rule-based chat interpreter.
//!
//! A message is trimmed and lower-cased, then tested against [`rules`] in
//! order. The first rule that matches decides the intent; later rules are
//! never consulted.

use crate::error::Result;
use crate::models::{ChatReply, Intent, Todo};
use crate::store::SharedStore;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

const SHOW_PHRASES: &[&str] = &["show todos", "list todos", "get todos", "my todos"];

const GREETING_PHRASES: &[&str] = &[
    "hi",
    "hello",
    "hey",
    "greetings",
    "good morning",
    "good afternoon",
    "good evening",
];

const GREETING_REPLY: &str = "👋 Hello! I'm your Todo Assistant. I can help you manage your todos. Try:\n\
                              • 'Add todo: buy milk'\n\
                              • 'Show todos'\n\
                              • 'Delete todo 1'";

const HELP_REPLY: &str = "🤖 I'm your Todo Assistant! Here's what I can do:\n\
                          • 'Add todo: <task>' - Add a new todo\n\
                          • 'Show todos' - View all your todos\n\
                          • 'Delete todo <id>' - Delete a todo by ID\n\
                          • Say 'Hi' for a greeting";

const UNKNOWN_REPLY: &str = "🤔 I'm not sure I understand. Try one of these commands:\n\
                             • 'Add todo: buy milk'\n\
                             • 'Show todos'\n\
                             • 'Delete todo 1'\n\
                             • Or just say 'Hi'!";

const EMPTY_LIST_REPLY: &str = "📋 You have no todos yet. Add one by saying: 'Add todo: buy milk'";

/// How a rule recognizes a normalized message
#[derive(Debug)]
pub enum Matcher {
    /// Regex anchored at the start; group 1 is the argument
    Pattern(Regex),
    /// Whole message equals one of the phrases
    Exact(&'static [&'static str]),
    /// Message contains the fragment anywhere
    Contains(&'static str),
    /// Matches everything
    Fallback,
}

/// One entry of the dispatch table
#[derive(Debug)]
pub struct Rule {
    pub intent: Intent,
    pub matcher: Matcher,
}

impl Rule {
    /// Returns `None` when the rule does not apply, otherwise the captured
    /// argument (if the matcher has one).
    pub fn matches<'m>(&self, message: &'m str) -> Option<Option<&'m str>> {
        match &self.matcher {
            Matcher::Pattern(re) => re
                .captures(message)
                .map(|caps| caps.get(1).map(|m| m.as_str())),
            Matcher::Exact(phrases) => phrases.iter().any(|p| *p == message).then_some(None),
            Matcher::Contains(fragment) => message.contains(fragment).then_some(None),
            Matcher::Fallback => Some(None),
        }
    }
}

static RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    vec![
        Rule {
            intent: Intent::Add,
            matcher: Matcher::Pattern(
                Regex::new(r"^add todo[:\s]+(.+)").expect("valid add regex"),
            ),
        },
        Rule {
            intent: Intent::Show,
            matcher: Matcher::Exact(SHOW_PHRASES),
        },
        // ASCII digits only: Unicode digits such as "١" fall through to later rules
        Rule {
            intent: Intent::Delete,
            matcher: Matcher::Pattern(
                Regex::new(r"^delete todo[:\s]+([0-9]+)").expect("valid delete regex"),
            ),
        },
        Rule {
            intent: Intent::Greeting,
            matcher: Matcher::Exact(GREETING_PHRASES),
        },
        Rule {
            intent: Intent::Help,
            matcher: Matcher::Contains("help"),
        },
        Rule {
            intent: Intent::Unknown,
            matcher: Matcher::Fallback,
        },
    ]
});

/// The dispatch table, in evaluation order
pub fn rules() -> &'static [Rule] {
    &RULES
}

/// Outcome of classifying a message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub intent: Intent,
    pub argument: Option<String>,
}

/// Classify a raw message without touching any store
pub fn classify(message: &str) -> Classification {
    let normalized = message.trim().to_lowercase();

    for rule in rules() {
        if let Some(argument) = rule.matches(&normalized) {
            return Classification {
                intent: rule.intent,
                argument: argument.map(|a| a.trim().to_string()),
            };
        }
    }

    // The table ends with a fallback rule
    Classification {
        intent: Intent::Unknown,
        argument: None,
    }
}

/// Maps chat messages onto store operations
#[derive(Clone)]
pub struct Interpreter {
    store: SharedStore,
}

impl Interpreter {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &SharedStore {
        &self.store
    }

    /// Interpret one message. Every input yields a reply; errors come only
    /// from the storage backend.
    pub fn interpret(&self, message: &str) -> Result<ChatReply> {
        let Classification { intent, argument } = classify(message);
        debug!(intent = %intent, "classified chat message");

        let response = match intent {
            Intent::Add => self.add(argument.as_deref().unwrap_or_default())?,
            Intent::Show => self.show()?,
            Intent::Delete => self.delete(argument.as_deref().unwrap_or_default())?,
            Intent::Greeting => GREETING_REPLY.to_string(),
            Intent::Help => HELP_REPLY.to_string(),
            Intent::Unknown => UNKNOWN_REPLY.to_string(),
        };

        Ok(ChatReply::new(response, intent))
    }

    fn add(&self, title: &str) -> Result<String> {
        let todo = self.store.create(title)?;
        Ok(format!(
            "✅ Todo added successfully! (ID: {}): {}",
            todo.id, todo.title
        ))
    }

    fn show(&self) -> Result<String> {
        let todos = self.store.list()?;
        if todos.is_empty() {
            return Ok(EMPTY_LIST_REPLY.to_string());
        }
        Ok(format!("📋 Your todos:\n{}", format_todo_lines(&todos)))
    }

    fn delete(&self, digits: &str) -> Result<String> {
        // Digit runs too long for i64 cannot name a stored todo
        let Ok(id) = digits.parse::<i64>() else {
            return Ok(not_found_reply(strip_leading_zeros(digits)));
        };

        if self.store.delete(id)? {
            Ok(format!("✅ Todo {id} deleted successfully!"))
        } else {
            Ok(not_found_reply(&id.to_string()))
        }
    }
}

fn strip_leading_zeros(digits: &str) -> &str {
    let stripped = digits.trim_start_matches('0');
    if stripped.is_empty() { "0" } else { stripped }
}

fn not_found_reply(id: &str) -> String {
    format!("❌ Todo with ID {id} not found.")
}

/// One line per todo: `  {id}. {title} {✓ or blank}`
pub fn format_todo_lines(todos: &[Todo]) -> String {
    todos
        .iter()
        .map(|t| format!("  {}. {} {}", t.id, t.title, t.icon()))
        .collect::<Vec<_>>()
        .join("\n")
}
