//! Command grammar for the REPL demo.
//!
//! The REPL is the "binding layer" collaborator of the store: it turns
//! lines of input into dispatches and re-renders on notification. Text
//! trimming and the non-empty check live here, at the boundary, so the
//! action constructors can stay pure pass-throughs.

use thiserror::Error;

use crate::tasks::{Filter, ParseFilterError, TaskId};

/// One parsed line of REPL input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add { text: String },
    Toggle { id: TaskId },
    Delete { id: TaskId },
    Edit { id: TaskId, text: String },
    SetFilter { filter: Filter },
    List,
    Stats,
    Dump,
    Help,
    Quit,
}

/// Errors produced while parsing a line of input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown command '{0}', try 'help'")]
    Unknown(String),

    #[error("'{command}' needs {what}")]
    MissingArgument {
        command: &'static str,
        what: &'static str,
    },

    #[error("invalid id '{0}'")]
    InvalidId(String),

    #[error(transparent)]
    InvalidFilter(#[from] ParseFilterError),
}

/// One-screen usage summary for the `help` command.
pub const USAGE: &str = "\
commands:
  add <text>              append a new task
  toggle <id>             flip a task between pending and completed
  edit <id> <text>        replace a task's text
  rm <id>                 delete a task
  filter all|pending|completed
  list                    show tasks under the active filter
  stats                   totals
  dump                    current state as JSON
  quit";

impl Command {
    /// Parse one line of input. Blank lines parse to `Ok(None)`.
    pub fn parse(input: &str) -> Result<Option<Command>, CommandError> {
        let input = input.trim();
        let Some((word, rest)) = split_word(input) else {
            return Ok(None);
        };

        let command = match word.to_ascii_lowercase().as_str() {
            "add" => Command::Add {
                text: required_text("add", rest)?,
            },
            "toggle" | "done" => Command::Toggle {
                id: required_id("toggle", rest)?,
            },
            "rm" | "del" | "delete" => Command::Delete {
                id: required_id("rm", rest)?,
            },
            "edit" => {
                let (id_word, text) = split_word(rest).ok_or(CommandError::MissingArgument {
                    command: "edit",
                    what: "a task id and new text",
                })?;
                Command::Edit {
                    id: parse_id(id_word)?,
                    text: required_text("edit", text)?,
                }
            }
            "filter" => Command::SetFilter {
                filter: required_text("filter", rest)?.parse()?,
            },
            "list" | "ls" => Command::List,
            "stats" => Command::Stats,
            "dump" => Command::Dump,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };

        Ok(Some(command))
    }
}

/// Split off the first whitespace-delimited word; `None` on blank input.
fn split_word(input: &str) -> Option<(&str, &str)> {
    let input = input.trim_start();
    if input.is_empty() {
        return None;
    }
    match input.split_once(char::is_whitespace) {
        Some((word, rest)) => Some((word, rest.trim_start())),
        None => Some((input, "")),
    }
}

fn required_text(command: &'static str, rest: &str) -> Result<String, CommandError> {
    let text = rest.trim();
    if text.is_empty() {
        return Err(CommandError::MissingArgument {
            command,
            what: "non-empty text",
        });
    }
    Ok(text.to_string())
}

fn required_id(command: &'static str, rest: &str) -> Result<TaskId, CommandError> {
    let word = rest.trim();
    if word.is_empty() {
        return Err(CommandError::MissingArgument {
            command,
            what: "a task id",
        });
    }
    parse_id(word)
}

fn parse_id(word: &str) -> Result<TaskId, CommandError> {
    word.parse::<u64>()
        .map(TaskId::new)
        .map_err(|_| CommandError::InvalidId(word.to_string()))
}
