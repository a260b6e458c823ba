use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::models::error::ParseError;
use crate::parser::input::{
    classify, extract_deadline, extract_event, extract_keyword, extract_task_index, extract_todo,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Command {
    Bye,
    List,
    Mark,
    Unmark,
    Delete,
    Deadline,
    Todo,
    Event,
    Find,
    Unknown,
}

impl Command {
    /// Every command that has a keyword, in help order.
    pub const KNOWN: [Command; 9] = [
        Command::Todo,
        Command::Deadline,
        Command::Event,
        Command::List,
        Command::Mark,
        Command::Unmark,
        Command::Delete,
        Command::Find,
        Command::Bye,
    ];

    /// Look up an already lower-cased keyword.
    pub fn from_keyword(keyword: &str) -> Self {
        match keyword {
            "bye" => Command::Bye,
            "list" => Command::List,
            "mark" => Command::Mark,
            "unmark" => Command::Unmark,
            "delete" => Command::Delete,
            "deadline" => Command::Deadline,
            "todo" => Command::Todo,
            "event" => Command::Event,
            "find" => Command::Find,
            _ => Command::Unknown,
        }
    }

    pub fn keyword(&self) -> Option<&'static str> {
        match self {
            Command::Bye => Some("bye"),
            Command::List => Some("list"),
            Command::Mark => Some("mark"),
            Command::Unmark => Some("unmark"),
            Command::Delete => Some("delete"),
            Command::Deadline => Some("deadline"),
            Command::Todo => Some("todo"),
            Command::Event => Some("event"),
            Command::Find => Some("find"),
            Command::Unknown => None,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.keyword().unwrap_or("unknown"))
    }
}

/// A classified line together with the fields its command needs.
/// Task indices are zero-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum ParsedInput {
    Bye,
    List,
    Mark { index: usize },
    Unmark { index: usize },
    Delete { index: usize },
    Todo { description: String },
    Deadline { description: String, by: String },
    Event { description: String, from: String, to: String },
    Find { keyword: String },
    Unknown { raw: String },
}

impl ParsedInput {
    pub fn command(&self) -> Command {
        match self {
            ParsedInput::Bye => Command::Bye,
            ParsedInput::List => Command::List,
            ParsedInput::Mark { .. } => Command::Mark,
            ParsedInput::Unmark { .. } => Command::Unmark,
            ParsedInput::Delete { .. } => Command::Delete,
            ParsedInput::Todo { .. } => Command::Todo,
            ParsedInput::Deadline { .. } => Command::Deadline,
            ParsedInput::Event { .. } => Command::Event,
            ParsedInput::Find { .. } => Command::Find,
            ParsedInput::Unknown { .. } => Command::Unknown,
        }
    }
}

impl fmt::Display for ParsedInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let command = self.command();
        match self {
            ParsedInput::Bye | ParsedInput::List => write!(f, "{}", command),
            ParsedInput::Mark { index }
            | ParsedInput::Unmark { index }
            | ParsedInput::Delete { index } => write!(f, "{}: task {}", command, index + 1),
            ParsedInput::Todo { description } => write!(f, "{}: {}", command, description),
            ParsedInput::Deadline { description, by } => {
                write!(f, "{}: {} (by: {})", command, description, by)
            }
            ParsedInput::Event {
                description,
                from,
                to,
            } => write!(f, "{}: {} (from: {} to: {})", command, description, from, to),
            ParsedInput::Find { keyword } => write!(f, "{}: {}", command, keyword),
            ParsedInput::Unknown { raw } => write!(f, "unknown command: {}", raw),
        }
    }
}

/// Classify `line` and pull out the fields for its command.
pub fn parse_line(line: &str) -> Result<ParsedInput, ParseError> {
    classify_and_parse(line).1
}

/// Like [`parse_line`], but also hands back the command tag, which a
/// rejected line would otherwise lose.
pub fn classify_and_parse(line: &str) -> (Command, Result<ParsedInput, ParseError>) {
    let command = classify(line);
    let parsed = match command {
        Command::Bye => Ok(ParsedInput::Bye),
        Command::List => Ok(ParsedInput::List),
        Command::Mark => extract_task_index(line).map(|index| ParsedInput::Mark { index }),
        Command::Unmark => extract_task_index(line).map(|index| ParsedInput::Unmark { index }),
        Command::Delete => extract_task_index(line).map(|index| ParsedInput::Delete { index }),
        Command::Todo => extract_todo(line).map(|description| ParsedInput::Todo { description }),
        Command::Deadline => {
            extract_deadline(line).map(|(description, by)| ParsedInput::Deadline { description, by })
        }
        Command::Event => extract_event(line).map(|(description, from, to)| ParsedInput::Event {
            description,
            from,
            to,
        }),
        Command::Find => extract_keyword(line).map(|keyword| ParsedInput::Find { keyword }),
        Command::Unknown => Ok(ParsedInput::Unknown {
            raw: line.to_string(),
        }),
    };

    match &parsed {
        Ok(_) => debug!(%command, "parsed input line"),
        Err(err) => debug!(%command, kind = err.kind_name(), "rejected input line"),
    }
    (command, parsed)
}
