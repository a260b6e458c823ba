use crate::models::error::ParseError;
use crate::parser::command::{Command, ParsedInput};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EventAction {
    Parsed,
    Rejected,
}

#[derive(Debug, Serialize)]
pub struct LogEvent {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub action: EventAction,
    pub command: Command,
    /// Parsed payload for `Parsed`, error kind name for `Rejected`.
    pub details: Value,
}

impl LogEvent {
    pub fn new(action: EventAction, command: Command, details: Value) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            action,
            command,
            details,
        }
    }

    /// Record the outcome of one `parse_line` call.
    pub fn from_outcome(command: Command, outcome: &Result<ParsedInput, ParseError>) -> Self {
        match outcome {
            Ok(parsed) => {
                let payload = serde_json::to_value(parsed)
                    .unwrap_or_else(|_| Value::String(parsed.to_string()));
                Self::new(EventAction::Parsed, command, payload)
            }
            Err(err) => Self::new(
                EventAction::Rejected,
                command,
                Value::String(err.kind_name().to_string()),
            ),
        }
    }
}

pub fn append_log(path: &Path, event: &LogEvent) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new().create(true).append(true).open(path)?;

    let json = serde_json::to_string(event)?;
    writeln!(file, "{}", json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::command::classify_and_parse;
    use serde_json::json;
    use std::fs;

    #[test]
    fn test_event_from_outcome() {
        let (command, outcome) = classify_and_parse("todo read book");
        let event = LogEvent::from_outcome(command, &outcome);
        assert_eq!(event.action, EventAction::Parsed);
        assert_eq!(event.command, Command::Todo);
        assert_eq!(
            event.details,
            json!({"command": "todo", "description": "read book"})
        );

        let (command, outcome) = classify_and_parse("mark x");
        let event = LogEvent::from_outcome(command, &outcome);
        assert_eq!(event.action, EventAction::Rejected);
        assert_eq!(event.command, Command::Mark);
        assert_eq!(event.details, json!("InvalidIndexFormat"));
    }

    #[test]
    fn test_parsed_details_keep_zero_based_index() {
        let (command, outcome) = classify_and_parse("mark 3");
        let event = LogEvent::from_outcome(command, &outcome);
        assert_eq!(event.details, json!({"command": "mark", "index": 2}));
    }

    #[test]
    fn test_append_writes_one_json_line_per_event() {
        let dir = std::env::temp_dir().join(format!("ruiz_log_test_{}", Uuid::new_v4()));
        let path = dir.join("history.jsonl");

        append_log(
            &path,
            &LogEvent::new(EventAction::Parsed, Command::List, json!({"command": "list"})),
        )
        .unwrap();
        append_log(
            &path,
            &LogEvent::new(EventAction::Rejected, Command::Find, json!("InvalidFindFormat")),
        )
        .unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<serde_json::Value> = content
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["action"], "Parsed");
        assert_eq!(lines[0]["command"], "list");
        assert_eq!(lines[0]["details"]["command"], "list");
        assert_eq!(lines[1]["action"], "Rejected");
        assert_eq!(lines[1]["details"], "InvalidFindFormat");

        let _ = fs::remove_dir_all(&dir);
    }
}
