use crate::models::error::ParseError;
use crate::parser::command::Command;

const BY_DELIMITER: &str = " /by ";
const FROM_MARKER: &str = " /from";
const FROM_DELIMITER: &str = " /from ";
const TO_DELIMITER: &str = "/to ";
const FIELD_DELIMITER: &str = " | ";

/// Split on `delimiter`, dropping trailing empty pieces but always keeping
/// the first one.
fn split_fields<'a>(line: &'a str, delimiter: &str) -> Vec<&'a str> {
    let mut fields: Vec<&str> = line.split(delimiter).collect();
    while fields.len() > 1 && fields.last().is_some_and(|f| f.is_empty()) {
        fields.pop();
    }
    fields
}

/// Single-space tokens. `"find  book"` keeps its empty middle token,
/// `"find book "` does not grow a trailing one.
fn words(line: &str) -> Vec<&str> {
    split_fields(line, " ")
}

/// Everything after the first space, i.e. the line minus its keyword.
fn after_keyword(line: &str) -> Option<&str> {
    line.split_once(' ').map(|(_, rest)| rest)
}

/// Pick the command a line asks for. Only the first token is looked at,
/// and only that token is lower-cased.
pub fn classify(line: &str) -> Command {
    match words(line).first() {
        Some(first) => Command::from_keyword(&first.to_lowercase()),
        None => Command::Unknown,
    }
}

/// `todo <description>`
pub fn extract_todo(line: &str) -> Result<String, ParseError> {
    after_keyword(line)
        .map(str::to_string)
        .ok_or(ParseError::EmptyDescription)
}

/// `deadline <description> /by <time>`
///
/// Returns `(description, by)`. The delimiter must have a space on both
/// sides; `submit/by friday` is malformed.
pub fn extract_deadline(line: &str) -> Result<(String, String), ParseError> {
    let rest = after_keyword(line).ok_or(ParseError::MalformedDeadline)?;
    let mut segments = rest.split(BY_DELIMITER);
    let description = segments.next().ok_or(ParseError::MalformedDeadline)?;
    let by = segments
        .next()
        .filter(|by| !by.is_empty())
        .ok_or(ParseError::MalformedDeadline)?;
    Ok((description.to_string(), by.to_string()))
}

/// `event <description> /from <start> /to <end>`
///
/// Returns `(description, from, to)`.
pub fn extract_event(line: &str) -> Result<(String, String, String), ParseError> {
    if line.matches('/').count() < 2 {
        return Err(ParseError::MalformedEvent);
    }
    let rest = after_keyword(line).ok_or(ParseError::MalformedEvent)?;

    let description = rest.split(FROM_MARKER).next().unwrap_or_default();
    let span = rest
        .split(FROM_DELIMITER)
        .nth(1)
        .filter(|span| !span.is_empty())
        .ok_or(ParseError::MalformedEvent)?;
    let from = span.split(" /").next().unwrap_or_default();
    let to = span
        .split(TO_DELIMITER)
        .nth(1)
        .filter(|to| !to.is_empty())
        .ok_or(ParseError::MalformedEvent)?;

    Ok((description.to_string(), from.to_string(), to.to_string()))
}

/// `find <keyword>`, exactly one search term.
pub fn extract_keyword(line: &str) -> Result<String, ParseError> {
    match words(line).as_slice() {
        [_, keyword] => Ok((*keyword).to_string()),
        _ => Err(ParseError::InvalidFindFormat),
    }
}

/// `mark|unmark|delete <n>` where `n` is one-based. Returns the zero-based index.
///
/// `n` must fit a 32-bit signed integer; anything wider is not an index.
pub fn extract_task_index(line: &str) -> Result<usize, ParseError> {
    let tokens = words(line);
    let raw = tokens.get(1).ok_or(ParseError::EmptyIndex)?;
    let number: i32 = raw.parse().map_err(|_| ParseError::InvalidIndexFormat)?;
    number
        .checked_sub(1)
        .and_then(|zero_based| usize::try_from(zero_based).ok())
        .ok_or(ParseError::IndexOutOfRange)
}

/// Split one saved task line into its fields. No validation; a short line
/// just yields fewer fields.
pub fn split_persisted_record(line: &str) -> Vec<&str> {
    split_fields(line, FIELD_DELIMITER)
}
