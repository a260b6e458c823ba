use std::io::{self, BufRead, Write};
use std::path::Path;

use tracing::{info, warn};

use crate::models::log::{append_log, LogEvent};
use crate::parser::command::{classify_and_parse, Command, ParsedInput};

const GREETING: &str = "Hello! I'm Ruiz. What can I do for you?";
const FAREWELL: &str = "Bye. Hope to see you again soon!";

/// Prefix for every rejected line.
pub const ERROR_PREFIX: &str = "OOPS!!!";

pub fn render_error(message: impl std::fmt::Display) -> String {
    format!("{} {}", ERROR_PREFIX, message)
}

fn acknowledge(parsed: &ParsedInput) -> String {
    match parsed {
        ParsedInput::Unknown { .. } => {
            let keywords: Vec<&str> = Command::KNOWN.iter().filter_map(Command::keyword).collect();
            render_error(format!(
                "I don't know what that means. Try one of: {}",
                keywords.join(", ")
            ))
        }
        other => format!("Got it: {}", other),
    }
}

/// Read lines from `input` until `bye` or end of input, answering each on `output`.
/// When `history` is set every line is also appended to that JSONL file.
pub fn run<R: BufRead, W: Write>(input: R, mut output: W, history: Option<&Path>) -> io::Result<()> {
    info!("session started");
    writeln!(output, "{}", GREETING)?;

    let mut handled = 0usize;
    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        handled += 1;

        let (command, outcome) = classify_and_parse(line);
        if let Some(path) = history {
            let event = LogEvent::from_outcome(command, &outcome);
            if let Err(e) = append_log(path, &event) {
                warn!(error = %e, path = %path.display(), "failed to append history");
            }
        }

        match outcome {
            Ok(ParsedInput::Bye) => break,
            Ok(parsed) => writeln!(output, "{}", acknowledge(&parsed))?,
            Err(err) => writeln!(output, "{}", render_error(err))?,
        }
    }

    writeln!(output, "{}", FAREWELL)?;
    info!(lines = handled, "session ended");
    Ok(())
}
