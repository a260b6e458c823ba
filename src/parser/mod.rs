pub mod command;
pub mod input;

pub use command::{classify_and_parse, parse_line, Command, ParsedInput};
