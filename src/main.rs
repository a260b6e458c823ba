use clap::Parser;
use ruiz::cli::{Cli, Commands};
use ruiz::models::error::AppError;
use ruiz::parser::command::parse_line;
use ruiz::parser::input::split_persisted_record;
use ruiz::storage::paths::{history_log_path, log_file_path, tasks_file_path};
use ruiz::{logging, repl};
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Load .env file from current directory
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    match log_file_path() {
        Ok(path) => {
            if let Err(e) = logging::init(&path) {
                eprintln!("warning: {}", AppError::from(e));
            }
        }
        Err(e) => eprintln!("warning: logging disabled: {}", e),
    }

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "command failed");
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode, AppError> {
    match cli.command {
        Some(Commands::Repl) | None => {
            let history = if cli.no_history {
                None
            } else {
                Some(history_log_path()?)
            };
            let stdin = io::stdin();
            repl::run(stdin.lock(), io::stdout().lock(), history.as_deref())?;
            Ok(ExitCode::SUCCESS)
        }
        Some(Commands::Parse { words, json }) => {
            let line = words.join(" ");
            match parse_line(line.trim()) {
                Ok(parsed) if json => {
                    println!("{}", serde_json::to_string(&parsed)?);
                    Ok(ExitCode::SUCCESS)
                }
                Ok(parsed) => {
                    println!("{}", parsed);
                    Ok(ExitCode::SUCCESS)
                }
                Err(err) => {
                    eprintln!("{}", repl::render_error(err));
                    Ok(ExitCode::FAILURE)
                }
            }
        }
        Some(Commands::Records { path, json }) => {
            let path = match path {
                Some(path) => path,
                None => tasks_file_path()?,
            };
            print_records(&path, json)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn print_records(path: &Path, json: bool) -> Result<(), AppError> {
    let content = fs::read_to_string(path)?;
    let records: Vec<Vec<&str>> = content
        .lines()
        .filter(|line| !line.is_empty())
        .map(split_persisted_record)
        .collect();
    tracing::info!(path = %path.display(), records = records.len(), "read persisted records");

    let mut out = io::stdout().lock();
    if json {
        writeln!(out, "{}", serde_json::to_string(&records)?)?;
    } else {
        for fields in &records {
            writeln!(out, "{}", fields.join("\t"))?;
        }
    }
    Ok(())
}
