use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ruiz")]
#[command(about = "Ruiz - a task-tracking assistant driven by one-line commands", long_about = None)]
pub struct Cli {
    /// Do not append parsed lines to the history log
    #[arg(long, global = true)]
    pub no_history: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Read commands from stdin until `bye` (default)
    Repl,

    /// Parse a single command line
    Parse {
        /// The command line, e.g. deadline submit report /by friday
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, required = true)]
        words: Vec<String>,

        /// Print the parsed command as JSON
        #[arg(long)]
        json: bool,
    },

    /// Split a saved task file into its ` | ` separated fields
    Records {
        /// Task file (defaults to tasks.txt in the data directory)
        path: Option<PathBuf>,

        /// Print the records as a JSON array of arrays
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_joins_trailing_words() {
        let cli = Cli::parse_from(["ruiz", "parse", "--json", "event", "trip", "/from", "mon"]);
        match cli.command {
            Some(Commands::Parse { words, json }) => {
                assert!(json);
                assert_eq!(words.join(" "), "event trip /from mon");
            }
            _ => panic!("Expected Parse command"),
        }
    }

    #[test]
    fn test_no_subcommand_means_repl() {
        let cli = Cli::parse_from(["ruiz", "--no-history"]);
        assert!(cli.no_history);
        assert!(cli.command.is_none());
    }
}
