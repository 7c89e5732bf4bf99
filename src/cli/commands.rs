//! Commands accepted at the shell prompt
//!
//! Each input line is parsed with clap in multicall mode, so the first word
//! names the command.

use clap::{Parser, Subcommand};

use crate::export::ExportFormat;
use crate::models::FinanceId;

/// One line typed at the prompt
#[derive(Parser, Debug)]
#[command(multicall = true, disable_help_subcommand = true)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: ShellCommand,
}

/// Shell subcommands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum ShellCommand {
    /// List all records with totals
    #[command(alias = "ls")]
    List,
    /// Show one record
    Show {
        /// Record ID (e.g. 2 or #2)
        id: FinanceId,
    },
    /// Add a record, prompting for each field
    Add,
    /// Edit a record, prompting for each field (empty answer keeps the current text)
    Edit {
        /// Record ID
        id: FinanceId,
    },
    /// Delete a record
    #[command(alias = "rm")]
    Delete {
        /// Record ID
        id: FinanceId,
    },
    /// Print all records
    Export {
        /// Output format (json, yaml, csv)
        #[arg(short, long, default_value = "json")]
        format: ExportFormat,
    },
    /// Show recent audit log entries
    History {
        /// Number of entries to show
        #[arg(default_value = "10")]
        count: usize,
    },
    /// Show the active settings
    Config,
    /// Show available commands
    Help,
    /// Leave the shell
    #[command(alias = "exit")]
    Quit,
}

impl ShellLine {
    /// Parse a line of input into a command
    pub fn parse_line(line: &str) -> Result<ShellCommand, clap::Error> {
        Self::try_parse_from(line.split_whitespace()).map(|l| l.command)
    }
}

/// Help text listing the shell commands
pub const HELP_TEXT: &str = "\
Commands:
  list                 List all records with totals
  show <id>            Show one record
  add                  Add a record
  edit <id>            Edit a record (empty answer keeps the current text)
  delete <id>          Delete a record
  export [-f FORMAT]   Print all records as json, yaml or csv
  history [N]          Show the last N audit log entries
  config               Show the active settings
  help                 Show this help
  quit                 Leave the shell
";
