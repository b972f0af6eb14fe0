//! Command-line argument parsing
//!
//! Supports:
//! - Reading text from a file or stdin
//! - Applying a sequence of named operations
//! - Writing to stdout, a file, or the clipboard
//! - Interactive sessions
//! - Writing the effective configuration file

use clap::Parser;
use std::path::PathBuf;

use crate::commands::Operation;

/// Case conversion and line cleanup for plain text
#[derive(Parser, Debug)]
#[command(
    name = "casekit",
    version,
    about = "Case conversion and line cleanup for plain text"
)]
pub struct CliArgs {
    /// Input file (reads stdin when omitted)
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Operation to apply, in order (repeatable), e.g. `-a upper -a dedupe`
    #[arg(short = 'a', long = "apply", value_name = "OP")]
    pub operations: Vec<Operation>,

    /// Write the result to a file instead of stdout
    #[arg(short = 'o', long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Also copy the result to the clipboard
    #[arg(long)]
    pub copy: bool,

    /// Print word/character/line counts to stderr
    #[arg(long)]
    pub stats: bool,

    /// Print stats as JSON (implies --stats)
    #[arg(long)]
    pub json: bool,

    /// Start an interactive session seeded with the input
    #[arg(short = 'i', long)]
    pub interactive: bool,

    /// Override the configured undo history limit (0 = unbounded)
    #[arg(long, value_name = "N")]
    pub history_limit: Option<usize>,

    /// Write the effective configuration to the config file and exit
    #[arg(long, conflicts_with_all = ["input", "operations", "output", "interactive"])]
    pub write_config: bool,
}

/// Where the initial text comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Start with an empty workspace
    Empty,
    File(PathBuf),
    Stdin,
}

/// How stats are reported in batch mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsFormat {
    Text,
    Json,
}

/// What the process should do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunMode {
    /// Apply operations once and write the result
    Batch {
        operations: Vec<Operation>,
        output: Option<PathBuf>,
        copy: bool,
        stats: Option<StatsFormat>,
    },
    /// Read commands from stdin
    Interactive,
    /// Save the configuration file, then exit
    WriteConfig,
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartupConfig {
    pub input: InputSource,
    pub mode: RunMode,
    pub history_limit: Option<usize>,
}

impl CliArgs {
    /// Convert parsed CLI args into startup configuration
    ///
    /// `stdin_is_terminal` decides whether stdin can supply the input text.
    pub fn into_config(self, stdin_is_terminal: bool) -> Result<StartupConfig, String> {
        if self.write_config {
            return Ok(StartupConfig {
                input: InputSource::Empty,
                mode: RunMode::WriteConfig,
                history_limit: self.history_limit,
            });
        }

        if self.interactive {
            if !self.operations.is_empty() || self.output.is_some() {
                return Err("--apply and --output cannot be combined with --interactive".to_string());
            }
            // stdin carries the commands, so the text can only come from a file
            let input = self.input.map_or(InputSource::Empty, InputSource::File);
            return Ok(StartupConfig {
                input,
                mode: RunMode::Interactive,
                history_limit: self.history_limit,
            });
        }

        let input = match self.input {
            Some(path) => InputSource::File(path),
            None if stdin_is_terminal => {
                return Err("No input: pass a FILE, pipe text on stdin, or use --interactive"
                    .to_string())
            }
            None => InputSource::Stdin,
        };

        let stats = if self.json {
            Some(StatsFormat::Json)
        } else if self.stats {
            Some(StatsFormat::Text)
        } else {
            None
        };

        Ok(StartupConfig {
            input,
            mode: RunMode::Batch {
                operations: self.operations,
                output: self.output,
                copy: self.copy,
                stats,
            },
            history_limit: self.history_limit,
        })
    }
}
