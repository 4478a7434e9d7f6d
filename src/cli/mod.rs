//! CLI module for the iris compiler front end
//!
//! `irisc [FILE]...` parses every file and reports the first syntax error of each. Flags select what is printed
//! for files that parse:
//!
//! - `--tokens` - the token stream, one `line:column: 'literal'` line per token (no parsing)
//! - `--ast` - the indented syntax tree
//! - `--sexpr` - the compact s-expression rendering
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::path::PathBuf;
use std::process;

use clap::Parser;
use thiserror::Error;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message (already rendered, possibly spanning several lines) and an exit code.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct CliError {
    pub message: String,
    pub exit_code: ExitCode,
}

impl CliError {
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Front end of the iris compiler
#[derive(Parser, Debug)]
#[command(name = "irisc")]
#[command(version = VERSION)]
#[command(about = "Tokenize and parse iris source files", long_about = None)]
pub struct Cli {
    /// Source files to process, in order
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,

    /// Dump the token stream instead of parsing
    #[arg(long, conflicts_with_all = ["ast", "sexpr"])]
    pub tokens: bool,

    /// Dump the syntax tree of each parsed file
    #[arg(long)]
    pub ast: bool,

    /// Print each parsed file as compact s-expressions
    #[arg(long, conflicts_with = "ast")]
    pub sexpr: bool,

    /// More log output (-v debug, -vv trace); overrides RUST_LOG
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// What to print for each file.
    pub fn output_mode(&self) -> commands::OutputMode {
        if self.tokens {
            commands::OutputMode::Tokens
        } else if self.ast {
            commands::OutputMode::Ast
        } else if self.sexpr {
            commands::OutputMode::Sexpr
        } else {
            commands::OutputMode::Check
        }
    }

    /// Log filter directive selected by `-v`, if any.
    pub fn log_directive(&self) -> Option<&'static str> {
        match self.verbose {
            0 => None,
            1 => Some("debug"),
            _ => Some("trace"),
        }
    }
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called.
pub fn run(cli: Cli) {
    match execute(cli) {
        Ok(exit_code) => {
            if exit_code != ExitCode::SUCCESS {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Process every file; a failing file is reported and the remaining files still run.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    let mode = cli.output_mode();
    let mut exit_code = ExitCode::SUCCESS;

    for file in &cli.files {
        match commands::process_file(file, mode) {
            Ok(output) => {
                for warning in &output.warnings {
                    eprintln!("{warning}");
                }
                print!("{}", output.text);
            }
            Err(e) => {
                tracing::debug!(file = %file.display(), "file failed");
                eprintln!("{}", e.message);
                exit_code = e.exit_code;
            }
        }
    }

    Ok(exit_code)
}

// ============================================================================
// Tests
// ============================================================================
