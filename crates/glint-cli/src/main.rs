//! glint scanner CLI

mod commands;

use clap::{Parser, Subcommand};
use commands::{run_check, run_lex, run_repl, OutputFormat};
use glint_error::{GlintError, Result};
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "glint")]
#[command(version)]
#[command(about = "glint language scanner", long_about = None)]
struct Cli {
    /// Show debug logs
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Shows file tokens
    Lex {
        /// Input file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Listing format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Checks a file for illegal characters
    Check {
        /// Input file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Reads lines from stdin and prints their tokens
    Repl,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    init_logging(cli.verbose, cli.no_color)?;

    let color = !cli.no_color;
    let mut out = io::stdout().lock();
    let mut err = io::stderr().lock();

    match cli.command {
        Commands::Lex { input, format } => run_lex(&input, format, color, &mut out, &mut err),
        Commands::Check { input } => run_check(&input, color, &mut out, &mut err),
        Commands::Repl => {
            writeln!(out, "glint {} token REPL, Ctrl-D to exit", env!("CARGO_PKG_VERSION"))?;
            run_repl(io::stdin().lock(), &mut out)
        }
    }
}

/// Installs the stderr log subscriber
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(!no_color)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|e| GlintError::Logging(e.to_string()))
}
