//! Subcommand implementations
//!
//! Each command writes to the streams it is given instead of the process
//! stdout/stderr, so the same code serves the binary and the tests.

use clap::ValueEnum;
use glint_error::{DiagnosticRenderer, Diagnostics, GlintError, Result};
use glint_lexer::{tokenize, Lexer, Token};
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Prompt shown by the REPL
pub const PROMPT: &str = ">> ";

/// Token listing format for `glint lex`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One `KIND  literal` line per token
    #[default]
    Text,
    /// JSON array of `{kind, literal}` objects
    Json,
}

/// Reads raw bytes; invalid UTF-8 is left for the scanner to flag
fn read_source(input: &Path) -> Result<Vec<u8>> {
    fs::read(input).map_err(|e| GlintError::io(input, e))
}

/// Renders the diagnostics and turns them into a failure if any are errors
fn report(
    input: &Path,
    diagnostics: &Diagnostics,
    color: bool,
    err: &mut impl Write,
) -> Result<()> {
    if !diagnostics.has_errors() {
        return Ok(());
    }

    let name = input.display().to_string();
    let mut renderer = DiagnosticRenderer::new().for_source(&name);
    if !color {
        renderer = renderer.without_colors();
    }
    writeln!(err, "{}", diagnostics.render(&renderer))?;

    Err(GlintError::Lexical {
        count: diagnostics.error_count(),
    })
}

/// `glint lex`: dumps every token of a file
pub fn run_lex(
    input: &Path,
    format: OutputFormat,
    color: bool,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<()> {
    let source = read_source(input)?;
    let (tokens, diagnostics) = tokenize(&source);
    tracing::info!(file = %input.display(), tokens = tokens.len(), "lexed file");

    match format {
        OutputFormat::Text => {
            for token in &tokens {
                writeln!(out, "  {:<10}  {}", token.kind.as_str(), token.literal)?;
            }
            writeln!(out, "\nTotal: {} tokens", tokens.len())?;
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &tokens).map_err(io::Error::from)?;
            writeln!(out)?;
        }
    }

    report(input, &diagnostics, color, err)
}

/// `glint check`: scans a file and only reports problems
pub fn run_check(
    input: &Path,
    color: bool,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<()> {
    let source = read_source(input)?;
    let (tokens, diagnostics) = tokenize(&source);

    report(input, &diagnostics, color, err)?;
    writeln!(out, "ok: {} tokens", tokens.len())?;
    Ok(())
}

/// `glint repl`: prints the tokens of every line read until end of input
pub fn run_repl(input: impl BufRead, out: &mut impl Write) -> Result<()> {
    let mut lines = input.split(b'\n');

    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        let Some(line) = lines.next() else {
            writeln!(out)?;
            return Ok(());
        };
        let line = line?;

        let tokens: Vec<Token> = Lexer::new(&line).collect();
        tracing::debug!(tokens = tokens.len(), "scanned line");
        for token in tokens {
            writeln!(out, "{}", token)?;
        }
    }
}
