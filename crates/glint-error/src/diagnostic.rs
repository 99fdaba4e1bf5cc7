//! Diagnostic - rustc-style error messages
//!
//! Generates error messages with:
//! - Error code (EL001, ...)
//! - Source name the diagnostic refers to
//! - Notes and fix suggestions
//!
//! The scanner does not track line or column information, so a diagnostic
//! points at a whole source rather than at a snippet inside it.

use std::fmt;

/// Diagnostic severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    /// Error - the input is not acceptable to later stages
    Error,
    /// Warning - reported but does not fail the run
    Warning,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Error => "error",
            Level::Warning => "warning",
        }
    }

    /// Returns the ANSI code for coloring (if terminal supports it)
    pub fn color_code(&self) -> &'static str {
        match self {
            Level::Error => "\x1b[1;31m",   // Bold Red
            Level::Warning => "\x1b[1;33m", // Bold Yellow
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Structured error code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorCode {
    /// Category (L = Lexer)
    pub category: char,
    /// Error number
    pub number: u16,
}

impl ErrorCode {
    pub const fn new(category: char, number: u16) -> Self {
        Self { category, number }
    }

    // Lexer errors
    pub const UNEXPECTED_CHAR: Self = Self::new('L', 1);
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{}{:03}", self.category, self.number)
    }
}

/// A complete diagnostic
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Severity level
    pub level: Level,
    /// Error code (optional)
    pub code: Option<ErrorCode>,
    /// Main message
    pub message: String,
    /// Additional notes
    pub notes: Vec<String>,
    /// Fix suggestions
    pub help: Vec<String>,
}

impl Diagnostic {
    /// Creates a new error
    pub fn error(message: impl Into<String>) -> Self {
        Self::with_level(Level::Error, message)
    }

    /// Creates a new warning
    pub fn warning(message: impl Into<String>) -> Self {
        Self::with_level(Level::Warning, message)
    }

    fn with_level(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            code: None,
            message: message.into(),
            notes: Vec::new(),
            help: Vec::new(),
        }
    }

    /// Sets the error code
    pub fn with_code(mut self, code: ErrorCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Adds a note
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Adds a fix suggestion
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help.push(help.into());
        self
    }
}

/// Renders a diagnostic for display
pub struct DiagnosticRenderer<'a> {
    source_name: Option<&'a str>,
    use_colors: bool,
}

impl<'a> DiagnosticRenderer<'a> {
    pub fn new() -> Self {
        Self {
            source_name: None,
            use_colors: true,
        }
    }

    /// Names the source the rendered diagnostics refer to (`--> name`)
    pub fn for_source(mut self, name: &'a str) -> Self {
        self.source_name = Some(name);
        self
    }

    pub fn without_colors(mut self) -> Self {
        self.use_colors = false;
        self
    }

    /// Renders the diagnostic as a string
    pub fn render(&self, diagnostic: &Diagnostic) -> String {
        let mut output = String::new();

        // Line 1: error[EL001]: message
        let reset = if self.use_colors { "\x1b[0m" } else { "" };
        let color = if self.use_colors {
            diagnostic.level.color_code()
        } else {
            ""
        };
        let bold = if self.use_colors { "\x1b[1m" } else { "" };

        output.push_str(color);
        output.push_str(diagnostic.level.as_str());

        if let Some(code) = &diagnostic.code {
            output.push('[');
            output.push_str(&code.to_string());
            output.push(']');
        }

        output.push_str(reset);
        output.push_str(bold);
        output.push_str(": ");
        output.push_str(&diagnostic.message);
        output.push_str(reset);
        output.push('\n');

        if let Some(name) = self.source_name {
            let blue = if self.use_colors { "\x1b[1;34m" } else { "" };
            output.push_str(&format!(" {}-->{} {}\n", blue, reset, name));
        }

        for note in &diagnostic.notes {
            output.push_str(&format!("  = {}note{}: {}\n", bold, reset, note));
        }

        for help in &diagnostic.help {
            let green = if self.use_colors { "\x1b[1;32m" } else { "" };
            output.push_str(&format!("  = {}help{}: {}\n", green, reset, help));
        }

        output
    }
}

impl Default for DiagnosticRenderer<'_> {
    fn default() -> Self {
        Self::new()
    }
}
