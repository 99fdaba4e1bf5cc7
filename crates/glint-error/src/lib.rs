//! glint-error - Diagnostics and driver errors for the glint scanner
//!
//! The scanner reports unrecognized input as data (ILLEGAL tokens). This
//! crate provides the structures drivers use to turn those tokens into
//! readable reports, and the error type for everything else that can go
//! wrong around a scan.
//!
//! # Example
//!
//! ```rust
//! use glint_error::{Diagnostic, DiagnosticRenderer, ErrorCode};
//!
//! let diagnostic = Diagnostic::error("unexpected character '@'")
//!     .with_code(ErrorCode::UNEXPECTED_CHAR);
//!
//! let renderer = DiagnosticRenderer::new().for_source("main.gl");
//! println!("{}", renderer.render(&diagnostic));
//! ```

pub mod diagnostic;
pub mod error;

pub use diagnostic::{Diagnostic, DiagnosticRenderer, ErrorCode, Level};
pub use error::{GlintError, Result};

/// Collection of diagnostics accumulated during a scan
#[derive(Debug, Default)]
pub struct Diagnostics {
    items: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.items.push(diagnostic);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.items.push(Diagnostic::error(message));
    }

    pub fn warning(&mut self, message: impl Into<String>) {
        self.items.push(Diagnostic::warning(message));
    }

    pub fn has_errors(&self) -> bool {
        self.items.iter().any(|d| d.level == Level::Error)
    }

    /// Number of error-level diagnostics
    pub fn error_count(&self) -> usize {
        self.items.iter().filter(|d| d.level == Level::Error).count()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.items.iter()
    }

    /// Renders all diagnostics
    pub fn render(&self, renderer: &DiagnosticRenderer<'_>) -> String {
        self.items
            .iter()
            .map(|d| renderer.render(d))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
