//! Extraction diagnostics
//!
//! Tables and templates that cannot be turned into events are skipped, not
//! fatal. Each skip is recorded here so the calling driver can report it
//! after the batch has finished.
//!
//! ## Example
//!
//! ```rust
//! use orari::diagnostics::{Diagnostic, DiagnosticLevel};
//!
//! let diag = Diagnostic::warning("weekday header not found").with_table(3);
//! assert_eq!(diag.level, DiagnosticLevel::Warning);
//! assert_eq!(diag.to_string(), "warning: weekday header not found\n  --> table 3");
//! ```

use std::fmt;

use crate::utils::error::ExtractError;

/// Diagnostic severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DiagnosticLevel {
    /// Informational note
    Info,
    /// Warning - part of the input was skipped
    Warning,
    /// Error - the input was rejected outright
    Error,
}

impl fmt::Display for DiagnosticLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticLevel::Info => write!(f, "info"),
            DiagnosticLevel::Warning => write!(f, "warning"),
            DiagnosticLevel::Error => write!(f, "error"),
        }
    }
}

/// A single diagnostic message
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    /// Severity level
    pub level: DiagnosticLevel,
    /// Human-readable message
    pub message: String,
    /// Index of the table in the batch
    pub table: Option<usize>,
    /// Offending cell text, if any
    pub source_text: Option<String>,
}

impl Diagnostic {
    /// Create a new diagnostic
    pub fn new(level: DiagnosticLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            table: None,
            source_text: None,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(DiagnosticLevel::Info, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(DiagnosticLevel::Warning, message)
    }

    /// Add the table index
    pub fn with_table(mut self, table: usize) -> Self {
        self.table = Some(table);
        self
    }

    /// Add source text
    pub fn with_source(mut self, text: impl Into<String>) -> Self {
        self.source_text = Some(text.into());
        self
    }
}

impl From<&ExtractError> for Diagnostic {
    fn from(err: &ExtractError) -> Self {
        let diag = Diagnostic::warning(err.to_string());
        match err {
            ExtractError::HeaderNotFound { table }
            | ExtractError::SemesterRowNotFound { table, .. } => diag.with_table(*table),
            _ => diag,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.level, self.message)?;

        if let Some(table) = self.table {
            write!(f, "\n  --> table {}", table)?;
        }

        if let Some(ref source) = self.source_text {
            for line in source.lines() {
                write!(f, "\n  | {}", line)?;
            }
        }

        Ok(())
    }
}

/// Render a list of diagnostics followed by a one-line summary
pub fn format_diagnostics(diagnostics: &[Diagnostic]) -> String {
    let mut out = String::new();
    for diag in diagnostics {
        out.push_str(&diag.to_string());
        out.push('\n');
    }

    let warnings = diagnostics
        .iter()
        .filter(|d| d.level >= DiagnosticLevel::Warning)
        .count();
    if warnings == 0 {
        out.push_str("no issues found");
    } else {
        out.push_str(&format!(
            "{} skipped item{}",
            warnings,
            if warnings == 1 { "" } else { "s" }
        ));
    }
    out
}
