//! Utility modules
//!
//! This module contains utilities and helpers:
//! - Diagnostics for skipped tables and templates
//! - Error types and result types

pub mod diagnostics;
pub mod error;

// Re-export commonly used items
pub use diagnostics::{format_diagnostics, Diagnostic, DiagnosticLevel};
pub use error::{ExtractError, ExtractOutput, ExtractResult};
