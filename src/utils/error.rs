//! Error handling for schedule extraction
//!
//! This module provides a unified error type and result type for the
//! operations that can reject their input. Absent matches (no time range,
//! no group, incomplete lessons) are not errors and never show up here.

use crate::core::calendar::Semester;
use crate::core::tokens::TimeRange;
use crate::utils::diagnostics::Diagnostic;
use crate::LessonEvent;

/// Extraction error type
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExtractError {
    /// Weekday index outside 0 (Monday) ..= 6 (Sunday)
    #[error("invalid weekday index: {index} (must be 0..=6)")]
    InvalidWeekday { index: u32 },

    /// A calendar date that does not exist
    #[error("invalid date: {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },

    /// Lesson ends at or before its start
    #[error("time range {range} ends before it starts")]
    InvertedTimeRange { range: TimeRange },

    /// The capture-offset correction moves the lesson onto another day
    #[error("time range {range} leaves its civil date after the capture-offset correction")]
    CrossesMidnight { range: TimeRange },

    /// The capture-offset shift does not fit in the calendar
    #[error("capture offset of {hours}h is out of range")]
    CaptureOffsetOutOfRange { hours: i64 },

    /// No row of the table carries a weekday token
    #[error("table {table}: weekday header not found")]
    HeaderNotFound { table: usize },

    /// No semester marker below the weekday header
    #[error("table {table}: no row marked for semester {semester}")]
    SemesterRowNotFound { table: usize, semester: Semester },

    /// Configuration could not be loaded
    #[error("invalid configuration: {message}")]
    Config { message: String },
}

/// Result type for extraction operations
pub type ExtractResult<T> = Result<T, ExtractError>;

// Convenience constructors for errors
impl ExtractError {
    pub fn invalid_date(year: i32, month: u32, day: u32) -> Self {
        ExtractError::InvalidDate { year, month, day }
    }

    pub fn config(message: impl Into<String>) -> Self {
        ExtractError::Config {
            message: message.into(),
        }
    }

    /// Whether the error concerns a whole table rather than one lesson
    pub fn is_table_level(&self) -> bool {
        matches!(
            self,
            ExtractError::HeaderNotFound { .. } | ExtractError::SemesterRowNotFound { .. }
        )
    }
}

/// Extraction output with the diagnostics collected along the way
#[derive(Debug, Clone, Default)]
pub struct ExtractOutput {
    /// Dated lesson records
    pub events: Vec<LessonEvent>,
    /// Skipped tables and rejected templates
    pub diagnostics: Vec<Diagnostic>,
}

impl ExtractOutput {
    pub fn new(events: Vec<LessonEvent>) -> Self {
        Self {
            events,
            diagnostics: Vec::new(),
        }
    }

    pub fn with_diagnostics(events: Vec<LessonEvent>, diagnostics: Vec<Diagnostic>) -> Self {
        Self {
            events,
            diagnostics,
        }
    }

    pub fn has_diagnostics(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// Append another output, keeping event order
    pub fn extend(&mut self, other: ExtractOutput) {
        self.events.extend(other.events);
        self.diagnostics.extend(other.diagnostics);
    }
}
