//! # orari
//!
//! Lesson timetable extraction: turns the weekday/semester grid of an
//! academic timetable into dated, zoned lesson records.
//!
//! ## Features
//!
//! - **Cell lexing**: free-text timetable cells into lesson templates
//! - **Weekly expansion**: one event per matching weekday of the semester
//! - **Civil time**: Europe/Rome offsets from the timezone database or the
//!   last-Sunday rule
//! - **Batch friendly**: broken tables are skipped with a diagnostic
//! - **Record maintenance**: semester merge, hour shifts, programme tags
//!
//! ## Usage Examples
//!
//! ### Lexing one cell
//!
//! ```rust
//! use orari::parse_cell;
//!
//! let lessons = parse_cell("9.00-13.00\nStoria dell'Arte\nProf. Rossi\nAula Magna");
//! assert_eq!(lessons.len(), 1);
//! assert_eq!(lessons[0].instructor.as_deref(), Some("Rossi"));
//! ```
//!
//! ### Extracting a table
//!
//! ```rust
//! use orari::{extract_schedule, Semester};
//!
//! let table = vec![
//!     vec![None, Some("LUNEDI".to_string())],
//!     vec![
//!         Some("1° SEM".to_string()),
//!         Some("14.00-18.00\nGraphic Design 2\nGruppo C".to_string()),
//!     ],
//! ];
//!
//! let output = extract_schedule(&[table], 2, Semester::First);
//! assert_eq!(output.events.len(), 17);
//! assert_eq!(output.events[0].start.to_rfc3339(), "2024-10-07T15:00:00+02:00");
//! ```

/// Core extraction modules
pub mod core;

/// Data layer - static vocabulary
pub mod data;

/// Feature modules - table extraction and record maintenance
pub mod features;

/// Utility modules
pub mod utils;

// Re-export core modules
pub use core::{calendar, cell, context, tokens};
pub use core::calendar::{LessonEvent, Semester, SemesterWindow, TimezonePolicy};
pub use core::cell::{parse_cell, LessonTemplate};
pub use core::context::{ExtractOptions, ScheduleRequest};
pub use core::tokens::{extract_group, parse_time_range, Group, TimeRange};

// Re-export feature modules
pub use features::catalog;
pub use features::postprocess;
pub use features::table;
pub use features::{RawRow, ScheduleSource, StudyProgramme};

// Re-export utilities
pub use utils::diagnostics;
pub use utils::error::{ExtractError, ExtractOutput, ExtractResult};

/// Extract the events of a schedule document with default options
///
/// # Arguments
/// * `tables` - Tables of the document, rows of optional cell texts
/// * `year` - Course year stamped on every event
/// * `semester` - Semester whose row is read
///
/// # Returns
/// Events in table order plus a diagnostic for every skipped table
pub fn extract_schedule(tables: &[Vec<RawRow>], year: u8, semester: Semester) -> ExtractOutput {
    extract_schedule_with_options(tables, &ScheduleRequest::new(year, semester), &ExtractOptions::default())
}

/// Extract the events of a schedule document with custom options
pub fn extract_schedule_with_options(
    tables: &[Vec<RawRow>],
    request: &ScheduleRequest,
    options: &ExtractOptions,
) -> ExtractOutput {
    features::table::extract_schedule(tables, request, options)
}

/// Extract both semesters of a course year and merge them by start time
pub fn extract_year(
    tables: &[Vec<RawRow>],
    year: u8,
    options: &ExtractOptions,
) -> ExtractOutput {
    let first = extract_schedule_with_options(tables, &ScheduleRequest::new(year, Semester::First), options);
    let second =
        extract_schedule_with_options(tables, &ScheduleRequest::new(year, Semester::Second), options);

    let mut diagnostics = first.diagnostics;
    diagnostics.extend(second.diagnostics);
    ExtractOutput::with_diagnostics(
        postprocess::merge_semesters(first.events, second.events),
        diagnostics,
    )
}
