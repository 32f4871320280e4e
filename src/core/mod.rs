//! Core extraction modules
//!
//! This module contains the extraction engine:
//! - `tokens`: time-range and class-group recognizers
//! - `cell`: cell lexer producing lesson templates
//! - `calendar`: weekly expansion and zoned event building
//! - `context`: extraction options

pub mod calendar;
pub mod cell;
pub mod context;
pub mod tokens;

// Re-export main types and functions
pub use calendar::{build_event, weekly_dates, LessonEvent, Semester, SemesterWindow, TimezonePolicy};
pub use cell::{parse_cell, LessonTemplate};
pub use context::{ExtractOptions, ScheduleRequest, CAPTURE_OFFSET_HOURS};
pub use tokens::{extract_group, parse_time_range, Group, TimeRange};
