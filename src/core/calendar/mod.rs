//! Calendar expansion
//!
//! Turns a lesson template into dated, zoned events:
//!
//! ```text
//! SemesterWindow -> weekly_dates(weekday) -> build_event(template, date) -> LessonEvent
//! ```
//!
//! # Example
//!
//! ```rust
//! use orari::calendar::{weekly_dates, Semester, SemesterWindow};
//!
//! let window = SemesterWindow::new(Semester::First, 2024).unwrap();
//! let mondays: Vec<_> = weekly_dates(0, &window).unwrap().collect();
//! assert_eq!(mondays[0].to_string(), "2024-10-07");
//! ```

pub mod dst;
mod event;
mod recurrence;
mod semester;

// Re-export public API
pub use dst::{
    attach_offset, civil_offset, dst_offset, format_timestamp, last_sunday, reattach_offset,
    rule_offset, TimezonePolicy, CEST, CET,
};
pub use event::{build_event, timestamp, LessonEvent};
pub use recurrence::{weekday_from_index, weekly_dates, WeeklyDates};
pub use semester::{Semester, SemesterWindow};
