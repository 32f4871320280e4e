//! Feature modules - Table extraction and record maintenance
//!
//! This module contains the parts built on top of the core engine:
//! - Timetable table location and the per-table extraction driver
//! - Schedule source metadata from folder and file names
//! - Post-extraction maintenance (merge, shift, tagging, renaming)

pub mod catalog;
pub mod postprocess;
pub mod table;

// Re-export commonly used types
pub use catalog::{course_code, infer_semesters, infer_year, output_stem, ScheduleSource, StudyProgramme};
pub use postprocess::{
    fix_offsets, merge_semesters, rename_shared_courses, shift_events, tag_study_programme,
    RenameTable,
};
pub use table::{extract_schedule, extract_table, locate, RawRow, TableLayout};
