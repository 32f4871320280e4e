//! Data layer - Static vocabulary
//!
//! This module contains all static data used for schedule extraction:
//! - Weekday header tokens and semester markers
//! - Room keywords and instructor titles
//! - Course folder and file naming conventions

pub mod vocabulary;

// Re-export commonly used items
pub use vocabulary::{
    fold_accents, COURSE_CODES, FIRST_SEMESTER_MARKERS, GROUP_LETTERS, INSTRUCTOR_MARKER,
    INSTRUCTOR_TITLES, ROOM_KEYWORDS, ROOM_QUALIFIER, SECOND_SEMESTER_MARKERS, WEEKDAY_INDEX,
    WEEKDAY_TOKENS, YEAR_WORDS,
};
