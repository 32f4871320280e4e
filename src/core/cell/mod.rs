//! Cell Content Lexer
//!
//! Turns the loosely structured text of one timetable cell into lesson
//! templates. A cell looks like:
//!
//! ```text
//! 10.00-13.00            <- opens a lesson
//! Graphic Design 2       <- course name
//! Gruppo C               <- class group
//! Prof.ssa Crescioli     <- instructor
//! Multimedia Lab         <- room
//! 14.00-18.00            <- closes the previous lesson, opens the next
//! ...
//! ```
//!
//! # Architecture
//!
//! The lexer is a fold over the line sequence. Each step receives the
//! lesson being accumulated and returns the next line index together with
//! any lesson it closed. The step size is 1, or 2 when the instructor
//! heuristic borrows the following line as a surname.
//!
//! ```text
//! lines -> step(index, draft) -> (next index, draft, completed?) -> templates
//! ```
//!
//! # Example
//!
//! ```rust
//! use orari::cell::parse_cell;
//!
//! let lessons = parse_cell("9.00-11.00\nStoria dell'arte\nAula Magna");
//! assert_eq!(lessons.len(), 1);
//! assert_eq!(lessons[0].room.as_deref(), Some("Aula Magna"));
//! ```

mod instructor;
mod lexer;

#[cfg(test)]
mod tests;

// Re-export public API
pub use instructor::{classify_instructor, is_instructor_line, strip_titles, InstructorMatch};
pub use lexer::{clean_room, is_room_line, parse_cell, LessonTemplate};
