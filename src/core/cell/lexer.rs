//! Cell lexer: folds the lines of one cell into lesson templates

use log::trace;

use super::instructor::{classify_instructor, is_instructor_line};
use crate::core::tokens::{extract_group, parse_time_range, Group, TimeRange};
use crate::data::{ROOM_KEYWORDS, ROOM_QUALIFIER};

/// One recurring weekly class, before date expansion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonTemplate {
    pub time_range: TimeRange,
    /// Course name as printed, original casing
    pub course_name: String,
    pub group: Option<Group>,
    pub instructor: Option<String>,
    pub room: Option<String>,
}

impl LessonTemplate {
    /// Create a template with only the mandatory fields
    pub fn new(time_range: TimeRange, course_name: impl Into<String>) -> Self {
        LessonTemplate {
            time_range,
            course_name: course_name.into(),
            group: None,
            instructor: None,
            room: None,
        }
    }

    pub fn with_group(mut self, group: Group) -> Self {
        self.group = Some(group);
        self
    }

    pub fn with_instructor(mut self, instructor: impl Into<String>) -> Self {
        self.instructor = Some(instructor.into());
        self
    }

    pub fn with_room(mut self, room: impl Into<String>) -> Self {
        self.room = Some(room.into());
        self
    }
}

/// The lesson being accumulated, opened by a time-range line
#[derive(Debug, Clone)]
struct Draft {
    time_range: TimeRange,
    course_name: Option<String>,
    group: Option<Group>,
    instructor: Option<String>,
    /// Only the first instructor line of a lesson counts, even if it
    /// yielded no name
    instructor_seen: bool,
    room: Option<String>,
}

impl Draft {
    fn open(time_range: TimeRange) -> Self {
        Draft {
            time_range,
            course_name: None,
            group: None,
            instructor: None,
            instructor_seen: false,
            room: None,
        }
    }

    /// Complete lessons have a time range and a non-empty course name
    fn finish(self) -> Option<LessonTemplate> {
        let course_name = self.course_name.filter(|name| !name.is_empty())?;
        Some(LessonTemplate {
            time_range: self.time_range,
            course_name,
            group: self.group,
            instructor: self.instructor,
            room: self.room,
        })
    }
}

/// Result of folding one position of the line sequence
#[derive(Debug)]
struct Step {
    /// Index of the next unread line (advances by 1 or 2)
    next: usize,
    draft: Option<Draft>,
    /// Lesson closed by this step, if it was complete
    completed: Option<LessonTemplate>,
}

/// Parse the text of one table cell into lesson templates.
///
/// Lessons come out in the order their time-range lines appear. Cells
/// with fewer than two non-empty lines are noise and yield nothing.
pub fn parse_cell(text: &str) -> Vec<LessonTemplate> {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();
    if lines.len() < 2 {
        return Vec::new();
    }

    let mut lessons = Vec::new();
    let mut index = 0;
    let mut draft = None;
    while index < lines.len() {
        let step = step(&lines, index, draft);
        index = step.next;
        draft = step.draft;
        lessons.extend(step.completed);
    }
    lessons.extend(draft.and_then(Draft::finish));
    lessons
}

fn step(lines: &[&str], index: usize, draft: Option<Draft>) -> Step {
    let line = lines[index];

    if let Some(range) = parse_time_range(line) {
        trace!("line {}: opens lesson {}", index, range);
        return Step {
            next: index + 1,
            completed: draft.and_then(Draft::finish),
            draft: Some(Draft::open(range)),
        };
    }

    // Lines ahead of the first time range belong to no lesson
    let Some(mut draft) = draft else {
        return Step {
            next: index + 1,
            draft: None,
            completed: None,
        };
    };

    let mut next = index + 1;
    let group = extract_group(line);

    if group.is_some() && draft.group.is_none() {
        draft.group = group;
    } else if is_instructor_line(line) {
        if !draft.instructor_seen {
            let found = classify_instructor(line, lines.get(index + 1).copied());
            draft.instructor_seen = true;
            draft.instructor = found.name;
            next = index + found.consumed;
        }
    } else if is_room_line(line) {
        if draft.room.is_none() {
            draft.room = Some(clean_room(line));
        }
    } else if draft.course_name.is_none() && group.is_none() && !is_year_marker(line) {
        draft.course_name = Some(line.to_string());
    }

    Step {
        next,
        draft: Some(draft),
        completed: None,
    }
}

/// Check whether a line names a room
pub fn is_room_line(line: &str) -> bool {
    let upper = line.to_uppercase();
    ROOM_KEYWORDS.iter().any(|kw| upper.contains(kw))
}

/// Drop the trailing "(portatili)" qualifier from a room line
pub fn clean_room(line: &str) -> String {
    let trimmed = line.trim();
    if trimmed.to_ascii_lowercase().ends_with(ROOM_QUALIFIER) {
        trimmed[..trimmed.len() - ROOM_QUALIFIER.len()]
            .trim_end()
            .to_string()
    } else {
        trimmed.to_string()
    }
}

/// A lone digit is a stray year marker, not a course
fn is_year_marker(line: &str) -> bool {
    let mut chars = line.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if c.is_ascii_digit())
}
