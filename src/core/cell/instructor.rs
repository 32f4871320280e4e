//! Instructor-name heuristic
//!
//! Instructor lines look like `Prof.ssa Crescioli`, `Prof. Rossi (teoria)`
//! or just `Prof.ssa` with the surname on the following line. The title is
//! stripped and, when nothing usable is left, the next line is adopted as
//! the surname if it plausibly is one.

use lazy_static::lazy_static;
use regex::Regex;

use super::lexer::is_room_line;
use crate::core::tokens::{extract_group, is_time_range};
use crate::data::{INSTRUCTOR_MARKER, INSTRUCTOR_TITLES};

lazy_static! {
    static ref PARENTHETICAL: Regex = Regex::new(r"\([^)]*\)").unwrap();
    static ref TITLE_RESIDUE: Regex = Regex::new(r"(?i)^ssa(?:/|\s+|$)").unwrap();
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

/// Residuals this short are title debris, not a name
const MIN_NAME_CHARS: usize = 3;

/// Outcome of classifying an instructor line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstructorMatch {
    /// Lines consumed: 1, or 2 when the surname was taken from the next line
    pub consumed: usize,
    /// Extracted name, if any survived the cleanup
    pub name: Option<String>,
}

/// Check whether a line names an instructor
#[inline]
pub fn is_instructor_line(line: &str) -> bool {
    line.to_lowercase().contains(INSTRUCTOR_MARKER)
}

/// Classify an instructor line, looking at the following line if needed.
///
/// Callers must have checked [`is_instructor_line`] first.
pub fn classify_instructor(line: &str, next_line: Option<&str>) -> InstructorMatch {
    let residual = strip_titles(line);
    if residual.chars().count() >= MIN_NAME_CHARS {
        return InstructorMatch {
            consumed: 1,
            name: Some(residual),
        };
    }

    match next_line {
        Some(next) if is_plausible_surname(next) => InstructorMatch {
            consumed: 2,
            name: Some(collapse_whitespace(next)),
        },
        _ => InstructorMatch {
            consumed: 1,
            name: None,
        },
    }
}

/// Remove every title form, the `ssa` residue and parenthetical asides
pub fn strip_titles(line: &str) -> String {
    // Trailing space lets a bare "Prof." match the "prof. " form
    let mut text = format!("{} ", line.trim());
    for title in INSTRUCTOR_TITLES {
        text = remove_ignore_case(&text, title);
    }

    let text = text.trim();
    let text = TITLE_RESIDUE.replace(text, "");
    let text = PARENTHETICAL.replace_all(&text, " ");
    collapse_whitespace(&text)
}

fn is_plausible_surname(line: &str) -> bool {
    let line = line.trim();
    if is_room_line(line) || extract_group(line).is_some() || is_time_range(line) {
        return false;
    }
    line.chars().count() >= MIN_NAME_CHARS
        && line
            .chars()
            .all(|c| c.is_alphabetic() || matches!(c, ' ' | '\'' | '’' | '-' | '/'))
}

fn collapse_whitespace(text: &str) -> String {
    WHITESPACE.replace_all(text.trim(), " ").into_owned()
}

/// Remove all case-insensitive occurrences of an ASCII needle
fn remove_ignore_case(haystack: &str, needle: &str) -> String {
    let lower = haystack.to_ascii_lowercase();
    let mut out = String::with_capacity(haystack.len());
    let mut last = 0;
    for (start, _) in lower.match_indices(needle) {
        out.push_str(&haystack[last..start]);
        last = start + needle.len();
    }
    out.push_str(&haystack[last..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feminine_title() {
        let m = classify_instructor("Prof.ssa Crescioli", None);
        assert_eq!(m.consumed, 1);
        assert_eq!(m.name.as_deref(), Some("Crescioli"));
    }

    #[test]
    fn test_title_variants() {
        assert_eq!(strip_titles("Prof. Rossi"), "Rossi");
        assert_eq!(strip_titles("PROF BIANCHI"), "BIANCHI");
        assert_eq!(strip_titles("Prof. ssa Verdi"), "Verdi");
        assert_eq!(strip_titles("prof ssa Neri"), "Neri");
    }

    #[test]
    fn test_multiple_instructors() {
        assert_eq!(
            strip_titles("Prof. Rossi / Prof.ssa Bianchi"),
            "Rossi / Bianchi"
        );
    }

    #[test]
    fn test_parenthetical_removed() {
        assert_eq!(strip_titles("Prof. Rossi (modulo 2)"), "Rossi");
    }

    #[test]
    fn test_ssa_residue() {
        assert_eq!(strip_titles("Prof ssa/Galli"), "Galli");
        assert_eq!(strip_titles("Prof. ssa"), "");
    }

    #[test]
    fn test_bare_title_uses_next_line() {
        let m = classify_instructor("Prof.ssa", Some("De Luca"));
        assert_eq!(m.consumed, 2);
        assert_eq!(m.name.as_deref(), Some("De Luca"));

        let m = classify_instructor("Prof.", Some("D'Angelo"));
        assert_eq!(m.name.as_deref(), Some("D'Angelo"));
    }

    #[test]
    fn test_next_line_rejected() {
        for next in ["Aula Magna", "Gruppo B", "14.00-16.00", "Ab", "Rossi 2"] {
            let m = classify_instructor("Prof.", Some(next));
            assert_eq!(m.consumed, 1, "next line {:?}", next);
            assert_eq!(m.name, None);
        }
    }

    #[test]
    fn test_bare_title_at_end() {
        let m = classify_instructor("Prof.", None);
        assert_eq!(m, InstructorMatch { consumed: 1, name: None });
    }

    #[test]
    fn test_is_instructor_line() {
        assert!(is_instructor_line("PROF. ROSSI"));
        assert!(is_instructor_line("prof.ssa Galli"));
        assert!(!is_instructor_line("Storia dell'arte"));
    }
}
