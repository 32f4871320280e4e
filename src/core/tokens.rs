//! Line-level token recognizers
//!
//! Two small recognizers used by the cell lexer:
//! - [`parse_time_range`] finds an hour range such as `10.00-13.00`
//! - [`extract_group`] finds a class-group letter such as `Gruppo C`
//!
//! Neither fails: a line that does not carry the token yields `None`.

use std::fmt;

use chrono::{NaiveTime, Timelike};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::data::GROUP_LETTERS;

lazy_static! {
    /// Hour ranges, tried in order: dotted first, then colon-separated
    static ref TIME_RANGE_PATTERNS: [Regex; 2] = [
        Regex::new(r"(\d{1,2})\.(\d{2})\s*-\s*(\d{1,2})\.(\d{2})").unwrap(),
        Regex::new(r"(\d{1,2}):(\d{2})\s*-\s*(\d{1,2}):(\d{2})").unwrap(),
    ];

    /// Group forms: "Gruppo C", "Gr. C", "C Gruppo", "C -" / "C:" at line start
    static ref GROUP_PATTERNS: [Regex; 4] = [
        Regex::new(r"(?i:gruppo)\s*([A-Z])").unwrap(),
        Regex::new(r"(?i:gr)\.\s*([A-Z])").unwrap(),
        Regex::new(r"\b([A-Z])\s*(?i:gruppo)").unwrap(),
        Regex::new(r"^([A-Z])\s*[-:]").unwrap(),
    ];
}

// ============================================================================
// Time ranges
// ============================================================================

/// Wall-clock lesson span as printed in the cell, minute precision.
///
/// Both ends are valid times of day; [`TimeRange::new`] is the only way in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeRange {
    start: NaiveTime,
    end: NaiveTime,
}

impl TimeRange {
    /// Build a range, rejecting hours above 23 and minutes above 59
    pub fn new(start_hour: u32, start_minute: u32, end_hour: u32, end_minute: u32) -> Option<Self> {
        Some(TimeRange {
            start: NaiveTime::from_hms_opt(start_hour, start_minute, 0)?,
            end: NaiveTime::from_hms_opt(end_hour, end_minute, 0)?,
        })
    }

    pub fn start(&self) -> NaiveTime {
        self.start
    }

    pub fn end(&self) -> NaiveTime {
        self.end
    }

    /// Components as `(h1, m1, h2, m2)`
    pub fn components(&self) -> (u32, u32, u32, u32) {
        (
            self.start.hour(),
            self.start.minute(),
            self.end.hour(),
            self.end.minute(),
        )
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start.format("%H:%M"), self.end.format("%H:%M"))
    }
}

/// Find an hour range in a line.
///
/// All whitespace is removed first, so `10 . 00 - 13 . 00` is accepted.
/// Returns the first structural match whose components are a valid time
/// of day; out-of-range values are skipped, never reported.
pub fn parse_time_range(line: &str) -> Option<TimeRange> {
    let compact: String = line.chars().filter(|c| !c.is_whitespace()).collect();
    if compact.is_empty() {
        return None;
    }

    TIME_RANGE_PATTERNS.iter().find_map(|pattern| {
        pattern.captures_iter(&compact).find_map(|caps| {
            let n = |i: usize| caps.get(i).and_then(|m| m.as_str().parse::<u32>().ok());
            TimeRange::new(n(1)?, n(2)?, n(3)?, n(4)?)
        })
    })
}

/// Check whether a line carries an hour range
#[inline]
pub fn is_time_range(line: &str) -> bool {
    parse_time_range(line).is_some()
}

// ============================================================================
// Groups
// ============================================================================

/// Class group a lesson is restricted to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Group {
    A,
    B,
    C,
    Y,
    Z,
}

impl Group {
    /// Map an allowed letter to its group
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'A' => Some(Group::A),
            'B' => Some(Group::B),
            'C' => Some(Group::C),
            'Y' => Some(Group::Y),
            'Z' => Some(Group::Z),
            _ => None,
        }
    }

    pub fn letter(&self) -> char {
        match self {
            Group::A => 'A',
            Group::B => 'B',
            Group::C => 'C',
            Group::Y => 'Y',
            Group::Z => 'Z',
        }
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Find a class-group letter in a line.
///
/// Forms are tried in order. A form whose letter is not one of the allowed
/// groups counts as no match and the next form is tried.
pub fn extract_group(line: &str) -> Option<Group> {
    let line = line.trim();
    GROUP_PATTERNS.iter().find_map(|pattern| {
        let letter = pattern.captures(line)?.get(1)?.as_str().chars().next()?;
        if GROUP_LETTERS.contains(&letter) {
            Group::from_letter(letter)
        } else {
            None
        }
    })
}
