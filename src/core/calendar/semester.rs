//! Semester windows
//!
//! The academic year starting in `base_year` is split into two fixed
//! windows:
//!
//! | Semester | Start | End |
//! |----------|-------|-----|
//! | 1 | 1 Oct `base_year` | 31 Jan `base_year + 1` |
//! | 2 | 1 Feb `base_year + 1` | 31 May `base_year + 1` |

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::utils::error::{ExtractError, ExtractResult};

/// Semester of the academic year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Semester {
    First,
    Second,
}

impl Semester {
    pub const ALL: [Semester; 2] = [Semester::First, Semester::Second];

    pub fn number(&self) -> u8 {
        match self {
            Semester::First => 1,
            Semester::Second => 2,
        }
    }

    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(Semester::First),
            2 => Some(Semester::Second),
            _ => None,
        }
    }
}

impl From<Semester> for u8 {
    fn from(semester: Semester) -> u8 {
        semester.number()
    }
}

impl TryFrom<u8> for Semester {
    type Error = String;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        Semester::from_number(n).ok_or_else(|| format!("semester must be 1 or 2, got {}", n))
    }
}

impl fmt::Display for Semester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// Inclusive calendar range of one semester
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SemesterWindow {
    pub semester: Semester,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl SemesterWindow {
    /// Window of `semester` in the academic year starting in `base_year`
    pub fn new(semester: Semester, base_year: i32) -> ExtractResult<Self> {
        let next = base_year.saturating_add(1);
        let (start, end) = match semester {
            Semester::First => (date(base_year, 10, 1)?, date(next, 1, 31)?),
            Semester::Second => (date(next, 2, 1)?, date(next, 5, 31)?),
        };
        Ok(SemesterWindow {
            semester,
            start,
            end,
        })
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        self.start <= day && day <= self.end
    }
}

fn date(year: i32, month: u32, day: u32) -> ExtractResult<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| ExtractError::invalid_date(year, month, day))
}
