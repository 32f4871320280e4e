//! Weekly recurrence over a semester window

use chrono::{Datelike, Days, NaiveDate, Weekday};

use super::semester::SemesterWindow;
use crate::utils::error::{ExtractError, ExtractResult};

/// Map a weekday index (0 = Monday .. 6 = Sunday) to a weekday
pub fn weekday_from_index(index: u32) -> ExtractResult<Weekday> {
    match index {
        0 => Ok(Weekday::Mon),
        1 => Ok(Weekday::Tue),
        2 => Ok(Weekday::Wed),
        3 => Ok(Weekday::Thu),
        4 => Ok(Weekday::Fri),
        5 => Ok(Weekday::Sat),
        6 => Ok(Weekday::Sun),
        _ => Err(ExtractError::InvalidWeekday { index }),
    }
}

/// Lazily produced dates of one weekday inside an inclusive window.
///
/// A clone taken before consumption walks the same dates independently.
#[derive(Debug, Clone)]
pub struct WeeklyDates {
    cursor: NaiveDate,
    end: NaiveDate,
    weekday: Weekday,
    done: bool,
}

impl WeeklyDates {
    pub fn new(weekday: Weekday, start: NaiveDate, end: NaiveDate) -> Self {
        WeeklyDates {
            cursor: start,
            end,
            weekday,
            done: start > end,
        }
    }
}

impl Iterator for WeeklyDates {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        if self.done {
            return None;
        }

        let ahead = (self.weekday.num_days_from_monday() + 7
            - self.cursor.weekday().num_days_from_monday())
            % 7;
        let day = match self.cursor.checked_add_days(Days::new(u64::from(ahead))) {
            Some(day) if day <= self.end => day,
            _ => {
                self.done = true;
                return None;
            }
        };

        match self.cursor.checked_add_days(Days::new(7)) {
            Some(next) => self.cursor = next,
            None => self.done = true,
        }
        Some(day)
    }
}

/// Dates of the weekday with index `weekday` (0 = Monday) in `window`
pub fn weekly_dates(weekday: u32, window: &SemesterWindow) -> ExtractResult<WeeklyDates> {
    Ok(WeeklyDates::new(
        weekday_from_index(weekday)?,
        window.start,
        window.end,
    ))
}
