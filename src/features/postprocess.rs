//! Record maintenance on already-built events
//!
//! These operations work on [`LessonEvent`] lists after extraction:
//! merging the two semesters of a course year, shifting wall-clock times,
//! recomputing civil offsets, tagging the study programme and giving shared
//! courses programme-specific names.

use chrono::{DateTime, Duration, FixedOffset};
use indexmap::IndexMap;
use log::debug;

use super::catalog::StudyProgramme;
use crate::core::calendar::{attach_offset, LessonEvent, TimezonePolicy};
use crate::utils::error::{ExtractError, ExtractResult};

/// Course names shared across programmes that get a programme suffix
pub const SHARED_COURSES: [&str; 1] = ["Informatica di Base"];

/// Programmes whose copies of the shared courses are renamed
pub const RENAMED_PROGRAMMES: [StudyProgramme; 4] = [
    StudyProgramme::Design,
    StudyProgramme::Fotografia,
    StudyProgramme::Pittura,
    StudyProgramme::Regia,
];

/// Concatenate two semesters and order the result by start instant.
///
/// The sort is stable, so events starting together keep their order.
pub fn merge_semesters(first: Vec<LessonEvent>, second: Vec<LessonEvent>) -> Vec<LessonEvent> {
    let mut merged = first;
    merged.extend(second);
    merged.sort_by(|a, b| a.start.cmp(&b.start));
    merged
}

/// Shift start and end wall-clock times by `hours` and recompute offsets.
///
/// Events are left untouched when any shifted time falls off the calendar.
pub fn shift_events(
    events: &mut [LessonEvent],
    hours: i64,
    policy: TimezonePolicy,
) -> ExtractResult<()> {
    let out_of_range = ExtractError::CaptureOffsetOutOfRange { hours };
    let shift = Duration::try_hours(hours).ok_or_else(|| out_of_range.clone())?;
    let shift_local = |dt: DateTime<FixedOffset>| {
        dt.naive_local()
            .checked_add_signed(shift)
            .map(|local| attach_offset(local, policy))
            .ok_or_else(|| out_of_range.clone())
    };

    let shifted = events
        .iter()
        .map(|event| Ok((shift_local(event.start)?, shift_local(event.end)?)))
        .collect::<ExtractResult<Vec<_>>>()?;
    for (event, (start, end)) in events.iter_mut().zip(shifted) {
        event.start = start;
        event.end = end;
    }
    debug!("shifted {} event(s) by {}h", events.len(), hours);
    Ok(())
}

/// Recompute the civil offset of every event, keeping wall-clock times.
///
/// Returns how many events had a different offset before.
pub fn fix_offsets(events: &mut [LessonEvent], policy: TimezonePolicy) -> usize {
    let mut fixed = 0;
    for event in events.iter_mut() {
        let start = attach_offset(event.start.naive_local(), policy);
        let end = attach_offset(event.end.naive_local(), policy);
        if start.offset() != event.start.offset() || end.offset() != event.end.offset() {
            fixed += 1;
        }
        event.start = start;
        event.end = end;
    }
    fixed
}

/// Store the study programme on every event
pub fn tag_study_programme(events: &mut [LessonEvent], programme: StudyProgramme) {
    for event in events.iter_mut() {
        event.study_programme = Some(programme);
    }
}

/// Per-programme course renames
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameTable {
    renames: IndexMap<StudyProgramme, IndexMap<String, String>>,
}

impl Default for RenameTable {
    fn default() -> Self {
        let mut table = Self::empty();
        for programme in RENAMED_PROGRAMMES {
            for course in SHARED_COURSES {
                table.insert(
                    programme,
                    course,
                    format!("{} {}", course, programme.display_name()),
                );
            }
        }
        table
    }
}

impl RenameTable {
    pub fn empty() -> Self {
        Self {
            renames: IndexMap::new(),
        }
    }

    pub fn insert(
        &mut self,
        programme: StudyProgramme,
        from: impl Into<String>,
        to: impl Into<String>,
    ) {
        self.renames
            .entry(programme)
            .or_default()
            .insert(from.into(), to.into());
    }

    /// New name of `course` within `programme`, if it is renamed
    pub fn lookup(&self, programme: StudyProgramme, course: &str) -> Option<&str> {
        self.renames
            .get(&programme)
            .and_then(|courses| courses.get(course))
            .map(String::as_str)
    }
}

/// Rename shared courses for `programme`; returns the number of renamed
/// events
pub fn rename_shared_courses(
    events: &mut [LessonEvent],
    programme: StudyProgramme,
    table: &RenameTable,
) -> usize {
    let mut renamed = 0;
    for event in events.iter_mut() {
        if let Some(name) = table.lookup(programme, &event.course) {
            event.course = name.to_string();
            renamed += 1;
        }
    }
    debug!("{}: renamed {} shared course event(s)", programme, renamed);
    renamed
}
