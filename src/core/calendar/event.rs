//! Dated lesson records
//!
//! [`build_event`] turns a lesson template and one concrete date into a
//! [`LessonEvent`] with zoned start and end timestamps. The serialized
//! field names are the contract with the downstream enrichment, renaming
//! and merge steps.

use chrono::{DateTime, Duration, FixedOffset, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::dst::attach_offset;
use crate::core::cell::LessonTemplate;
use crate::core::context::ExtractOptions;
use crate::core::tokens::Group;
use crate::features::catalog::StudyProgramme;
use crate::utils::error::{ExtractError, ExtractResult};

/// One dated lesson
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonEvent {
    #[serde(rename = "corso")]
    pub course: String,
    /// Course identifier in the external registry, filled by enrichment
    #[serde(rename = "oidCorso")]
    pub external_course_id: Option<String>,
    /// Course-group identifier in the external registry
    #[serde(rename = "oidCorsi")]
    pub external_group_id: Option<String>,
    /// Course year, 1..=3
    #[serde(rename = "anno")]
    pub year: u8,
    #[serde(rename = "gruppo")]
    pub group: Option<Group>,
    #[serde(rename = "aula")]
    pub room: Option<String>,
    #[serde(rename = "docente")]
    pub instructor: Option<String>,
    #[serde(with = "timestamp")]
    pub start: DateTime<FixedOffset>,
    #[serde(with = "timestamp")]
    pub end: DateTime<FixedOffset>,
    pub note: Option<String>,
    #[serde(
        rename = "corsoStudio",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub study_programme: Option<StudyProgramme>,
}

impl LessonEvent {
    /// Civil date the lesson takes place on
    pub fn date(&self) -> NaiveDate {
        self.start.date_naive()
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }
}

/// Build the event for `template` on `date`.
///
/// Both wall-clock endpoints are shifted by the capture offset before the
/// civil offset is attached.
pub fn build_event(
    template: &LessonTemplate,
    date: NaiveDate,
    year: u8,
    options: &ExtractOptions,
) -> ExtractResult<LessonEvent> {
    let range = template.time_range;
    if range.end() <= range.start() {
        return Err(ExtractError::InvertedTimeRange { range });
    }

    let hours = options.capture_offset_hours;
    let shift_local = |time: NaiveTime| {
        Duration::try_hours(hours)
            .and_then(|shift| date.and_time(time).checked_add_signed(shift))
            .ok_or(ExtractError::CaptureOffsetOutOfRange { hours })
    };
    let start_local = shift_local(range.start())?;
    let end_local = shift_local(range.end())?;
    if start_local.date() != date || end_local.date() != date {
        return Err(ExtractError::CrossesMidnight { range });
    }

    Ok(LessonEvent {
        course: template.course_name.clone(),
        external_course_id: None,
        external_group_id: None,
        year,
        group: template.group,
        room: template.room.clone(),
        instructor: template.instructor.clone(),
        start: attach_offset(start_local, options.timezone),
        end: attach_offset(end_local, options.timezone),
        note: None,
        study_programme: None,
    })
}

/// Serde adapter for `YYYY-MM-DDTHH:MM:SS±HH:MM` timestamps
pub mod timestamp {
    use chrono::{DateTime, FixedOffset};
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::core::calendar::dst::format_timestamp;

    pub fn serialize<S: Serializer>(
        dt: &DateTime<FixedOffset>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format_timestamp(dt))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<DateTime<FixedOffset>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw).map_err(serde::de::Error::custom)
    }
}
