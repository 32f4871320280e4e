//! Extraction options and per-schedule request parameters

use serde::{Deserialize, Serialize};

use super::calendar::{Semester, TimezonePolicy};
#[cfg(feature = "config")]
use crate::utils::error::{ExtractError, ExtractResult};

/// Capture offset: hours added to every extracted wall-clock time before
/// the civil offset is attached. The source documents print lesson hours
/// one hour behind the intended time. Apply it exactly once.
pub const CAPTURE_OFFSET_HOURS: i64 = 1;

/// Rows below the weekday header searched for a semester marker
pub const SEMESTER_SCAN_ROWS: usize = 10;

/// Options for schedule extraction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExtractOptions {
    /// Calendar year in which the academic year starts
    /// Default: 2024
    pub base_year: i32,

    /// Capture-offset correction in hours, see [`CAPTURE_OFFSET_HOURS`]
    /// Default: 1
    pub capture_offset_hours: i64,

    /// Source of civil UTC offsets
    /// Default: database
    pub timezone: TimezonePolicy,

    /// Rows below the header searched for the semester row
    /// Default: 10
    pub semester_scan_rows: usize,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            base_year: 2024,
            capture_offset_hours: CAPTURE_OFFSET_HOURS,
            timezone: TimezonePolicy::Database,
            semester_scan_rows: SEMESTER_SCAN_ROWS,
        }
    }
}

impl ExtractOptions {
    /// Create new options with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Options for the academic year starting in `base_year`
    pub fn for_year(base_year: i32) -> Self {
        Self {
            base_year,
            ..Self::default()
        }
    }

    /// Options that never consult the timezone database
    pub fn offline(base_year: i32) -> Self {
        Self {
            base_year,
            timezone: TimezonePolicy::FallbackRule,
            ..Self::default()
        }
    }

    pub fn with_timezone(mut self, timezone: TimezonePolicy) -> Self {
        self.timezone = timezone;
        self
    }

    pub fn with_capture_offset(mut self, hours: i64) -> Self {
        self.capture_offset_hours = hours;
        self
    }

    /// Load options from a TOML document; missing keys keep their defaults
    #[cfg(feature = "config")]
    pub fn from_toml_str(source: &str) -> ExtractResult<Self> {
        toml::from_str(source).map_err(|e| ExtractError::config(e.to_string()))
    }
}

/// What one schedule document is expected to contain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRequest {
    /// Course year (1..=3) stamped on every event
    pub year: u8,
    pub semester: Semester,
}

impl ScheduleRequest {
    pub fn new(year: u8, semester: Semester) -> Self {
        Self { year, semester }
    }
}
