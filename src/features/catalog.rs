//! Schedule source catalog
//!
//! Schedule documents are filed by study programme folder and carry the
//! course year and, sometimes, the semester in their file name:
//!
//! ```text
//! GRAPHIC DESIGN/2° ANNO GD 1 SEM.pdf   -> gd-2-s1
//! FASHION/PRIMO ANNO FASHION.pdf        -> fd-1-s1, fd-1-s2
//! ```
//!
//! This module infers those facts and the programme tag stored on events.

use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::table::is_semester_label;
use crate::core::calendar::Semester;
use crate::core::context::ScheduleRequest;
use crate::data::{COURSE_CODES, YEAR_WORDS};

lazy_static! {
    static ref ORDINAL_YEAR: Regex = Regex::new(r"(\d+)°\s*ANNO").unwrap();
    static ref WORD_YEAR: Regex = Regex::new(r"\b(PRIMO|SECONDO|TERZO)\s*ANNO").unwrap();
    static ref BARE_YEAR: Regex = Regex::new(r"\b([123])\s*(?:ANNO|°)").unwrap();
}

/// Study programme an event belongs to (`corsoStudio`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StudyProgramme {
    Design,
    Fashion,
    Cinema,
    Fotografia,
    GraphicDesign,
    InteriorDesign,
    Pittura,
    Regia,
}

impl StudyProgramme {
    pub const ALL: [StudyProgramme; 8] = [
        StudyProgramme::Design,
        StudyProgramme::Fashion,
        StudyProgramme::Cinema,
        StudyProgramme::Fotografia,
        StudyProgramme::GraphicDesign,
        StudyProgramme::InteriorDesign,
        StudyProgramme::Pittura,
        StudyProgramme::Regia,
    ];

    /// Programme for an output folder name (`GD`, `INTERIOR`, `DESIGN`, ...)
    pub fn from_folder_name(folder: &str) -> Option<Self> {
        match folder.trim().to_uppercase().as_str() {
            "DESIGN" => Some(StudyProgramme::Design),
            "FASHION" => Some(StudyProgramme::Fashion),
            "CINEMA" => Some(StudyProgramme::Cinema),
            "FOTOGRAFIA" => Some(StudyProgramme::Fotografia),
            "GD" | "GRAPHIC_DESIGN" => Some(StudyProgramme::GraphicDesign),
            "INTERIOR" | "INTERIOR_DESIGN" => Some(StudyProgramme::InteriorDesign),
            "PITTURA" => Some(StudyProgramme::Pittura),
            "REGIA" => Some(StudyProgramme::Regia),
            _ => None,
        }
    }

    /// Serialized tag, e.g. `GRAPHIC_DESIGN`
    pub fn as_str(&self) -> &'static str {
        match self {
            StudyProgramme::Design => "DESIGN",
            StudyProgramme::Fashion => "FASHION",
            StudyProgramme::Cinema => "CINEMA",
            StudyProgramme::Fotografia => "FOTOGRAFIA",
            StudyProgramme::GraphicDesign => "GRAPHIC_DESIGN",
            StudyProgramme::InteriorDesign => "INTERIOR_DESIGN",
            StudyProgramme::Pittura => "PITTURA",
            StudyProgramme::Regia => "REGIA",
        }
    }

    /// Name used as a suffix for programme-specific course names
    pub fn display_name(&self) -> &'static str {
        match self {
            StudyProgramme::Design => "Design",
            StudyProgramme::Fashion => "Fashion",
            StudyProgramme::Cinema => "Cinema",
            StudyProgramme::Fotografia => "Fotografia",
            StudyProgramme::GraphicDesign => "Graphic Design",
            StudyProgramme::InteriorDesign => "Interior Design",
            StudyProgramme::Pittura => "Pittura",
            StudyProgramme::Regia => "Regia",
        }
    }
}

impl fmt::Display for StudyProgramme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Course code for a source folder name, matching the longest known
/// fragment first
pub fn course_code(folder: &str) -> Option<&'static str> {
    let upper = folder.to_uppercase();
    COURSE_CODES
        .iter()
        .find(|(fragment, _)| upper.contains(fragment))
        .map(|&(_, code)| code)
}

/// Course year (1..=3) mentioned in a schedule file name
pub fn infer_year(file_name: &str) -> Option<u8> {
    let upper = file_name.to_uppercase();

    if let Some(caps) = ORDINAL_YEAR.captures(&upper) {
        return caps[1].parse().ok().filter(|y| (1..=3).contains(y));
    }
    if let Some(caps) = WORD_YEAR.captures(&upper) {
        return YEAR_WORDS.get(&caps[1]).copied();
    }
    BARE_YEAR
        .captures(&upper)
        .and_then(|caps| caps[1].parse().ok())
}

/// Semesters covered by a schedule file; both when the name names none
pub fn infer_semesters(file_name: &str) -> Vec<Semester> {
    Semester::ALL
        .iter()
        .copied()
        .find(|&semester| is_semester_label(file_name, semester))
        .map(|semester| vec![semester])
        .unwrap_or_else(|| Semester::ALL.to_vec())
}

/// Output file stem for one semester, e.g. `gd-2-s1`
pub fn output_stem(code: &str, year: u8, semester: Semester) -> String {
    format!("{}-{}-s{}", code.to_lowercase(), year, semester)
}

/// Output file stem of the merged year, e.g. `gd-2`
pub fn merged_stem(code: &str, year: u8) -> String {
    format!("{}-{}", code.to_lowercase(), year)
}

/// Everything derivable from where a schedule document is filed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleSource {
    pub code: &'static str,
    pub year: u8,
    pub semesters: Vec<Semester>,
}

impl ScheduleSource {
    /// Infer code, year and semesters from a folder and file name.
    ///
    /// Returns `None` when the folder is not a known programme or the file
    /// name has no course year.
    pub fn infer(folder: &str, file_name: &str) -> Option<Self> {
        Some(Self {
            code: course_code(folder)?,
            year: infer_year(file_name)?,
            semesters: infer_semesters(file_name),
        })
    }

    /// One extraction request per covered semester
    pub fn requests(&self) -> Vec<ScheduleRequest> {
        self.semesters
            .iter()
            .map(|&semester| ScheduleRequest::new(self.year, semester))
            .collect()
    }

    pub fn output_stems(&self) -> Vec<String> {
        self.semesters
            .iter()
            .map(|&semester| output_stem(self.code, self.year, semester))
            .collect()
    }
}
