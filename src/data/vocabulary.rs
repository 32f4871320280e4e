//! Fixed Italian vocabulary used by the schedule documents
//!
//! Weekday headers, semester markers, room keywords, instructor titles and
//! folder/course naming conventions. Everything here is immutable and
//! shared by all extraction calls.

use phf::phf_map;

// ============================================================================
// Table headers
// ============================================================================

/// Weekday header tokens in column order, Monday first
pub const WEEKDAY_TOKENS: [&str; 6] = [
    "LUNEDI",
    "MARTEDI",
    "MERCOLEDI",
    "GIOVEDI",
    "VENERDI",
    "SABATO",
];

/// Weekday header token to weekday index (0 = Monday)
pub static WEEKDAY_INDEX: phf::Map<&'static str, u32> = phf_map! {
    "LUNEDI" => 0,
    "MARTEDI" => 1,
    "MERCOLEDI" => 2,
    "GIOVEDI" => 3,
    "VENERDI" => 4,
    "SABATO" => 5,
};

/// Accented capitals folded before header matching (`LUNEDÌ` -> `LUNEDI`)
pub static ACCENT_FOLD: phf::Map<char, char> = phf_map! {
    'À' => 'A',
    'È' => 'E',
    'É' => 'E',
    'Ì' => 'I',
    'Í' => 'I',
    'Ò' => 'O',
    'Ó' => 'O',
    'Ù' => 'U',
    'Ú' => 'U',
};

/// First-column markers of the first-semester row (after normalization)
pub const FIRST_SEMESTER_MARKERS: [&str; 4] = ["1° SEM", "1°SEM", "1 SEM", "PRIMO SEM"];

/// First-column markers of the second-semester row (after normalization)
pub const SECOND_SEMESTER_MARKERS: [&str; 4] = ["2° SEM", "2°SEM", "2 SEM", "SECONDO SEM"];

// ============================================================================
// Cell content
// ============================================================================

/// Keywords that mark a room line (matched case-insensitively)
pub const ROOM_KEYWORDS: [&str; 8] = [
    "LAB",
    "CONFERENCE",
    "MAGNA",
    "DIGITAL",
    "HUB",
    "VISUAL",
    "PHOTO",
    "3D",
];

/// Trailing room qualifier that is not part of the room name
pub const ROOM_QUALIFIER: &str = "(portatili)";

/// Substring that marks an instructor line (matched case-insensitively)
pub const INSTRUCTOR_MARKER: &str = "prof";

/// Instructor title forms, longest first, lowercase
pub const INSTRUCTOR_TITLES: [&str; 5] = ["prof. ssa ", "prof.ssa ", "prof ssa ", "prof. ", "prof "];

/// Allowed class-group letters
pub const GROUP_LETTERS: [char; 5] = ['A', 'B', 'C', 'Y', 'Z'];

// ============================================================================
// Folder and file naming
// ============================================================================

/// Course folder name fragments and their course codes, longest first so
/// that `INTERIOR DESIGN` is not read as `DESIGN`
pub const COURSE_CODES: [(&str, &str); 10] = [
    ("REGIA E VIDEOMAKING", "REGIA"),
    ("INTERIOR DESIGN", "INT"),
    ("GRAPHIC DESIGN", "GD"),
    ("FOTOGRAFIA", "FOTO"),
    ("FASHION", "FD"),
    ("PITTURA", "PIT"),
    ("CINEMA", "CINEMA"),
    ("DESIGN", "DES"),
    ("REGIA", "REGIA"),
    ("GD", "GD"),
];

/// Course-year words found in schedule file names
pub static YEAR_WORDS: phf::Map<&'static str, u8> = phf_map! {
    "PRIMO" => 1,
    "SECONDO" => 2,
    "TERZO" => 3,
};

/// Fold accented capitals to their plain form
pub fn fold_accents(text: &str) -> String {
    text.chars()
        .map(|c| ACCENT_FOLD.get(&c).copied().unwrap_or(c))
        .collect()
}
