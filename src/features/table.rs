//! Weekly Timetable Table Handling
//!
//! Locates the weekday columns and the semester row of an extracted
//! timetable table, then runs every (weekday, semester) cell through the
//! cell lexer and the calendar expansion.
//!
//! Expected layout (other rows and columns are ignored):
//!
//! ```text
//! |           | LUNEDI    | MARTEDI   | ... | SABATO |
//! | 1° SEM    | <cell>    | <cell>    | ... | <cell> |
//! | 2° SEM    | <cell>    | <cell>    | ... | <cell> |
//! ```
//!
//! A table without a weekday header or without a row for the requested
//! semester is skipped with a diagnostic; the rest of the batch continues.

use indexmap::IndexMap;
use log::{debug, warn};

use crate::core::calendar::{build_event, weekly_dates, Semester, SemesterWindow};
use crate::core::cell::parse_cell;
use crate::core::context::{ExtractOptions, ScheduleRequest};
use crate::data::{fold_accents, FIRST_SEMESTER_MARKERS, SECOND_SEMESTER_MARKERS, WEEKDAY_INDEX, WEEKDAY_TOKENS};
use crate::utils::diagnostics::Diagnostic;
use crate::utils::error::{ExtractError, ExtractOutput, ExtractResult};

/// One table row as produced by the table extractor; `None` for empty cells
pub type RawRow = Vec<Option<String>>;

/// Where the interesting parts of a timetable table are
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableLayout {
    /// Index of the weekday header row
    pub header_row: usize,
    /// Weekday index (0 = Monday) to column index, Monday first
    pub day_columns: IndexMap<u32, usize>,
    /// Index of the row holding the requested semester
    pub semester_row: usize,
}

/// Text of one (weekday, semester) cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCell<'a> {
    pub weekday: u32,
    pub text: &'a str,
}

fn cell_text(row: &[Option<String>], col: usize) -> Option<&str> {
    row.get(col).and_then(|c| c.as_deref())
}

/// Find the weekday header row and the column of each weekday in it
pub fn find_header(table: &[RawRow]) -> Option<(usize, IndexMap<u32, usize>)> {
    let header_row = table.iter().position(|row| {
        row.iter().flatten().any(|cell| {
            let upper = fold_accents(&cell.to_uppercase());
            WEEKDAY_TOKENS.iter().any(|token| upper.contains(token))
        })
    })?;

    let cells: Vec<String> = table[header_row]
        .iter()
        .map(|c| c.as_deref().map(|t| fold_accents(&t.to_uppercase())).unwrap_or_default())
        .collect();

    let mut day_columns = IndexMap::new();
    for token in WEEKDAY_TOKENS {
        if let (Some(col), Some(&weekday)) = (
            cells.iter().position(|cell| cell.contains(token)),
            WEEKDAY_INDEX.get(token),
        ) {
            day_columns.insert(weekday, col);
        }
    }
    Some((header_row, day_columns))
}

/// Upper-case a first-column label and collapse its whitespace
fn normalize_label(label: &str) -> String {
    label
        .to_uppercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Check whether a first-column label marks `semester`
pub fn is_semester_label(label: &str, semester: Semester) -> bool {
    let label = normalize_label(label);
    let markers: &[&str] = match semester {
        Semester::First => &FIRST_SEMESTER_MARKERS,
        Semester::Second => &SECOND_SEMESTER_MARKERS,
    };
    markers.iter().any(|marker| label.contains(marker))
}

/// Find the semester row among the `scan_rows` rows below the header
pub fn find_semester_row(
    table: &[RawRow],
    header_row: usize,
    semester: Semester,
    scan_rows: usize,
) -> Option<usize> {
    table
        .iter()
        .enumerate()
        .skip(header_row + 1)
        .take(scan_rows)
        .find(|(_, row)| {
            cell_text(row, 0)
                .map(|label| is_semester_label(label, semester))
                .unwrap_or(false)
        })
        .map(|(i, _)| i)
}

/// Locate header, weekday columns and semester row of table `index`
pub fn locate(
    table: &[RawRow],
    index: usize,
    semester: Semester,
    options: &ExtractOptions,
) -> ExtractResult<TableLayout> {
    let (header_row, day_columns) =
        find_header(table).ok_or(ExtractError::HeaderNotFound { table: index })?;
    let semester_row = find_semester_row(table, header_row, semester, options.semester_scan_rows)
        .ok_or(ExtractError::SemesterRowNotFound {
            table: index,
            semester,
        })?;

    Ok(TableLayout {
        header_row,
        day_columns,
        semester_row,
    })
}

/// Non-empty cells of the semester row, Monday first
pub fn day_cells<'a>(table: &'a [RawRow], layout: &TableLayout) -> Vec<DayCell<'a>> {
    let row = &table[layout.semester_row];
    layout
        .day_columns
        .iter()
        .filter_map(|(&weekday, &col)| {
            let text = cell_text(row, col)?;
            (!text.trim().is_empty()).then_some(DayCell { weekday, text })
        })
        .collect()
}

/// Extract the events of one table.
///
/// Table-level problems are returned as errors. Templates that cannot be
/// turned into events are reported in the output diagnostics instead.
pub fn extract_table(
    table: &[RawRow],
    index: usize,
    request: &ScheduleRequest,
    options: &ExtractOptions,
) -> ExtractResult<ExtractOutput> {
    let layout = locate(table, index, request.semester, options)?;
    let window = SemesterWindow::new(request.semester, options.base_year)?;
    let mut output = ExtractOutput::default();

    for cell in day_cells(table, &layout) {
        let templates = parse_cell(cell.text);
        debug!(
            "table {}: weekday {} yielded {} lesson(s)",
            index,
            cell.weekday,
            templates.len()
        );
        if templates.is_empty() {
            continue;
        }

        let mut rejected = vec![false; templates.len()];
        for date in weekly_dates(cell.weekday, &window)? {
            for (i, template) in templates.iter().enumerate() {
                if rejected[i] {
                    continue;
                }
                match build_event(template, date, request.year, options) {
                    Ok(event) => output.events.push(event),
                    Err(err) => {
                        warn!("table {}: dropping {:?}: {}", index, template.course_name, err);
                        rejected[i] = true;
                        output.diagnostics.push(
                            Diagnostic::from(&err)
                                .with_table(index)
                                .with_source(cell.text),
                        );
                    }
                }
            }
        }
    }

    Ok(output)
}

/// Extract the events of every table, skipping the ones that fail
pub fn extract_schedule(
    tables: &[Vec<RawRow>],
    request: &ScheduleRequest,
    options: &ExtractOptions,
) -> ExtractOutput {
    let mut output = ExtractOutput::default();
    for (index, table) in tables.iter().enumerate() {
        match extract_table(table, index, request, options) {
            Ok(table_output) => output.extend(table_output),
            Err(err) => {
                warn!("skipping table {}: {}", index, err);
                output.diagnostics.push(Diagnostic::from(&err));
            }
        }
    }
    debug!(
        "extracted {} event(s) from {} table(s)",
        output.events.len(),
        tables.len()
    );
    output
}
