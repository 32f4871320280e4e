//! Integration tests for timetable extraction

use orari::calendar::format_timestamp;
use orari::diagnostics::format_diagnostics;
use orari::{
    extract_schedule, extract_schedule_with_options, extract_year, ExtractOptions, Group,
    LessonEvent, RawRow, ScheduleRequest, Semester, TimezonePolicy,
};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn table(rows: &[&[&str]]) -> Vec<RawRow> {
    rows.iter()
        .map(|row| {
            row.iter()
                .map(|c| (!c.is_empty()).then(|| c.to_string()))
                .collect()
        })
        .collect()
}

/// A second-year page laid out like the printed timetables
fn second_year_page() -> Vec<RawRow> {
    table(&[
        &["ORARIO LEZIONI A.A. 2024/2025 - 2° ANNO", "", "", "", "", "", ""],
        &["", "LUNEDÌ", "MARTEDÌ", "MERCOLEDÌ", "GIOVEDÌ", "VENERDÌ", "SABATO"],
        &[
            "1°\nSEMESTRE",
            "14.00-18.00\nGraphic Design 2\nGruppo C\nProf. ssa\nCrescioli\nMultimedia Lab",
            "9.00-11.00\nStoria dell'Arte\n11.00-13.00\nInglese",
            "",
            "  ",
            "solo una riga",
            "",
        ],
        &[
            "2°\nSEMESTRE",
            "",
            "10.00-12.00\nFotografia\nAula Photo (portatili)",
            "",
            "",
            "",
            "",
        ],
    ])
}

fn starts(events: &[LessonEvent]) -> Vec<String> {
    events.iter().map(|e| format_timestamp(&e.start)).collect()
}

// ============================================================================
// Single table extraction
// ============================================================================

mod single_table {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_first_semester_counts() {
        init_logger();
        let output = extract_schedule(&[second_year_page()], 2, Semester::First);

        // 17 Mondays plus two lessons on each of 18 Tuesdays
        assert_eq!(output.events.len(), 17 + 2 * 18);
        assert!(!output.has_diagnostics());
    }

    #[test]
    fn test_full_lesson_fields() {
        let output = extract_schedule(&[second_year_page()], 2, Semester::First);
        let first = &output.events[0];

        assert_eq!(first.course, "Graphic Design 2");
        assert_eq!(first.group, Some(Group::C));
        assert_eq!(first.instructor.as_deref(), Some("Crescioli"));
        assert_eq!(first.room.as_deref(), Some("Multimedia Lab"));
        assert_eq!(first.year, 2);
        assert_eq!(format_timestamp(&first.start), "2024-10-07T15:00:00+02:00");
        assert_eq!(format_timestamp(&first.end), "2024-10-07T19:00:00+02:00");
    }

    #[test]
    fn test_winter_offset_after_october_switch() {
        let output = extract_schedule(&[second_year_page()], 2, Semester::First);
        let mondays = &output.events[..17];

        assert_eq!(format_timestamp(&mondays[4].start), "2024-11-04T15:00:00+01:00");
        assert_eq!(format_timestamp(&mondays[16].start), "2025-01-27T15:00:00+01:00");
    }

    #[test]
    fn test_order_by_day_then_date_then_cell() {
        let output = extract_schedule(&[second_year_page()], 2, Semester::First);
        let tuesdays = &output.events[17..21];

        let courses: Vec<&str> = tuesdays.iter().map(|e| e.course.as_str()).collect();
        assert_eq!(
            courses,
            vec!["Storia dell'Arte", "Inglese", "Storia dell'Arte", "Inglese"]
        );
        assert_eq!(
            starts(tuesdays),
            vec![
                "2024-10-01T10:00:00+02:00",
                "2024-10-01T12:00:00+02:00",
                "2024-10-08T10:00:00+02:00",
                "2024-10-08T12:00:00+02:00",
            ]
        );
    }

    #[test]
    fn test_second_semester() {
        let output = extract_schedule(&[second_year_page()], 2, Semester::Second);

        assert_eq!(output.events.len(), 17);
        assert!(output.events.iter().all(|e| e.course == "Fotografia"));
        assert_eq!(output.events[0].room.as_deref(), Some("Aula Photo"));
        assert_eq!(
            format_timestamp(&output.events[0].start),
            "2025-02-04T11:00:00+01:00"
        );
        assert_eq!(
            format_timestamp(&output.events[8].start),
            "2025-04-01T11:00:00+02:00"
        );
    }

    #[test]
    fn test_fallback_rule_matches_database() {
        let request = ScheduleRequest::new(2, Semester::First);
        let database = extract_schedule_with_options(
            &[second_year_page()],
            &request,
            &ExtractOptions::default(),
        );
        let rule = extract_schedule_with_options(
            &[second_year_page()],
            &request,
            &ExtractOptions::default().with_timezone(TimezonePolicy::FallbackRule),
        );

        assert_eq!(starts(&database.events), starts(&rule.events));
    }
}

// ============================================================================
// Batch behaviour
// ============================================================================

mod batch {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_broken_tables_are_skipped() {
        init_logger();
        let no_header = table(&[&["legenda", "aule"], &["Aula Magna", "piano terra"]]);
        let no_semester_one = table(&[
            &["", "LUNEDI"],
            &["2° SEM", "9.00-11.00\nDisegno"],
        ]);
        let tables = vec![no_header, second_year_page(), no_semester_one];

        let output = extract_schedule(&tables, 2, Semester::First);

        assert_eq!(output.events.len(), 53);
        assert_eq!(output.diagnostics.len(), 2);
        assert_eq!(output.diagnostics[0].table, Some(0));
        assert_eq!(output.diagnostics[1].table, Some(2));

        let report = format_diagnostics(&output.diagnostics);
        assert!(report.contains("weekday header not found"));
        assert!(report.ends_with("2 skipped items"));
    }

    #[test]
    fn test_rejected_lesson_keeps_rest_of_cell() {
        let page = table(&[
            &["", "VENERDI"],
            &["1 SEM", "22.00-23.30\nCineforum\n9.00-11.00\nRegia 1"],
        ]);
        let output = extract_schedule(&[page], 1, Semester::First);

        assert!(output.events.iter().all(|e| e.course == "Regia 1"));
        assert_eq!(output.diagnostics.len(), 1);
        assert_eq!(output.diagnostics[0].table, Some(0));
        assert!(output.diagnostics[0]
            .source_text
            .as_deref()
            .is_some_and(|text| text.contains("Cineforum")));
    }

    #[test]
    fn test_oversized_capture_offset_is_reported() {
        let options = ExtractOptions::default().with_capture_offset(10_000_000_000);
        let request = ScheduleRequest::new(2, Semester::First);
        let output = extract_schedule_with_options(&[second_year_page()], &request, &options);

        assert!(output.events.is_empty());
        assert_eq!(output.diagnostics.len(), 3);
        assert!(output.diagnostics[0].message.contains("out of range"));
    }

    #[test]
    fn test_empty_batch() {
        let output = extract_schedule(&[], 1, Semester::First);
        assert!(output.events.is_empty());
        assert_eq!(format_diagnostics(&output.diagnostics), "no issues found");
    }
}

// ============================================================================
// Whole course year
// ============================================================================

mod course_year {
    use super::*;
    use pretty_assertions::assert_eq;
    use orari::postprocess::{rename_shared_courses, tag_study_programme, RenameTable};
    use orari::{ScheduleSource, StudyProgramme};

    #[test]
    fn test_extract_year_is_sorted() {
        let output = extract_year(&[second_year_page()], 2, &ExtractOptions::default());

        assert_eq!(output.events.len(), 53 + 17);
        assert!(output
            .events
            .windows(2)
            .all(|pair| pair[0].start <= pair[1].start));
        assert_eq!(output.events[0].course, "Storia dell'Arte");
        assert_eq!(output.events.last().map(|e| e.course.as_str()), Some("Fotografia"));
    }

    #[test]
    fn test_source_drives_requests() {
        let source = ScheduleSource::infer("GRAPHIC DESIGN", "2° ANNO GD.pdf").unwrap();
        assert_eq!(source.output_stems(), vec!["gd-2-s1", "gd-2-s2"]);

        let total: usize = source
            .requests()
            .iter()
            .map(|request| {
                extract_schedule_with_options(
                    &[second_year_page()],
                    request,
                    &ExtractOptions::default(),
                )
                .events
                .len()
            })
            .sum();
        assert_eq!(total, 70);
    }

    #[test]
    fn test_tag_and_rename_serialized() {
        let page = table(&[
            &["", "MERCOLEDI"],
            &["1° SEM", "9.00-11.00\nInformatica di Base\nLab 3D"],
        ]);
        let mut events = extract_schedule(&[page], 1, Semester::First).events;
        tag_study_programme(&mut events, StudyProgramme::Design);
        let renamed = rename_shared_courses(&mut events, StudyProgramme::Design, &RenameTable::default());

        assert_eq!(renamed, events.len());
        let json = serde_json::to_value(&events[0]).unwrap();
        assert_eq!(json["corso"], "Informatica di Base Design");
        assert_eq!(json["corsoStudio"], "DESIGN");
        assert_eq!(json["aula"], "Lab 3D");
        assert_eq!(json["start"], "2024-10-02T10:00:00+02:00");
    }
}
