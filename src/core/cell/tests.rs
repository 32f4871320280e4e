//! Regression tests for cell lexing

use super::*;
use crate::core::tokens::{Group, TimeRange};
use pretty_assertions::assert_eq;

fn range(h1: u32, m1: u32, h2: u32, m2: u32) -> TimeRange {
    TimeRange::new(h1, m1, h2, m2).unwrap()
}

#[test]
fn test_full_lesson() {
    let cell = "10.00-13.00\nGraphic Design 2\nGruppo C\nProf.ssa Crescioli\nMultimedia Lab";
    let lessons = parse_cell(cell);

    assert_eq!(
        lessons,
        vec![LessonTemplate::new(range(10, 0, 13, 0), "Graphic Design 2")
            .with_group(Group::C)
            .with_instructor("Crescioli")
            .with_room("Multimedia Lab")]
    );
}

#[test]
fn test_noise_guard() {
    assert!(parse_cell("").is_empty());
    assert!(parse_cell("   \n\n  ").is_empty());
    assert!(parse_cell("10.00-13.00").is_empty());
    assert!(parse_cell("\n  Graphic Design 2  \n").is_empty());
}

#[test]
fn test_two_lessons_in_order() {
    let cell = "9.00-11.00\nFotografia 1\nPhoto Studio\n14:00-16:00\nStoria del cinema\nProf. Rossi";
    let lessons = parse_cell(cell);

    assert_eq!(lessons.len(), 2);
    assert_eq!(lessons[0].course_name, "Fotografia 1");
    assert_eq!(lessons[0].room.as_deref(), Some("Photo Studio"));
    assert_eq!(lessons[1].time_range, range(14, 0, 16, 0));
    assert_eq!(lessons[1].course_name, "Storia del cinema");
    assert_eq!(lessons[1].instructor.as_deref(), Some("Rossi"));
}

#[test]
fn test_incomplete_second_block_dropped() {
    let cell = "10.00-13.00\nGraphic Design 2\n14.00-18.00\nProf. Bianchi\nAula Magna";
    let lessons = parse_cell(cell);

    assert_eq!(lessons.len(), 1);
    assert_eq!(lessons[0].course_name, "Graphic Design 2");
    assert_eq!(lessons[0].instructor, None);
}

#[test]
fn test_lines_before_first_range_discarded() {
    let cell = "1° ANNO\nNote varie\n11.00-13.00\nSemiotica";
    let lessons = parse_cell(cell);

    assert_eq!(lessons.len(), 1);
    assert_eq!(lessons[0].course_name, "Semiotica");
}

#[test]
fn test_year_marker_not_course() {
    let cell = "11.00-13.00\n2\nSemiotica";
    let lessons = parse_cell(cell);

    assert_eq!(lessons[0].course_name, "Semiotica");
}

#[test]
fn test_second_group_line_not_course() {
    let cell = "11.00-13.00\nGruppo A\nGruppo B\nSemiotica";
    let lessons = parse_cell(cell);

    assert_eq!(lessons[0].group, Some(Group::A));
    assert_eq!(lessons[0].course_name, "Semiotica");
}

#[test]
fn test_group_after_course() {
    let cell = "15.00-19.00\nModellistica\nGr. Y";
    let lessons = parse_cell(cell);

    assert_eq!(lessons[0].course_name, "Modellistica");
    assert_eq!(lessons[0].group, Some(Group::Y));
}

#[test]
fn test_instructor_surname_on_next_line() {
    let cell = "9.00-13.00\nDesign del prodotto\nProf.ssa\nFerrari\nLab 3D";
    let lessons = parse_cell(cell);

    assert_eq!(lessons.len(), 1);
    assert_eq!(lessons[0].instructor.as_deref(), Some("Ferrari"));
    assert_eq!(lessons[0].room.as_deref(), Some("Lab 3D"));
}

#[test]
fn test_bare_title_does_not_eat_room() {
    let cell = "9.00-13.00\nDesign del prodotto\nProf.\nAula Magna";
    let lessons = parse_cell(cell);

    assert_eq!(lessons[0].instructor, None);
    assert_eq!(lessons[0].room.as_deref(), Some("Aula Magna"));
}

#[test]
fn test_bare_title_does_not_eat_next_lesson() {
    let cell = "9.00-11.00\nDisegno\nProf.\n11.00-13.00\nAnatomia";
    let lessons = parse_cell(cell);

    assert_eq!(lessons.len(), 2);
    assert_eq!(lessons[1].course_name, "Anatomia");
}

#[test]
fn test_only_first_instructor_and_room() {
    let cell = "9.00-11.00\nDisegno\nProf. Rossi\nProf. Verdi\nAula Magna\nDigital Hub";
    let lessons = parse_cell(cell);

    assert_eq!(lessons[0].instructor.as_deref(), Some("Rossi"));
    assert_eq!(lessons[0].room.as_deref(), Some("Aula Magna"));
}

#[test]
fn test_room_qualifier_stripped() {
    let cell = "9.00-11.00\nInformatica\nLab Mac (Portatili)";
    let lessons = parse_cell(cell);

    assert_eq!(lessons[0].course_name, "Informatica");
    assert_eq!(lessons[0].room.as_deref(), Some("Lab Mac"));
}

#[test]
fn test_room_keyword_in_course_name() {
    let cell = "9.00-11.00\nModellazione 3D\nInformatica";
    let lessons = parse_cell(cell);

    // A room keyword wins over the course slot
    assert_eq!(lessons[0].room.as_deref(), Some("Modellazione 3D"));
    assert_eq!(lessons[0].course_name, "Informatica");
}

#[test]
fn test_clean_room() {
    assert_eq!(clean_room("Lab Mac (portatili)"), "Lab Mac");
    assert_eq!(clean_room("  Multimedia Lab "), "Multimedia Lab");
    assert!(is_room_line("aula conference"));
    assert!(!is_room_line("Semiotica"));
}

#[test]
fn test_course_casing_preserved() {
    let cell = "10:00-12:00\nGRAPHIC DESIGN 2";
    let lessons = parse_cell(cell);

    assert_eq!(lessons[0].course_name, "GRAPHIC DESIGN 2");
}

#[test]
fn test_windows_line_endings() {
    let cell = "10.00-12.00\r\nSemiotica\r\nProf. Gallo\r\n";
    let lessons = parse_cell(cell);

    assert_eq!(lessons[0].course_name, "Semiotica");
    assert_eq!(lessons[0].instructor.as_deref(), Some("Gallo"));
}
