//! Tests for the linking pipeline stages
//!
//! Unit tests for each builder and attachment pass, plus shared fixture
//! helpers for constructing raw rows and pre-joined section maps.


use super::sections::build_section_table;
use super::{LinkStats, SectionMap, courses::build_course_table};
use crate::app::models::feeds::{CourseRow, SectionRow};
use crate::app::models::{CourseCode, SectionIdentifier, Term};

/// The course code used by most fixtures: `CSCI005 HM`
pub fn test_course_code() -> CourseCode {
    CourseCode {
        department: "CSCI".to_string(),
        course_number: 5,
        suffix: String::new(),
        affiliation: "HM".to_string(),
    }
}

/// A catalog row for the fixture course
pub fn test_course_row() -> CourseRow {
    CourseRow {
        code: "CSCI005 HM".to_string(),
        title: "Introduction to Computer Science".to_string(),
        description: "Broad introduction for majors and non-majors.".to_string(),
        campus: "HM".to_string(),
    }
}

/// A section identifier for the fixture course in Spring 2023
pub fn test_section_id(section_number: u16) -> SectionIdentifier {
    SectionIdentifier {
        code: test_course_code(),
        section_number,
        year: 2023,
        term: Term::Spring,
        half: None,
    }
}

/// A section row joined against the fixture course: open, 10/12 seats
pub fn test_section_row(section_id: SectionIdentifier) -> SectionRow {
    let section_number = section_id.section_number;
    SectionRow {
        section_id,
        section_number,
        status: "O".to_string(),
        credits: 3.0,
        seats_total: 12,
        seats_filled: 10,
    }
}

/// Build a section map from fixture section rows, joined against the
/// fixture course
pub fn build_test_sections(section_rows: &[SectionRow]) -> (SectionMap, LinkStats) {
    let mut stats = LinkStats::new();
    let course_table = build_course_table(&[test_course_row()], &mut stats);
    let area_index = Default::default();
    let map = build_section_table(section_rows, &course_table, &area_index, &mut stats);
    (map, stats)
}
