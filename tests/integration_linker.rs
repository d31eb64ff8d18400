//! Integration tests for the section linking engine
//!
//! These tests exercise the full pipeline from raw feed rows through
//! finalized section records, including the filesystem loader, using
//! realistic registrar data shapes.

use section_linker::app::models::feeds::{
    CalendarSessionRow, CalendarSessionSectionRow, CourseAreaRow, CourseRow, RawBundle,
    ScheduleRow, SectionInstructorRow, SectionRow, StaffRow,
};
use section_linker::app::models::{
    CourseCode, CourseDate, SectionIdentifier, SectionStatus, Term, Weekday,
};
use section_linker::{Config, Error, link_sections, load_bundle};
use std::fs;
use tempfile::TempDir;

fn csci5_id(section_number: u16) -> SectionIdentifier {
    SectionIdentifier {
        code: CourseCode {
            department: "CSCI".to_string(),
            course_number: 5,
            suffix: String::new(),
            affiliation: "HM".to_string(),
        },
        section_number,
        year: 2023,
        term: Term::Spring,
        half: None,
    }
}

/// A bundle with one fully-linked section: course, section row, one
/// instructor, a calendar session, one meeting row, and course areas.
fn full_bundle() -> RawBundle {
    RawBundle {
        courses: vec![CourseRow {
            code: "CSCI005 HM".to_string(),
            title: "Introduction to Computer Science".to_string(),
            description: "CS for everyone".to_string(),
            campus: "HM".to_string(),
        }],
        course_sections: vec![SectionRow {
            section_id: csci5_id(1),
            section_number: 1,
            status: "O".to_string(),
            credits: 3.0,
            seats_total: 12,
            seats_filled: 10,
        }],
        staff: vec![StaffRow {
            cx_id: "40000001".to_string(),
            first_name: "Zachary".to_string(),
            last_name: "Dodds".to_string(),
        }],
        alt_staff: vec![],
        section_instructors: vec![SectionInstructorRow {
            section_id: csci5_id(1),
            staff: vec!["40000001".to_string()],
        }],
        perm_counts: vec![],
        calendar_sessions: vec![CalendarSessionRow {
            session: "SP2023".to_string(),
            start_date: "20230117".to_string(),
            end_date: "20230512".to_string(),
        }],
        calendar_session_sections: vec![CalendarSessionSectionRow {
            section_id: csci5_id(1),
            session: "SP2023".to_string(),
        }],
        schedules: vec![ScheduleRow {
            section_id: csci5_id(1),
            begin_time: "0900".to_string(),
            end_time: "0950".to_string(),
            meeting_days: "-M-W-F-".to_string(),
            location: "HM SHAN 2465".to_string(),
        }],
        course_areas: vec![CourseAreaRow {
            course_code: csci5_id(1).code,
            course_areas: vec!["CSCI".to_string(), "1A5".to_string()],
        }],
    }
}

#[test]
fn test_full_bundle_links_one_clean_section() {
    let result = link_sections(&full_bundle(), &Config::relaxed()).unwrap();

    assert_eq!(result.sections.len(), 1);
    let section = &result.sections[0];

    assert_eq!(section.identifier.string_long(), "CSCI005 HM-01 2023/SP");
    assert_eq!(section.course.title, "Introduction to Computer Science");
    assert_eq!(section.status, SectionStatus::Open);
    assert_eq!(section.credits, 3.0);
    assert_eq!(section.seats_total, 12);
    assert_eq!(section.seats_filled, 10);
    assert_eq!(section.perm_count, 0);
    assert!(!section.potential_error);

    assert_eq!(section.instructors.len(), 1);
    assert_eq!(section.instructors[0].name, "Zachary Dodds");

    assert_eq!(
        section.start_date,
        CourseDate {
            year: 2023,
            month: 1,
            day: 17
        }
    );
    assert_eq!(
        section.end_date,
        CourseDate {
            year: 2023,
            month: 5,
            day: 12
        }
    );

    assert_eq!(section.schedules.len(), 1);
    let schedule = &section.schedules[0];
    assert_eq!(schedule.start_time, 9 * 3600);
    assert_eq!(schedule.end_time, 9 * 3600 + 50 * 60);
    assert_eq!(
        schedule.days,
        vec![Weekday::Monday, Weekday::Wednesday, Weekday::Friday]
    );
    assert_eq!(schedule.locations, vec!["Shanahan Center 2465".to_string()]);

    assert_eq!(
        section.course_areas,
        vec!["CSCI".to_string(), "1A5".to_string()]
    );

    assert_eq!(result.stats.finalized, 1);
    assert_eq!(result.stats.flagged, 0);
    assert_eq!(result.stats.schema_failures, 0);
}

#[test]
fn test_section_without_course_is_dropped() {
    let mut bundle = full_bundle();
    bundle.courses.clear();

    let result = link_sections(&bundle, &Config::relaxed()).unwrap();
    assert!(result.sections.is_empty());
    assert_eq!(result.stats.sections_dropped, 1);
}

#[test]
fn test_missing_session_gets_placeholder_dates_and_flag() {
    let mut bundle = full_bundle();
    bundle.calendar_session_sections.clear();

    let result = link_sections(&bundle, &Config::relaxed()).unwrap();
    assert_eq!(result.sections.len(), 1);
    let section = &result.sections[0];

    assert!(section.potential_error);
    assert_eq!(
        section.start_date,
        CourseDate {
            year: 1970,
            month: 1,
            day: 1
        }
    );
    assert_eq!(section.start_date, section.end_date);
}

#[test]
fn test_missing_dates_flag_in_relaxed_but_abort_in_strict() {
    // No calendar feed at all, so the section reaches finalization
    // without dates.
    let mut bundle = full_bundle();
    bundle.calendar_sessions.clear();
    bundle.calendar_session_sections.clear();

    let relaxed = link_sections(&bundle, &Config::relaxed()).unwrap();
    assert_eq!(relaxed.sections.len(), 1);
    assert!(relaxed.sections[0].potential_error);
    assert_eq!(relaxed.stats.schema_failures, 1);
    assert_eq!(
        relaxed.sections[0].start_date,
        CourseDate {
            year: 1970,
            month: 1,
            day: 1
        }
    );

    let strict = link_sections(&bundle, &Config::strict());
    assert!(matches!(strict, Err(Error::SchemaViolation { .. })));
}

#[test]
fn test_unknown_staff_id_flags_section() {
    let mut bundle = full_bundle();
    bundle.section_instructors[0]
        .staff
        .push("99999999".to_string());

    let result = link_sections(&bundle, &Config::relaxed()).unwrap();
    assert_eq!(result.sections.len(), 1);
    assert!(result.sections[0].potential_error);
    // The known instructor is still attached.
    assert_eq!(result.sections[0].instructors.len(), 1);
    assert_eq!(result.stats.unknown_staff, 1);
}

#[test]
fn test_malformed_meeting_time_fails_the_batch() {
    let mut bundle = full_bundle();
    bundle.schedules[0].begin_time = "2500".to_string();

    let result = link_sections(&bundle, &Config::relaxed());
    assert!(matches!(result, Err(Error::Format { .. })));
}

#[test]
fn test_bundle_loaded_from_disk_links_end_to_end() {
    let tmp = TempDir::new().unwrap();
    let bundle = full_bundle();

    fs::write(
        tmp.path().join("course.json"),
        serde_json::to_string(&bundle.courses).unwrap(),
    )
    .unwrap();
    fs::write(
        tmp.path().join("course-section.json"),
        serde_json::to_string(&bundle.course_sections).unwrap(),
    )
    .unwrap();
    fs::write(
        tmp.path().join("staff.json"),
        serde_json::to_string(&bundle.staff).unwrap(),
    )
    .unwrap();
    fs::write(
        tmp.path().join("alt-staff.json"),
        serde_json::to_string(&bundle.alt_staff).unwrap(),
    )
    .unwrap();
    fs::write(
        tmp.path().join("section-instructor.json"),
        serde_json::to_string(&bundle.section_instructors).unwrap(),
    )
    .unwrap();
    fs::write(
        tmp.path().join("perm-count.json"),
        serde_json::to_string(&bundle.perm_counts).unwrap(),
    )
    .unwrap();
    fs::write(
        tmp.path().join("calendar-session.json"),
        serde_json::to_string(&bundle.calendar_sessions).unwrap(),
    )
    .unwrap();
    fs::write(
        tmp.path().join("calendar-session-section.json"),
        serde_json::to_string(&bundle.calendar_session_sections).unwrap(),
    )
    .unwrap();
    fs::write(
        tmp.path().join("course-section-schedule.json"),
        serde_json::to_string(&bundle.schedules).unwrap(),
    )
    .unwrap();
    fs::write(
        tmp.path().join("course-area.json"),
        serde_json::to_string(&bundle.course_areas).unwrap(),
    )
    .unwrap();

    let loaded = load_bundle(tmp.path()).unwrap();
    assert_eq!(loaded, bundle);

    let result = link_sections(&loaded, &Config::relaxed()).unwrap();
    assert_eq!(result.sections.len(), 1);
    assert!(!result.sections[0].potential_error);
}

#[test]
fn test_output_serializes_with_camel_case_fields() {
    let result = link_sections(&full_bundle(), &Config::relaxed()).unwrap();
    let json = serde_json::to_string(&result.sections).unwrap();

    assert!(json.contains("\"seatsTotal\":12"));
    assert!(json.contains("\"permCount\":0"));
    assert!(json.contains("\"courseNumber\":5"));
    assert!(json.contains("\"startDate\""));
    assert!(json.contains("\"potentialError\":false"));
}
