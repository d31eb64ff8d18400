//! Raw feed row types for the ten registrar extracts
//!
//! These are the loosely-typed records the engine consumes: each mirrors one
//! feed's wire shape after the fetcher has deserialized it, before any
//! reconciliation. Field values are still raw strings wherever the registrar
//! sends unreliable syntax (course codes, dates, times, weekday masks,
//! location codes); the linking passes parse and validate them row by row.

use super::{CourseCode, SectionIdentifier};
use serde::{Deserialize, Serialize};

/// One row of the course catalog feed
///
/// `code` stays raw here: malformed codes are a per-row condition the course
/// table builder handles by skipping, not a bundle-level failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseRow {
    pub code: String,
    pub title: String,
    pub description: String,
    /// Raw primary-association school code
    pub campus: String,
}

/// One row of the course-section feed carrying core numeric/status attributes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionRow {
    pub section_id: SectionIdentifier,
    /// Section number as its own feed column; may disagree with the one
    /// embedded in `section_id`
    pub section_number: u16,
    /// Raw status code, expected in {O, C, R}
    pub status: String,
    pub credits: f64,
    pub seats_total: i32,
    pub seats_filled: i32,
}

/// One row of the canonical staff roster
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffRow {
    pub cx_id: String,
    pub first_name: String,
    pub last_name: String,
}

/// One row of the preferred-name override feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AltStaffRow {
    pub cx_id: String,
    pub alt_name: String,
}

/// One section-instructor link row: a section and its staff ids
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionInstructorRow {
    pub section_id: SectionIdentifier,
    pub staff: Vec<String>,
}

/// One permission-count row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermCountRow {
    pub section_id: SectionIdentifier,
    pub perm_count: u32,
}

/// One calendar-session row defining a term date range
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarSessionRow {
    pub session: String,
    /// Raw `YYYYMMDD` date string
    pub start_date: String,
    /// Raw `YYYYMMDD` date string
    pub end_date: String,
}

/// One section-calendar link row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarSessionSectionRow {
    pub section_id: SectionIdentifier,
    pub session: String,
}

/// One meeting-schedule row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleRow {
    pub section_id: SectionIdentifier,
    /// Raw time, e.g. `935` for 9:35 or `0` for midnight
    pub begin_time: String,
    pub end_time: String,
    /// Seven-character weekday mask, e.g. `-M-W-F-`
    pub meeting_days: String,
    /// Raw campus/building/room code, e.g. `HM SHAN 2465`
    pub location: String,
}

/// One course-area row mapping a course to its area tags
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseAreaRow {
    pub course_code: CourseCode,
    pub course_areas: Vec<String>,
}

/// A complete in-memory bundle of raw feed rows for one linking run
///
/// Loading these from disk or network is the fetcher's job; the engine only
/// ever sees a fully resident bundle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawBundle {
    pub courses: Vec<CourseRow>,
    pub course_sections: Vec<SectionRow>,
    pub staff: Vec<StaffRow>,
    pub alt_staff: Vec<AltStaffRow>,
    pub section_instructors: Vec<SectionInstructorRow>,
    pub perm_counts: Vec<PermCountRow>,
    pub calendar_sessions: Vec<CalendarSessionRow>,
    pub calendar_session_sections: Vec<CalendarSessionSectionRow>,
    pub schedules: Vec<ScheduleRow>,
    pub course_areas: Vec<CourseAreaRow>,
}
