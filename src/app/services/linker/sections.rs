//! Section table builder
//!
//! Joins raw section rows against the course table to produce the
//! partially-populated section records the attachment passes complete. A
//! section cannot exist without its course: rows whose course is missing
//! from the catalog are dropped here, which is why the finalized output can
//! guarantee every section's course reference resolves.

use super::{CourseAreaIndex, CourseTable, LinkStats, SectionMap};
use crate::app::models::feeds::SectionRow;
use crate::app::models::{
    Course, CourseDate, Instructor, Schedule, Section, SectionIdentifier, SectionStatus,
};
use tracing::{info, trace};

/// An in-progress section record, before finalization
///
/// This is the builder intermediate the attachment passes mutate. Fields the
/// later passes supply are optional here and required on [`Section`], so a
/// half-built record is never representable as the public output type.
#[derive(Debug, Clone, PartialEq)]
pub struct PartialSection {
    pub course: Course,
    pub status: SectionStatus,
    pub course_areas: Vec<String>,
    pub potential_error: bool,
    pub instructors: Vec<Instructor>,
    pub schedules: Vec<Schedule>,
    pub credits: f64,
    pub identifier: SectionIdentifier,
    pub seats_total: i32,
    pub seats_filled: i32,
    pub perm_count: Option<u32>,
    pub start_date: Option<CourseDate>,
    pub end_date: Option<CourseDate>,

    /// Staff ids already attached, the identity used to reject repeats
    pub(super) attached_staff: Vec<String>,
}

impl PartialSection {
    /// Attach an instructor unless the same staff id is already attached
    ///
    /// Returns `false` for a repeat, which the caller logs but does not
    /// treat as a data error.
    pub fn attach_instructor(&mut self, staff_id: &str, instructor: Instructor) -> bool {
        if self.attached_staff.iter().any(|id| id == staff_id) {
            return false;
        }
        self.attached_staff.push(staff_id.to_string());
        self.instructors.push(instructor);
        true
    }

    /// Convert to a finalized section once all required fields are present
    ///
    /// Returns the partial back unchanged if the calendar pass never
    /// supplied dates.
    pub fn into_section(self) -> std::result::Result<Section, PartialSection> {
        let (Some(start_date), Some(end_date)) = (self.start_date, self.end_date) else {
            return Err(self);
        };

        Ok(Section {
            course: self.course,
            status: self.status,
            course_areas: self.course_areas,
            potential_error: self.potential_error,
            instructors: self.instructors,
            schedules: self.schedules,
            credits: self.credits,
            identifier: self.identifier,
            seats_total: self.seats_total,
            seats_filled: self.seats_filled,
            perm_count: self.perm_count.unwrap_or(crate::constants::DEFAULT_PERM_COUNT),
            start_date,
            end_date,
        })
    }
}

/// Build the section table by joining section rows with the course table
pub fn build_section_table(
    rows: &[SectionRow],
    course_table: &CourseTable,
    area_index: &CourseAreaIndex,
    stats: &mut LinkStats,
) -> SectionMap {
    let mut map = SectionMap::new();

    for row in rows {
        let identifier_string = row.section_id.string_long();
        let course_code_string = row.section_id.course_code_string();

        // Every repeated identifier is an overwrite-and-flag, even when the
        // repeat is field-identical.
        let potential_error = map.contains_key(&identifier_string);
        if potential_error {
            trace!("Duplicate course section '{}'", identifier_string);
            stats.duplicate_sections += 1;
        }

        let Some(course) = course_table.get(&course_code_string) else {
            trace!(
                "Course section '{}' without course, skipping",
                identifier_string
            );
            stats.sections_dropped += 1;
            continue;
        };

        let status = SectionStatus::from_code(&row.status);

        if row.section_number != row.section_id.section_number {
            info!(
                "Mismatching section number for '{}': identifier has {}, section data has {}",
                identifier_string, row.section_id.section_number, row.section_number
            );
        }

        let course_areas = area_index
            .get(&course_code_string)
            .cloned()
            .unwrap_or_default();

        map.insert(
            identifier_string,
            PartialSection {
                course: course.clone(),
                status,
                course_areas,
                potential_error,
                instructors: Vec::new(),
                schedules: Vec::new(),
                credits: row.credits,
                identifier: row.section_id.clone(),
                seats_total: row.seats_total,
                seats_filled: row.seats_filled,
                perm_count: None,
                start_date: None,
                end_date: None,
                attached_staff: Vec::new(),
            },
        );
    }

    stats.sections_created = map.len();
    map
}
