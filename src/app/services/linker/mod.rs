//! Section linking module: the reconciliation engine
//!
//! This module joins the ten raw registrar feeds into finalized section
//! records. It is organized into sequential pipeline stages:
//!
//! - [`courses`] - Course table builder (course code -> catalog entry)
//! - [`staff`] - Staff directory builder (staff id -> instructor)
//! - [`areas`] - Course-area index builder (course code -> tag list)
//! - [`sections`] - Section table builder (the course/section join)
//! - [`instructors`] - Instructor attachment pass
//! - [`perm_counts`] - Permission-count attachment pass
//! - [`calendar`] - Calendar-session date attachment pass
//! - [`schedules`] - Meeting-schedule attachment with location merging
//! - [`finalize`] - Defaults, schema validation, and emission
//! - [`stats`] - Counters describing what a run did
//!
//! # Dataflow
//!
//! Control flow is strictly sequential and single-pass. Each stage takes the
//! mappings built by earlier stages plus one raw feed, and either builds a
//! new mapping or mutates the in-progress section map. Nothing is shared
//! through ambient state: every table is an explicit argument, preserving
//! the one-directional flow from raw rows to finalized records.
//!
//! # Error policy
//!
//! Per-row problems never abort the batch: bad rows are skipped with a log,
//! dangling references flag the affected section, and duplicates overwrite
//! with a log. Only malformed field syntax in section-scoped feeds, and
//! schema violations under [`ValidationMode::Strict`], surface as errors.

pub mod areas;
pub mod calendar;
pub mod courses;
pub mod finalize;
pub mod instructors;
pub mod perm_counts;
pub mod schedules;
pub mod sections;
pub mod staff;
pub mod stats;

#[cfg(test)]
pub mod tests;

use crate::app::models::feeds::RawBundle;
use crate::app::models::{Course, Instructor, Section};
use crate::config::{Config, ValidationMode};
use crate::Result;
use sections::PartialSection;
use std::collections::{BTreeMap, HashMap};
use tracing::info;

pub use stats::LinkStats;

/// Course table keyed by canonical course-code string
pub type CourseTable = HashMap<String, Course>;

/// Instructor directory keyed by staff id
pub type StaffDirectory = HashMap<String, Instructor>;

/// Area-tag index keyed by canonical course-code string
pub type CourseAreaIndex = HashMap<String, Vec<String>>;

/// In-progress section map keyed by the long section-identifier string
///
/// Ordered so a run emits sections deterministically; the output order
/// carries no meaning.
pub type SectionMap = BTreeMap<String, PartialSection>;

/// The output of one linking run
#[derive(Debug, Clone)]
pub struct LinkResult {
    /// Finalized sections, each either clean or flagged `potential_error`
    pub sections: Vec<Section>,
    /// Counters describing drops, overwrites, and flags along the way
    pub stats: LinkStats,
}

/// Link a raw feed bundle into finalized section records
///
/// This is the engine's single entry point. It performs no I/O: the bundle
/// must already be resident in memory, and the caller owns persistence of
/// the result.
pub fn link_sections(bundle: &RawBundle, config: &Config) -> Result<LinkResult> {
    let mut stats = LinkStats::new();

    info!(
        "Linking {} course rows and {} section rows",
        bundle.courses.len(),
        bundle.course_sections.len()
    );

    let course_table = courses::build_course_table(&bundle.courses, &mut stats);
    let area_index = areas::build_course_area_index(&bundle.course_areas, &mut stats);
    let staff_directory = staff::build_staff_directory(&bundle.staff, &bundle.alt_staff, &mut stats);

    let mut section_map = sections::build_section_table(
        &bundle.course_sections,
        &course_table,
        &area_index,
        &mut stats,
    );

    instructors::attach_instructors(
        &mut section_map,
        &staff_directory,
        &bundle.section_instructors,
        &mut stats,
    );
    perm_counts::attach_perm_counts(&mut section_map, &bundle.perm_counts, &mut stats);
    calendar::attach_calendar(
        &mut section_map,
        &bundle.calendar_sessions,
        &bundle.calendar_session_sections,
        &mut stats,
    )?;
    schedules::attach_schedules(&mut section_map, &bundle.schedules, &mut stats)?;

    let sections = finalize::finalize_sections(section_map, config.validation, &mut stats)?;
    stats.finalized = sections.len();

    info!("{}", stats.summary());

    Ok(LinkResult { sections, stats })
}
