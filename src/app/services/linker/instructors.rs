//! Instructor attachment pass
//!
//! Resolves each section-instructor link row against the section map and
//! the staff directory. An unknown section skips the whole row; an unknown
//! staff id flags the section and moves on; a repeated staff id for the
//! same section is a logged duplicate, not a data error.

use super::{LinkStats, SectionMap, StaffDirectory};
use crate::app::models::feeds::SectionInstructorRow;
use tracing::trace;

/// Attach instructors to sections from the section-instructor feed
pub fn attach_instructors(
    sections: &mut SectionMap,
    staff_directory: &StaffDirectory,
    rows: &[SectionInstructorRow],
    stats: &mut LinkStats,
) {
    for row in rows {
        let identifier_string = row.section_id.string_long();
        let Some(section) = sections.get_mut(&identifier_string) else {
            trace!(
                "Nonexistent section '{}' in section-instructor feed",
                identifier_string
            );
            stats.orphan_attachment_rows += 1;
            continue;
        };

        for staff_id in &row.staff {
            let Some(instructor) = staff_directory.get(staff_id) else {
                trace!(
                    "Nonexistent instructor '{}' for '{}'",
                    staff_id, identifier_string
                );
                section.potential_error = true;
                stats.unknown_staff += 1;
                continue;
            };

            if !section.attach_instructor(staff_id, instructor.clone()) {
                trace!(
                    "Duplicate staff '{}' for '{}'",
                    staff_id, identifier_string
                );
            }
        }
    }
}
