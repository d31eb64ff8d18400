//! Staff directory builder
//!
//! Merges the canonical staff roster with the preferred-name override feed
//! into an instructor mapping keyed by staff id. Overrides always win,
//! regardless of encounter order, and an override for an id missing from
//! the roster still grows the directory.

use super::{LinkStats, StaffDirectory};
use crate::app::models::Instructor;
use crate::app::models::feeds::{AltStaffRow, StaffRow};
use tracing::trace;

/// Build the instructor directory from the roster and override feeds
pub fn build_staff_directory(
    roster: &[StaffRow],
    overrides: &[AltStaffRow],
    stats: &mut LinkStats,
) -> StaffDirectory {
    let mut directory = StaffDirectory::new();

    for staff in roster {
        directory.insert(
            staff.cx_id.clone(),
            Instructor {
                name: format!("{} {}", staff.first_name, staff.last_name),
            },
        );
    }

    for staff in overrides {
        if !directory.contains_key(&staff.cx_id) {
            trace!("Nonexistent staff '{}' in override feed", staff.cx_id);
            stats.orphan_overrides += 1;
        }
        // overwrite existing staff if there is a preferred name
        directory.insert(
            staff.cx_id.clone(),
            Instructor {
                name: staff.alt_name.clone(),
            },
        );
    }

    stats.staff_indexed = directory.len();
    directory
}
