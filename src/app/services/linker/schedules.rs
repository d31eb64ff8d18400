//! Meeting-schedule attachment pass with location merging
//!
//! Each raw meeting row contributes either a new schedule entry or an
//! additional location on an existing entry. Two rows belong to the same
//! entry when their (start time, end time, day set) triples match exactly,
//! with day sets compared in canonical ordered string form. A location
//! repeated within one entry is a data anomaly: the section is flagged and
//! the string is not appended twice.
//!
//! The merge is a linear scan over the section's existing entries per row.
//! Entries per section are bounded by the weekly meeting-pattern count, so
//! the scan stays small.

use super::{LinkStats, SectionMap};
use crate::app::models::Schedule;
use crate::app::models::feeds::ScheduleRow;
use crate::app::services::field_parsers::{parse_location_code, parse_time, parse_weekdays};
use crate::Result;
use tracing::trace;

/// Attach meeting schedules to sections, merging repeated time slots
pub fn attach_schedules(
    sections: &mut SectionMap,
    rows: &[ScheduleRow],
    stats: &mut LinkStats,
) -> Result<()> {
    for row in rows {
        let identifier_string = row.section_id.string_long();
        let Some(section) = sections.get_mut(&identifier_string) else {
            trace!(
                "Nonexistent section '{}' in course-section-schedule feed",
                identifier_string
            );
            stats.orphan_attachment_rows += 1;
            continue;
        };

        let start_time = parse_time(&row.begin_time)?;
        let end_time = parse_time(&row.end_time)?;
        let days = parse_weekdays(&row.meeting_days)?;
        let location = parse_location_code(&row.location).into_name();

        let days_key: String = days.iter().map(|d| d.letter()).collect();

        let mut merged = false;
        let mut duplicate_location = false;
        for entry in &mut section.schedules {
            // merge locations if multiple rows share the time slot
            if entry.start_time == start_time
                && entry.end_time == end_time
                && entry.days_key() == days_key
            {
                if entry.locations.contains(&location) {
                    trace!(
                        "Duplicate location in '{}' section schedule",
                        identifier_string
                    );
                    duplicate_location = true;
                } else {
                    entry.locations.push(location.clone());
                }
                merged = true;
                break;
            }
        }
        if duplicate_location {
            section.potential_error = true;
        }

        if !merged {
            section.schedules.push(Schedule {
                start_time,
                end_time,
                days,
                locations: vec![location],
            });
        }
    }

    Ok(())
}
