//! Calendar-session date attachment pass
//!
//! Builds a session-id to date-range mapping from the session feed, then
//! resolves each section-calendar link against it. A link naming a missing
//! session degrades gracefully: the section gets 1970-01-01 placeholder
//! dates and an error flag instead of being dropped.
//!
//! Malformed dates in the session feed itself abort the batch. That feed is
//! registrar-wide and tiny; a syntax error there means the extract is
//! broken, not that one section is bad.

use super::{LinkStats, SectionMap};
use crate::app::models::CourseDate;
use crate::app::models::feeds::{CalendarSessionRow, CalendarSessionSectionRow};
use crate::app::services::field_parsers::parse_date;
use crate::constants::PLACEHOLDER_DATE;
use crate::Result;
use std::collections::HashMap;
use tracing::trace;

/// Term date range for one calendar session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SessionDates {
    start: CourseDate,
    end: CourseDate,
}

/// Placeholder substituted when a session cannot be resolved
fn placeholder_date() -> CourseDate {
    let (year, month, day) = PLACEHOLDER_DATE;
    CourseDate { year, month, day }
}

/// Attach term start and end dates to sections via calendar-session links
pub fn attach_calendar(
    sections: &mut SectionMap,
    session_rows: &[CalendarSessionRow],
    link_rows: &[CalendarSessionSectionRow],
    stats: &mut LinkStats,
) -> Result<()> {
    let mut session_map: HashMap<&str, SessionDates> = HashMap::new();
    for session in session_rows {
        session_map.insert(
            &session.session,
            SessionDates {
                start: parse_date(&session.start_date)?,
                end: parse_date(&session.end_date)?,
            },
        );
    }

    for link in link_rows {
        let identifier_string = link.section_id.string_long();
        let Some(section) = sections.get_mut(&identifier_string) else {
            trace!(
                "Nonexistent section '{}' in calendar-session-section feed",
                identifier_string
            );
            stats.orphan_attachment_rows += 1;
            continue;
        };

        match session_map.get(link.session.as_str()) {
            Some(dates) => {
                section.start_date = Some(dates.start);
                section.end_date = Some(dates.end);
            }
            None => {
                trace!("Nonexistent calendar session '{}'", link.session);
                section.potential_error = true;
                section.start_date = Some(placeholder_date());
                section.end_date = Some(placeholder_date());
                stats.missing_sessions += 1;
            }
        }
    }

    Ok(())
}
