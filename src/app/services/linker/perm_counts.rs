//! Permission-count attachment pass
//!
//! Sets each section's perm count from the perm-count feed. Last write
//! wins; there is no duplicate detection because the feed legitimately
//! re-reports counts. Sections with no row keep their default of zero.

use super::{LinkStats, SectionMap};
use crate::app::models::feeds::PermCountRow;
use tracing::trace;

/// Attach permission counts to sections
pub fn attach_perm_counts(sections: &mut SectionMap, rows: &[PermCountRow], stats: &mut LinkStats) {
    for row in rows {
        let identifier_string = row.section_id.string_long();
        let Some(section) = sections.get_mut(&identifier_string) else {
            trace!(
                "Nonexistent section '{}' in perm-count feed",
                identifier_string
            );
            stats.orphan_attachment_rows += 1;
            continue;
        };
        section.perm_count = Some(row.perm_count);
    }
}
