//! Course-area index builder
//!
//! Maps canonical course-code strings to their area tag lists. A repeated
//! course code replaces the earlier tag list outright; the feed is
//! authoritative per row, so there is no merge.

use super::{CourseAreaIndex, LinkStats};
use crate::app::models::feeds::CourseAreaRow;
use tracing::trace;

/// Build the area index from the course-area feed
pub fn build_course_area_index(rows: &[CourseAreaRow], stats: &mut LinkStats) -> CourseAreaIndex {
    let mut index = CourseAreaIndex::new();

    for row in rows {
        let code_string = row.course_code.to_string();
        if index.contains_key(&code_string) {
            trace!("Duplicate course '{}' in course-area feed", code_string);
        }
        index.insert(code_string, row.course_areas.clone());
    }

    stats.areas_indexed = index.len();
    index
}
