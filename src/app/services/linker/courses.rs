//! Course table builder
//!
//! Deduplicates raw catalog rows into a mapping keyed by canonical course
//! code. The catalog feed repeats rows freely; a repeat that is
//! byte-identical after text normalization is harmless, while a differing
//! repeat is a last-write-wins overwrite that flags the record.

use super::{CourseTable, LinkStats};
use crate::app::models::feeds::CourseRow;
use crate::app::models::{Course, CourseCode, School};
use crate::app::services::encoding::normalize_text;
use tracing::{trace, warn};

/// Build the course table from raw catalog rows
pub fn build_course_table(rows: &[CourseRow], stats: &mut LinkStats) -> CourseTable {
    let mut table = CourseTable::new();

    for row in rows {
        let Some(school) = School::from_code(&row.campus) else {
            trace!(
                "Course '{}' with unknown primary association '{}', skipping",
                row.code, row.campus
            );
            stats.course_rows_skipped += 1;
            continue;
        };

        let code = match CourseCode::parse(&row.code) {
            Ok(code) => code,
            Err(_) => {
                trace!("Malformed course code '{}', skipping", row.code);
                stats.course_rows_skipped += 1;
                continue;
            }
        };

        let code_string = code.to_string();
        let title = normalize_text(&row.title);
        let description = normalize_text(&row.description);

        let mut potential_error = table.contains_key(&code_string);
        if potential_error {
            let prev = &table[&code_string];
            if !prev.potential_error
                && prev.title == title
                && prev.description == description
                && prev.primary_association == school
            {
                // byte-identical repeat of an unflagged record
                potential_error = false;
            } else {
                warn!(
                    "Duplicate course key '{}' with differences, overwriting existing data",
                    row.code
                );
                stats.duplicate_courses += 1;
            }
        }

        table.insert(
            code_string,
            Course {
                title,
                description,
                primary_association: school,
                code,
                potential_error,
            },
        );
    }

    stats.courses_indexed = table.len();
    table
}
