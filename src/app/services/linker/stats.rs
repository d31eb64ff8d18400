//! Counters describing one linking run
//!
//! Every skip, overwrite, dangling reference, and flag increments a counter
//! here, so operators can watch feed quality drift between runs without
//! digging through trace logs.

/// Statistics for one linking run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkStats {
    /// Course rows indexed into the course table
    pub courses_indexed: usize,
    /// Course rows skipped for an unknown school or malformed code
    pub course_rows_skipped: usize,
    /// Course rows that overwrote a differing earlier row for the same code
    pub duplicate_courses: usize,
    /// Staff entries in the directory after overrides
    pub staff_indexed: usize,
    /// Override rows whose staff id was absent from the canonical roster
    pub orphan_overrides: usize,
    /// Course codes in the area index
    pub areas_indexed: usize,
    /// Sections present in the table after the build pass
    pub sections_created: usize,
    /// Section rows dropped because their course does not exist
    pub sections_dropped: usize,
    /// Section rows that overwrote an earlier row for the same identifier
    pub duplicate_sections: usize,
    /// Attachment rows skipped because their section does not exist
    pub orphan_attachment_rows: usize,
    /// Instructor links naming a staff id absent from the directory
    pub unknown_staff: usize,
    /// Calendar links naming a session absent from the session feed
    pub missing_sessions: usize,
    /// Sections that failed schema validation during finalization
    pub schema_failures: usize,
    /// Finalized sections carrying `potential_error`
    pub flagged: usize,
    /// Sections emitted
    pub finalized: usize,
}

impl LinkStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Fraction of emitted sections that are clean, as a percentage
    pub fn clean_rate(&self) -> f64 {
        if self.finalized == 0 {
            100.0
        } else {
            ((self.finalized - self.flagged) as f64 / self.finalized as f64) * 100.0
        }
    }

    /// One-line run summary
    pub fn summary(&self) -> String {
        format!(
            "Link summary: {} sections emitted ({:.1}% clean) | \
             courses: {} indexed, {} skipped, {} duplicates | \
             dropped: {} without course | orphan rows: {} | \
             unknown staff: {} | missing sessions: {} | schema failures: {}",
            self.finalized,
            self.clean_rate(),
            self.courses_indexed,
            self.course_rows_skipped,
            self.duplicate_courses,
            self.sections_dropped,
            self.orphan_attachment_rows,
            self.unknown_staff,
            self.missing_sessions,
            self.schema_failures,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_rate_empty_run() {
        assert_eq!(LinkStats::new().clean_rate(), 100.0);
    }

    #[test]
    fn test_clean_rate_partial() {
        let stats = LinkStats {
            finalized: 4,
            flagged: 1,
            ..Default::default()
        };
        assert_eq!(stats.clean_rate(), 75.0);
    }

    #[test]
    fn test_summary_mentions_counts() {
        let stats = LinkStats {
            finalized: 2,
            sections_dropped: 1,
            ..Default::default()
        };
        let summary = stats.summary();
        assert!(summary.contains("2 sections emitted"));
        assert!(summary.contains("dropped: 1"));
    }
}
