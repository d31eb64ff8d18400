//! Application constants for the section linker
//!
//! This module contains the fixed registrar code sets, feed file names, and
//! fallback values used throughout the linking pipeline.

// =============================================================================
// Feed File Names
// =============================================================================

/// Canonical file names for the ten registrar feed extracts, as saved by the
/// fetcher. The filesystem adapter loads a bundle by these exact names.
pub mod feed_files {
    pub const COURSE: &str = "course.json";
    pub const COURSE_SECTION: &str = "course-section.json";
    pub const STAFF: &str = "staff.json";
    pub const ALT_STAFF: &str = "alt-staff.json";
    pub const SECTION_INSTRUCTOR: &str = "section-instructor.json";
    pub const PERM_COUNT: &str = "perm-count.json";
    pub const CALENDAR_SESSION: &str = "calendar-session.json";
    pub const CALENDAR_SESSION_SECTION: &str = "calendar-session-section.json";
    pub const COURSE_SECTION_SCHEDULE: &str = "course-section-schedule.json";
    pub const COURSE_AREA: &str = "course-area.json";

    /// All feed files a complete bundle directory must contain
    pub const ALL: &[&str] = &[
        COURSE,
        COURSE_SECTION,
        STAFF,
        ALT_STAFF,
        SECTION_INSTRUCTOR,
        PERM_COUNT,
        CALENDAR_SESSION,
        CALENDAR_SESSION_SECTION,
        COURSE_SECTION_SCHEDULE,
        COURSE_AREA,
    ];
}

// =============================================================================
// Registrar Code Sets
// =============================================================================

/// Section status codes as they appear in the course-section feed
pub mod section_status {
    pub const OPEN: &str = "O";
    pub const CLOSED: &str = "C";
    pub const REOPENED: &str = "R";

    /// The complete known set; anything else maps to an unknown status
    pub const KNOWN: &[&str] = &[OPEN, CLOSED, REOPENED];
}

/// Weekday letters in feed position order (Sunday through Saturday)
///
/// A meeting-days mask is exactly seven characters; position `i` holds either
/// `-` or this letter.
pub const WEEKDAY_LETTERS: [char; 7] = ['U', 'M', 'T', 'W', 'R', 'F', 'S'];

/// Special-cased building codes resolved before the campus lookup
pub mod location_codes {
    pub const ARRANGED: &str = "ARR";
    pub const ARRANGED_NAME: &str = "Arranged location";
    pub const TBA: &str = "TBA";
    pub const TBA_NAME: &str = "To be announced";
}

// =============================================================================
// Fallback Values
// =============================================================================

/// Placeholder calendar date substituted when a section's calendar session
/// cannot be resolved (1970-01-01, flagged rather than dropped)
pub const PLACEHOLDER_DATE: (u16, u8, u8) = (1970, 1, 1);

/// Permission count applied when no perm-count row attaches to a section
pub const DEFAULT_PERM_COUNT: u32 = 0;
