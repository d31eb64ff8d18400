//! Filesystem adapter for feed bundles
//!
//! Loads the ten registrar feed files from a bundle directory, as saved by
//! the fetcher, into an in-memory [`RawBundle`]. Every file must be present
//! and deserialize cleanly; a broken file is a bundle-level failure naming
//! the file, never a silent partial load.

use crate::app::models::feeds::RawBundle;
use crate::constants::feed_files;
use crate::{Error, Result};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Load one feed file from the bundle directory
fn load_feed<T: DeserializeOwned>(dir: &Path, file: &str) -> Result<Vec<T>> {
    let path = dir.join(file);
    let contents = fs::read_to_string(&path)
        .map_err(|e| Error::feed_load(file, format!("cannot read {}: {}", path.display(), e), None))?;

    let rows: Vec<T> = serde_json::from_str(&contents)
        .map_err(|e| Error::feed_load(file, "deserialization failed", Some(e)))?;

    debug!("Loaded {} rows from {}", rows.len(), file);
    Ok(rows)
}

/// Load a complete feed bundle from a directory
pub fn load_bundle(dir: &Path) -> Result<RawBundle> {
    if !dir.is_dir() {
        return Err(Error::configuration(format!(
            "Bundle directory not found: {}",
            dir.display()
        )));
    }

    Ok(RawBundle {
        courses: load_feed(dir, feed_files::COURSE)?,
        course_sections: load_feed(dir, feed_files::COURSE_SECTION)?,
        staff: load_feed(dir, feed_files::STAFF)?,
        alt_staff: load_feed(dir, feed_files::ALT_STAFF)?,
        section_instructors: load_feed(dir, feed_files::SECTION_INSTRUCTOR)?,
        perm_counts: load_feed(dir, feed_files::PERM_COUNT)?,
        calendar_sessions: load_feed(dir, feed_files::CALENDAR_SESSION)?,
        calendar_session_sections: load_feed(dir, feed_files::CALENDAR_SESSION_SECTION)?,
        schedules: load_feed(dir, feed_files::COURSE_SECTION_SCHEDULE)?,
        course_areas: load_feed(dir, feed_files::COURSE_AREA)?,
    })
}
