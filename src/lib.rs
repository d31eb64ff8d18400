//! Section Linker Library
//!
//! A Rust library for reconciling registrar data extracts into a single
//! validated collection of canonical course-section records.
//!
//! This library provides tools for:
//! - Parsing raw registrar field formats (dates, times, weekday masks, location codes)
//! - Building lookup tables for courses, staff, and course areas
//! - Joining section rows against those tables across mismatched key granularities
//! - Attaching instructors, permission counts, calendar dates, and meeting schedules
//! - Validating assembled records and flagging (rather than dropping) suspect data

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod buildings;
        pub mod encoding;
        pub mod field_parsers;
        pub mod linker;
    }
    pub mod adapters {
        pub mod filesystem;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::adapters::filesystem::load_bundle;
pub use app::models::feeds::RawBundle;
pub use app::models::{Course, Section, SectionIdentifier};
pub use app::services::linker::{LinkResult, link_sections};
pub use config::{Config, ValidationMode};

/// Result type alias for the section linker
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for section linking operations
///
/// Per-row data problems (missing references, duplicate keys) are never
/// surfaced as errors; they are logged and flagged in-band so a batch can
/// always complete. Only malformed field syntax, feed loading failures, and
/// strict-mode schema violations escape as `Error` values.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A raw field failed strict syntax parsing
    #[error("Format error: {message}")]
    Format { message: String },

    /// An assembled section failed schema validation in strict mode
    #[error("Schema violation for section '{section}': {message}")]
    SchemaViolation { section: String, message: String },

    /// A feed file could not be loaded or deserialized
    #[error("Feed load error for '{file}': {message}")]
    FeedLoad {
        file: String,
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },

    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create a field format error
    pub fn format(message: impl Into<String>) -> Self {
        Self::Format {
            message: message.into(),
        }
    }

    /// Create a schema violation error naming the offending section
    pub fn schema_violation(section: impl Into<String>, message: impl Into<String>) -> Self {
        Self::SchemaViolation {
            section: section.into(),
            message: message.into(),
        }
    }

    /// Create a feed load error with optional deserialization context
    pub fn feed_load(
        file: impl Into<String>,
        message: impl Into<String>,
        source: Option<serde_json::Error>,
    ) -> Self {
        Self::FeedLoad {
            file: file.into(),
            message: message.into(),
            source,
        }
    }

    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::FeedLoad {
            file: "unknown".to_string(),
            message: "JSON deserialization failed".to_string(),
            source: Some(error),
        }
    }
}
