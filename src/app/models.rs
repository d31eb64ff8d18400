//! Data models for registrar section linking
//!
//! This module contains the core data structures for representing courses,
//! sections, and their component records, following the registrar extract
//! conventions of the consortium CX system.

use crate::constants::section_status;
use crate::{Error, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

pub mod feeds;

// =============================================================================
// Registrar Enumerations
// =============================================================================

/// School codes for primary course associations
///
/// Two-letter codes as used by the registrar; a course row carrying any
/// other association is skipped during course-table construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum School {
    #[serde(rename = "PO")]
    Pomona,
    #[serde(rename = "HM")]
    HarveyMudd,
    #[serde(rename = "PZ")]
    Pitzer,
    #[serde(rename = "CM")]
    ClaremontMckenna,
    #[serde(rename = "SC")]
    Scripps,
    #[serde(rename = "CG")]
    Graduate,
}

impl School {
    /// Resolve a raw two-letter school code, `None` if unknown
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "PO" => Some(Self::Pomona),
            "HM" => Some(Self::HarveyMudd),
            "PZ" => Some(Self::Pitzer),
            "CM" => Some(Self::ClaremontMckenna),
            "SC" => Some(Self::Scripps),
            "CG" => Some(Self::Graduate),
            _ => None,
        }
    }
}

/// Academic term
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Term {
    #[serde(rename = "FA")]
    Fall,
    #[serde(rename = "SP")]
    Spring,
    #[serde(rename = "SU")]
    Summer,
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            Self::Fall => "FA",
            Self::Spring => "SP",
            Self::Summer => "SU",
        };
        write!(f, "{}", code)
    }
}

/// Section enrollment status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionStatus {
    Open,
    Closed,
    Reopened,
    Unknown,
}

impl SectionStatus {
    /// Map a raw status code onto the known set, defaulting to `Unknown`
    ///
    /// This is a total mapping: unrecognized codes are data we still want to
    /// carry, so they degrade to `Unknown` rather than failing the row.
    pub fn from_code(code: &str) -> Self {
        match code {
            section_status::OPEN => Self::Open,
            section_status::CLOSED => Self::Closed,
            section_status::REOPENED => Self::Reopened,
            _ => Self::Unknown,
        }
    }
}

/// Weekday, ordered Sunday through Saturday to match the feed mask positions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Weekday {
    #[serde(rename = "U")]
    Sunday,
    #[serde(rename = "M")]
    Monday,
    #[serde(rename = "T")]
    Tuesday,
    #[serde(rename = "W")]
    Wednesday,
    #[serde(rename = "R")]
    Thursday,
    #[serde(rename = "F")]
    Friday,
    #[serde(rename = "S")]
    Saturday,
}

/// Weekdays in feed mask position order (Sunday first)
pub const WEEKDAYS_IN_ORDER: [Weekday; 7] = [
    Weekday::Sunday,
    Weekday::Monday,
    Weekday::Tuesday,
    Weekday::Wednesday,
    Weekday::Thursday,
    Weekday::Friday,
    Weekday::Saturday,
];

impl Weekday {
    /// Single-letter feed representation
    pub fn letter(&self) -> char {
        match self {
            Self::Sunday => 'U',
            Self::Monday => 'M',
            Self::Tuesday => 'T',
            Self::Wednesday => 'W',
            Self::Thursday => 'R',
            Self::Friday => 'F',
            Self::Saturday => 'S',
        }
    }
}

// =============================================================================
// Identifiers
// =============================================================================

/// Calendar date as the registrar reports it
///
/// A plain year/month/day triple. Deliberately not a validating date type:
/// the date parser checks syntax only, and downstream consumers receive
/// whatever the registrar sent (a month of 13 passes through).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseDate {
    pub year: u16,
    pub month: u8,
    pub day: u8,
}

/// Sub-term marker, e.g. the first or second half of a semester
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Half {
    /// Marker prefix, e.g. `F` for fall halves, `P` for spring halves
    pub prefix: String,
    /// Half number within the term
    pub number: u8,
}

impl fmt::Display for Half {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.prefix, self.number)
    }
}

static COURSE_CODE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<dept>[A-Z]{2,4})\s*(?P<num>\d{1,3})(?P<suffix>[A-Z0-9]*)\s+(?P<aff>[A-Z]{2})$")
        .expect("course code regex is valid")
});

/// Term-independent course identity
///
/// A course code identifies equivalent course offerings across semesters, so
/// it carries no term, year, or section information. Its canonical string
/// form (via `Display`) is the join key for the course table and the
/// course-area index.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseCode {
    /// 2-4 letter department code in upper case, e.g. `CSCI`, `PE`, `HSA`
    pub department: String,
    pub course_number: u32,
    /// Letter suffix distinguishing course variants, often empty
    pub suffix: String,
    /// Two-letter school affiliation, e.g. `HM`, `SC`, `JT`
    pub affiliation: String,
}

impl CourseCode {
    /// Parse a raw registrar course code such as `CSCI005 HM` or `HSA010A SC`
    pub fn parse(raw: &str) -> Result<Self> {
        let captures = COURSE_CODE_REGEX
            .captures(raw.trim())
            .ok_or_else(|| Error::format(format!("Malformed course code '{}'", raw)))?;

        let course_number: u32 = captures["num"]
            .parse()
            .map_err(|_| Error::format(format!("Malformed course number in '{}'", raw)))?;

        Ok(Self {
            department: captures["dept"].to_string(),
            course_number,
            suffix: captures["suffix"].to_string(),
            affiliation: captures["aff"].to_string(),
        })
    }
}

impl fmt::Display for CourseCode {
    /// Canonical string form, e.g. `CSCI005 HM`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{:03}{} {}",
            self.department, self.course_number, self.suffix, self.affiliation
        )
    }
}

/// Globally unique identifier for one section offering
///
/// Extends a course code with the section number and term scope. Its
/// canonical long string form is the unique key every section-scoped feed
/// joins on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionIdentifier {
    #[serde(flatten)]
    pub code: CourseCode,
    pub section_number: u16,
    pub year: u16,
    pub term: Term,
    /// Sub-term marker, absent for full-term sections
    pub half: Option<Half>,
}

impl SectionIdentifier {
    /// Canonical long string form, e.g. `CSCI005 HM-01 2023/SP`
    pub fn string_long(&self) -> String {
        format!(
            "{}-{:02} {}/{}{}",
            self.code,
            self.section_number,
            self.year,
            self.term,
            self.half.as_ref().map(Half::to_string).unwrap_or_default()
        )
    }

    /// Course-code string for joins against course-keyed tables
    pub fn course_code_string(&self) -> String {
        self.code.to_string()
    }

    /// Term scope re-serialized to its feed string form, e.g. `SP2023` or `FA2022F1`
    pub fn term_string(&self) -> String {
        format!(
            "{}{}{}",
            self.term,
            self.year,
            self.half.as_ref().map(Half::to_string).unwrap_or_default()
        )
    }
}

// =============================================================================
// Canonical Records
// =============================================================================

/// Term-independent catalog entry a section belongs to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub title: String,
    pub description: String,
    pub primary_association: School,
    pub code: CourseCode,
    /// Data-quality marker; once set it is never cleared by a later pass
    pub potential_error: bool,
}

/// Instructor as presented to downstream consumers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instructor {
    pub name: String,
}

/// One weekly meeting pattern for a section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    /// Seconds since midnight
    pub start_time: u32,
    /// Seconds since midnight
    pub end_time: u32,
    pub days: Vec<Weekday>,
    /// Multiple locations are real data (common for lab sections), kept in
    /// encounter order
    pub locations: Vec<String>,
}

impl Schedule {
    /// Canonical ordered string form of the day set, used to compare day
    /// sets when merging meeting rows
    pub fn days_key(&self) -> String {
        self.days.iter().map(Weekday::letter).collect()
    }
}

/// Seconds in a day; schedule bounds may not exceed this
const MAX_DAY_SECONDS: u32 = 86_400;

/// One finalized, validated section offering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub course: Course,
    pub status: SectionStatus,
    /// Area tags for catalog filtering; not necessarily the course department
    pub course_areas: Vec<String>,
    /// Data-quality marker surfaced to consumers rather than blocking ingestion
    pub potential_error: bool,
    pub instructors: Vec<Instructor>,
    pub schedules: Vec<Schedule>,
    /// Credit value in non-HMC units
    pub credits: f64,
    pub identifier: SectionIdentifier,
    pub seats_total: i32,
    pub seats_filled: i32,
    /// Permission-required override seats requested, separate from seat counts
    pub perm_count: u32,
    pub start_date: CourseDate,
    pub end_date: CourseDate,
}

impl Section {
    /// Validate an assembled section against the output schema
    ///
    /// Checks the shape constraints a downstream consumer relies on. Field
    /// presence is already guaranteed by the type; this covers the value
    /// ranges the registrar occasionally violates.
    pub fn validate(&self) -> Result<()> {
        for schedule in &self.schedules {
            if schedule.end_time > MAX_DAY_SECONDS {
                return Err(Error::format(format!(
                    "Schedule end time {} exceeds one day",
                    schedule.end_time
                )));
            }
            if schedule.start_time > schedule.end_time {
                return Err(Error::format(format!(
                    "Schedule starts at {} after it ends at {}",
                    schedule.start_time, schedule.end_time
                )));
            }
            if schedule.locations.is_empty() {
                return Err(Error::format(
                    "Schedule entry with no locations".to_string(),
                ));
            }
        }

        if self.seats_total < 0 || self.seats_filled < 0 {
            return Err(Error::format(format!(
                "Negative seat count: total {}, filled {}",
                self.seats_total, self.seats_filled
            )));
        }

        if self.credits < 0.0 {
            return Err(Error::format(format!("Negative credits {}", self.credits)));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn csci5() -> CourseCode {
        CourseCode {
            department: "CSCI".to_string(),
            course_number: 5,
            suffix: String::new(),
            affiliation: "HM".to_string(),
        }
    }

    #[test]
    fn test_parse_course_code_plain() {
        let code = CourseCode::parse("CSCI005 HM").unwrap();
        assert_eq!(code, csci5());
    }

    #[test]
    fn test_parse_course_code_with_suffix() {
        let code = CourseCode::parse("HSA010A SC").unwrap();
        assert_eq!(code.department, "HSA");
        assert_eq!(code.course_number, 10);
        assert_eq!(code.suffix, "A");
        assert_eq!(code.affiliation, "SC");
    }

    #[test]
    fn test_parse_course_code_rejects_malformed() {
        assert!(CourseCode::parse("").is_err());
        assert!(CourseCode::parse("CSCI005").is_err());
        assert!(CourseCode::parse("csci005 hm").is_err());
        assert!(CourseCode::parse("C 005 HM").is_err());
    }

    #[test]
    fn test_course_code_roundtrip() {
        let raw = "CSCI005 HM";
        assert_eq!(CourseCode::parse(raw).unwrap().to_string(), raw);
    }

    #[test]
    fn test_section_identifier_strings() {
        let id = SectionIdentifier {
            code: csci5(),
            section_number: 1,
            year: 2023,
            term: Term::Spring,
            half: None,
        };
        assert_eq!(id.string_long(), "CSCI005 HM-01 2023/SP");
        assert_eq!(id.course_code_string(), "CSCI005 HM");
        assert_eq!(id.term_string(), "SP2023");
    }

    #[test]
    fn test_section_identifier_with_half() {
        let id = SectionIdentifier {
            code: csci5(),
            section_number: 2,
            year: 2022,
            term: Term::Fall,
            half: Some(Half {
                prefix: "F".to_string(),
                number: 1,
            }),
        };
        assert_eq!(id.string_long(), "CSCI005 HM-02 2022/FAF1");
        assert_eq!(id.term_string(), "FA2022F1");
    }

    #[test]
    fn test_status_from_code() {
        assert_eq!(SectionStatus::from_code("O"), SectionStatus::Open);
        assert_eq!(SectionStatus::from_code("C"), SectionStatus::Closed);
        assert_eq!(SectionStatus::from_code("R"), SectionStatus::Reopened);
        assert_eq!(SectionStatus::from_code("X"), SectionStatus::Unknown);
        assert_eq!(SectionStatus::from_code(""), SectionStatus::Unknown);
    }

    #[test]
    fn test_days_key_is_positional() {
        let schedule = Schedule {
            start_time: 0,
            end_time: 3600,
            days: vec![Weekday::Monday, Weekday::Wednesday, Weekday::Friday],
            locations: vec!["somewhere".to_string()],
        };
        assert_eq!(schedule.days_key(), "MWF");
    }

    #[test]
    fn test_school_from_code() {
        assert_eq!(School::from_code("HM"), Some(School::HarveyMudd));
        assert_eq!(School::from_code("KG"), None);
    }
}
