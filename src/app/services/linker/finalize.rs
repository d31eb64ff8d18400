//! Finalization and validation stage
//!
//! Converts the assembled partial sections into the finalized output type,
//! filling defaults and running schema validation. The strict/relaxed
//! asymmetry is deliberate: strict mode exists to catch data-model
//! regressions early in development, while relaxed mode keeps production
//! ingestion alive in the face of bad upstream data.

use super::{LinkStats, SectionMap};
use crate::app::models::{CourseDate, Section};
use crate::config::ValidationMode;
use crate::constants::PLACEHOLDER_DATE;
use crate::{Error, Result};
use tracing::{error, warn};

/// Finalize the section map into the output collection
///
/// Every partial either becomes a finalized section or, in strict mode,
/// aborts the batch. A schema failure in relaxed mode emits the section
/// with placeholder values and `potential_error` set.
pub fn finalize_sections(
    sections: SectionMap,
    mode: ValidationMode,
    stats: &mut LinkStats,
) -> Result<Vec<Section>> {
    let mut finalized = Vec::with_capacity(sections.len());

    for (identifier_string, partial) in sections {
        let section = match partial.into_section() {
            Ok(section) => section,
            Err(partial) => {
                // required fields missing: the calendar pass never reached
                // this section
                let reason = "missing calendar dates";
                stats.schema_failures += 1;
                match mode {
                    ValidationMode::Relaxed => {
                        warn!("Invalid section '{}': {}", identifier_string, reason);
                    }
                    ValidationMode::Strict => {
                        error!("Invalid section '{}': {}", identifier_string, reason);
                        return Err(Error::schema_violation(identifier_string, reason));
                    }
                }

                let (year, month, day) = PLACEHOLDER_DATE;
                let placeholder = CourseDate { year, month, day };
                let mut degraded = partial;
                degraded.potential_error = true;
                degraded.start_date = Some(placeholder);
                degraded.end_date = Some(placeholder);
                degraded
                    .into_section()
                    .unwrap_or_else(|_| unreachable!("all required fields were just supplied"))
            }
        };

        let section = match section.validate() {
            Ok(()) => section,
            Err(validation_error) => {
                stats.schema_failures += 1;
                match mode {
                    ValidationMode::Relaxed => {
                        warn!(
                            "Invalid section '{}': {}",
                            identifier_string, validation_error
                        );
                    }
                    ValidationMode::Strict => {
                        error!(
                            "Invalid section '{}': {}",
                            identifier_string, validation_error
                        );
                        return Err(Error::schema_violation(
                            identifier_string,
                            validation_error.to_string(),
                        ));
                    }
                }
                let mut flagged = section;
                flagged.potential_error = true;
                flagged
            }
        };

        if section.potential_error {
            stats.flagged += 1;
        }
        finalized.push(section);
    }

    Ok(finalized)
}
