//! Command-line argument definitions for the section linker
//!
//! Defines the CLI surface using the clap derive API.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for the registrar section linker
///
/// Reconciles a directory of fetched registrar feed files into a single
/// validated collection of course-section records.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "section-linker",
    version,
    about = "Reconcile registrar data extracts into validated course-section records",
    long_about = "Joins the ten registrar feed extracts (course catalog, section listing, \
                  staff roster, name overrides, permission counts, meeting schedules, \
                  calendar sessions, course areas) into canonical section records. Bad rows \
                  are skipped or flagged with full logging; the batch always completes unless \
                  strict validation is requested."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the section linker
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Link a feed bundle and write the finalized sections as JSON
    Link(LinkArgs),
    /// Link a feed bundle and report statistics without writing output
    Check(CheckArgs),
}

/// Arguments for the link command
#[derive(Debug, Clone, Parser)]
pub struct LinkArgs {
    /// Input path to the fetched feed bundle directory
    ///
    /// Must contain the ten feed files by their canonical names
    /// (course.json, course-section.json, staff.json, ...).
    #[arg(short = 'i', long = "input", value_name = "PATH")]
    pub input_path: PathBuf,

    /// Output path for the finalized section records
    #[arg(
        short = 'o',
        long = "output",
        value_name = "PATH",
        default_value = "sections.json"
    )]
    pub output_path: PathBuf,

    /// Abort the batch on the first schema violation instead of flagging
    #[arg(long = "strict")]
    pub strict: bool,
}

/// Arguments for the check command
#[derive(Debug, Clone, Parser)]
pub struct CheckArgs {
    /// Input path to the fetched feed bundle directory
    #[arg(short = 'i', long = "input", value_name = "PATH")]
    pub input_path: PathBuf,

    /// Abort the batch on the first schema violation instead of flagging
    #[arg(long = "strict")]
    pub strict: bool,
}
