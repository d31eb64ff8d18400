//! Command implementations for the section linker CLI
//!
//! Each command loads a feed bundle, runs the linking engine, and reports a
//! summary. The library surfaces typed errors; this layer wraps them with
//! operator-facing context.

use crate::app::adapters::filesystem::load_bundle;
use crate::app::services::linker::{LinkResult, link_sections};
use crate::cli::args::{Args, CheckArgs, Commands, LinkArgs};
use crate::config::Config;
use anyhow::Context;
use colored::Colorize;
use std::fs;
use std::path::Path;
use tracing::info;

/// Dispatch the parsed CLI arguments
pub fn run(args: Args) -> anyhow::Result<()> {
    match args.command {
        Some(Commands::Link(link_args)) => run_link(&link_args),
        Some(Commands::Check(check_args)) => run_check(&check_args),
        None => unreachable!("main shows help when no subcommand is given"),
    }
}

fn link_bundle(input_path: &Path, strict: bool) -> anyhow::Result<LinkResult> {
    let config = if strict {
        Config::strict()
    } else {
        Config::relaxed()
    };

    let bundle = load_bundle(input_path)
        .with_context(|| format!("loading feed bundle from {}", input_path.display()))?;

    link_sections(&bundle, &config).context("linking feed bundle")
}

fn run_link(args: &LinkArgs) -> anyhow::Result<()> {
    let result = link_bundle(&args.input_path, args.strict)?;

    let json = serde_json::to_string_pretty(&result.sections)
        .context("serializing finalized sections")?;
    fs::write(&args.output_path, json)
        .with_context(|| format!("writing {}", args.output_path.display()))?;

    info!(
        "Wrote {} sections to {}",
        result.sections.len(),
        args.output_path.display()
    );
    print_summary(&result);
    Ok(())
}

fn run_check(args: &CheckArgs) -> anyhow::Result<()> {
    let result = link_bundle(&args.input_path, args.strict)?;
    print_summary(&result);
    Ok(())
}

fn print_summary(result: &LinkResult) {
    let stats = &result.stats;
    let flagged = if stats.flagged == 0 {
        format!("{}", stats.flagged).green()
    } else {
        format!("{}", stats.flagged).yellow()
    };

    println!();
    println!("{}", "Link complete".bold());
    println!("  sections emitted:  {}", stats.finalized);
    println!("  flagged:           {}", flagged);
    println!("  clean rate:        {:.1}%", stats.clean_rate());
    println!("  courses indexed:   {}", stats.courses_indexed);
    println!(
        "  dropped (no course): {}",
        if stats.sections_dropped == 0 {
            format!("{}", stats.sections_dropped).green()
        } else {
            format!("{}", stats.sections_dropped).red()
        }
    );
    println!("  orphan rows:       {}", stats.orphan_attachment_rows);
    println!("  schema failures:   {}", stats.schema_failures);
}
