use clap::Parser;
use section_linker::cli::{args::Args, commands};
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // Default to info-level logging; RUST_LOG overrides
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(()) => {
            process::exit(0);
        }
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

fn show_help_and_commands() {
    println!("section-linker: reconcile registrar data extracts into course-section records");
    println!();
    println!("Commands:");
    println!("  link   -i <feeds-dir> [-o <out.json>] [--strict]   link a bundle and write JSON");
    println!("  check  -i <feeds-dir> [--strict]                    link a bundle, report stats only");
    println!();
    println!("Run 'section-linker --help' for full options.");
}
