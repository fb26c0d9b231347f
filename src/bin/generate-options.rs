//! generate-options
//!
//! Regenerates the Node.js, Python and documentation files derived from
//! `options.json`.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use opendataloader_pdf::cli::commands::generate::{self, GenerateOutcome};
use opendataloader_pdf::cli::init_logging;
use opendataloader_pdf::config::defaults::SCHEMA_FILE_NAME;

/// Generate option bindings and docs from options.json
#[derive(Parser, Debug)]
#[command(name = "generate-options", version, about, long_about = None)]
struct Args {
    /// Option schema to read
    #[arg(long, default_value = SCHEMA_FILE_NAME)]
    schema: PathBuf,

    /// Repository root the generated paths are relative to
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Write nothing; exit 1 if any generated file is out of date
    #[arg(long)]
    check: bool,

    /// Enable verbose logging (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let schema = generate::load_schema(&args.schema)?;
    tracing::info!("Loaded {} options from {}", schema.len(), args.schema.display());

    match generate::execute(&schema, &args.root, args.check)? {
        GenerateOutcome::Written(paths) => {
            for path in paths {
                println!("Generated: {}", path.display());
            }
        }
        GenerateOutcome::Stale(paths) if paths.is_empty() => {
            println!("All generated files are up to date.");
        }
        GenerateOutcome::Stale(paths) => {
            eprintln!("Generated files are out of date:");
            for path in paths {
                eprintln!("  {}", path.display());
            }
            eprintln!("Run 'generate-options' to regenerate them.");
            std::process::exit(1);
        }
    }
    Ok(())
}
