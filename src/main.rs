//! opendataloader-pdf CLI
//!
//! Entry point for the opendataloader-pdf command-line application.

use clap::error::ErrorKind;

use opendataloader_pdf::cli::output::{display_error, HELP_HINT};
use opendataloader_pdf::cli::{commands, init_logging, Cli};
use opendataloader_pdf::core::schema::OptionSchema;

#[tokio::main]
async fn main() {
    let schema = OptionSchema::builtin();

    let (cli, options) = match Cli::try_parse_with(schema, std::env::args_os()) {
        Ok(parsed) => parsed,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                let _ = e.print();
                return;
            }
            _ => {
                let rendered = e.to_string();
                let first = rendered.lines().next().unwrap_or_default();
                eprintln!("{first}");
                eprintln!("{HELP_HINT}");
                std::process::exit(1);
            }
        },
    };

    init_logging(cli.verbose);

    if let Err(e) = commands::convert::execute(&cli, &options, schema).await {
        display_error(&e);
        std::process::exit(1);
    }
}
