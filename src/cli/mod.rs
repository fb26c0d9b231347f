//! Command-line interface module
//!
//! This module handles argument parsing and output formatting.
//! It contains no business logic - that belongs in the [`crate::core`] module.
//!
//! Host flags (`--verbose`, `--jar`, `--java`, `--timeout`) are declared on
//! [`Cli`]. Engine flags are registered at runtime from the option schema so
//! the CLI always matches `options.json`.

pub mod commands;
pub mod output;

use crate::config::defaults::{ENV_JAR, ENV_JAVA, ENV_TIMEOUT};
use crate::core::options::{ConvertOptions, OptionValue};
use crate::core::schema::OptionSchema;
use crate::infra::engine::EngineOverrides;
use clap::{Arg, ArgAction, ArgMatches, Command, CommandFactory, FromArgMatches, Parser};
use std::ffi::OsString;
use std::path::PathBuf;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\ncommit: ",
    env!("VERGEN_GIT_SHA"),
    "\nbuilt:  ",
    env!("VERGEN_BUILD_DATE"),
    "\ntarget: ",
    env!("VERGEN_CARGO_TARGET_TRIPLE"),
);

/// Convert PDF documents to JSON, Markdown, HTML and text
///
/// Runs the OpenDataLoader PDF engine (requires Java) on each input.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "opendataloader-pdf")]
#[command(version, long_version = LONG_VERSION, about, long_about = None)]
pub struct Cli {
    /// Input PDF files or folders
    #[arg(required = true, num_args = 1.., value_name = "INPUT")]
    pub inputs: Vec<PathBuf>,

    /// Enable verbose logging (-v for info, -vv for debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Path to the engine JAR
    #[arg(long, env = ENV_JAR, value_name = "PATH")]
    pub jar: Option<PathBuf>,

    /// Java executable used to run the engine
    #[arg(long, env = ENV_JAVA, value_name = "CMD")]
    pub java: Option<String>,

    /// Kill the engine after this many seconds (0 disables)
    #[arg(long, env = ENV_TIMEOUT, value_name = "SECONDS")]
    pub timeout: Option<u64>,
}

impl Cli {
    /// Full command: host flags plus every schema option
    pub fn command_with(schema: &'static OptionSchema) -> Command {
        register_options(Self::command(), schema)
    }

    /// Parse process-style arguments (first item is the program name)
    pub fn try_parse_with<I, T>(
        schema: &'static OptionSchema,
        args: I,
    ) -> Result<(Self, ConvertOptions), clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = Self::command_with(schema).try_get_matches_from(args)?;
        let cli = Self::from_arg_matches(&matches)?;
        let options = options_from_matches(&matches, schema);
        Ok((cli, options))
    }

    /// Engine settings given on the command line or through the environment
    pub fn engine_overrides(&self) -> EngineOverrides {
        EngineOverrides {
            jar: self.jar.clone(),
            java: self.java.clone(),
            timeout: self.timeout,
        }
    }
}

/// Install the stderr tracing subscriber
///
/// WARN by default, `-v` INFO, `-vv` and above DEBUG. `RUST_LOG` wins when set.
pub fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    };
    let filter = tracing_subscriber::EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Register one clap argument per schema option
///
/// Booleans become bare flags; string and list options take one `<value>`,
/// which may start with `-` (page separator templates like `---`).
pub fn register_options(mut cmd: Command, schema: &'static OptionSchema) -> Command {
    for option in schema.options() {
        let mut arg = Arg::new(option.name.as_str())
            .long(option.name.as_str())
            .help(option.description.as_str());
        if let Some(short) = option.short_flag() {
            arg = arg.short(short);
        }
        arg = if option.is_boolean() {
            arg.action(ArgAction::SetTrue)
        } else {
            arg.action(ArgAction::Set)
                .value_name("value")
                .allow_hyphen_values(true)
                .value_parser(clap::value_parser!(String))
        };
        cmd = cmd.arg(arg);
    }
    cmd
}

/// Collect the schema options present in `matches`
///
/// Only flags that were set and non-empty values are copied.
pub fn options_from_matches(matches: &ArgMatches, schema: &OptionSchema) -> ConvertOptions {
    let mut options = ConvertOptions::new();
    for option in schema.options() {
        let name = option.name.as_str();
        let value: Option<OptionValue> = if option.is_boolean() {
            matches.get_flag(name).then_some(OptionValue::Flag(true))
        } else {
            matches
                .get_one::<String>(name)
                .filter(|value| !value.is_empty())
                .map(Into::into)
        };
        if let Some(value) = value {
            let result = options.set_with(schema, name, value);
            debug_assert!(result.is_ok(), "--{name} rejected by its own schema");
        }
    }
    options
}
