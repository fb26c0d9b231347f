//! Error types for opendataloader-pdf
//!
//! Domain-specific error types using thiserror.

use std::path::PathBuf;
use thiserror::Error;

/// Option schema errors
///
/// Raised while loading `options.json`. A schema that fails any of these
/// checks is rejected as a whole.
#[derive(Error, Debug)]
pub enum SchemaError {
    /// Schema file could not be read
    #[error("Failed to read option schema '{}': {error}", path.display())]
    Read { path: PathBuf, error: String },

    /// Schema is not valid JSON or has an unknown option type
    #[error("Failed to parse option schema: {0}")]
    Parse(String),

    /// Two options share a name
    #[error("Duplicate option name '{name}'")]
    DuplicateName { name: String },

    /// Two options share a short flag
    #[error("Duplicate short flag '-{short}' (used by '{first}' and '{second}')")]
    DuplicateShortFlag {
        short: char,
        first: String,
        second: String,
    },

    /// Name is not kebab-case
    #[error("Option name '{name}' is not kebab-case")]
    InvalidName { name: String },

    /// Short flag is not a single ASCII letter
    #[error("Option '{name}' has invalid short flag '{short}': expected a single ASCII letter")]
    InvalidShortFlag { name: String, short: String },

    /// Name or short flag collides with one the CLI reserves
    #[error("Option '{name}' uses reserved flag '{flag}'")]
    ReservedFlag { name: String, flag: String },

    /// Default value does not match the option kind or value set
    #[error("Option '{name}' has invalid default: {reason}")]
    InvalidDefault { name: String, reason: String },

    /// Enumerated values declared on a boolean option
    #[error("Boolean option '{name}' cannot declare a value set")]
    ValuesOnBoolean { name: String },
}

/// Option value errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OptionError {
    /// Option name not present in the schema
    #[error("Unknown option '{name}'")]
    Unknown { name: String },

    /// Invalid option type
    #[error("Option '{name}' has invalid type: expected {expected}, got {got}")]
    InvalidType {
        name: String,
        expected: String,
        got: String,
    },

    /// Invalid choice value
    #[error("Invalid value '{value}' for option '--{name}'. Valid values: {}", choices.join(", "))]
    InvalidChoice {
        name: String,
        value: String,
        choices: Vec<String>,
    },
}

/// Engine invocation errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// Engine JAR is missing
    #[error("JAR file not found at {}. Please run the build script first.", path.display())]
    ArtifactNotFound { path: PathBuf },

    /// Java runtime cannot be resolved
    #[error("'{command}' command not found. Please ensure Java is installed and in your system's PATH.")]
    CommandNotFound { command: String },

    /// Process could not be started
    #[error("Failed to start '{command}': {error}")]
    Spawn { command: String, error: String },

    /// Engine exited with a non-zero code
    #[error("The opendataloader-pdf CLI exited with code {code}.\n\n{output}")]
    Failed { code: i32, output: String },

    /// Engine was terminated by a signal
    #[error("The opendataloader-pdf CLI was terminated before completing.\n\n{output}")]
    Terminated { output: String },

    /// Engine exceeded the configured timeout and was killed
    #[error("The opendataloader-pdf CLI did not finish within {seconds}s and was killed")]
    Timeout { seconds: u64 },

    /// IO error while talking to the child process
    #[error("IO error while running the engine: {0}")]
    Io(#[from] std::io::Error),
}

/// Conversion errors surfaced by the library API
#[derive(Error, Debug)]
pub enum ConvertError {
    /// No input paths given
    #[error("At least one input path must be provided.")]
    NoInput,

    /// Input path does not exist
    #[error("Input file or folder not found: {}", path.display())]
    InputNotFound { path: PathBuf },

    /// Engine configuration could not be loaded
    #[error(transparent)]
    Config(#[from] crate::core::global_config::GlobalConfigError),

    /// Engine error
    #[error(transparent)]
    Engine(#[from] EngineError),
}
