//! opendataloader-pdf - PDF conversion for RAG pipelines
//!
//! This library drives the OpenDataLoader PDF engine, a Java archive that
//! turns PDFs into JSON, Markdown, HTML and text. It builds the engine's
//! argument vector from typed options, runs the engine as a child process and
//! returns its output. Option definitions live in `options.json`, which also
//! feeds the generated Node.js and Python bindings.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`cli`] - Command-line interface parsing and output formatting
//! - [`core`] - Option schema, options, conversion facade, configuration
//! - [`codegen`] - Binding and documentation generator
//! - [`infra`] - Infrastructure layer (directories, processes, engine)
//! - [`config`] - Configuration and constants
//! - [`error`] - Error types and handling
//!
//! # Example
//!
//! ```no_run
//! use opendataloader_pdf::{convert, ConvertOptions};
//!
//! # async fn demo() -> Result<(), opendataloader_pdf::ConvertError> {
//! let options = ConvertOptions::new()
//!     .output_dir("out")
//!     .format(["json", "markdown"])
//!     .quiet(true);
//! convert(&["report.pdf"], &options).await?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod codegen;
pub mod config;
pub mod core;
pub mod error;
pub mod infra;

#[cfg(test)]
pub mod test_utils;

use std::path::Path;

pub use crate::core::convert::Converter;
pub use crate::core::legacy::LegacyRunOptions;
pub use crate::core::options::{ConvertOptions, ListValue, OptionValue};
pub use crate::core::schema::{OptionDefinition, OptionKind, OptionSchema};
pub use crate::error::{ConvertError, EngineError, OptionError, SchemaError};
pub use crate::infra::engine::{Engine, JarEngine};

/// Convert `inputs` with the engine configured by `config.toml` and the
/// `OPENDATALOADER_PDF_*` environment variables
///
/// Inputs are checked before the configuration is read.
pub async fn convert<P: AsRef<Path>>(
    inputs: &[P],
    options: &ConvertOptions,
) -> Result<String, ConvertError> {
    crate::core::convert::check_inputs(inputs)?;
    let engine = JarEngine::from_environment()?;
    Converter::new(engine).convert(inputs, options).await
}

/// Convert one file or folder with the old per-format flags
#[deprecated(note = "use `convert` with `ConvertOptions` instead")]
#[allow(deprecated)]
pub async fn run(
    input: impl AsRef<Path>,
    options: &LegacyRunOptions,
) -> Result<String, ConvertError> {
    crate::core::convert::check_inputs(&[input.as_ref()])?;
    let engine = JarEngine::from_environment()?;
    Converter::new(engine).run(input, options).await
}
