//! Output formatting
//!
//! Converted text goes to stdout; errors and hints go to stderr.

use crate::error::{ConvertError, OptionError};
use std::io::{self, Write};

/// Hint printed after usage errors
pub const HELP_HINT: &str = "Use '--help' to see available options.";

/// Print an error and its causes to stderr
///
/// Usage errors get a pointer to `--help`.
pub fn display_error(error: &anyhow::Error) {
    eprintln!("{error:#}");
    if is_usage_error(error) {
        eprintln!("{HELP_HINT}");
    }
}

fn is_usage_error(error: &anyhow::Error) -> bool {
    error.chain().any(|cause| {
        cause.downcast_ref::<OptionError>().is_some()
            || matches!(
                cause.downcast_ref::<ConvertError>(),
                Some(ConvertError::NoInput)
            )
    })
}

/// Write converted text, adding a trailing newline if it lacks one
pub fn write_result<W: Write>(out: &mut W, text: &str) -> io::Result<()> {
    if text.is_empty() {
        return Ok(());
    }
    out.write_all(text.as_bytes())?;
    if !text.ends_with('\n') {
        out.write_all(b"\n")?;
    }
    out.flush()
}
