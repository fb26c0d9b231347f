//! CLI command implementations
//!
//! Each binary entry point is implemented in its own submodule.

pub mod convert;
pub mod generate;
