//! Core business logic module
//!
//! Option handling and the conversion facade. Process and filesystem access
//! belongs in [`crate::infra`].
//!
//! # Submodules
//!
//! - [`schema`] - Option schema (`options.json`) loading and validation
//! - [`options`] - Canonical conversion options and argument building
//! - [`legacy`] - Mapping of the deprecated `run()` flags
//! - [`convert`] - Conversion facade over an engine
//! - [`global_config`] - Global configuration management

pub mod convert;
pub mod global_config;
pub mod legacy;
pub mod options;
pub mod schema;
