//! Infrastructure layer
//!
//! Handles all I/O with the outside world: platform directories, child
//! processes and the conversion engine.

pub mod dirs;
pub mod engine;
pub mod process;
