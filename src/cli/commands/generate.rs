//! CLI implementation for `generate-options`
//!
//! Writes every generated binding and documentation file, or with `--check`
//! reports the ones that are out of date.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::codegen::{render_all, GeneratedFile};
use crate::core::schema::OptionSchema;

/// Result of a generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateOutcome {
    /// Files written, in generation order
    Written(Vec<PathBuf>),
    /// Files whose contents differ from the schema (empty when all are current)
    Stale(Vec<PathBuf>),
}

/// Load and validate the schema at `path`
pub fn load_schema(path: &Path) -> Result<OptionSchema> {
    OptionSchema::from_path(path)
        .with_context(|| format!("Invalid option schema {}", path.display()))
}

/// Execute generation under `root`
pub fn execute(schema: &OptionSchema, root: &Path, check: bool) -> Result<GenerateOutcome> {
    let files = render_all(schema);
    if check {
        return Ok(GenerateOutcome::Stale(stale_files(&files, root)));
    }

    let mut written = Vec::with_capacity(files.len());
    for file in &files {
        written.push(write_file(file, root)?);
    }
    Ok(GenerateOutcome::Written(written))
}

fn stale_files(files: &[GeneratedFile], root: &Path) -> Vec<PathBuf> {
    files
        .iter()
        .filter(|file| file.is_stale(root))
        .map(|file| file.path_under(root))
        .collect()
}

fn write_file(file: &GeneratedFile, root: &Path) -> Result<PathBuf> {
    let path = file.path_under(root);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    fs::write(&path, &file.contents)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::debug!("Wrote {} bytes to {}", file.contents.len(), path.display());
    Ok(path)
}
