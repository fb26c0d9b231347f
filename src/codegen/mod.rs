//! Binding and documentation generator
//!
//! Renders option registrations, typed option surfaces and reference tables
//! for every host binding from one [`OptionSchema`]. Rendering is pure and
//! deterministic: the same schema always yields byte-identical files.
//!
//! # Submodules
//!
//! - [`node`] - TypeScript sources for the Node.js package
//! - [`python`] - Python sources for the Python package
//! - [`docs`] - Markdown reference tables
//! - [`markdown`] - Table escaping and alignment

pub mod docs;
pub mod markdown;
pub mod node;
pub mod python;

use crate::core::schema::{OptionDefinition, OptionSchema};
use serde_json::Value;
use std::fmt;
use std::path::{Path, PathBuf};

/// Header lines stating a file is generated, without comment markers
const GENERATED_NOTICE: [&str; 2] = [
    "AUTO-GENERATED FROM options.json - DO NOT EDIT DIRECTLY",
    "Run `generate-options` to regenerate",
];

/// A generated file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    NodeCliOptions,
    NodeConvertOptions,
    PythonCliOptions,
    PythonConvert,
    CliReference,
    NodeOptionsTable,
    PythonOptionsTable,
    RustOptionsTable,
}

impl Target {
    /// Every target, in generation order
    pub const ALL: [Target; 8] = [
        Target::NodeCliOptions,
        Target::NodeConvertOptions,
        Target::PythonCliOptions,
        Target::PythonConvert,
        Target::CliReference,
        Target::NodeOptionsTable,
        Target::PythonOptionsTable,
        Target::RustOptionsTable,
    ];

    /// Output path relative to the repository root
    pub fn path(self) -> &'static str {
        match self {
            Target::NodeCliOptions => "node/opendataloader-pdf/src/cli-options.generated.ts",
            Target::NodeConvertOptions => {
                "node/opendataloader-pdf/src/convert-options.generated.ts"
            }
            Target::PythonCliOptions => {
                "python/opendataloader-pdf/src/opendataloader_pdf/cli_options_generated.py"
            }
            Target::PythonConvert => {
                "python/opendataloader-pdf/src/opendataloader_pdf/convert_generated.py"
            }
            Target::CliReference => "docs/cli-options-reference.md",
            Target::NodeOptionsTable => "docs/_generated/node-convert-options.md",
            Target::PythonOptionsTable => "docs/_generated/python-convert-options.md",
            Target::RustOptionsTable => "docs/_generated/rust-convert-options.md",
        }
    }

    /// Render this target's file contents
    pub fn render(self, schema: &OptionSchema) -> String {
        match self {
            Target::NodeCliOptions => node::render_cli_options(schema),
            Target::NodeConvertOptions => node::render_convert_options(schema),
            Target::PythonCliOptions => python::render_cli_options(schema),
            Target::PythonConvert => python::render_convert(schema),
            Target::CliReference => docs::render_cli_reference(schema),
            Target::NodeOptionsTable => docs::render_node_table(schema),
            Target::PythonOptionsTable => docs::render_python_table(schema),
            Target::RustOptionsTable => docs::render_rust_table(schema),
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Rendered contents of one target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub target: Target,
    pub contents: String,
}

impl GeneratedFile {
    /// Destination under `root`
    pub fn path_under(&self, root: &Path) -> PathBuf {
        root.join(self.target.path())
    }

    /// Whether the file at `root` is missing or differs from these contents
    pub fn is_stale(&self, root: &Path) -> bool {
        match std::fs::read_to_string(self.path_under(root)) {
            Ok(existing) => existing != self.contents,
            Err(_) => true,
        }
    }
}

/// Render every target
pub fn render_all(schema: &OptionSchema) -> Vec<GeneratedFile> {
    Target::ALL
        .iter()
        .map(|&target| GeneratedFile {
            target,
            contents: target.render(schema),
        })
        .collect()
}

/// Notice lines prefixed with a line comment marker
fn comment_header(marker: &str) -> Vec<String> {
    GENERATED_NOTICE
        .iter()
        .map(|line| format!("{marker} {line}"))
        .collect()
}

/// Join lines with a trailing newline
fn finish(lines: Vec<String>) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Default value in JavaScript/JSON notation, `None` when unset
fn json_default(option: &OptionDefinition) -> Option<String> {
    match &option.default {
        Value::Null => None,
        Value::String(s) => Some(format!("\"{s}\"")),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use tempfile::TempDir;

    #[test]
    fn test_paths_are_unique() {
        let paths: HashSet<_> = Target::ALL.iter().map(|t| t.path()).collect();
        assert_eq!(paths.len(), Target::ALL.len());
    }

    #[test]
    fn test_render_is_deterministic() {
        let schema = OptionSchema::builtin();
        assert_eq!(render_all(schema), render_all(schema));
    }

    #[test]
    fn test_every_file_carries_notice_and_newline() {
        for file in render_all(OptionSchema::builtin()) {
            assert!(
                file.contents.contains(GENERATED_NOTICE[0]),
                "{} lacks the generated notice",
                file.target
            );
            assert!(file.contents.ends_with('\n'));
        }
    }

    #[test]
    fn test_every_option_reaches_every_file() {
        let schema = OptionSchema::builtin();
        for file in render_all(schema) {
            for option in schema.options() {
                let mentioned = file.contents.contains(&option.name)
                    || file.contents.contains(&option.snake_name())
                    || file.contents.contains(&option.camel_name())
                    || file.contents.contains(&markdown::escape_markdown(&option.snake_name()));
                assert!(mentioned, "{} misses '{}'", file.target, option.name);
            }
        }
    }

    #[test]
    fn test_staleness() {
        let dir = TempDir::new().unwrap();
        let file = GeneratedFile {
            target: Target::CliReference,
            contents: "fresh\n".to_string(),
        };
        assert!(file.is_stale(dir.path()));

        let path = file.path_under(dir.path());
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "old\n").unwrap();
        assert!(file.is_stale(dir.path()));

        std::fs::write(&path, "fresh\n").unwrap();
        assert!(!file.is_stale(dir.path()));
    }

    #[test]
    fn test_json_default() {
        let schema = OptionSchema::builtin();
        assert_eq!(json_default(schema.get("format").unwrap()).as_deref(), Some("\"json\""));
        assert_eq!(json_default(schema.get("hybrid-fallback").unwrap()).as_deref(), Some("false"));
        assert_eq!(json_default(schema.get("password").unwrap()), None);
    }
}
