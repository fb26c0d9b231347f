//! Option schema
//!
//! Loads and validates the option definitions in `options.json`, the single
//! source of truth for every flag the engine accepts. The same definitions
//! drive CLI flag registration, argument building and code generation for the
//! other host bindings.

use crate::error::SchemaError;
use heck::{ToLowerCamelCase, ToSnakeCase};
use regex::Regex;
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::path::Path;
use std::sync::OnceLock;

/// Schema bundled with the crate
pub const BUILTIN_SCHEMA: &str = include_str!("../../options.json");

/// Long flags the CLI defines itself
pub const RESERVED_NAMES: &[&str] = &["help", "version", "verbose", "jar", "java", "timeout"];

/// Short flags the CLI defines itself
pub const RESERVED_SHORT_FLAGS: &[char] = &['h', 'V', 'v'];

/// Kind of value an option takes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionKind {
    /// Bare flag, present or absent
    Boolean,
    /// Single string value
    String,
    /// Comma-separated list of values
    List,
}

impl OptionKind {
    /// Name used in `options.json` and the generated docs
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::String => "string",
            Self::List => "list",
        }
    }
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single option definition
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct OptionDefinition {
    /// Kebab-case flag name, without leading dashes
    pub name: String,
    /// Optional single-letter short flag
    #[serde(default)]
    pub short_name: Option<String>,
    /// Value kind
    #[serde(rename = "type")]
    pub kind: OptionKind,
    /// Documented default (applied by the engine, never emitted)
    #[serde(default)]
    pub default: serde_json::Value,
    /// Accepted values, empty when unrestricted
    #[serde(default)]
    pub values: Vec<String>,
    /// Human-readable description
    pub description: String,
}

impl OptionDefinition {
    /// Long CLI flag, e.g. `--output-dir`
    pub fn flag(&self) -> String {
        format!("--{}", self.name)
    }

    /// Short flag character, if any
    pub fn short_flag(&self) -> Option<char> {
        self.short_name.as_deref().and_then(|s| s.chars().next())
    }

    /// Identifier for snake_case bindings (Rust, Python)
    pub fn snake_name(&self) -> String {
        self.name.to_snake_case()
    }

    /// Identifier for camelCase bindings (TypeScript)
    pub fn camel_name(&self) -> String {
        self.name.to_lower_camel_case()
    }

    pub fn is_boolean(&self) -> bool {
        self.kind == OptionKind::Boolean
    }

    pub fn is_list(&self) -> bool {
        self.kind == OptionKind::List
    }

    /// Whether `value` belongs to the declared value set
    ///
    /// Options without a value set accept anything. Matching ignores ASCII
    /// case and surrounding whitespace, as the engine does.
    pub fn accepts(&self, value: &str) -> bool {
        let value = value.trim();
        self.values.is_empty() || self.values.iter().any(|v| v.eq_ignore_ascii_case(value))
    }

    fn validate(&self, name_pattern: &Regex) -> Result<(), SchemaError> {
        if !name_pattern.is_match(&self.name) {
            return Err(SchemaError::InvalidName {
                name: self.name.clone(),
            });
        }
        if RESERVED_NAMES.contains(&self.name.as_str()) {
            return Err(SchemaError::ReservedFlag {
                name: self.name.clone(),
                flag: self.flag(),
            });
        }

        if let Some(short) = &self.short_name {
            let mut chars = short.chars();
            let valid = matches!((chars.next(), chars.next()), (Some(c), None) if c.is_ascii_alphabetic());
            if !valid {
                return Err(SchemaError::InvalidShortFlag {
                    name: self.name.clone(),
                    short: short.clone(),
                });
            }
            if self
                .short_flag()
                .is_some_and(|c| RESERVED_SHORT_FLAGS.contains(&c))
            {
                return Err(SchemaError::ReservedFlag {
                    name: self.name.clone(),
                    flag: format!("-{short}"),
                });
            }
        }

        if self.is_boolean() && !self.values.is_empty() {
            return Err(SchemaError::ValuesOnBoolean {
                name: self.name.clone(),
            });
        }

        self.validate_default()
    }

    fn validate_default(&self) -> Result<(), SchemaError> {
        let invalid = |reason: String| SchemaError::InvalidDefault {
            name: self.name.clone(),
            reason,
        };

        match (&self.kind, &self.default) {
            (_, serde_json::Value::Null) | (OptionKind::Boolean, serde_json::Value::Bool(_)) => {
                Ok(())
            }
            (OptionKind::Boolean, other) => Err(invalid(format!("expected a boolean, got {other}"))),
            (OptionKind::String, serde_json::Value::String(value)) => {
                if self.accepts(value) {
                    Ok(())
                } else {
                    Err(invalid(format!("'{value}' is not one of the declared values")))
                }
            }
            (OptionKind::List, serde_json::Value::String(value)) => {
                match split_list(value).find(|item| !self.accepts(item)) {
                    Some(item) => Err(invalid(format!("'{item}' is not one of the declared values"))),
                    None => Ok(()),
                }
            }
            (_, other) => Err(invalid(format!("expected a string, got {other}"))),
        }
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct SchemaFile {
    options: Vec<OptionDefinition>,
}

/// Validated, ordered list of option definitions
#[derive(Debug, Clone, PartialEq)]
pub struct OptionSchema {
    options: Vec<OptionDefinition>,
}

impl OptionSchema {
    /// Parse and validate a schema from JSON text
    pub fn from_json(json: &str) -> Result<Self, SchemaError> {
        let file: SchemaFile =
            serde_json::from_str(json).map_err(|e| SchemaError::Parse(e.to_string()))?;
        let schema = Self {
            options: file.options,
        };
        schema.validate()?;
        Ok(schema)
    }

    /// Read, parse and validate a schema file
    pub fn from_path(path: &Path) -> Result<Self, SchemaError> {
        let json = std::fs::read_to_string(path).map_err(|e| SchemaError::Read {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;
        Self::from_json(&json)
    }

    /// The schema compiled into this crate
    pub fn builtin() -> &'static OptionSchema {
        static SCHEMA: OnceLock<OptionSchema> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            OptionSchema::from_json(BUILTIN_SCHEMA).expect("Bundled options.json is invalid")
        })
    }

    /// Definitions in declaration order
    pub fn options(&self) -> &[OptionDefinition] {
        &self.options
    }

    /// Look up a definition by name
    pub fn get(&self, name: &str) -> Option<&OptionDefinition> {
        self.options.iter().find(|opt| opt.name == name)
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    fn validate(&self) -> Result<(), SchemaError> {
        let name_pattern = Regex::new(r"^[a-z][a-z0-9]*(-[a-z0-9]+)*$")
            .map_err(|e| SchemaError::Parse(format!("Invalid name pattern: {e}")))?;

        let mut names = HashSet::new();
        let mut shorts: HashMap<char, &str> = HashMap::new();

        for opt in &self.options {
            opt.validate(&name_pattern)?;

            if !names.insert(opt.name.as_str()) {
                return Err(SchemaError::DuplicateName {
                    name: opt.name.clone(),
                });
            }

            if let Some(short) = opt.short_flag() {
                if let Some(first) = shorts.insert(short, &opt.name) {
                    return Err(SchemaError::DuplicateShortFlag {
                        short,
                        first: first.to_string(),
                        second: opt.name.clone(),
                    });
                }
            }
        }

        Ok(())
    }
}

/// Split a comma-separated list value into trimmed, non-empty items
pub fn split_list(value: &str) -> impl Iterator<Item = &str> {
    value.split(',').map(str::trim).filter(|item| !item.is_empty())
}
