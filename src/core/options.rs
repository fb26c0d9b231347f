//! Conversion options
//!
//! [`ConvertOptions`] is the canonical options object handed to the
//! conversion facade. Values are keyed by schema option name and turned into
//! the engine's argument vector in schema declaration order.

use crate::core::schema::{split_list, OptionKind, OptionSchema};
use crate::error::OptionError;
use std::collections::BTreeMap;

/// Value of a single option
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    /// Boolean flag
    Flag(bool),
    /// Single string, passed through verbatim (may be comma-separated for list options)
    Text(String),
    /// Explicit list, joined with `,` when emitted
    List(Vec<String>),
}

impl OptionValue {
    /// Whether the value produces anything on the command line
    ///
    /// `false`, empty strings and empty lists are treated as unset.
    pub fn is_set(&self) -> bool {
        match self {
            Self::Flag(enabled) => *enabled,
            Self::Text(text) => !text.is_empty(),
            Self::List(items) => !items.is_empty(),
        }
    }

    fn type_name(&self) -> &'static str {
        match self {
            Self::Flag(_) => "boolean",
            Self::Text(_) => "string",
            Self::List(_) => "list",
        }
    }

    fn fits(&self, kind: OptionKind) -> bool {
        matches!(
            (kind, self),
            (OptionKind::Boolean, Self::Flag(_))
                | (OptionKind::String, Self::Text(_))
                | (OptionKind::List, Self::Text(_) | Self::List(_))
        )
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for OptionValue {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<Vec<String>> for OptionValue {
    fn from(value: Vec<String>) -> Self {
        Self::List(value)
    }
}

impl From<Vec<&str>> for OptionValue {
    fn from(value: Vec<&str>) -> Self {
        Self::List(value.into_iter().map(String::from).collect())
    }
}

impl From<&[&str]> for OptionValue {
    fn from(value: &[&str]) -> Self {
        Self::List(value.iter().map(|s| (*s).to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for OptionValue {
    fn from(value: [&str; N]) -> Self {
        Self::List(value.iter().map(|s| (*s).to_string()).collect())
    }
}

/// Value accepted by list options: a comma-separated string or explicit items
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListValue {
    Text(String),
    Items(Vec<String>),
}

impl From<ListValue> for OptionValue {
    fn from(value: ListValue) -> Self {
        match value {
            ListValue::Text(text) => Self::Text(text),
            ListValue::Items(items) => Self::List(items),
        }
    }
}

impl From<&str> for ListValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ListValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Vec<String>> for ListValue {
    fn from(value: Vec<String>) -> Self {
        Self::Items(value)
    }
}

impl From<Vec<&str>> for ListValue {
    fn from(value: Vec<&str>) -> Self {
        Self::Items(value.into_iter().map(String::from).collect())
    }
}

impl<const N: usize> From<[&str; N]> for ListValue {
    fn from(value: [&str; N]) -> Self {
        Self::Items(value.iter().map(|s| (*s).to_string()).collect())
    }
}

/// Canonical options for a conversion
///
/// Built with one setter per option, or generically with [`ConvertOptions::set`].
///
/// ```
/// use opendataloader_pdf::ConvertOptions;
///
/// let options = ConvertOptions::new()
///     .output_dir("out")
///     .format(["json", "markdown"])
///     .quiet(true);
/// assert_eq!(
///     options.to_args(),
///     vec!["--output-dir", "out", "--format", "json,markdown", "--quiet"]
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConvertOptions {
    values: BTreeMap<String, OptionValue>,
}

impl ConvertOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an option by schema name, checking it against the bundled schema
    pub fn set(
        &mut self,
        name: &str,
        value: impl Into<OptionValue>,
    ) -> Result<&mut Self, OptionError> {
        self.set_with(OptionSchema::builtin(), name, value)
    }

    /// Set an option by name, checking it against `schema`
    pub fn set_with(
        &mut self,
        schema: &OptionSchema,
        name: &str,
        value: impl Into<OptionValue>,
    ) -> Result<&mut Self, OptionError> {
        let def = schema.get(name).ok_or_else(|| OptionError::Unknown {
            name: name.to_string(),
        })?;
        let value = value.into();
        if !value.fits(def.kind) {
            return Err(OptionError::InvalidType {
                name: name.to_string(),
                expected: def.kind.to_string(),
                got: value.type_name().to_string(),
            });
        }
        self.values.insert(def.name.clone(), value);
        Ok(self)
    }

    /// Current value of an option
    pub fn get(&self, name: &str) -> Option<&OptionValue> {
        self.values.get(name)
    }

    /// Remove an option, returning its previous value
    pub fn remove(&mut self, name: &str) -> Option<OptionValue> {
        self.values.remove(name)
    }

    /// Whether no option produces an argument
    pub fn is_empty(&self) -> bool {
        !self.values.values().any(OptionValue::is_set)
    }

    /// Whether quiet mode is on
    pub fn is_quiet(&self) -> bool {
        matches!(self.values.get("quiet"), Some(OptionValue::Flag(true)))
    }

    /// Engine arguments in bundled schema order
    pub fn to_args(&self) -> Vec<String> {
        self.to_args_with(OptionSchema::builtin())
    }

    /// Engine arguments in `schema` declaration order
    ///
    /// Unset values are skipped. Lists are joined with `,`; text is passed
    /// through verbatim.
    pub fn to_args_with(&self, schema: &OptionSchema) -> Vec<String> {
        let mut args = Vec::new();

        for def in schema.options() {
            let Some(value) = self.values.get(&def.name).filter(|v| v.is_set()) else {
                continue;
            };
            match value {
                OptionValue::Flag(_) => args.push(def.flag()),
                OptionValue::Text(text) => {
                    args.push(def.flag());
                    args.push(text.clone());
                }
                OptionValue::List(items) => {
                    args.push(def.flag());
                    args.push(items.join(","));
                }
            }
        }

        args
    }

    /// Check every value against the declared value sets in `schema`
    pub fn validate(&self, schema: &OptionSchema) -> Result<(), OptionError> {
        for def in schema.options() {
            let Some(value) = self.values.get(&def.name) else {
                continue;
            };
            if def.values.is_empty() {
                continue;
            }

            let items: Vec<&str> = match (value, def.kind) {
                (OptionValue::Flag(_), _) => Vec::new(),
                (OptionValue::Text(text), OptionKind::List) => split_list(text).collect(),
                (OptionValue::Text(text), _) if text.is_empty() => Vec::new(),
                (OptionValue::Text(text), _) => vec![text.as_str()],
                (OptionValue::List(list), _) => list.iter().map(String::as_str).collect(),
            };

            if let Some(bad) = items.into_iter().find(|item| !def.accepts(item)) {
                return Err(OptionError::InvalidChoice {
                    name: def.name.clone(),
                    value: bad.to_string(),
                    choices: def.values.clone(),
                });
            }
        }

        for name in self.values.keys() {
            if schema.get(name).is_none() {
                return Err(OptionError::Unknown { name: name.clone() });
            }
        }

        Ok(())
    }

    fn with(mut self, name: &str, value: OptionValue) -> Self {
        self.values.insert(name.to_string(), value);
        self
    }

    /// Directory where output files are written
    pub fn output_dir(self, dir: impl Into<String>) -> Self {
        self.with("output-dir", OptionValue::Text(dir.into()))
    }

    /// Password for encrypted PDF files
    pub fn password(self, password: impl Into<String>) -> Self {
        self.with("password", OptionValue::Text(password.into()))
    }

    /// Output formats, as a list or a comma-separated string
    pub fn format(self, formats: impl Into<ListValue>) -> Self {
        self.with("format", formats.into().into())
    }

    /// Suppress engine console output
    pub fn quiet(self, enabled: bool) -> Self {
        self.with("quiet", OptionValue::Flag(enabled))
    }

    /// Content safety filters to disable, as a list or a comma-separated string
    pub fn content_safety_off(self, filters: impl Into<ListValue>) -> Self {
        self.with("content-safety-off", filters.into().into())
    }

    pub fn keep_line_breaks(self, enabled: bool) -> Self {
        self.with("keep-line-breaks", OptionValue::Flag(enabled))
    }

    pub fn replace_invalid_chars(self, replacement: impl Into<String>) -> Self {
        self.with("replace-invalid-chars", OptionValue::Text(replacement.into()))
    }

    pub fn use_struct_tree(self, enabled: bool) -> Self {
        self.with("use-struct-tree", OptionValue::Flag(enabled))
    }

    pub fn table_method(self, method: impl Into<String>) -> Self {
        self.with("table-method", OptionValue::Text(method.into()))
    }

    pub fn reading_order(self, order: impl Into<String>) -> Self {
        self.with("reading-order", OptionValue::Text(order.into()))
    }

    /// Separator template between Markdown pages (`%page-number%` is substituted)
    pub fn markdown_page_separator(self, separator: impl Into<String>) -> Self {
        self.with("markdown-page-separator", OptionValue::Text(separator.into()))
    }

    pub fn text_page_separator(self, separator: impl Into<String>) -> Self {
        self.with("text-page-separator", OptionValue::Text(separator.into()))
    }

    pub fn html_page_separator(self, separator: impl Into<String>) -> Self {
        self.with("html-page-separator", OptionValue::Text(separator.into()))
    }

    pub fn image_output(self, mode: impl Into<String>) -> Self {
        self.with("image-output", OptionValue::Text(mode.into()))
    }

    pub fn image_format(self, format: impl Into<String>) -> Self {
        self.with("image-format", OptionValue::Text(format.into()))
    }

    /// Page ranges to extract, e.g. `1,3,5-7`
    pub fn pages(self, pages: impl Into<String>) -> Self {
        self.with("pages", OptionValue::Text(pages.into()))
    }

    pub fn hybrid(self, backend: impl Into<String>) -> Self {
        self.with("hybrid", OptionValue::Text(backend.into()))
    }

    pub fn hybrid_url(self, url: impl Into<String>) -> Self {
        self.with("hybrid-url", OptionValue::Text(url.into()))
    }

    /// Hybrid backend request timeout in milliseconds
    pub fn hybrid_timeout(self, millis: impl Into<String>) -> Self {
        self.with("hybrid-timeout", OptionValue::Text(millis.into()))
    }

    pub fn hybrid_fallback(self, enabled: bool) -> Self {
        self.with("hybrid-fallback", OptionValue::Flag(enabled))
    }
}
