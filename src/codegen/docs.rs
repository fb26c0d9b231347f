//! Markdown reference tables

use super::markdown::{code, escape_markdown, format_table};
use super::{finish, json_default, node, GENERATED_NOTICE};
use crate::core::schema::{OptionDefinition, OptionKind, OptionSchema};
use serde_json::Value;

fn html_header() -> Vec<String> {
    GENERATED_NOTICE
        .iter()
        .map(|line| format!("<!-- {line} -->"))
        .collect()
}

fn default_cell(option: &OptionDefinition) -> String {
    json_default(option).map_or_else(|| "-".to_string(), |value| code(&value))
}

fn description_cell(option: &OptionDefinition) -> String {
    escape_markdown(&option.description)
}

/// Append a table, with a blank line before it
fn push_table(lines: &mut Vec<String>, headers: &[&str], rows: &[Vec<String>]) {
    lines.push(String::new());
    lines.extend(format_table(headers, rows));
}

/// Full CLI reference with usage examples
pub fn render_cli_reference(schema: &OptionSchema) -> String {
    let mut lines = vec![
        "---".to_string(),
        "title: CLI Options Reference".to_string(),
        "description: Complete reference for all CLI options".to_string(),
        "---".to_string(),
        String::new(),
    ];
    lines.extend(html_header());
    lines.push(String::new());
    lines.push("# CLI Options Reference".to_string());
    lines.push(String::new());
    lines.push("This page documents all available CLI options for opendataloader-pdf.".to_string());
    lines.push(String::new());
    lines.push("## Options".to_string());

    let rows: Vec<Vec<String>> = schema
        .options()
        .iter()
        .map(|option| {
            vec![
                code(&option.flag()),
                option
                    .short_flag()
                    .map_or_else(|| "-".to_string(), |c| code(&format!("-{c}"))),
                code(option.kind.as_str()),
                default_cell(option),
                description_cell(option),
            ]
        })
        .collect();
    push_table(
        &mut lines,
        &["Option", "Short", "Type", "Default", "Description"],
        &rows,
    );

    let enumerated: Vec<Vec<String>> = schema
        .options()
        .iter()
        .filter(|option| !option.values.is_empty())
        .map(|option| {
            let values: Vec<String> = option.values.iter().map(|v| code(v)).collect();
            vec![code(&option.flag()), values.join(", ")]
        })
        .collect();
    if !enumerated.is_empty() {
        lines.push(String::new());
        lines.push("## Accepted values".to_string());
        push_table(&mut lines, &["Option", "Values"], &enumerated);
    }

    lines.push(String::new());
    lines.push("## Examples".to_string());
    for (title, command) in EXAMPLES {
        lines.push(String::new());
        lines.push(format!("### {title}"));
        lines.push(String::new());
        lines.push("```bash".to_string());
        lines.push((*command).to_string());
        lines.push("```".to_string());
    }
    finish(lines)
}

const EXAMPLES: &[(&str, &str)] = &[
    (
        "Basic conversion",
        "opendataloader-pdf document.pdf -o ./output -f json,markdown",
    ),
    (
        "Convert entire folder",
        "opendataloader-pdf ./pdf-folder -o ./output -f json",
    ),
    (
        "Markdown with embedded images",
        "opendataloader-pdf document.pdf -f markdown-with-images --image-output embedded",
    ),
    (
        "Reading order with the XY-Cut algorithm",
        "opendataloader-pdf document.pdf -f json --reading-order xycut",
    ),
    (
        "Page separators in output",
        "opendataloader-pdf document.pdf -f markdown --markdown-page-separator \"--- Page %page-number% ---\"",
    ),
    (
        "Encrypted PDF",
        "opendataloader-pdf encrypted.pdf -p mypassword -o ./output",
    ),
];

/// Node `convert()` options table
pub fn render_node_table(schema: &OptionSchema) -> String {
    let mut lines = html_header();
    let rows: Vec<Vec<String>> = schema
        .options()
        .iter()
        .map(|option| {
            vec![
                code(&option.camel_name()),
                code(&node::ts_type(option).replace('|', "\\|")),
                default_cell(option),
                description_cell(option),
            ]
        })
        .collect();
    push_table(&mut lines, &["Option", "Type", "Default", "Description"], &rows);
    finish(lines)
}

/// Python `convert()` parameters table
pub fn render_python_table(schema: &OptionSchema) -> String {
    let mut lines = html_header();
    let mut rows = vec![vec![
        code("input_path"),
        code("str \\| list[str]"),
        "required".to_string(),
        "One or more input PDF file paths or directories".to_string(),
    ]];
    rows.extend(schema.options().iter().map(|option| {
        let ty = match option.kind {
            OptionKind::Boolean => "bool",
            OptionKind::List => "str \\| list[str]",
            OptionKind::String => "str",
        };
        let default = match &option.default {
            Value::Null => "-".to_string(),
            Value::Bool(b) => code(if *b { "True" } else { "False" }),
            _ => json_default(option).map_or_else(|| "-".to_string(), |v| code(&v)),
        };
        vec![
            code(&option.snake_name()),
            code(ty),
            default,
            description_cell(option),
        ]
    }));
    push_table(
        &mut lines,
        &["Parameter", "Type", "Default", "Description"],
        &rows,
    );
    finish(lines)
}

/// Rust `ConvertOptions` builder methods table
pub fn render_rust_table(schema: &OptionSchema) -> String {
    let mut lines = html_header();
    let rows: Vec<Vec<String>> = schema
        .options()
        .iter()
        .map(|option| {
            let argument = match option.kind {
                OptionKind::Boolean => "bool",
                OptionKind::List => "impl Into<ListValue>",
                OptionKind::String => "impl Into<String>",
            };
            vec![
                code(&format!(".{}()", option.snake_name())),
                code(argument),
                default_cell(option),
                description_cell(option),
            ]
        })
        .collect();
    push_table(&mut lines, &["Method", "Argument", "Default", "Description"], &rows);
    finish(lines)
}
