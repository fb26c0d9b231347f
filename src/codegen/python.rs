//! Python sources for the Python binding

use super::{comment_header, finish};
use crate::core::schema::{OptionDefinition, OptionKind, OptionSchema};
use serde_json::Value;

/// Python type hint of a `convert()` parameter
pub fn type_hint(option: &OptionDefinition) -> &'static str {
    match option.kind {
        OptionKind::Boolean => "bool",
        OptionKind::List => "Optional[Union[str, List[str]]]",
        OptionKind::String => "Optional[str]",
    }
}

/// Double-quoted Python string literal
fn py_string(value: &str) -> String {
    format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))
}

/// Python literal for a documented default
pub fn py_literal(value: &Value) -> String {
    match value {
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        Value::String(s) => py_string(s),
        Value::Null => "None".to_string(),
        other => other.to_string(),
    }
}

/// `cli_options_generated.py`: option metadata and argparse registration
pub fn render_cli_options(schema: &OptionSchema) -> String {
    let mut lines = comment_header("#");
    lines.extend(
        [
            "\"\"\"",
            "CLI option definitions for opendataloader-pdf.",
            "\"\"\"",
            "from typing import Any, Dict, List",
            "",
            "",
            "# Option metadata list",
            "CLI_OPTIONS: List[Dict[str, Any]] = [",
        ]
        .map(String::from),
    );

    for option in schema.options() {
        let short = option
            .short_name
            .as_deref()
            .map_or_else(|| "None".to_string(), py_string);
        let values = if option.values.is_empty() {
            "None".to_string()
        } else {
            let quoted: Vec<String> = option.values.iter().map(|v| py_string(v)).collect();
            format!("[{}]", quoted.join(", "))
        };
        lines.push("    {".to_string());
        lines.push(format!("        \"name\": {},", py_string(&option.name)));
        lines.push(format!("        \"python_name\": {},", py_string(&option.snake_name())));
        lines.push(format!("        \"short_name\": {short},"));
        lines.push(format!("        \"type\": {},", py_string(option.kind.as_str())));
        lines.push(format!("        \"default\": {},", py_literal(&option.default)));
        lines.push(format!("        \"choices\": {values},"));
        lines.push(format!("        \"description\": {},", py_string(&option.description)));
        lines.push("    },".to_string());
    }

    lines.extend(
        [
            "]",
            "",
            "",
            "def add_options_to_parser(parser) -> None:",
            "    \"\"\"Add all CLI options to an argparse.ArgumentParser.\"\"\"",
            "    for opt in CLI_OPTIONS:",
            "        flags = []",
            "        if opt[\"short_name\"]:",
            "            flags.append(f\"-{opt['short_name']}\")",
            "        flags.append(f\"--{opt['name']}\")",
            "",
            "        kwargs = {\"help\": opt[\"description\"]}",
            "        if opt[\"type\"] == \"boolean\":",
            "            kwargs[\"action\"] = \"store_true\"",
            "        else:",
            "            kwargs[\"default\"] = None",
            "",
            "        parser.add_argument(*flags, **kwargs)",
        ]
        .map(String::from),
    );
    finish(lines)
}

/// `convert_generated.py`: `convert()` with argument building
pub fn render_convert(schema: &OptionSchema) -> String {
    let mut lines = comment_header("#");
    lines.extend(
        [
            "\"\"\"",
            "Generated convert function for opendataloader-pdf.",
            "\"\"\"",
            "from typing import List, Optional, Union",
            "",
            "from .runner import run_jar",
            "",
            "",
            "def convert(",
            "    input_path: Union[str, List[str]],",
        ]
        .map(String::from),
    );

    for option in schema.options() {
        let default = if option.is_boolean() {
            if option.default == Value::Bool(true) { "True" } else { "False" }
        } else {
            "None"
        };
        lines.push(format!(
            "    {}: {} = {default},",
            option.snake_name(),
            type_hint(option)
        ));
    }

    lines.push(") -> str:".to_string());
    lines.push("    \"\"\"".to_string());
    lines.push("    Convert PDF(s) into the requested output format(s).".to_string());
    lines.push(String::new());
    lines.push("    Args:".to_string());
    lines.push("        input_path: One or more input PDF file paths or directories".to_string());
    for option in schema.options() {
        lines.push(format!(
            "        {}: {}",
            option.snake_name(),
            option.description.replace("\"\"\"", "'''")
        ));
    }
    lines.push("    \"\"\"".to_string());
    lines.push("    args: List[str] = []".to_string());
    lines.push(String::new());
    lines.push("    if isinstance(input_path, list):".to_string());
    lines.push("        args.extend(input_path)".to_string());
    lines.push("    else:".to_string());
    lines.push("        args.append(input_path)".to_string());
    lines.push(String::new());

    for option in schema.options() {
        let name = option.snake_name();
        let flag = py_string(&option.flag());
        match option.kind {
            OptionKind::Boolean => {
                lines.push(format!("    if {name}:"));
                lines.push(format!("        args.append({flag})"));
            }
            OptionKind::List => {
                lines.push(format!("    if isinstance({name}, list):"));
                lines.push(format!("        if {name}:"));
                lines.push(format!("            args.extend([{flag}, \",\".join({name})])"));
                lines.push(format!("    elif {name}:"));
                lines.push(format!("        args.extend([{flag}, {name}])"));
            }
            OptionKind::String => {
                lines.push(format!("    if {name}:"));
                lines.push(format!("        args.extend([{flag}, {name}])"));
            }
        }
    }

    lines.push(String::new());
    lines.push("    return run_jar(args, quiet)".to_string());
    finish(lines)
}
