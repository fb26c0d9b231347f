//! TypeScript sources for the Node.js binding

use super::{comment_header, finish};
use crate::core::schema::{OptionDefinition, OptionKind, OptionSchema};

/// TypeScript type of the typed options surface
pub fn ts_type(option: &OptionDefinition) -> &'static str {
    match option.kind {
        OptionKind::Boolean => "boolean",
        OptionKind::List => "string | string[]",
        OptionKind::String => "string",
    }
}

/// Quote a value as a single-quoted TypeScript string literal
fn ts_string(value: &str) -> String {
    format!("'{}'", value.replace('\\', "\\\\").replace('\'', "\\'"))
}

/// Commander flag spec, e.g. `-o, --output-dir <value>`
fn commander_flags(option: &OptionDefinition) -> String {
    let mut flags = match option.short_flag() {
        Some(short) => format!("-{short}, {}", option.flag()),
        None => option.flag(),
    };
    if !option.is_boolean() {
        flags.push_str(" <value>");
    }
    flags
}

/// `cli-options.generated.ts`: registers every option on a Commander program
pub fn render_cli_options(schema: &OptionSchema) -> String {
    let mut lines = comment_header("//");
    lines.push(String::new());
    lines.push("import { Command } from 'commander';".to_string());
    lines.push(String::new());
    lines.push("/**".to_string());
    lines.push(" * Register all CLI options on the given Commander program.".to_string());
    lines.push(" */".to_string());
    lines.push("export function registerCliOptions(program: Command): void {".to_string());
    for option in schema.options() {
        lines.push(format!(
            "  program.option({}, {});",
            ts_string(&commander_flags(option)),
            ts_string(&option.description)
        ));
    }
    lines.push("}".to_string());
    finish(lines)
}

/// `convert-options.generated.ts`: option interfaces and argument builders
pub fn render_convert_options(schema: &OptionSchema) -> String {
    let mut lines = comment_header("//");
    lines.push(String::new());

    lines.push("/**".to_string());
    lines.push(" * Options for the convert function.".to_string());
    lines.push(" */".to_string());
    lines.push("export interface ConvertOptions {".to_string());
    for option in schema.options() {
        lines.push(format!("  /** {} */", option.description.replace("*/", "*\\/")));
        lines.push(format!("  {}?: {};", option.camel_name(), ts_type(option)));
    }
    lines.push("}".to_string());
    lines.push(String::new());

    lines.push("/**".to_string());
    lines.push(" * Options as parsed from the CLI (values are strings from commander).".to_string());
    lines.push(" */".to_string());
    lines.push("export interface CliOptions {".to_string());
    for option in schema.options() {
        let ty = if option.is_boolean() { "boolean" } else { "string" };
        lines.push(format!("  {}?: {ty};", option.camel_name()));
    }
    lines.push("}".to_string());
    lines.push(String::new());

    lines.push("/**".to_string());
    lines.push(" * Convert CLI options to ConvertOptions.".to_string());
    lines.push(" */".to_string());
    lines.push(
        "export function buildConvertOptions(cliOptions: CliOptions): ConvertOptions {".to_string(),
    );
    lines.push("  const convertOptions: ConvertOptions = {};".to_string());
    lines.push(String::new());
    for option in schema.options() {
        let name = option.camel_name();
        let value = if option.is_boolean() {
            "true".to_string()
        } else {
            format!("cliOptions.{name}")
        };
        lines.push(format!("  if (cliOptions.{name}) {{"));
        lines.push(format!("    convertOptions.{name} = {value};"));
        lines.push("  }".to_string());
    }
    lines.push(String::new());
    lines.push("  return convertOptions;".to_string());
    lines.push("}".to_string());
    lines.push(String::new());

    lines.push("/**".to_string());
    lines.push(" * Build CLI arguments array from ConvertOptions.".to_string());
    lines.push(" */".to_string());
    lines.push("export function buildArgs(options: ConvertOptions): string[] {".to_string());
    lines.push("  const args: string[] = [];".to_string());
    lines.push(String::new());
    for option in schema.options() {
        let name = option.camel_name();
        let flag = ts_string(&option.flag());
        match option.kind {
            OptionKind::Boolean => {
                lines.push(format!("  if (options.{name}) {{"));
                lines.push(format!("    args.push({flag});"));
                lines.push("  }".to_string());
            }
            OptionKind::List => {
                lines.push(format!("  if (Array.isArray(options.{name})) {{"));
                lines.push(format!("    if (options.{name}.length > 0) {{"));
                lines.push(format!("      args.push({flag}, options.{name}.join(','));"));
                lines.push("    }".to_string());
                lines.push(format!("  }} else if (options.{name}) {{"));
                lines.push(format!("    args.push({flag}, options.{name});"));
                lines.push("  }".to_string());
            }
            OptionKind::String => {
                lines.push(format!("  if (options.{name}) {{"));
                lines.push(format!("    args.push({flag}, options.{name});"));
                lines.push("  }".to_string());
            }
        }
    }
    lines.push(String::new());
    lines.push("  return args;".to_string());
    lines.push("}".to_string());
    finish(lines)
}
