//! CLI implementation for `opendataloader-pdf <input...>`

use anyhow::{Context, Result};

use crate::cli::output::write_result;
use crate::cli::Cli;
use crate::core::convert::{check_inputs, Converter};
use crate::core::global_config::GlobalConfig;
use crate::core::options::ConvertOptions;
use crate::core::schema::OptionSchema;
use crate::infra::dirs::OdlDirs;
use crate::infra::engine::JarEngine;

/// Execute a conversion
///
/// Value sets and inputs are checked before `config.toml` is read or the
/// engine is touched. Flag and environment overrides take precedence over
/// `config.toml`.
pub async fn execute(cli: &Cli, options: &ConvertOptions, schema: &OptionSchema) -> Result<()> {
    options.validate(schema)?;
    check_inputs(cli.inputs.as_slice())?;

    let config = GlobalConfig::load(&OdlDirs::new()).context("Failed to load configuration")?;
    let engine = JarEngine::resolve(&config, &cli.engine_overrides());

    let output = Converter::new(engine)
        .convert(cli.inputs.as_slice(), options)
        .await?;

    if !options.is_quiet() {
        let mut stdout = std::io::stdout().lock();
        write_result(&mut stdout, &output).context("Failed to write output")?;
    }
    Ok(())
}
