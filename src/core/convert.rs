//! Conversion facade
//!
//! Validates inputs, turns [`ConvertOptions`] into the engine argument vector
//! and hands it to an [`Engine`].

use crate::core::legacy::LegacyRunOptions;
use crate::core::options::ConvertOptions;
use crate::error::ConvertError;
use crate::infra::engine::Engine;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Runs conversions against an engine
#[derive(Debug, Clone)]
pub struct Converter<E> {
    engine: E,
}

impl<E: Engine> Converter<E> {
    pub fn new(engine: E) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Convert `inputs` with `options`, returning the engine's stdout
    ///
    /// Every input is checked before the engine is started. Output is
    /// streamed to the console unless `quiet` is set.
    pub async fn convert<P: AsRef<Path>>(
        &self,
        inputs: &[P],
        options: &ConvertOptions,
    ) -> Result<String, ConvertError> {
        let args = build_args(inputs, options)?;
        let streaming = !options.is_quiet();
        tracing::debug!(
            "Converting {} input(s) with {} argument(s)",
            inputs.len(),
            args.len()
        );
        Ok(self.engine.invoke(&args, streaming).await?)
    }

    /// Convert a single file or folder with the old per-format flags
    #[deprecated(note = "use `convert` with `ConvertOptions` instead")]
    pub async fn run(
        &self,
        input: impl AsRef<Path>,
        options: &LegacyRunOptions,
    ) -> Result<String, ConvertError> {
        tracing::warn!(
            "run() is deprecated and will be removed in a future release. Use convert() instead."
        );
        self.convert(&[input.as_ref()], &options.to_convert_options())
            .await
    }
}

/// Fail unless there is at least one input and every input exists
pub fn check_inputs<P: AsRef<Path>>(inputs: &[P]) -> Result<(), ConvertError> {
    if inputs.is_empty() {
        return Err(ConvertError::NoInput);
    }

    match inputs.iter().map(AsRef::as_ref).find(|p| !p.exists()) {
        Some(missing) => Err(ConvertError::InputNotFound {
            path: PathBuf::from(missing),
        }),
        None => Ok(()),
    }
}

/// Engine argument vector: inputs first, then options in schema order
///
/// Input paths are passed through as OS strings, untouched.
pub fn build_args<P: AsRef<Path>>(
    inputs: &[P],
    options: &ConvertOptions,
) -> Result<Vec<OsString>, ConvertError> {
    check_inputs(inputs)?;

    let mut args: Vec<OsString> = inputs
        .iter()
        .map(|p| p.as_ref().as_os_str().to_os_string())
        .collect();
    args.extend(options.to_args().into_iter().map(OsString::from));
    Ok(args)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use crate::test_utils::RecordingEngine;
    use tempfile::TempDir;

    fn sample_pdf(dir: &TempDir, name: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, b"%PDF-1.7\n").unwrap();
        path
    }

    #[tokio::test]
    async fn test_no_inputs() {
        let converter = Converter::new(RecordingEngine::new());
        let inputs: [&Path; 0] = [];
        let err = converter
            .convert(&inputs, &ConvertOptions::new())
            .await
            .unwrap_err();
        assert!(matches!(err, ConvertError::NoInput));
        assert_eq!(err.to_string(), "At least one input path must be provided.");
        assert!(converter.engine().calls().is_empty());
    }

    #[tokio::test]
    async fn test_missing_input_is_named_and_nothing_runs() {
        let dir = TempDir::new().unwrap();
        let present = sample_pdf(&dir, "a.pdf");
        let missing = dir.path().join("missing.pdf");

        let converter = Converter::new(RecordingEngine::new());
        let err = converter
            .convert(&[present, missing.clone()], &ConvertOptions::new())
            .await
            .unwrap_err();

        match err {
            ConvertError::InputNotFound { path } => assert_eq!(path, missing),
            other => panic!("unexpected error: {other}"),
        }
        assert!(converter.engine().calls().is_empty());
    }

    #[tokio::test]
    async fn test_inputs_precede_options() {
        let dir = TempDir::new().unwrap();
        let a = sample_pdf(&dir, "a.pdf");
        let b = sample_pdf(&dir, "b.pdf");

        let converter = Converter::new(RecordingEngine::with_output("done"));
        let options = ConvertOptions::new()
            .output_dir("/out")
            .format(["json", "markdown"]);
        let output = converter.convert(&[&a, &b], &options).await.unwrap();
        assert_eq!(output, "done");

        let calls = converter.engine().calls();
        assert_eq!(calls.len(), 1);
        let (args, streaming) = &calls[0];
        assert_eq!(
            args,
            &vec![
                a.into_os_string(),
                b.into_os_string(),
                OsString::from("--output-dir"),
                OsString::from("/out"),
                OsString::from("--format"),
                OsString::from("json,markdown"),
            ]
        );
        assert!(*streaming);
    }

    #[tokio::test]
    async fn test_quiet_disables_streaming() {
        let dir = TempDir::new().unwrap();
        let a = sample_pdf(&dir, "a.pdf");

        let converter = Converter::new(RecordingEngine::new());
        converter
            .convert(&[&a], &ConvertOptions::new().quiet(true))
            .await
            .unwrap();

        let calls = converter.engine().calls();
        assert!(!calls[0].1);
        assert!(calls[0].0.contains(&OsString::from("--quiet")));
    }

    #[tokio::test]
    async fn test_engine_errors_pass_through() {
        let dir = TempDir::new().unwrap();
        let a = sample_pdf(&dir, "a.pdf");

        let converter = Converter::new(RecordingEngine::failing(2, "bad pdf"));
        let err = converter
            .convert(&[&a], &ConvertOptions::new())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ConvertError::Engine(EngineError::Failed { code: 2, .. })
        ));
        assert!(err.to_string().contains("exited with code 2"));
        assert!(err.to_string().contains("bad pdf"));
    }

    #[tokio::test]
    #[allow(deprecated)]
    async fn test_legacy_run_maps_formats() {
        let dir = TempDir::new().unwrap();
        let a = sample_pdf(&dir, "a.pdf");

        let converter = Converter::new(RecordingEngine::new());
        let legacy = LegacyRunOptions {
            generate_markdown: true,
            generate_html: true,
            ..Default::default()
        };
        converter.run(&a, &legacy).await.unwrap();

        let calls = converter.engine().calls();
        let (args, streaming) = &calls[0];
        let format_pos = args.iter().position(|a| a == "--format").unwrap();
        assert_eq!(args[format_pos + 1], "json,markdown,html");
        assert!(args.contains(&OsString::from("--quiet")));
        assert!(!*streaming);
    }

    #[test]
    fn test_build_args_without_options() {
        let dir = TempDir::new().unwrap();
        let a = sample_pdf(&dir, "a.pdf");
        let args = build_args(&[&a], &ConvertOptions::new()).unwrap();
        assert_eq!(args, vec![a.into_os_string()]);
    }

    #[test]
    fn test_check_inputs() {
        let dir = TempDir::new().unwrap();
        let a = sample_pdf(&dir, "a.pdf");
        assert!(check_inputs(&[&a]).is_ok());
        assert!(matches!(
            check_inputs(&[dir.path().join("nope.pdf")]),
            Err(ConvertError::InputNotFound { .. })
        ));
        let none: [&Path; 0] = [];
        assert!(matches!(check_inputs(&none), Err(ConvertError::NoInput)));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_non_utf8_input_path_is_preserved() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = TempDir::new().unwrap();
        let path = dir.path().join(OsStr::from_bytes(b"caf\xe9.pdf"));
        std::fs::write(&path, b"%PDF-1.7\n").unwrap();

        let args = build_args(&[&path], &ConvertOptions::new()).unwrap();
        assert_eq!(args, vec![path.clone().into_os_string()]);
        assert!(Path::new(&args[0]).exists());
    }
}
