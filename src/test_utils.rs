//! Test utilities
//!
//! Proptest generators and a recording [`Engine`] that never spawns a process.

use crate::error::EngineError;
use crate::infra::engine::Engine;
use std::ffi::OsString;
use std::path::PathBuf;
use std::sync::Mutex;

#[cfg(test)]
pub mod generators {
    use proptest::prelude::*;

    /// Generate a kebab-case option name
    pub fn option_name() -> impl Strategy<Value = String> {
        "[a-z][a-z0-9]{0,8}(-[a-z0-9]{1,6}){0,3}"
    }

    /// Generate a list element without separators or surrounding whitespace
    pub fn list_item() -> impl Strategy<Value = String> {
        "[a-z][a-z-]{0,12}"
    }
}

/// One recorded `invoke` call: arguments and streaming flag
pub type RecordedCall = (Vec<OsString>, bool);

/// Engine double that records every invocation
#[derive(Debug)]
pub struct RecordingEngine {
    calls: Mutex<Vec<RecordedCall>>,
    result: Result<String, (i32, String)>,
}

impl RecordingEngine {
    /// Succeeds with empty output
    pub fn new() -> Self {
        Self::with_output("")
    }

    pub fn with_output(output: &str) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            result: Ok(output.to_string()),
        }
    }

    /// Fails every call as if the engine exited with `code`
    pub fn failing(code: i32, stderr: &str) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            result: Err((code, stderr.to_string())),
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl Default for RecordingEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RecordingEngine {
    fn locate(&self) -> Result<PathBuf, EngineError> {
        Ok(PathBuf::from("recording-engine.jar"))
    }

    async fn invoke(&self, args: &[OsString], streaming: bool) -> Result<String, EngineError> {
        self.calls
            .lock()
            .unwrap()
            .push((args.to_vec(), streaming));
        match &self.result {
            Ok(output) => Ok(output.clone()),
            Err((code, output)) => Err(EngineError::Failed {
                code: *code,
                output: output.clone(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::generators::*;
    use super::*;
    use proptest::prelude::*;
    use regex::Regex;

    #[tokio::test]
    async fn test_recording_engine_records_calls() {
        let engine = RecordingEngine::with_output("ok");
        let output = engine.invoke(&[OsString::from("a.pdf")], true).await.unwrap();
        assert_eq!(output, "ok");
        assert_eq!(engine.calls(), vec![(vec![OsString::from("a.pdf")], true)]);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn test_option_name_generator(name in option_name()) {
            let kebab = Regex::new(r"^[a-z][a-z0-9]*(-[a-z0-9]+)*$").unwrap();
            prop_assert!(kebab.is_match(&name));
        }

        #[test]
        fn test_list_item_generator(item in list_item()) {
            prop_assert!(!item.contains(','));
            prop_assert_eq!(item.trim(), item.as_str());
        }
    }
}
