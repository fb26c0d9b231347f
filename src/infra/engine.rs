//! Engine client
//!
//! The PDF engine is a separately built Java archive. [`JarEngine`] locates
//! it, runs `java [jvm options] -jar <jar> <args...>` and maps the exit status
//! to a result.

use crate::config::defaults::{
    DEFAULT_JAVA_COMMAND, ENGINE_JAR_NAME, ENGINE_LIB_DIR, ENV_JAR, ENV_JAVA, ENV_TIMEOUT,
};
use crate::core::global_config::{GlobalConfig, GlobalConfigError};
use crate::error::EngineError;
use crate::infra::dirs::OdlDirs;
use crate::infra::process::ProcessRunner;
use std::ffi::OsString;
use std::future::Future;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Something that can run the conversion engine
pub trait Engine {
    /// Path of the engine artifact, or why it is unavailable
    fn locate(&self) -> Result<PathBuf, EngineError>;

    /// Run the engine with `args`, returning its captured stdout
    ///
    /// With `streaming`, output is also mirrored to the console as it arrives.
    fn invoke(
        &self,
        args: &[OsString],
        streaming: bool,
    ) -> impl Future<Output = Result<String, EngineError>> + Send;
}

/// Engine settings supplied by the caller, taking precedence over the config file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineOverrides {
    pub jar: Option<PathBuf>,
    pub java: Option<String>,
    /// Timeout in seconds, 0 disables it
    pub timeout: Option<u64>,
}

impl EngineOverrides {
    /// Read overrides from `OPENDATALOADER_PDF_*` environment variables
    pub fn from_env() -> Self {
        let timeout = std::env::var(ENV_TIMEOUT).ok().and_then(|value| {
            value
                .trim()
                .parse()
                .map_err(|_| {
                    tracing::warn!("Ignoring {ENV_TIMEOUT}='{value}': not a number of seconds");
                })
                .ok()
        });

        Self {
            jar: std::env::var_os(ENV_JAR).map(PathBuf::from),
            java: std::env::var(ENV_JAVA).ok(),
            timeout,
        }
    }
}

/// Engine backed by the bundled Java archive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JarEngine {
    jar: PathBuf,
    java: String,
    java_options: Vec<String>,
    timeout: Option<Duration>,
}

impl JarEngine {
    /// Engine for `jar`, run with the `java` on PATH
    pub fn new(jar: impl Into<PathBuf>) -> Self {
        Self {
            jar: jar.into(),
            java: DEFAULT_JAVA_COMMAND.to_string(),
            java_options: Vec::new(),
            timeout: None,
        }
    }

    /// Java executable name or path
    pub fn with_java(mut self, java: impl Into<String>) -> Self {
        self.java = java.into();
        self
    }

    /// Options passed to the JVM before `-jar`
    pub fn with_java_options(mut self, options: Vec<String>) -> Self {
        self.java_options = options;
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Combine config file settings with caller overrides
    pub fn resolve(config: &GlobalConfig, overrides: &EngineOverrides) -> Self {
        let jar = overrides
            .jar
            .clone()
            .or_else(|| config.engine.jar.clone())
            .unwrap_or_else(default_jar_path);
        let java = overrides
            .java
            .clone()
            .unwrap_or_else(|| config.java().to_string());
        let timeout = match overrides.timeout {
            Some(0) => None,
            Some(secs) => Some(Duration::from_secs(secs)),
            None => config.timeout(),
        };

        Self::new(jar)
            .with_java(java)
            .with_java_options(config.java_options().to_vec())
            .with_timeout(timeout)
    }

    /// Engine configured from the global config file and environment
    pub fn from_environment() -> Result<Self, GlobalConfigError> {
        let config = GlobalConfig::load(&OdlDirs::new())?;
        Ok(Self::resolve(&config, &EngineOverrides::from_env()))
    }

    pub fn jar(&self) -> &Path {
        &self.jar
    }

    pub fn java(&self) -> &str {
        &self.java
    }

    pub fn java_options(&self) -> &[String] {
        &self.java_options
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Full argument list for the java command
    pub fn command_args(&self, args: &[OsString]) -> Vec<OsString> {
        let mut command_args: Vec<OsString> =
            self.java_options.iter().map(OsString::from).collect();
        command_args.push("-jar".into());
        command_args.push(self.jar.clone().into_os_string());
        command_args.extend_from_slice(args);
        command_args
    }

    fn resolve_java(&self) -> Result<PathBuf, EngineError> {
        which::which(&self.java).map_err(|e| {
            tracing::debug!("Could not resolve '{}': {}", self.java, e);
            EngineError::CommandNotFound {
                command: self.java.clone(),
            }
        })
    }
}

impl Engine for JarEngine {
    fn locate(&self) -> Result<PathBuf, EngineError> {
        if self.jar.is_file() {
            Ok(self.jar.clone())
        } else {
            Err(EngineError::ArtifactNotFound {
                path: self.jar.clone(),
            })
        }
    }

    async fn invoke(&self, args: &[OsString], streaming: bool) -> Result<String, EngineError> {
        let jar = self.locate()?;
        let java = self.resolve_java()?;

        tracing::info!("Running engine {}", jar.display());
        tracing::debug!(
            "{} {}",
            java.display(),
            mask_secrets(&self.command_args(args)).join(" ")
        );

        let output = ProcessRunner::new()
            .streaming(streaming)
            .with_timeout(self.timeout)
            .run(java.as_os_str(), self.command_args(args))
            .await?;

        match output.code {
            Some(0) => Ok(output.stdout),
            Some(code) => Err(EngineError::Failed {
                code,
                output: output.diagnostics().to_string(),
            }),
            None => Err(EngineError::Terminated {
                output: output.diagnostics().to_string(),
            }),
        }
    }
}

/// Default artifact location: `lib/` next to the running executable
pub fn default_jar_path() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_default()
        .join(ENGINE_LIB_DIR)
        .join(ENGINE_JAR_NAME)
}

/// Render arguments for logging with the password value hidden
fn mask_secrets(args: &[OsString]) -> Vec<String> {
    let mut masked = Vec::with_capacity(args.len());
    let mut hide_next = false;
    for arg in args {
        if hide_next {
            masked.push("******".to_string());
            hide_next = false;
            continue;
        }
        let arg = arg.to_string_lossy();
        hide_next = arg == "--password" || arg == "-p";
        masked.push(arg.into_owned());
    }
    masked
}
