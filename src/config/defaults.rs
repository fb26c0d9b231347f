//! Default configuration values

/// Application name used in directory paths
pub const APP_NAME: &str = "opendataloader-pdf";

/// File name of the bundled engine artifact
pub const ENGINE_JAR_NAME: &str = "opendataloader-pdf-cli.jar";

/// Directory holding the engine artifact, relative to the executable
pub const ENGINE_LIB_DIR: &str = "lib";

/// Java command used when none is configured
pub const DEFAULT_JAVA_COMMAND: &str = "java";

/// Global config file name inside the config directory
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Environment variable overriding the config directory
pub const ENV_CONFIG_DIR: &str = "OPENDATALOADER_PDF_CONFIG_DIR";

/// Environment variable overriding the engine artifact path
pub const ENV_JAR: &str = "OPENDATALOADER_PDF_JAR";

/// Environment variable overriding the java command
pub const ENV_JAVA: &str = "OPENDATALOADER_PDF_JAVA";

/// Environment variable overriding the engine timeout (seconds)
pub const ENV_TIMEOUT: &str = "OPENDATALOADER_PDF_TIMEOUT";

/// Schema file name, relative to the repository root
pub const SCHEMA_FILE_NAME: &str = "options.json";
