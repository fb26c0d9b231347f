//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests.

#![allow(dead_code)]

use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Engine JAR location used by [`TestProject::create_fake_jar`]
pub const FAKE_JAR: &str = "lib/opendataloader-pdf-cli.jar";

/// File the fake java script records its arguments in
pub const ARGS_FILE: &str = "java-args.txt";

/// Test project context
///
/// A temporary directory holding inputs, a private config directory and,
/// optionally, a fake engine.
pub struct TestProject {
    /// Temporary directory for the test project
    pub dir: TempDir,
}

impl TestProject {
    /// Create a new test project in a temporary directory
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Get the path to the test project directory
    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// Create a file in the test project
    pub fn create_file(&self, name: &str, content: &str) {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        std::fs::write(path, content).expect("Failed to write file");
    }

    /// Create a directory in the test project
    pub fn create_dir(&self, name: &str) {
        std::fs::create_dir_all(self.dir.path().join(name)).expect("Failed to create directory");
    }

    /// Check if a file exists in the test project
    pub fn file_exists(&self, name: &str) -> bool {
        self.dir.path().join(name).exists()
    }

    /// Read a file from the test project
    pub fn read_file(&self, name: &str) -> String {
        std::fs::read_to_string(self.dir.path().join(name)).expect("Failed to read file")
    }

    /// Create a placeholder PDF
    pub fn create_pdf(&self, name: &str) {
        self.create_file(name, "%PDF-1.7\n%%EOF\n");
    }

    /// Create an empty engine JAR at [`FAKE_JAR`]
    pub fn create_fake_jar(&self) -> PathBuf {
        self.create_file(FAKE_JAR, "PK");
        self.dir.path().join(FAKE_JAR)
    }

    /// Write `config/config.toml`
    pub fn write_config(&self, toml: &str) {
        self.create_file("config/config.toml", toml);
    }

    /// Install a fake `java` that records its arguments, then runs `body`
    #[cfg(unix)]
    pub fn create_fake_java(&self, body: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = self.dir.path().join("bin/java");
        let args_file = self.dir.path().join(ARGS_FILE);
        let script = format!(
            "#!/bin/sh\nprintf '%s\\n' \"$@\" > '{}'\n{body}\n",
            args_file.display()
        );
        self.create_file("bin/java", &script);
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
            .expect("Failed to make fake java executable");
        path
    }

    /// Arguments the fake java received, one per line
    pub fn recorded_args(&self) -> Vec<String> {
        self.read_file(ARGS_FILE).lines().map(String::from).collect()
    }

    /// Command for the CLI isolated from the user's environment
    pub fn cli(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_opendataloader-pdf"));
        cmd.current_dir(self.path())
            .env("OPENDATALOADER_PDF_CONFIG_DIR", self.dir.path().join("config"))
            .env_remove("OPENDATALOADER_PDF_JAR")
            .env_remove("OPENDATALOADER_PDF_JAVA")
            .env_remove("OPENDATALOADER_PDF_TIMEOUT")
            .env_remove("RUST_LOG");
        cmd
    }

    /// Run the CLI with `args`
    pub fn run_cli(&self, args: &[&str]) -> Output {
        self.cli()
            .args(args)
            .output()
            .expect("Failed to execute opendataloader-pdf")
    }

    /// Run the CLI against the fake engine
    pub fn run_with_fake_engine(&self, args: &[&str]) -> Output {
        let jar = self.dir.path().join(FAKE_JAR);
        let java = self.dir.path().join("bin/java");
        self.cli()
            .arg("--jar")
            .arg(jar)
            .arg("--java")
            .arg(java)
            .args(args)
            .output()
            .expect("Failed to execute opendataloader-pdf")
    }
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

/// Stdout as text
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Stderr as text
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
