//! Child process execution
//!
//! Spawns a program with piped output, drains stdout and stderr concurrently
//! and optionally mirrors every chunk to the parent's streams as it arrives.

use crate::error::EngineError;
use std::ffi::OsStr;
use std::io;
use std::process::Stdio;
use std::time::Duration;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::process::Command;

const CHUNK_SIZE: usize = 8192;

/// Captured result of a finished process
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOutput {
    /// Exit code, `None` when terminated by a signal
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ProcessOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    /// Diagnostic text for a failed run: stderr, or stdout when stderr is empty
    pub fn diagnostics(&self) -> &str {
        if self.stderr.is_empty() {
            &self.stdout
        } else {
            &self.stderr
        }
    }
}

/// Runs one child process to completion
#[derive(Debug, Clone, Default)]
pub struct ProcessRunner {
    stream_output: bool,
    timeout: Option<Duration>,
}

impl ProcessRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mirror child output to this process's stdout/stderr while capturing it
    pub fn streaming(mut self, enabled: bool) -> Self {
        self.stream_output = enabled;
        self
    }

    /// Kill the child if it runs longer than `timeout`
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Spawn `program` with `args` and wait for it to exit
    ///
    /// A `NotFound` spawn error maps to [`EngineError::CommandNotFound`].
    pub async fn run<I, S>(&self, program: &OsStr, args: I) -> Result<ProcessOutput, EngineError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let command_name = program.to_string_lossy().into_owned();

        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| {
                if e.kind() == io::ErrorKind::NotFound {
                    EngineError::CommandNotFound {
                        command: command_name.clone(),
                    }
                } else {
                    EngineError::Spawn {
                        command: command_name.clone(),
                        error: e.to_string(),
                    }
                }
            })?;

        tracing::debug!("Spawned '{}' (pid {:?})", command_name, child.id());

        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| io::Error::other("child stdout was not captured"))?;
        let stderr = child
            .stderr
            .take()
            .ok_or_else(|| io::Error::other("child stderr was not captured"))?;

        let stream = self.stream_output;
        let collect = async {
            let (out, err) = tokio::try_join!(
                drain(stdout, stream.then(tokio::io::stdout)),
                drain(stderr, stream.then(tokio::io::stderr)),
            )?;
            let status = child.wait().await?;
            Ok::<_, io::Error>((status, out, err))
        };

        let (status, out, err) = match self.timeout {
            Some(limit) => {
                let waited = tokio::time::timeout(limit, collect).await;
                match waited {
                    Ok(result) => result?,
                    Err(_) => {
                        tracing::warn!(
                            "'{}' exceeded {}s, killing it",
                            command_name,
                            limit.as_secs()
                        );
                        child.kill().await?;
                        return Err(EngineError::Timeout {
                            seconds: limit.as_secs(),
                        });
                    }
                }
            }
            None => collect.await?,
        };

        tracing::debug!("'{}' exited with {}", command_name, status);

        Ok(ProcessOutput {
            code: status.code(),
            stdout: String::from_utf8_lossy(&out).into_owned(),
            stderr: String::from_utf8_lossy(&err).into_owned(),
        })
    }
}

/// Read `reader` to EOF, copying each chunk to `mirror` if given
async fn drain<R, W>(mut reader: R, mut mirror: Option<W>) -> io::Result<Vec<u8>>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut captured = Vec::new();
    let mut buf = vec![0u8; CHUNK_SIZE];

    loop {
        let n = reader.read(&mut buf).await?;
        if n == 0 {
            break;
        }
        if let Some(out) = mirror.as_mut() {
            out.write_all(&buf[..n]).await?;
            out.flush().await?;
        }
        captured.extend_from_slice(&buf[..n]);
    }

    Ok(captured)
}
