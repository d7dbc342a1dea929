//! Drive the suite through an external `cargo test` process.
//!
//! # Design
//! This is a convenience integration, not the primary runner: the cases are
//! ordinary `#[test]` functions in `tests/live.rs` and `tests/mock_suite.rs`.
//! The default command runs the `live` target single-threaded, quiet, and
//! with warnings silenced. Captured output is only surfaced on failure.

use std::process::Command;

use posts_core::Config;
use thiserror::Error;
use tracing::{error, info};

#[derive(Error, Debug)]
pub enum RunnerError {
    #[error("failed to start `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("test run failed with exit code {code:?}")]
    Failed {
        code: Option<i32>,
        stdout: String,
        stderr: String,
    },
}

/// Captured streams of a finished run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutput {
    pub stdout: String,
    pub stderr: String,
}

/// An external test command.
#[derive(Debug, Clone)]
pub struct ExternalRunner {
    program: String,
    args: Vec<String>,
    envs: Vec<(String, String)>,
}

impl Default for ExternalRunner {
    /// `cargo test -p posts-harness --test live --quiet -- --include-ignored --test-threads=1`
    fn default() -> Self {
        let args = [
            "test",
            "-p",
            "posts-harness",
            "--test",
            "live",
            "--quiet",
            "--",
            "--include-ignored",
            "--test-threads=1",
        ];
        // RUSTFLAGS is part of cargo's build fingerprint: alternating this run
        // with a plain `cargo test` rebuilds the dependency graph each time.
        Self::new("cargo", args).env("RUSTFLAGS", "-Awarnings")
    }
}

impl ExternalRunner {
    /// The default command, pointed at `config.base_url` through `POSTS_BASE_URL`.
    pub fn for_config(config: &Config) -> Self {
        Self::default().env("POSTS_BASE_URL", &config.base_url)
    }

    pub fn new<I, S>(program: &str, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.to_string(),
            args: args.into_iter().map(Into::into).collect(),
            envs: Vec::new(),
        }
    }

    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.envs.push((key.to_string(), value.to_string()));
        self
    }

    /// The command line as it would be typed.
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Run to completion. A non-zero exit logs both captured streams and
    /// returns `RunnerError::Failed`.
    pub fn run(&self) -> Result<RunOutput, RunnerError> {
        info!(command = %self.command_line(), "starting external test run");

        let output = Command::new(&self.program)
            .args(&self.args)
            .envs(self.envs.iter().map(|(k, v)| (k.as_str(), v.as_str())))
            .output()
            .map_err(|source| RunnerError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        if !output.status.success() {
            let code = output.status.code();
            error!(?code, "external test run failed\n--- stdout ---\n{stdout}\n--- stderr ---\n{stderr}");
            return Err(RunnerError::Failed {
                code,
                stdout,
                stderr,
            });
        }

        info!("external test run passed");
        Ok(RunOutput { stdout, stderr })
    }
}
