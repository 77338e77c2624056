//! Local shell command runner

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

/// Trait for shell backends, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShellRunner: Send + Sync {
    /// Run the configured command and return its stdout
    async fn run(&self) -> Result<String>;
}

/// Runs a fixed command line through `sh -c`
pub struct LocalShell {
    command: String,
}

impl LocalShell {
    pub fn new(command: &str) -> Self {
        Self {
            command: command.to_string(),
        }
    }
}

#[async_trait]
impl ShellRunner for LocalShell {
    async fn run(&self) -> Result<String> {
        debug!(command = %self.command, "Running shell command");

        let output = Command::new("sh")
            .arg("-c")
            .arg(&self.command)
            .output()
            .await
            .context("Failed to spawn shell")?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            bail!("Shell command failed ({}): {}", output.status, stderr.trim());
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
