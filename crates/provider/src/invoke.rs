//! Invocation of the external build tool.

use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;
use zigtask_core::constants::{BUILD_SUBCOMMAND, LIST_STEPS_FLAG};
use zigtask_core::{Error, Result};

/// Handle on a resolved build tool executable.
#[derive(Debug, Clone)]
pub struct BuildTool {
    executable: PathBuf,
}

impl BuildTool {
    /// Wrap an already-resolved executable path
    #[must_use]
    pub fn new(executable: impl Into<PathBuf>) -> Self {
        Self {
            executable: executable.into(),
        }
    }

    /// Path to the underlying executable
    #[must_use]
    pub fn executable(&self) -> &Path {
        &self.executable
    }

    /// Run `<tool> build --list-steps` in `root` and return captured stdout.
    ///
    /// The child's working directory is the project root; stdout and
    /// stderr are captured as UTF-8 (lossy). A spawn failure or non-zero
    /// exit maps to [`Error::CommandExecution`] carrying both captured
    /// streams. No retry is attempted.
    pub async fn list_steps(&self, root: &Path) -> Result<String> {
        let args = [BUILD_SUBCOMMAND, LIST_STEPS_FLAG];
        let output = Command::new(&self.executable)
            .args(args)
            .current_dir(root)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| {
                Error::command_execution(
                    self.executable.to_string_lossy(),
                    args.iter().map(ToString::to_string).collect(),
                    format!("failed to spawn build tool: {e}"),
                    None,
                )
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        if !output.status.success() {
            return Err(Error::command_execution_with_output(
                self.executable.to_string_lossy(),
                args.iter().map(ToString::to_string).collect(),
                "step listing failed",
                output.status.code(),
                stdout,
                stderr,
            ));
        }

        Ok(stdout)
    }
}
