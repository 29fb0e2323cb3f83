//! Task definition types.
//!
//! [`TaskDefinition`] is the only serialized contract in this system:
//! hosts persist exactly its fields and hand them back, possibly in a
//! later session, to be resolved into a runnable command again.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use zigtask_core::constants::TASK_TYPE;
use zigtask_core::{CommandArguments, Error, Result};

/// Minimal persisted description of a runnable task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDefinition {
    /// Fixed discriminator tag, always [`TASK_TYPE`]
    #[serde(rename = "type")]
    pub kind: String,
    /// Step name passed to `zig build`
    pub step: String,
    /// Working directory for the spawned build
    #[serde(rename = "workingDirectory")]
    pub working_directory: PathBuf,
    /// Extra arguments appended after a literal `--`
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<String>,
}

impl TaskDefinition {
    /// Create a definition for a step rooted at the given directory
    #[must_use]
    pub fn new(step: impl Into<String>, working_directory: impl Into<PathBuf>) -> Self {
        Self {
            kind: TASK_TYPE.to_string(),
            step: step.into(),
            working_directory: working_directory.into(),
            args: Vec::new(),
        }
    }

    /// Attach pass-through arguments
    #[must_use]
    pub fn with_args(mut self, args: Vec<String>) -> Self {
        self.args = args;
        self
    }

    /// Parse a definition from its persisted JSON form
    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw)
            .map_err(|e| Error::json(format!("invalid task definition: {e}"), e))
    }

    /// Serialize to the persisted JSON form
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Group marker a host's generic "run the default build" affordance
/// keys off. Only the designated default step's task carries one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskGroup {
    Build,
}

/// Fully executable command line for a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    /// Build tool executable
    pub program: PathBuf,
    /// Arguments, starting with the `build` subcommand
    pub args: CommandArguments,
    /// Working directory for the child process
    pub working_directory: PathBuf,
}

impl CommandLine {
    /// Render the command for logs and human display.
    #[must_use]
    pub fn display(&self) -> String {
        let program = self.program.to_string_lossy();
        let words: Vec<&str> = std::iter::once(program.as_ref())
            .chain(self.args.iter().map(String::as_str))
            .collect();
        shlex::try_join(words.iter().copied()).unwrap_or_else(|_| words.join(" "))
    }
}

/// Host-facing task: the persisted definition plus presentation
/// metadata and the command to execute.
#[derive(Debug, Clone)]
pub struct Task {
    /// The minimal definition a host persists
    pub definition: TaskDefinition,
    /// Display label, the step name
    pub label: String,
    /// Step description, when the listing carried one
    pub detail: Option<String>,
    /// Set to [`TaskGroup::Build`] for the designated default step
    pub group: Option<TaskGroup>,
    /// Command the host's executor should run
    pub command: CommandLine,
    /// Problem-matcher name for the host's diagnostics subsystem
    pub problem_matcher: &'static str,
}

impl Task {
    /// Working directory the task will run in
    #[must_use]
    pub fn working_directory(&self) -> &Path {
        &self.command.working_directory
    }
}
