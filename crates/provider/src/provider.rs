//! The task-provider capability exposed to hosts.

use crate::config::ToolConfig;
use crate::definition::{Task, TaskDefinition};
use crate::invoke::BuildTool;
use crate::steps::parse_step_list;
use crate::synthesize::{resolve, synthesize};
use async_trait::async_trait;
use zigtask_core::constants::{PROBLEM_MATCHER, TASK_TYPE};
use zigtask_core::{Error, ProjectRoot, Result};

/// Two-operation capability a host calls into: list every discoverable
/// task, and re-resolve a previously persisted definition into
/// something runnable.
#[async_trait]
pub trait TaskProvider: Send + Sync {
    /// Discover every runnable task across the given project roots.
    ///
    /// Roots are visited sequentially. A root whose step listing fails
    /// is logged and skipped, so one misconfigured root does not hide
    /// the tasks of the others; the returned set may be partial.
    async fn provide_tasks(&self, roots: &[ProjectRoot]) -> Result<Vec<Task>>;

    /// Rebuild a runnable task from a previously persisted definition,
    /// without re-running discovery.
    fn resolve_task(&self, definition: &TaskDefinition) -> Result<Task>;
}

/// Task provider backed by `zig build`.
pub struct ZigTaskProvider {
    tool: BuildTool,
}

impl ZigTaskProvider {
    /// Create a provider around an already-resolved build tool
    #[must_use]
    pub fn new(tool: BuildTool) -> Self {
        Self { tool }
    }

    /// Create a provider from configuration, resolving the executable once
    pub fn from_config(config: &ToolConfig) -> Result<Self> {
        Ok(Self {
            tool: config.resolve()?,
        })
    }

    /// The build tool this provider invokes
    #[must_use]
    pub fn tool(&self) -> &BuildTool {
        &self.tool
    }
}

#[async_trait]
impl TaskProvider for ZigTaskProvider {
    async fn provide_tasks(&self, roots: &[ProjectRoot]) -> Result<Vec<Task>> {
        let mut tasks = Vec::new();
        for root in roots {
            tracing::info!(root = %root, "listing build steps");
            let listing = match self.tool.list_steps(root.as_path()).await {
                Ok(listing) => listing,
                Err(e) => {
                    tracing::warn!(root = %root, error = %e, "step listing failed, skipping root");
                    continue;
                }
            };
            for step in parse_step_list(&listing) {
                tasks.push(synthesize(self.tool.executable(), &step, root));
            }
        }
        Ok(tasks)
    }

    fn resolve_task(&self, definition: &TaskDefinition) -> Result<Task> {
        if definition.kind != TASK_TYPE {
            return Err(Error::configuration(format!(
                "cannot resolve a task of type '{}'",
                definition.kind
            )));
        }
        let command = resolve(self.tool.executable(), definition);
        Ok(Task {
            label: definition.step.clone(),
            detail: None,
            group: None,
            problem_matcher: PROBLEM_MATCHER,
            definition: definition.clone(),
            command,
        })
    }
}
