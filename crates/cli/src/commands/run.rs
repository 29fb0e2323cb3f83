use std::path::PathBuf;
use zigtask_core::Error;
use zigtask_provider::{TaskDefinition, TaskProvider, ToolConfig, ZigTaskProvider};

/// Resolve a step into its command line and execute it with inherited
/// stdio, the way a host executor would. The child's exit code becomes
/// ours.
pub async fn execute(
    config: &ToolConfig,
    step: String,
    cwd: Option<PathBuf>,
    args: Vec<String>,
) -> eyre::Result<()> {
    let cwd = match cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };
    let definition = TaskDefinition::new(step, cwd).with_args(args);

    let provider = ZigTaskProvider::from_config(config)?;
    let task = provider.resolve_task(&definition)?;
    tracing::info!(command = %task.command.display(), "running build step");

    let status = tokio::process::Command::new(&task.command.program)
        .args(task.command.args.as_slice())
        .current_dir(&task.command.working_directory)
        .status()
        .await
        .map_err(|e| {
            Error::command_execution(
                task.command.program.to_string_lossy(),
                task.command.args.as_slice().to_vec(),
                format!("failed to spawn build tool: {e}"),
                None,
            )
        })?;

    if !status.success() {
        std::process::exit(status.code().unwrap_or(1));
    }
    Ok(())
}
