use std::path::PathBuf;
use zigtask_provider::{TaskDefinition, TaskProvider, ToolConfig, ZigTaskProvider};

pub fn execute(
    config: &ToolConfig,
    step: Option<String>,
    definition: Option<String>,
    cwd: Option<PathBuf>,
    args: Vec<String>,
) -> eyre::Result<()> {
    let definition = match (definition, step) {
        (Some(raw), _) => TaskDefinition::from_json(&raw)?,
        (None, Some(step)) => {
            let cwd = match cwd {
                Some(dir) => dir,
                None => std::env::current_dir()?,
            };
            TaskDefinition::new(step, cwd).with_args(args)
        }
        // clap's required_unless_present already rules this out
        (None, None) => eyre::bail!("either a step name or --definition is required"),
    };

    let provider = ZigTaskProvider::from_config(config)?;
    let task = provider.resolve_task(&definition)?;
    println!("{}", task.command.display());
    Ok(())
}
