use std::path::PathBuf;
use zigtask_core::ProjectRoot;
use zigtask_provider::{TaskProvider, ToolConfig, ZigTaskProvider};

pub async fn execute(
    config: &ToolConfig,
    roots: Vec<PathBuf>,
    verbose: bool,
    json: bool,
) -> eyre::Result<()> {
    let roots: Vec<ProjectRoot> = if roots.is_empty() {
        vec![ProjectRoot::from(std::env::current_dir()?)]
    } else {
        roots.into_iter().map(ProjectRoot::from).collect()
    };

    let provider = ZigTaskProvider::from_config(config)?;
    let tasks = provider.provide_tasks(&roots).await?;

    if json {
        let definitions: Vec<_> = tasks.iter().map(|t| &t.definition).collect();
        println!("{}", serde_json::to_string_pretty(&definitions)?);
        return Ok(());
    }

    if tasks.is_empty() {
        println!("No build steps found");
        return Ok(());
    }

    println!("Discovered {} build step tasks:", tasks.len());
    for task in &tasks {
        let marker = if task.group.is_some() { " (default)" } else { "" };
        match &task.detail {
            Some(detail) => println!("  • {}{marker}  {detail}", task.label),
            None => println!("  • {}{marker}", task.label),
        }
        if verbose {
            println!("      {}", task.command.display());
        }
    }
    Ok(())
}
