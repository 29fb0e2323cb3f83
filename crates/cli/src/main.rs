use clap::Parser;
use std::path::PathBuf;

mod commands;
mod logging;

use commands::Commands;

#[derive(Parser)]
#[command(name = "zigtask")]
#[command(about = "Expose zig build steps as runnable tasks", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to the zig executable (overrides ZIGTASK_ZIG and PATH lookup)
    #[arg(long, value_name = "PATH", global = true)]
    zig: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    logging::init().map_err(|e| eyre::eyre!(e))?;

    let cli = Cli::parse();

    // Default behavior when no command is specified: list tasks for
    // the current directory.
    let command = cli.command.unwrap_or(Commands::Tasks {
        roots: Vec::new(),
        verbose: false,
        json: false,
    });
    command.execute(cli.zig).await
}
