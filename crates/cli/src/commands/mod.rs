use clap::Subcommand;
use std::path::PathBuf;
use zigtask_provider::ToolConfig;

pub mod resolve;
pub mod run;
pub mod tasks;

#[derive(Subcommand)]
pub enum Commands {
    /// List every build step task discoverable from the given roots
    #[command(visible_alias = "t")]
    Tasks {
        /// Project roots to discover (defaults to the current directory)
        roots: Vec<PathBuf>,

        /// Show step descriptions and full command lines
        #[arg(short, long)]
        verbose: bool,

        /// Emit the persistable task definitions as JSON
        #[arg(long)]
        json: bool,
    },

    /// Reconstruct the command line for a persisted task definition
    Resolve {
        /// Step name recorded in the definition
        #[arg(required_unless_present = "definition")]
        step: Option<String>,

        /// Full persisted definition as JSON, instead of a step name
        #[arg(long, value_name = "JSON", conflicts_with = "step")]
        definition: Option<String>,

        /// Working directory recorded in the definition (defaults to the
        /// current directory)
        #[arg(long, value_name = "DIR")]
        cwd: Option<PathBuf>,

        /// Extra arguments appended after `--`
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Resolve a step and run it, streaming the build tool's output
    #[command(visible_alias = "r")]
    Run {
        /// Step name to run
        step: String,

        /// Working directory (defaults to the current directory)
        #[arg(long, value_name = "DIR")]
        cwd: Option<PathBuf>,

        /// Extra arguments appended after `--`
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
}

impl Commands {
    pub async fn execute(self, zig: Option<PathBuf>) -> eyre::Result<()> {
        let config = match zig {
            Some(path) => ToolConfig::with_executable(path),
            None => ToolConfig::new(),
        };

        match self {
            Commands::Tasks {
                roots,
                verbose,
                json,
            } => tasks::execute(&config, roots, verbose, json).await,
            Commands::Resolve {
                step,
                definition,
                cwd,
                args,
            } => resolve::execute(&config, step, definition, cwd, args),
            Commands::Run { step, cwd, args } => run::execute(&config, step, cwd, args).await,
        }
    }
}
