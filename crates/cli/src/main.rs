mod cmd;
mod output;
mod project;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use cmd::{cmd_build, cmd_env, cmd_info, cmd_tasks};
use output::OutputFormat;
use project::ProjectArgs;

/// cargokit-hvigor - run the cargokit native build the way hvigor would
#[derive(Parser)]
#[command(name = "cargokit-hvigor")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Enable verbose output
  #[arg(short, long, global = true)]
  verbose: bool,

  #[command(flatten)]
  project: ProjectArgs,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// List the tasks the plugin registers, in dependency order
  Tasks {
    #[arg(long, value_enum, default_value_t)]
    format: OutputFormat,
  },

  /// Print the build tool environment for a target
  Env {
    /// Target name
    target: String,

    #[arg(long, value_enum, default_value_t)]
    format: OutputFormat,
  },

  /// Run the cargokit task of each target (all targets by default)
  Build {
    /// Targets to build
    targets: Vec<String>,
  },

  /// Show platform information
  Info,
}

fn main() -> Result<()> {
  let cli = Cli::parse();

  let default_level = if cli.verbose { "info" } else { "warn" };
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .without_time()
    .init();

  match cli.command {
    Commands::Tasks { format } => cmd_tasks(&cli.project, format),
    Commands::Env { target, format } => cmd_env(&cli.project, &target, format),
    Commands::Build { targets } => cmd_build(&cli.project, &targets),
    Commands::Info => {
      cmd_info();
      Ok(())
    }
  }
}
