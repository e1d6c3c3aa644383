//! Implementation of the `cargokit-hvigor env` command.
//!
//! Prints the environment the build tool would receive for a target, without
//! running anything.

use std::sync::Arc;

use anyhow::{Context, Result};

use cargokit_hvigor_lib::BuildTarget;
use cargokit_hvigor_lib::task::CargokitTask;

use crate::output::{OutputFormat, print_json};
use crate::project::{Project, ProjectArgs};

pub fn cmd_env(args: &ProjectArgs, target: &str, format: OutputFormat) -> Result<()> {
  let project = Project::load(args)?;
  project.check_targets(&[target.to_string()])?;

  let task = CargokitTask::for_target(
    &project.host,
    &BuildTarget::new(target),
    Arc::new(project.plugin.config().clone()),
  );
  let (paths, env) = task
    .prepare()
    .with_context(|| format!("Failed to prepare cargokit task for target {}", target))?;

  if format.is_json() {
    return print_json(&env);
  }

  println!("# {} {}", paths.executable.display(), cargokit_hvigor_lib::consts::BUILD_TOOL_COMMAND);
  for (key, value) in env.iter() {
    println!("{}={}", key, value);
  }

  Ok(())
}
