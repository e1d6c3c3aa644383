//! Implementation of the `cargokit-hvigor build` command.
//!
//! Runs the cargokit task of each selected target in graph order. Host tasks
//! such as `ProcessLibs` only exist in the real build framework and are not
//! run here. The first failure stops the build.

use std::time::Instant;

use anyhow::{Context, Result, bail};
use tracing::info;

use cargokit_hvigor_lib::task::task_name;

use crate::output::{format_duration, print_error, print_info, print_success};
use crate::project::{Project, ProjectArgs};

pub fn cmd_build(args: &ProjectArgs, targets: &[String]) -> Result<()> {
  let mut project = Project::load(args)?;
  project.check_targets(targets)?;
  project.apply();

  let selected: Vec<String> = if targets.is_empty() {
    project.targets.iter().map(|t| task_name(t)).collect()
  } else {
    targets.iter().map(|t| task_name(t)).collect()
  };

  let graph = project.host.graph().context("Invalid task graph")?;
  let order: Vec<String> = graph
    .registered_order()
    .context("Failed to order tasks")?
    .into_iter()
    .filter(|name| selected.contains(name))
    .collect();

  info!(tasks = order.len(), "starting cargokit build");

  let started = Instant::now();
  for name in &order {
    print_info(&format!("Running {}", name));
    let task_started = Instant::now();

    if let Err(e) = project.host.run_task(name) {
      print_error(&e.to_string());
      bail!("build failed at {}", name);
    }

    print_success(&format!("{} ({})", name, format_duration(task_started.elapsed())));
  }

  println!();
  println!(
    "Build complete: {} task(s) in {}",
    order.len(),
    format_duration(started.elapsed())
  );

  Ok(())
}
