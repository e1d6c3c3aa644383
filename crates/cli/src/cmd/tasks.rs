//! Implementation of the `cargokit-hvigor tasks` command.
//!
//! Applies the plugin to the standalone host and lists the tasks it
//! registered, in dependency order.

use anyhow::{Context, Result};
use serde::Serialize;

use crate::output::{OutputFormat, print_info, print_json, print_stat, symbols};
use crate::project::{Project, ProjectArgs};

#[derive(Debug, Serialize)]
struct TaskEntry {
  name: String,
  dependencies: Vec<String>,
  post_dependencies: Vec<String>,
}

pub fn cmd_tasks(args: &ProjectArgs, format: OutputFormat) -> Result<()> {
  let mut project = Project::load(args)?;
  project.apply();

  let graph = project.host.graph().context("Invalid task graph")?;
  let order = graph.registered_order().context("Failed to order tasks")?;

  let entries: Vec<TaskEntry> = order
    .iter()
    .filter_map(|name| project.host.task(name))
    .map(|task| TaskEntry {
      name: task.name.clone(),
      dependencies: task.dependencies.clone(),
      post_dependencies: task.post_dependencies.clone(),
    })
    .collect();

  if format.is_json() {
    return print_json(&entries);
  }

  if entries.is_empty() {
    print_info("No tasks registered");
    return Ok(());
  }

  for entry in &entries {
    print_info(&entry.name);
    print_stat("after", &entry.dependencies.join(", "));
    print_stat("before", &entry.post_dependencies.join(", "));
  }
  println!();
  println!("{}", order.join(&format!(" {} ", symbols::ARROW)));

  Ok(())
}
