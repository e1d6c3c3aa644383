//! Interface to the host build framework.
//!
//! The plugin never talks to a concrete build framework. It sees a [`Host`]:
//! something that can enumerate targets, accept task registrations and answer
//! directory lookups for the node the plugin is applied to.

pub mod standalone;

use std::fmt;
use std::path::PathBuf;

use crate::task::TaskError;

/// A build target tracked by the host (one platform/ABI build unit).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BuildTarget {
  name: String,
}

impl BuildTarget {
  pub fn new(name: impl Into<String>) -> Self {
    Self { name: name.into() }
  }

  pub fn name(&self) -> &str {
    &self.name
  }
}

impl fmt::Display for BuildTarget {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.name)
  }
}

/// Work performed when the host scheduler runs a task.
pub trait TaskAction: Send + Sync {
  fn run(&self) -> Result<(), TaskError>;
}

impl<F> TaskAction for F
where
  F: Fn() -> Result<(), TaskError> + Send + Sync,
{
  fn run(&self) -> Result<(), TaskError> {
    self()
  }
}

/// A task handed to the host for scheduling.
///
/// Once registered, the host owns it; the plugin never reads it back.
pub struct TaskDescriptor {
  /// Unique task name within the host graph.
  pub name: String,
  /// Work to run.
  pub action: Box<dyn TaskAction>,
  /// Tasks that must complete before this one.
  pub dependencies: Vec<String>,
  /// Tasks that must not start before this one completes.
  pub post_dependencies: Vec<String>,
}

impl fmt::Debug for TaskDescriptor {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("TaskDescriptor")
      .field("name", &self.name)
      .field("dependencies", &self.dependencies)
      .field("post_dependencies", &self.post_dependencies)
      .finish_non_exhaustive()
  }
}

/// Capabilities the plugin needs from the host build framework.
pub trait Host {
  /// Targets of the node's HAR context.
  ///
  /// A node without a HAR context has no targets.
  fn targets(&self) -> Vec<BuildTarget>;

  /// Add a task to the host graph.
  fn register_task(&mut self, task: TaskDescriptor);

  /// Directory of the node the plugin is applied to.
  fn node_dir(&self) -> PathBuf;

  /// Directory of the enclosing project node, if there is one.
  fn parent_node_dir(&self) -> Option<PathBuf>;
}
