//! In-memory host used outside the real build framework.
//!
//! The standalone host stands in for a single module node: it has a node
//! directory, an optional parent directory and a fixed list of targets. It
//! records the tasks registered against it and can order and run them. Host
//! tasks the plugin only refers to by name (such as `ProcessLibs`) appear in
//! the graph as nodes without actions.

use std::collections::{HashMap, HashSet};
use std::path::PathBuf;

use petgraph::Direction;
use petgraph::algo::toposort;
use petgraph::graph::{DiGraph, NodeIndex};
use thiserror::Error;
use tracing::debug;

use crate::task::TaskError;

use super::{BuildTarget, Host, TaskDescriptor};

/// Errors raised by the standalone host.
#[derive(Debug, Error)]
pub enum HostError {
  /// Two tasks were registered under the same name.
  #[error("task registered twice: {0}")]
  DuplicateTask(String),

  /// No registered task has this name.
  #[error("task not found: {0}")]
  TaskNotFound(String),

  /// Cycle detected in the task graph.
  #[error("dependency cycle detected")]
  CycleDetected,

  /// A task action failed.
  #[error("task {name} failed: {source}")]
  TaskFailed {
    name: String,
    #[source]
    source: TaskError,
  },
}

/// A host node backed by plain values.
#[derive(Debug)]
pub struct StandaloneHost {
  node_dir: PathBuf,
  parent_dir: Option<PathBuf>,
  targets: Vec<BuildTarget>,
  tasks: Vec<TaskDescriptor>,
}

impl StandaloneHost {
  /// Create a host for a node at `node_dir` whose parent project lives at
  /// `parent_dir` (`None` for a node without a parent).
  pub fn new(node_dir: impl Into<PathBuf>, parent_dir: Option<PathBuf>) -> Self {
    Self {
      node_dir: node_dir.into(),
      parent_dir,
      targets: Vec::new(),
      tasks: Vec::new(),
    }
  }

  /// Set the targets reported to the plugin.
  pub fn with_targets<I, S>(mut self, targets: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self.targets = targets.into_iter().map(BuildTarget::new).collect();
    self
  }

  /// Registered tasks, in registration order.
  pub fn tasks(&self) -> &[TaskDescriptor] {
    &self.tasks
  }

  /// Find a registered task by name.
  pub fn task(&self, name: &str) -> Option<&TaskDescriptor> {
    self.tasks.iter().find(|t| t.name == name)
  }

  /// Build the task graph from the registered tasks.
  pub fn graph(&self) -> Result<TaskGraph, HostError> {
    TaskGraph::from_tasks(&self.tasks)
  }

  /// Run the action of a registered task.
  ///
  /// Dependencies are not run: they are either other registered tasks the
  /// caller orders via [`TaskGraph`], or host tasks outside this process.
  pub fn run_task(&self, name: &str) -> Result<(), HostError> {
    let task = self.task(name).ok_or_else(|| HostError::TaskNotFound(name.to_string()))?;
    task.action.run().map_err(|source| HostError::TaskFailed {
      name: name.to_string(),
      source,
    })
  }
}

impl Host for StandaloneHost {
  fn targets(&self) -> Vec<BuildTarget> {
    self.targets.clone()
  }

  fn register_task(&mut self, task: TaskDescriptor) {
    debug!(task = %task.name, "task registered");
    self.tasks.push(task);
  }

  fn node_dir(&self) -> PathBuf {
    self.node_dir.clone()
  }

  fn parent_node_dir(&self) -> Option<PathBuf> {
    self.parent_dir.clone()
  }
}

/// Dependency graph over task names.
///
/// Edges point from a task to the tasks that must wait for it: from each
/// dependency to the task, and from the task to each post-dependency.
pub struct TaskGraph {
  graph: DiGraph<String, ()>,
  nodes: HashMap<String, NodeIndex>,
  registered: HashSet<String>,
}

impl TaskGraph {
  /// Build a graph from task descriptors.
  ///
  /// # Errors
  ///
  /// Returns `DuplicateTask` if two descriptors share a name and
  /// `CycleDetected` if the ordering constraints are contradictory.
  pub fn from_tasks(tasks: &[TaskDescriptor]) -> Result<Self, HostError> {
    let mut dag = Self {
      graph: DiGraph::new(),
      nodes: HashMap::new(),
      registered: HashSet::new(),
    };

    for task in tasks {
      if !dag.registered.insert(task.name.clone()) {
        return Err(HostError::DuplicateTask(task.name.clone()));
      }
      dag.node(&task.name);
    }

    for task in tasks {
      let idx = dag.node(&task.name);
      for dep in &task.dependencies {
        let dep_idx = dag.node(dep);
        dag.graph.add_edge(dep_idx, idx, ());
      }
      for post in &task.post_dependencies {
        let post_idx = dag.node(post);
        dag.graph.add_edge(idx, post_idx, ());
      }
    }

    dag.verify_acyclic()?;
    Ok(dag)
  }

  fn node(&mut self, name: &str) -> NodeIndex {
    if let Some(&idx) = self.nodes.get(name) {
      return idx;
    }
    let idx = self.graph.add_node(name.to_string());
    self.nodes.insert(name.to_string(), idx);
    idx
  }

  fn verify_acyclic(&self) -> Result<(), HostError> {
    toposort(&self.graph, None).map_err(|_| HostError::CycleDetected)?;
    Ok(())
  }

  /// All task names, registered or external, dependencies first.
  pub fn topological(&self) -> Result<Vec<String>, HostError> {
    let sorted = toposort(&self.graph, None).map_err(|_| HostError::CycleDetected)?;
    Ok(sorted.into_iter().map(|idx| self.graph[idx].clone()).collect())
  }

  /// Registered task names, dependencies first.
  pub fn registered_order(&self) -> Result<Vec<String>, HostError> {
    Ok(
      self
        .topological()?
        .into_iter()
        .filter(|name| self.registered.contains(name))
        .collect(),
    )
  }

  /// Whether `name` was registered (as opposed to only referenced).
  pub fn is_registered(&self, name: &str) -> bool {
    self.registered.contains(name)
  }

  /// Tasks that must finish before `name`.
  pub fn dependencies(&self, name: &str) -> Vec<String> {
    self.neighbors(name, Direction::Incoming)
  }

  /// Tasks that wait for `name`.
  pub fn dependents(&self, name: &str) -> Vec<String> {
    self.neighbors(name, Direction::Outgoing)
  }

  fn neighbors(&self, name: &str, direction: Direction) -> Vec<String> {
    let Some(&idx) = self.nodes.get(name) else {
      return Vec::new();
    };

    let mut names: Vec<String> = self
      .graph
      .neighbors_directed(idx, direction)
      .map(|n| self.graph[n].clone())
      .collect();
    names.sort();
    names
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::config::ConfigError;

  fn descriptor(name: &str, deps: &[&str], posts: &[&str]) -> TaskDescriptor {
    TaskDescriptor {
      name: name.to_string(),
      action: Box::new(|| -> Result<(), TaskError> { Ok(()) }),
      dependencies: deps.iter().map(|s| s.to_string()).collect(),
      post_dependencies: posts.iter().map(|s| s.to_string()).collect(),
    }
  }

  fn position(order: &[String], name: &str) -> usize {
    order.iter().position(|n| n == name).unwrap()
  }

  #[test]
  fn host_reports_what_it_was_built_with() {
    let host = StandaloneHost::new("/proj/ohos", Some(PathBuf::from("/proj"))).with_targets(["default", "ohosTest"]);

    assert_eq!(host.node_dir(), PathBuf::from("/proj/ohos"));
    assert_eq!(host.parent_node_dir(), Some(PathBuf::from("/proj")));
    assert_eq!(
      host.targets(),
      vec![BuildTarget::new("default"), BuildTarget::new("ohosTest")]
    );
  }

  #[test]
  fn graph_orders_dependencies_then_task_then_post_dependencies() {
    let mut host = StandaloneHost::new("/proj/ohos", None);
    host.register_task(descriptor(
      "default@cargokitTask",
      &["default@ProcessLibs"],
      &["default@DoNativeStrip"],
    ));

    let graph = host.graph().unwrap();
    let order = graph.topological().unwrap();

    assert!(position(&order, "default@ProcessLibs") < position(&order, "default@cargokitTask"));
    assert!(position(&order, "default@cargokitTask") < position(&order, "default@DoNativeStrip"));
    assert_eq!(graph.registered_order().unwrap(), vec!["default@cargokitTask"]);
    assert!(!graph.is_registered("default@ProcessLibs"));
    assert_eq!(graph.dependencies("default@cargokitTask"), vec!["default@ProcessLibs"]);
    assert_eq!(graph.dependents("default@cargokitTask"), vec!["default@DoNativeStrip"]);
  }

  #[test]
  fn duplicate_registration_is_rejected() {
    let mut host = StandaloneHost::new("/proj/ohos", None);
    host.register_task(descriptor("a", &[], &[]));
    host.register_task(descriptor("a", &[], &[]));

    assert!(matches!(host.graph(), Err(HostError::DuplicateTask(name)) if name == "a"));
  }

  #[test]
  fn contradictory_ordering_is_a_cycle() {
    let mut host = StandaloneHost::new("/proj/ohos", None);
    host.register_task(descriptor("a", &["b"], &[]));
    host.register_task(descriptor("b", &[], &[]));
    host.register_task(descriptor("c", &[], &["b"]));
    host.register_task(descriptor("d", &["a"], &["c"]));

    assert!(matches!(host.graph(), Err(HostError::CycleDetected)));
  }

  #[test]
  fn run_unknown_task_fails() {
    let host = StandaloneHost::new("/proj/ohos", None);
    assert!(matches!(host.run_task("nope"), Err(HostError::TaskNotFound(_))));
  }

  #[test]
  fn run_task_propagates_action_failure() {
    let mut host = StandaloneHost::new("/proj/ohos", None);
    host.register_task(TaskDescriptor {
      name: "broken".to_string(),
      action: Box::new(|| -> Result<(), TaskError> { Err(ConfigError::EmptyManifestDir.into()) }),
      dependencies: vec![],
      post_dependencies: vec![],
    });

    let err = host.run_task("broken").unwrap_err();
    assert!(matches!(err, HostError::TaskFailed { ref name, .. } if name == "broken"));
  }
}
