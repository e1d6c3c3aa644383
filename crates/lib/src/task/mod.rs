//! Cargokit task registration.
//!
//! One task is registered per host target. Its action resolves paths, builds
//! the environment and runs the build tool, in that order. The task sits
//! after the host's `ProcessLibs` step and before `DoNativeStrip`, so the
//! libraries exist by the time they are stripped.

pub mod types;

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{debug, info};

use crate::config::{ConfigError, PluginConfig};
use crate::consts::{NATIVE_STRIP_TASK, PROCESS_LIBS_TASK, TASK_SUFFIX};
use crate::environment::BuildEnvironment;
use crate::execute::invoke_build_tool;
use crate::host::{BuildTarget, Host, TaskAction, TaskDescriptor};
use crate::platform::{OsFamily, PathRequest, ResolvedPaths};

pub use types::TaskError;

/// Name of the cargokit task for a target (e.g., "default@cargokitTask")
pub fn task_name(target: &str) -> String {
  format!("{}@{}", target, TASK_SUFFIX)
}

/// Host task the cargokit task runs after.
pub fn process_libs_task(target: &str) -> String {
  format!("{}@{}", target, PROCESS_LIBS_TASK)
}

/// Host task the cargokit task runs before.
pub fn native_strip_task(target: &str) -> String {
  format!("{}@{}", target, NATIVE_STRIP_TASK)
}

/// Action of a cargokit task.
///
/// Holds only immutable data, so actions for different targets can run on
/// different threads at the same time.
#[derive(Debug, Clone)]
pub struct CargokitTask {
  target: String,
  config: Arc<PluginConfig>,
  node_dir: PathBuf,
  root_dir: Option<PathBuf>,
  family: OsFamily,
}

impl CargokitTask {
  /// Capture what the task needs from the host for `target`.
  pub fn for_target<H: Host + ?Sized>(host: &H, target: &BuildTarget, config: Arc<PluginConfig>) -> Self {
    Self {
      target: target.name().to_string(),
      config,
      node_dir: host.node_dir(),
      root_dir: host.parent_node_dir(),
      family: OsFamily::current(),
    }
  }

  /// Override the OS family used to pick the launcher.
  pub fn with_family(mut self, family: OsFamily) -> Self {
    self.family = family;
    self
  }

  /// Resolve the paths of this task.
  pub fn paths(&self) -> Result<ResolvedPaths, ConfigError> {
    ResolvedPaths::resolve(&PathRequest {
      target: &self.target,
      plugin_dir: self.config.plugin_dir(),
      node_dir: &self.node_dir,
      root_dir: self.root_dir.as_deref(),
      manifest_dir: self.config.manifest_dir(),
      family: self.family,
    })
  }

  /// Resolve the paths and the environment handed to the build tool.
  pub fn prepare(&self) -> Result<(ResolvedPaths, BuildEnvironment), ConfigError> {
    let paths = self.paths()?;
    debug!(target_name = %self.target, paths = ?paths, "resolved cargokit paths");
    let env = BuildEnvironment::from_paths(&paths)?;
    Ok((paths, env))
  }
}

impl TaskAction for CargokitTask {
  fn run(&self) -> Result<(), TaskError> {
    let name = task_name(&self.target);
    info!(task = %name, "running cargokit task");

    let result = self
      .prepare()
      .map_err(TaskError::from)
      .and_then(|(paths, env)| invoke_build_tool(&paths.executable, &env).map_err(TaskError::from));

    if let Err(e) = &result {
      debug!(task = %name, error = %e, "cargokit task failed");
    }
    result
  }
}

/// Register the cargokit task for one target.
pub fn register_cargokit_task<H: Host + ?Sized>(host: &mut H, target: &BuildTarget, config: Arc<PluginConfig>) {
  let action = CargokitTask::for_target(host, target, config);
  let descriptor = TaskDescriptor {
    name: task_name(target.name()),
    action: Box::new(action),
    dependencies: vec![process_libs_task(target.name())],
    post_dependencies: vec![native_strip_task(target.name())],
  };

  info!(task = %descriptor.name, "registering cargokit task");
  host.register_task(descriptor);
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::host::standalone::StandaloneHost;
  use std::path::Path;
  use tracing_test::traced_test;

  fn config() -> Arc<PluginConfig> {
    Arc::new(PluginConfig::new("../native/hub", "/pkg/cargokit/hvigor/src/plugin").unwrap())
  }

  #[test]
  fn names_follow_host_conventions() {
    assert_eq!(task_name("default"), "default@cargokitTask");
    assert_eq!(process_libs_task("default"), "default@ProcessLibs");
    assert_eq!(native_strip_task("default"), "default@DoNativeStrip");
  }

  #[test]
  fn registers_descriptor_with_ordering() {
    let mut host = StandaloneHost::new("/proj/ohos", Some(PathBuf::from("/proj")));

    register_cargokit_task(&mut host, &BuildTarget::new("default"), config());

    let task = host.task("default@cargokitTask").unwrap();
    assert_eq!(task.dependencies, vec!["default@ProcessLibs"]);
    assert_eq!(task.post_dependencies, vec!["default@DoNativeStrip"]);
  }

  #[test]
  #[cfg(unix)]
  fn prepare_resolves_scenario_paths() {
    let host = StandaloneHost::new("/proj/ohos", Some(PathBuf::from("/proj")));
    let task = CargokitTask::for_target(&host, &BuildTarget::new("default"), config()).with_family(OsFamily::Unix);

    let (paths, env) = task.prepare().unwrap();

    assert_eq!(paths.manifest_dir, Path::new("/native/hub"));
    assert_eq!(paths.executable, Path::new("/pkg/cargokit/run_build_tool.sh"));
    assert_eq!(
      env.get(crate::environment::OUTPUT_DIR),
      Some("/proj/ohos/build/default/intermediates/libs/default")
    );
  }

  #[test]
  fn missing_root_fails_before_spawn() {
    let host = StandaloneHost::new("/proj/ohos", None);
    // The plugin dir does not exist, so reaching the spawn would be an execute error.
    let task = CargokitTask::for_target(&host, &BuildTarget::new("default"), config());

    let err = task.run().unwrap_err();

    assert!(err.is_config());
    assert!(matches!(err, TaskError::Config(ConfigError::MissingRootDir { .. })));
  }

  #[test]
  #[traced_test]
  fn failure_is_left_to_the_host_to_report() {
    let host = StandaloneHost::new("/proj/ohos", None);
    let task = CargokitTask::for_target(&host, &BuildTarget::new("default"), config());

    assert!(task.run().is_err());

    assert!(logs_contain("cargokit task failed"));
    assert!(!logs_contain("ERROR"));
  }

  #[test]
  fn actions_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<CargokitTask>();
  }
}
