use thiserror::Error;

use crate::config::ConfigError;
use crate::execute::ExecuteError;

/// Failure of a task action, reported to the host scheduler.
#[derive(Debug, Error)]
pub enum TaskError {
  /// The task could not be set up (e.g., no root project directory).
  #[error(transparent)]
  Config(#[from] ConfigError),

  /// The build tool failed.
  #[error(transparent)]
  Execute(#[from] ExecuteError),
}

impl TaskError {
  /// Returns true for configuration failures, which happen before any spawn.
  pub fn is_config(&self) -> bool {
    matches!(self, TaskError::Config(_))
  }
}
