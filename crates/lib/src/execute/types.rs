//! Error types for build tool execution.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while running the build tool.
#[derive(Debug, Error)]
pub enum ExecuteError {
  /// The build tool could not be started at all.
  #[error("failed to spawn build tool {}: {source}", .path.display())]
  Spawn {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  /// The build tool exited with a nonzero status or was killed by a signal.
  #[error("cargokit task failed ({}): {}", status_text(.code), .path.display())]
  ToolFailed { path: PathBuf, code: Option<i32> },
}

fn status_text(code: &Option<i32>) -> String {
  match code {
    Some(code) => format!("status {}", code),
    None => "terminated by signal".to_string(),
  }
}

impl ExecuteError {
  /// Exit code observed for a failed tool run, `None` for signal termination
  /// or spawn failures.
  pub fn code(&self) -> Option<i32> {
    match self {
      ExecuteError::ToolFailed { code, .. } => *code,
      ExecuteError::Spawn { .. } => None,
    }
  }
}
