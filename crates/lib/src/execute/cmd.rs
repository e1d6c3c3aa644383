//! Build tool invocation.
//!
//! The tool runs synchronously with the caller's standard streams, so its
//! output lands directly in the host build log. The [`BuildEnvironment`] is
//! layered over the inherited environment for the child only.

use std::path::Path;
use std::process::{Command, Stdio};

use tracing::{debug, info, warn};

use crate::consts::BUILD_TOOL_COMMAND;
use crate::environment::BuildEnvironment;

use super::types::ExecuteError;

/// Run the build tool launcher with `build-hvigor`.
///
/// Makes the launcher executable first (best-effort), then blocks until it
/// exits. No retries and no caching: every call spawns the tool.
pub fn invoke_build_tool(executable: &Path, env: &BuildEnvironment) -> Result<(), ExecuteError> {
  ensure_executable(executable);
  run_tool(executable, &[BUILD_TOOL_COMMAND], env)
}

/// Spawn `program` with `args` and wait for it.
///
/// # Errors
///
/// `Spawn` if the process cannot be started, `ToolFailed` if it exits with a
/// nonzero status or is terminated by a signal.
pub fn run_tool(program: &Path, args: &[&str], env: &BuildEnvironment) -> Result<(), ExecuteError> {
  info!(program = %program.display(), args = ?args, "invoking build tool");

  for (key, value) in env.iter() {
    debug!(key, value, "build tool env");
  }

  let status = Command::new(program)
    .args(args)
    .envs(env.iter())
    .stdin(Stdio::inherit())
    .stdout(Stdio::inherit())
    .stderr(Stdio::inherit())
    .status()
    .map_err(|source| ExecuteError::Spawn {
      path: program.to_path_buf(),
      source,
    })?;

  if !status.success() {
    return Err(ExecuteError::ToolFailed {
      path: program.to_path_buf(),
      code: status.code(),
    });
  }

  debug!(program = %program.display(), "build tool finished");
  Ok(())
}

/// Add the execute bits to `path` on Unix.
///
/// Failure is only logged: if the file really is not runnable, the spawn that
/// follows reports it.
#[cfg(unix)]
pub fn ensure_executable(path: &Path) {
  use std::os::unix::fs::PermissionsExt;

  let result = std::fs::metadata(path).and_then(|metadata| {
    let mode = metadata.permissions().mode();
    if mode & 0o111 == 0o111 {
      return Ok(());
    }
    let mut perms = metadata.permissions();
    perms.set_mode(mode | 0o111);
    std::fs::set_permissions(path, perms)
  });

  if let Err(e) = result {
    warn!(path = %path.display(), error = %e, "failed to mark build tool executable");
  }
}

#[cfg(not(unix))]
pub fn ensure_executable(_path: &Path) {}
