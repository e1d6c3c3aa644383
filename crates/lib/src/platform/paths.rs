//! Path resolution for a cargokit task.
//!
//! Relative host and plugin directories are anchored at the current
//! directory; everything else is lexical and never touches the filesystem.

use std::path::{Component, Path, PathBuf};

use crate::config::ConfigError;
use crate::consts::BUILD_DIR_NAME;

use super::os::OsFamily;

/// Inputs needed to resolve the paths of one task.
#[derive(Debug, Clone, Copy)]
pub struct PathRequest<'a> {
  /// Name of the target the task builds for.
  pub target: &'a str,
  /// Directory the plugin is installed in.
  pub plugin_dir: &'a Path,
  /// Directory of the host node (module) owning the target.
  pub node_dir: &'a Path,
  /// Directory of the enclosing project, if the host knows it.
  pub root_dir: Option<&'a Path>,
  /// Manifest directory, relative to `root_dir`.
  pub manifest_dir: &'a str,
  /// OS family deciding the build tool script name.
  pub family: OsFamily,
}

/// Absolute paths used by one invocation of the build tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
  pub executable: PathBuf,
  pub root_dir: PathBuf,
  pub manifest_dir: PathBuf,
  pub build_dir: PathBuf,
  pub output_dir: PathBuf,
  pub tool_temp_dir: PathBuf,
  pub target_temp_dir: PathBuf,
}

impl ResolvedPaths {
  /// Resolve every path for a task.
  ///
  /// # Errors
  ///
  /// Returns `MissingRootDir` when the host supplied no root project directory
  /// and `AbsolutePath` when a relative directory cannot be anchored.
  pub fn resolve(request: &PathRequest<'_>) -> Result<Self, ConfigError> {
    let root_dir = request.root_dir.ok_or_else(|| ConfigError::MissingRootDir {
      target: request.target.to_string(),
    })?;
    let root_dir = absolute(root_dir)?;
    let node_dir = absolute(request.node_dir)?;
    let plugin_dir = absolute(request.plugin_dir)?;

    let build_dir = build_dir(&node_dir);

    Ok(Self {
      executable: build_tool_path(&plugin_dir, request.family),
      manifest_dir: manifest_dir(&root_dir, request.manifest_dir),
      output_dir: output_dir(&node_dir, request.target),
      root_dir,
      tool_temp_dir: build_dir.join("build_tool"),
      target_temp_dir: build_dir.join("cargokit"),
      build_dir,
    })
  }
}

/// Anchor `path` at the current directory and fold its dot components.
pub fn absolute(path: &Path) -> Result<PathBuf, ConfigError> {
  std::path::absolute(path)
    .map(|path| normalize(&path))
    .map_err(|source| ConfigError::AbsolutePath {
      path: path.to_path_buf(),
      source,
    })
}

/// Location of the build tool launcher, three levels above the plugin directory.
pub fn build_tool_path(plugin_dir: &Path, family: OsFamily) -> PathBuf {
  normalize(
    &plugin_dir
      .join("..")
      .join("..")
      .join("..")
      .join(family.build_tool_script()),
  )
}

/// Build output root of a host node.
pub fn build_dir(node_dir: &Path) -> PathBuf {
  normalize(&node_dir.join(BUILD_DIR_NAME))
}

/// Directory the build tool must place the target's libraries in.
pub fn output_dir(node_dir: &Path, target: &str) -> PathBuf {
  build_dir(node_dir)
    .join(target)
    .join("intermediates")
    .join("libs")
    .join(target)
}

/// Manifest directory resolved against the root project directory.
///
/// An absolute `manifest_dir` replaces the root entirely.
pub fn manifest_dir(root_dir: &Path, manifest_dir: &str) -> PathBuf {
  normalize(&root_dir.join(manifest_dir))
}

/// Fold `.` and `..` components without touching the filesystem.
///
/// `..` at the root stays at the root; leading `..` of a relative path are kept.
pub fn normalize(path: &Path) -> PathBuf {
  let mut normalized = PathBuf::new();
  for component in path.components() {
    match component {
      Component::CurDir => {}
      Component::ParentDir => match normalized.components().next_back() {
        Some(Component::Normal(_)) => {
          normalized.pop();
        }
        Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
        _ => normalized.push(".."),
      },
      _ => normalized.push(component),
    }
  }
  normalized
}
