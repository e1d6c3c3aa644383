//! Plugin configuration and the standalone project file.
//!
//! The plugin itself needs only two things: the manifest directory of the
//! native project (relative to the host project root) and the directory the
//! plugin is installed in. The project file carries the extra information a
//! standalone host needs to stand in for the real build framework.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors caused by missing or unusable configuration.
///
/// These are never recovered from: they abort plugin application or the
/// owning task.
#[derive(Debug, Error)]
pub enum ConfigError {
  /// The manifest directory argument was empty.
  #[error("cargokit manifest dir is required")]
  EmptyManifestDir,

  /// The host could not supply the enclosing project directory.
  #[error("root project dir is required for target {target}")]
  MissingRootDir { target: String },

  /// A resolved path cannot be passed through the environment.
  #[error("{key} is not valid UTF-8: {path}")]
  NonUtf8Path { key: &'static str, path: PathBuf },

  /// An environment value resolved to an empty string.
  #[error("{key} resolved to an empty value")]
  EmptyValue { key: &'static str },

  /// A relative path could not be made absolute.
  #[error("failed to make {path} absolute: {source}")]
  AbsolutePath {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  /// The plugin location could not be derived from the running executable.
  #[error("failed to locate plugin directory: {0}")]
  PluginLocation(#[source] std::io::Error),

  /// The project file could not be read.
  #[error("failed to read project file {path}: {source}")]
  ReadProjectFile {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  /// The project file is not valid JSON or misses required fields.
  #[error("invalid project file {path}: {source}")]
  ParseProjectFile {
    path: PathBuf,
    #[source]
    source: serde_json::Error,
  },
}

/// Validated plugin configuration.
///
/// Shared read-only by every task the plugin registers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginConfig {
  manifest_dir: String,
  plugin_dir: PathBuf,
}

impl PluginConfig {
  /// Create a configuration from the manifest directory and the plugin's
  /// install directory.
  ///
  /// # Errors
  ///
  /// Returns `EmptyManifestDir` if `manifest_dir` is empty or blank.
  pub fn new(manifest_dir: impl Into<String>, plugin_dir: impl Into<PathBuf>) -> Result<Self, ConfigError> {
    let manifest_dir = manifest_dir.into();
    if manifest_dir.trim().is_empty() {
      return Err(ConfigError::EmptyManifestDir);
    }

    Ok(Self {
      manifest_dir,
      plugin_dir: plugin_dir.into(),
    })
  }

  /// Create a configuration whose plugin directory is the directory holding
  /// the running executable.
  pub fn from_current_exe(manifest_dir: impl Into<String>) -> Result<Self, ConfigError> {
    let exe = std::env::current_exe().map_err(ConfigError::PluginLocation)?;
    let exe = dunce::canonicalize(&exe).map_err(ConfigError::PluginLocation)?;
    let plugin_dir = exe.parent().map(Path::to_path_buf).unwrap_or(exe);
    Self::new(manifest_dir, plugin_dir)
  }

  /// Manifest directory, relative to the host project root.
  pub fn manifest_dir(&self) -> &str {
    &self.manifest_dir
  }

  /// Directory the plugin is installed in.
  pub fn plugin_dir(&self) -> &Path {
    &self.plugin_dir
  }
}

/// Project description read by the standalone host (`cargokit.json`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectFile {
  /// Manifest directory of the native project, relative to the root project.
  pub manifest_dir: String,

  /// Targets to register tasks for.
  #[serde(default = "default_targets")]
  pub targets: Vec<String>,

  /// Root project directory relative to the module directory.
  /// `null` models a host without a parent node.
  #[serde(default = "default_root_dir")]
  pub root_dir: Option<PathBuf>,

  /// Plugin install directory relative to the module directory.
  /// Defaults to the directory of the running executable.
  #[serde(default)]
  pub plugin_dir: Option<PathBuf>,
}

fn default_targets() -> Vec<String> {
  vec!["default".to_string()]
}

fn default_root_dir() -> Option<PathBuf> {
  Some(PathBuf::from(".."))
}

impl ProjectFile {
  /// Load a project file from disk.
  pub fn load(path: &Path) -> Result<Self, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadProjectFile {
      path: path.to_path_buf(),
      source,
    })?;

    serde_json::from_str(&content).map_err(|source| ConfigError::ParseProjectFile {
      path: path.to_path_buf(),
      source,
    })
  }
}
