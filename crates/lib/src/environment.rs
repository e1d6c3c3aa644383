//! Environment handed to the build tool.
//!
//! The environment is an overlay: it is applied on top of the inherited
//! process environment at spawn time and never written into the current
//! process.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Serialize;

use crate::config::ConfigError;
use crate::consts::BUILD_CONFIGURATION;
use crate::platform::{ResolvedPaths, target_platforms};

pub const ROOT_PROJECT_DIR: &str = "CARGOKIT_ROOT_PROJECT_DIR";
pub const TOOL_TEMP_DIR: &str = "CARGOKIT_TOOL_TEMP_DIR";
pub const TARGET_PLATFORMS: &str = "CARGOKIT_TARGET_PLATFORMS";
pub const MANIFEST_DIR: &str = "CARGOKIT_MANIFEST_DIR";
pub const CONFIGURATION: &str = "CARGOKIT_CONFIGURATION";
pub const TARGET_TEMP_DIR: &str = "CARGOKIT_TARGET_TEMP_DIR";
pub const OUTPUT_DIR: &str = "CARGOKIT_OUTPUT_DIR";

/// Immutable set of variables passed to the build tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BuildEnvironment {
  vars: BTreeMap<String, String>,
}

impl BuildEnvironment {
  /// Build the environment for a task from its resolved paths.
  ///
  /// # Errors
  ///
  /// Fails if a path is not valid UTF-8 or a value ends up empty.
  pub fn from_paths(paths: &ResolvedPaths) -> Result<Self, ConfigError> {
    let entries = [
      (ROOT_PROJECT_DIR, path_value(ROOT_PROJECT_DIR, &paths.root_dir)?),
      (TOOL_TEMP_DIR, path_value(TOOL_TEMP_DIR, &paths.tool_temp_dir)?),
      (TARGET_PLATFORMS, target_platforms()),
      (MANIFEST_DIR, path_value(MANIFEST_DIR, &paths.manifest_dir)?),
      (CONFIGURATION, BUILD_CONFIGURATION.to_string()),
      (TARGET_TEMP_DIR, path_value(TARGET_TEMP_DIR, &paths.target_temp_dir)?),
      (OUTPUT_DIR, path_value(OUTPUT_DIR, &paths.output_dir)?),
    ];

    let mut vars = BTreeMap::new();
    for (key, value) in entries {
      if value.is_empty() {
        return Err(ConfigError::EmptyValue { key });
      }
      vars.insert(key.to_string(), value);
    }

    Ok(Self { vars })
  }

  /// Value of a variable, if set.
  pub fn get(&self, key: &str) -> Option<&str> {
    self.vars.get(key).map(String::as_str)
  }

  /// Variables in key order.
  pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
    self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
  }
}

fn path_value(key: &'static str, path: &Path) -> Result<String, ConfigError> {
  path.to_str().map(str::to_string).ok_or_else(|| ConfigError::NonUtf8Path {
    key,
    path: path.to_path_buf(),
  })
}
