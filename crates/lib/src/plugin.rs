//! Plugin entry point.
//!
//! Constructing the plugin validates its configuration; applying it to a host
//! registers one cargokit task per target and does nothing else.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::info;

use crate::config::{ConfigError, PluginConfig};
use crate::consts::PLUGIN_ID;
use crate::host::Host;
use crate::task::register_cargokit_task;

/// The cargokit hvigor plugin.
#[derive(Debug, Clone)]
pub struct CargokitPlugin {
  config: Arc<PluginConfig>,
}

impl CargokitPlugin {
  pub fn new(config: PluginConfig) -> Self {
    Self {
      config: Arc::new(config),
    }
  }

  /// Identifier the plugin registers under.
  pub fn id(&self) -> &'static str {
    PLUGIN_ID
  }

  pub fn config(&self) -> &PluginConfig {
    &self.config
  }

  /// Register a cargokit task for every target the host reports.
  ///
  /// Returns the number of tasks registered.
  pub fn apply<H: Host + ?Sized>(&self, host: &mut H) -> usize {
    info!(plugin = PLUGIN_ID, "applying cargokit hvigor plugin");

    let targets = host.targets();
    for target in &targets {
      register_cargokit_task(host, target, Arc::clone(&self.config));
    }
    targets.len()
  }
}

/// Create the plugin for a manifest directory relative to the root project.
///
/// # Errors
///
/// Returns `EmptyManifestDir` if `manifest_dir` is empty.
pub fn cargokit_hvigor_plugin(
  manifest_dir: impl Into<String>,
  plugin_dir: impl Into<PathBuf>,
) -> Result<CargokitPlugin, ConfigError> {
  Ok(CargokitPlugin::new(PluginConfig::new(manifest_dir, plugin_dir)?))
}
