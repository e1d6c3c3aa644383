//! Loading a standalone project.
//!
//! A project is a module directory holding `cargokit.json`. Loading it yields
//! a [`StandaloneHost`] for the module and the configured plugin; command-line
//! flags take precedence over the file.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::Args;
use tracing::debug;

use cargokit_hvigor_lib::consts::PROJECT_FILE_NAME;
use cargokit_hvigor_lib::host::standalone::StandaloneHost;
use cargokit_hvigor_lib::platform::paths::normalize;
use cargokit_hvigor_lib::{CargokitPlugin, PluginConfig, ProjectFile};

#[derive(Debug, Clone, Args)]
pub struct ProjectArgs {
  /// Path to the project file
  #[arg(short, long, global = true, default_value = PROJECT_FILE_NAME)]
  pub project: PathBuf,

  /// Manifest directory, relative to the root project (overrides the project file)
  #[arg(long, global = true)]
  pub manifest_dir: Option<String>,

  /// Plugin install directory (overrides the project file)
  #[arg(long, global = true)]
  pub plugin_dir: Option<PathBuf>,
}

/// A loaded project with the plugin not yet applied.
pub struct Project {
  pub host: StandaloneHost,
  pub plugin: CargokitPlugin,
  pub targets: Vec<String>,
}

impl Project {
  pub fn load(args: &ProjectArgs) -> Result<Self> {
    let file = ProjectFile::load(&args.project)?;

    let module_dir = module_dir(&args.project)?;
    let root_dir = file.root_dir.as_ref().map(|dir| normalize(&module_dir.join(dir)));
    let manifest_dir = args.manifest_dir.clone().unwrap_or(file.manifest_dir);

    let config = match args.plugin_dir.as_ref().or(file.plugin_dir.as_ref()) {
      Some(dir) => PluginConfig::new(manifest_dir, normalize(&module_dir.join(dir)))?,
      None => PluginConfig::from_current_exe(manifest_dir)?,
    };

    debug!(
      module_dir = %module_dir.display(),
      root_dir = ?root_dir,
      plugin_dir = %config.plugin_dir().display(),
      "loaded project"
    );

    let host = StandaloneHost::new(module_dir, root_dir).with_targets(file.targets.clone());

    Ok(Self {
      host,
      plugin: CargokitPlugin::new(config),
      targets: file.targets,
    })
  }

  /// Apply the plugin to the host, registering the cargokit tasks.
  pub fn apply(&mut self) -> usize {
    self.plugin.apply(&mut self.host)
  }

  /// Fail unless every name in `selected` is a project target.
  pub fn check_targets(&self, selected: &[String]) -> Result<()> {
    for name in selected {
      if !self.targets.contains(name) {
        bail!("unknown target '{}' (known: {})", name, self.targets.join(", "));
      }
    }
    Ok(())
  }
}

/// Absolute directory containing the project file.
fn module_dir(project: &Path) -> Result<PathBuf> {
  let parent = match project.parent() {
    Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
    _ => PathBuf::from("."),
  };
  dunce::canonicalize(&parent).with_context(|| format!("Failed to resolve module directory: {}", parent.display()))
}
