//! cargokit-hvigor-lib: hooks the cargokit native build into an hvigor task graph
//!
//! For every target of a HAR module the plugin registers a
//! `<target>@cargokitTask` task. The task runs the cargokit build tool for all
//! OpenHarmony ABIs, after the host's `ProcessLibs` step and before
//! `DoNativeStrip`. The main pieces are:
//! - `platform`: OS family, ABIs and path resolution
//! - `environment`: the variables handed to the build tool
//! - `execute`: spawning the build tool
//! - `task` and `plugin`: registration against a [`host::Host`]

pub mod config;
pub mod consts;
pub mod environment;
pub mod execute;
pub mod host;
pub mod platform;
pub mod plugin;
pub mod task;

#[cfg(test)]
mod util;

pub use config::{ConfigError, PluginConfig, ProjectFile};
pub use host::{BuildTarget, Host, TaskAction, TaskDescriptor};
pub use plugin::{CargokitPlugin, cargokit_hvigor_plugin};
