//! Names shared with the host build framework and the build tool.

/// Identifier the plugin registers under in the host.
pub const PLUGIN_ID: &str = "cargokitHvigorPlugin";

/// Suffix appended to a target name to form the cargokit task name.
pub const TASK_SUFFIX: &str = "cargokitTask";

/// Host task that prepares native library processing for a target.
pub const PROCESS_LIBS_TASK: &str = "ProcessLibs";

/// Host task that strips debug symbols from the native libraries of a target.
pub const NATIVE_STRIP_TASK: &str = "DoNativeStrip";

/// Subcommand passed to the build tool.
pub const BUILD_TOOL_COMMAND: &str = "build-hvigor";

/// Build configuration handed to the build tool. Debug builds are not exposed.
pub const BUILD_CONFIGURATION: &str = "release";

/// Name of the per-module output tree maintained by the host.
pub const BUILD_DIR_NAME: &str = "build";

/// Default project file read by the standalone host.
pub const PROJECT_FILE_NAME: &str = "cargokit.json";
