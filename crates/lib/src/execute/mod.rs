//! Build tool execution.
//!
//! This module spawns the external cargokit build tool and classifies its
//! exit status. It knows nothing about targets or the host task graph.

pub mod cmd;
pub mod types;

pub use cmd::{ensure_executable, invoke_build_tool, run_tool};
pub use types::ExecuteError;
