mod build;
mod env;
mod info;
mod tasks;

pub use build::cmd_build;
pub use env::cmd_env;
pub use info::cmd_info;
pub use tasks::cmd_tasks;
