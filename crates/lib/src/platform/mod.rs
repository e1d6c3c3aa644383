//! Host platform detection, native ABIs and path resolution.

pub mod abi;
pub mod os;
pub mod paths;

pub use abi::{OhosAbi, target_platforms};
pub use os::OsFamily;
pub use paths::{PathRequest, ResolvedPaths};
