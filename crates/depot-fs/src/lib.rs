//! Filesystem handles for File Depot
//!
//! Provides root-anchored path resolution, stateful path handles and a
//! sequential copy engine.

pub mod config;
pub mod copy;
pub mod error;
pub mod handle;
pub mod path;
pub mod root;

pub use config::ConfigStore;
pub use copy::{CopySummary, CopyTarget, copy_many_files_to};
pub use error::{Error, Result};
pub use handle::{Location, PathHandle, PathKind};
pub use path::NormalizedPath;
pub use root::RootDir;
