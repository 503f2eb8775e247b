//! Command implementations for depot-cli

pub mod copy;
pub mod file;
pub mod upload;

pub use copy::{run_copy_dir, run_copy_file, run_copy_many};
pub use file::{run_delete, run_ingest, run_mkdir, run_write};
pub use upload::run_upload;
