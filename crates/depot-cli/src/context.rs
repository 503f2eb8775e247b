//! Root directory and path interpretation shared by all commands

use std::path::PathBuf;

use depot_fs::{Location, PathHandle, RootDir};

use crate::error::Result;

/// How path arguments given on the command line are resolved.
#[derive(Debug, Clone)]
pub struct Context {
    root: RootDir,
    absolute: bool,
}

impl Context {
    /// Use `root` when given, otherwise detect the process root.
    pub fn new(root: Option<PathBuf>, absolute: bool) -> Result<Self> {
        let root = match root {
            Some(path) => RootDir::new(path)?,
            None => RootDir::detect()?,
        };
        tracing::debug!(root = %root, absolute, "resolved command context");
        Ok(Self { root, absolute })
    }

    /// Location for a path argument.
    pub fn location(&self, path: &str) -> Location {
        if self.absolute {
            Location::absolute(path)
        } else {
            Location::relative(&self.root, path)
        }
    }

    pub fn handle(&self, path: &str) -> Result<PathHandle> {
        Ok(PathHandle::open(&self.location(path))?)
    }
}
