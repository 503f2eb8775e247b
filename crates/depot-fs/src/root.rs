//! Process root resolution
//!
//! Relative handles are anchored at a [`RootDir`]. The root is resolved once
//! (usually at startup) and passed to every constructor that needs it.

use std::path::{Path, PathBuf};

use crate::{Error, NormalizedPath, Result};

/// Source checkout of this crate, used when the binary runs from a temp dir.
const SOURCE_DIR: &str = env!("CARGO_MANIFEST_DIR");

/// Anchor directory for relative paths.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RootDir {
    path: NormalizedPath,
}

impl RootDir {
    /// Use an explicit directory as root.
    ///
    /// A relative `path` is taken relative to the current working directory.
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.is_absolute() {
            return Ok(Self {
                path: NormalizedPath::new(path),
            });
        }
        let cwd = std::env::current_dir().map_err(|e| Error::RootResolution {
            message: format!("current directory unavailable: {e}"),
        })?;
        Ok(Self {
            path: NormalizedPath::new(cwd.join(path)),
        })
    }

    /// Root at the absolute current working directory.
    pub fn current_dir() -> Result<Self> {
        Self::new(".")
    }

    /// Root at the directory holding the running executable.
    ///
    /// When the executable sits inside the system temp directory (a
    /// run-from-source style invocation), the root falls back to the source
    /// checkout so tooling behaves the same either way.
    pub fn detect() -> Result<Self> {
        let exe = std::env::current_exe().map_err(|e| Error::RootResolution {
            message: format!("executable path unavailable: {e}"),
        })?;
        let exe_dir = exe.parent().ok_or_else(|| Error::RootResolution {
            message: format!("executable has no parent directory: {}", exe.display()),
        })?;
        let exe_dir = dunce::canonicalize(exe_dir).unwrap_or_else(|_| exe_dir.to_path_buf());
        let root = select_root(&exe_dir, &temp_root(), Path::new(SOURCE_DIR));

        tracing::debug!(root = %root.display(), exe_dir = %exe_dir.display(), "resolved process root");
        Ok(Self {
            path: NormalizedPath::new(root),
        })
    }

    /// The root directory itself.
    pub fn path(&self) -> &NormalizedPath {
        &self.path
    }

    /// Join `relative` onto the root and clean the result.
    pub fn resolve(&self, relative: impl AsRef<Path>) -> NormalizedPath {
        self.path.join(&relative.as_ref().to_string_lossy())
    }
}

impl std::fmt::Display for RootDir {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path)
    }
}

/// System temp directory with symlinks resolved.
fn temp_root() -> PathBuf {
    let dir = ["TEMP", "TMP", "TMPDIR"]
        .iter()
        .filter_map(|key| std::env::var_os(key))
        .find(|value| !value.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(std::env::temp_dir);
    dunce::canonicalize(&dir).unwrap_or(dir)
}

fn select_root(exe_dir: &Path, temp_dir: &Path, source_dir: &Path) -> PathBuf {
    if exe_dir.starts_with(temp_dir) {
        source_dir.to_path_buf()
    } else {
        exe_dir.to_path_buf()
    }
}
