//! Stateful filesystem handles
//!
//! A [`PathHandle`] owns one cleaned path plus a snapshot of what the path
//! designated the last time it was resolved. No OS resource is held between
//! calls: every operation opens and closes what it needs.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use crate::{Error, NormalizedPath, Result, RootDir};

/// What a path designated at its last resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    /// Nothing exists at the path.
    Missing,
    /// A directory (symlinks followed).
    Directory,
    /// Anything else that exists (symlinks followed).
    File,
}

/// Where a handle points: an absolute path, or a path under a [`RootDir`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    Absolute(PathBuf),
    Relative { root: RootDir, path: PathBuf },
}

impl Location {
    pub fn absolute(path: impl Into<PathBuf>) -> Self {
        Self::Absolute(path.into())
    }

    pub fn relative(root: &RootDir, path: impl Into<PathBuf>) -> Self {
        Self::Relative {
            root: root.clone(),
            path: path.into(),
        }
    }

    /// The cleaned path this location designates.
    pub fn resolve(&self) -> NormalizedPath {
        match self {
            Self::Absolute(path) => NormalizedPath::new(path),
            Self::Relative { root, path } => root.resolve(path),
        }
    }
}

/// Handle on a single filesystem path with cached existence and type.
///
/// Every change of the path re-resolves the cached [`PathKind`]. Stat
/// failures other than "not found" surface as [`Error::Stat`] and must not
/// be read as absence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathHandle {
    path: NormalizedPath,
    kind: PathKind,
}

impl PathHandle {
    /// Resolve a handle for `location`.
    pub fn open(location: &Location) -> Result<Self> {
        Self::resolved(location.resolve())
    }

    /// Resolve `path` against `root`.
    pub fn from_relative(root: &RootDir, path: impl AsRef<Path>) -> Result<Self> {
        Self::resolved(root.resolve(path))
    }

    /// Resolve an already-absolute `path`.
    pub fn from_absolute(path: impl AsRef<Path>) -> Result<Self> {
        Self::resolved(NormalizedPath::new(path))
    }

    fn resolved(path: NormalizedPath) -> Result<Self> {
        let kind = stat_kind(&path)?;
        tracing::debug!(path = %path, ?kind, "resolved handle");
        Ok(Self { path, kind })
    }

    /// Append one segment and re-resolve.
    pub fn join(mut self, segment: &str) -> Result<Self> {
        self.path = self.path.join(segment);
        self.refresh()?;
        Ok(self)
    }

    /// Append several segments, re-resolving after each one.
    pub fn join_all<I, S>(mut self, segments: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for segment in segments {
            self = self.join(segment.as_ref())?;
        }
        Ok(self)
    }

    /// Point the handle at an absolute path and re-resolve.
    pub fn set_absolute(&mut self, path: impl AsRef<Path>) -> Result<()> {
        self.path = NormalizedPath::new(path);
        self.refresh()
    }

    /// Point the handle at `path` under `root` and re-resolve.
    pub fn set_relative(&mut self, root: &RootDir, path: impl AsRef<Path>) -> Result<()> {
        self.path = root.resolve(path);
        self.refresh()
    }

    /// Re-stat the path and update the cached kind.
    pub fn refresh(&mut self) -> Result<()> {
        self.kind = stat_kind(&self.path)?;
        Ok(())
    }

    /// Fresh existence check that bypasses the cached state.
    ///
    /// `Ok(false)` means definitely absent; any other stat failure is an error.
    pub fn check_exists(&self) -> Result<bool> {
        Ok(stat_kind(&self.path)? != PathKind::Missing)
    }

    /// Re-stat and reclassify the path, returning the new kind.
    pub fn classify_type(&mut self) -> Result<PathKind> {
        self.refresh()?;
        Ok(self.kind)
    }

    pub fn path(&self) -> &NormalizedPath {
        &self.path
    }

    pub fn kind(&self) -> PathKind {
        self.kind
    }

    pub fn exists(&self) -> bool {
        self.kind != PathKind::Missing
    }

    pub fn is_dir(&self) -> bool {
        self.kind == PathKind::Directory
    }

    pub fn is_file(&self) -> bool {
        self.kind == PathKind::File
    }

    pub fn file_name(&self) -> Option<&str> {
        self.path.file_name()
    }

    /// Create the directory and any missing parents.
    ///
    /// Does nothing when the path already exists, whatever it is.
    pub fn make_dir(&mut self) -> Result<()> {
        if self.exists() {
            return Ok(());
        }
        let native = self.path.to_native();
        fs::create_dir_all(&native).map_err(|e| Error::io(&native, e))?;
        tracing::debug!(path = %self.path, "created directory");
        self.refresh()
    }

    /// Remove the path: a whole subtree for directories, the file otherwise.
    ///
    /// Does nothing when the handle was resolved as missing.
    pub fn delete(&mut self) -> Result<()> {
        let native = self.path.to_native();
        match self.kind {
            PathKind::Missing => return Ok(()),
            PathKind::Directory => fs::remove_dir_all(&native),
            PathKind::File => fs::remove_file(&native),
        }
        .map_err(|e| Error::io(&native, e))?;
        tracing::debug!(path = %self.path, "deleted");
        self.refresh()
    }

    /// Read the whole file into memory.
    pub fn read_all(&self) -> Result<Vec<u8>> {
        if !self.is_file() {
            return Err(Error::SourceNotFile {
                path: self.path.to_native(),
            });
        }
        let native = self.path.to_native();
        fs::read(&native).map_err(|e| Error::io(&native, e))
    }

    /// Write `content` from offset 0 without truncating.
    ///
    /// Creates the file if needed. When `content` is shorter than the
    /// existing file, the old tail past `content.len()` stays in place.
    pub fn write_all(&mut self, content: &[u8]) -> Result<u64> {
        let mut options = file_options();
        options.read(true).write(true).create(true);
        self.write_with(&options, content)
    }

    /// Append `content` at the end of the file, creating it if needed.
    pub fn append_all(&mut self, content: &[u8]) -> Result<u64> {
        let mut options = file_options();
        options.append(true).create(true);
        self.write_with(&options, content)
    }

    /// [`PathHandle::write_all`] for text.
    pub fn write_string(&mut self, content: &str) -> Result<u64> {
        self.write_all(content.as_bytes())
    }

    /// Create (truncating) the file and fill it from `reader`.
    ///
    /// Returns the number of bytes transferred.
    pub fn write_from_stream<R: Read + ?Sized>(&mut self, reader: &mut R) -> Result<u64> {
        let native = self.path.to_native();
        let mut file = File::create(&native).map_err(|e| Error::io(&native, e))?;
        let written = io::copy(reader, &mut file).map_err(|e| Error::io(&native, e))?;
        self.refresh()?;
        Ok(written)
    }

    fn write_with(&mut self, options: &OpenOptions, content: &[u8]) -> Result<u64> {
        let native = self.path.to_native();
        let mut file = options.open(&native).map_err(|e| Error::io(&native, e))?;
        file.write_all(content).map_err(|e| Error::io(&native, e))?;
        self.refresh()?;
        Ok(content.len() as u64)
    }
}

impl std::fmt::Display for PathHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path)
    }
}

/// Stat `path`, treating only "not found" as absence.
pub(crate) fn stat_kind(path: &NormalizedPath) -> Result<PathKind> {
    match fs::metadata(path.to_native()) {
        Ok(meta) if meta.is_dir() => Ok(PathKind::Directory),
        Ok(_) => Ok(PathKind::File),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(PathKind::Missing),
        Err(e) => Err(Error::stat(path.to_native(), e)),
    }
}

#[cfg(unix)]
fn file_options() -> OpenOptions {
    use std::os::unix::fs::OpenOptionsExt;
    let mut options = OpenOptions::new();
    options.mode(0o644);
    options
}

#[cfg(not(unix))]
fn file_options() -> OpenOptions {
    OpenOptions::new()
}
