//! File, multi-file and directory copy
//!
//! Copies are sequential and blocking. A failure aborts the operation and
//! leaves whatever was already written in place.
//!
//! Directory copies FLATTEN the source tree: every regular file, at any
//! depth, lands directly in the destination directory under its base name.
//! When two files share a base name the one visited last wins. The walk is
//! depth-first with entries in lexical order, so the winner is deterministic.

use std::fs::{self, File};
use std::io;
use std::path::Path;

use crate::{Error, Location, NormalizedPath, PathHandle, Result};

/// One file for [`copy_many_files_to`], optionally renamed at the destination.
#[derive(Debug, Clone)]
pub struct CopyTarget {
    pub source: PathHandle,
    pub dest_filename: Option<String>,
}

impl CopyTarget {
    pub fn new(source: PathHandle) -> Self {
        Self {
            source,
            dest_filename: None,
        }
    }

    pub fn renamed(mut self, name: impl Into<String>) -> Self {
        self.dest_filename = Some(name.into());
        self
    }
}

/// Totals for a directory copy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopySummary {
    pub files_copied: u64,
    pub bytes_copied: u64,
}

impl PathHandle {
    /// Copy this file into `dest_dir`, creating the directory if absent.
    ///
    /// An empty or missing `dest_filename` keeps the source base name. The
    /// destination is truncated, filled and synced to disk before returning
    /// the number of bytes copied.
    pub fn copy_file_to(&self, dest_dir: &Location, dest_filename: Option<&str>) -> Result<u64> {
        let dir = ensure_dir(dest_dir)?;

        if !self.is_file() {
            return Err(Error::SourceNotFile {
                path: self.path().to_native(),
            });
        }

        let src_native = self.path().to_native();
        let mut src = File::open(&src_native).map_err(|e| Error::io(&src_native, e))?;

        let name = match dest_filename.filter(|name| !name.is_empty()) {
            Some(name) => name,
            None => self.file_name().ok_or_else(|| Error::SourceNotFile {
                path: src_native.clone(),
            })?,
        };
        let dest = dir.path().join(name);
        if &dest == self.path() {
            return Err(Error::Overlap {
                from: src_native,
                to: dest.to_native(),
            });
        }

        copy_contents(&mut src, &src_native, &dest.to_native())
    }

    /// Copy every regular file under this directory into `dest_dir`, flattened.
    ///
    /// The destination handle is re-resolved, and created if absent, for
    /// every visited entry.
    pub fn copy_directory_to(&self, dest_dir: &Location) -> Result<CopySummary> {
        if !self.is_dir() {
            return Err(Error::SourceNotDirectory {
                path: self.path().to_native(),
            });
        }

        let dest = dest_dir.resolve();
        if is_within(&dest, self.path()) {
            return Err(Error::Overlap {
                from: self.path().to_native(),
                to: dest.to_native(),
            });
        }

        let mut summary = CopySummary::default();
        visit(&self.path().to_native(), dest_dir, &mut summary)?;
        tracing::info!(
            source = %self.path(),
            destination = %dest,
            files = summary.files_copied,
            bytes = summary.bytes_copied,
            "copied directory"
        );
        Ok(summary)
    }
}

/// Copy each target into `dest_dir` in order, stopping at the first failure.
///
/// The destination directory is created once up front. Files copied before a
/// failure stay in place.
pub fn copy_many_files_to(targets: &[CopyTarget], dest_dir: &Location) -> Result<u64> {
    let dir = ensure_dir(dest_dir)?;
    let resolved = Location::absolute(dir.path().to_native());

    let mut total = 0;
    for target in targets {
        total += target
            .source
            .copy_file_to(&resolved, target.dest_filename.as_deref())?;
    }
    Ok(total)
}

fn ensure_dir(location: &Location) -> Result<PathHandle> {
    let mut dir = PathHandle::open(location)?;
    if !dir.is_dir() {
        dir.make_dir()?;
    }
    Ok(dir)
}

fn visit(path: &Path, dest_dir: &Location, summary: &mut CopySummary) -> Result<()> {
    let dir = ensure_dir(dest_dir)?;

    let meta = fs::symlink_metadata(path).map_err(|e| Error::io(path, e))?;
    if meta.is_dir() {
        let mut children = fs::read_dir(path)
            .map_err(|e| Error::io(path, e))?
            .map(|entry| entry.map(|e| e.path()))
            .collect::<io::Result<Vec<_>>>()
            .map_err(|e| Error::io(path, e))?;
        children.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

        for child in children {
            visit(&child, dest_dir, summary)?;
        }
        return Ok(());
    }

    // Links are followed; dangling links and non-regular files are skipped.
    let is_regular = match fs::metadata(path) {
        Ok(meta) => meta.is_file(),
        Err(e) if e.kind() == io::ErrorKind::NotFound => false,
        Err(e) => return Err(Error::stat(path, e)),
    };
    let name = match path.file_name() {
        Some(name) if is_regular => name,
        _ => {
            tracing::debug!(path = %path.display(), "skipping non-regular entry");
            return Ok(());
        }
    };

    let mut src = File::open(path).map_err(|e| Error::io(path, e))?;
    let dest = dir.path().to_native().join(name);
    summary.bytes_copied += copy_contents(&mut src, path, &dest)?;
    summary.files_copied += 1;
    Ok(())
}

/// Truncate `dest`, fill it from `src` and sync it to disk.
fn copy_contents(src: &mut File, src_path: &Path, dest: &Path) -> Result<u64> {
    let mut out = File::create(dest).map_err(|e| Error::io(dest, e))?;
    let bytes = io::copy(src, &mut out).map_err(|e| Error::io(dest, e))?;
    out.sync_all().map_err(|e| Error::io(dest, e))?;

    tracing::info!(
        source = %src_path.display(),
        destination = %dest.display(),
        bytes,
        "copied file"
    );
    Ok(bytes)
}

fn is_within(path: &NormalizedPath, base: &NormalizedPath) -> bool {
    Path::new(path.as_str()).starts_with(base.as_str())
}
