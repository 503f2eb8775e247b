//! [`SourceTree`] builder for copy and upload scenarios.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory with helpers for laying out files and asserting on
/// the result.
///
/// # Example
///
/// ```rust,no_run
/// use depot_test_utils::tree::SourceTree;
///
/// let tree = SourceTree::new();
/// tree.file("src/a.txt", "alpha").file("src/nested/b.txt", "beta");
/// tree.assert_file_contains("src/nested/b.txt", "beta");
/// ```
pub struct SourceTree {
    temp_dir: TempDir,
}

impl Default for SourceTree {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceTree {
    /// Create an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Create the standard nested fixture under `src/`.
    ///
    /// ```text
    /// src/top.txt              "top"
    /// src/a/one.txt            "one"
    /// src/a/deeper/two.txt     "two"
    /// src/b/three.txt          "three"
    /// src/empty/               (no files)
    /// ```
    pub fn nested() -> Self {
        let tree = Self::new();
        tree.file("src/top.txt", "top")
            .file("src/a/one.txt", "one")
            .file("src/a/deeper/two.txt", "two")
            .file("src/b/three.txt", "three")
            .dir("src/empty");
        tree
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Absolute path of `rel` under the root.
    pub fn path(&self, rel: &str) -> PathBuf {
        self.root().join(rel)
    }

    /// Write `content` at `rel`, creating parent directories.
    pub fn file(&self, rel: &str, content: &str) -> &Self {
        let full_path = self.path(rel);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&full_path, content)
            .unwrap_or_else(|e| panic!("SourceTree::file: {}: {e}", full_path.display()));
        self
    }

    /// Create the directory `rel` and its parents.
    pub fn dir(&self, rel: &str) -> &Self {
        fs::create_dir_all(self.path(rel)).unwrap();
        self
    }

    /// Sorted names of the entries directly inside `rel`.
    pub fn list(&self, rel: &str) -> Vec<String> {
        let full_path = self.path(rel);
        let mut names: Vec<String> = fs::read_dir(&full_path)
            .unwrap_or_else(|e| panic!("SourceTree::list: {}: {e}", full_path.display()))
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    /// Read `rel` as UTF-8.
    pub fn read(&self, rel: &str) -> String {
        let full_path = self.path(rel);
        fs::read_to_string(&full_path)
            .unwrap_or_else(|_| panic!("Could not read file: {}", full_path.display()))
    }

    /// Assert that `rel` exists.
    pub fn assert_file_exists(&self, rel: &str) {
        let full_path = self.path(rel);
        assert!(
            full_path.exists(),
            "Expected file to exist: {}",
            full_path.display()
        );
    }

    /// Assert that `rel` does **not** exist.
    pub fn assert_file_not_exists(&self, rel: &str) {
        let full_path = self.path(rel);
        assert!(
            !full_path.exists(),
            "Expected file NOT to exist: {}",
            full_path.display()
        );
    }

    /// Assert that the file at `rel` holds exactly `content`.
    pub fn assert_file_contains(&self, rel: &str, content: &str) {
        let file_content = self.read(rel);
        assert_eq!(
            file_content, content,
            "File {rel} does not hold the expected content"
        );
    }

    /// Assert that `rel` contains no subdirectories.
    pub fn assert_flat(&self, rel: &str) {
        let full_path = self.path(rel);
        let nested: Vec<_> = fs::read_dir(&full_path)
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.path().is_dir())
            .map(|e| e.file_name())
            .collect();
        assert!(
            nested.is_empty(),
            "Expected {} to be flat, found subdirectories: {nested:?}",
            full_path.display()
        );
    }
}
