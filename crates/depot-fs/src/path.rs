//! Normalized path handling for cross-platform compatibility

use std::path::{Path, PathBuf};

/// A cleaned path using forward slashes internally.
///
/// Construction normalizes separators (backslashes count as separators on
/// Windows only), collapses `.` and `..` lexically and strips trailing
/// separators, so two spellings of the same location compare
/// equal. Conversion to a platform-native path happens only at I/O
/// boundaries via [`NormalizedPath::to_native`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedPath {
    /// Internal representation always uses forward slashes
    inner: String,
}

impl NormalizedPath {
    /// Create a new NormalizedPath from any path-like input.
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path_str = path.as_ref().to_string_lossy();
        Self {
            inner: clean(&forward_slashes(&path_str)),
        }
    }

    /// Get the internal normalized string representation.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Convert to a platform-native PathBuf for I/O operations.
    pub fn to_native(&self) -> PathBuf {
        PathBuf::from(&self.inner)
    }

    /// Join this path with a segment and clean the result.
    ///
    /// A leading separator on `segment` does not reset the path:
    /// `"/a".join("/b")` is `"/a/b"`.
    pub fn join(&self, segment: &str) -> Self {
        let segment_normalized = forward_slashes(segment);
        let segment_normalized = segment_normalized.trim_start_matches('/');
        let joined = if self.inner.ends_with('/') {
            format!("{}{}", self.inner, segment_normalized)
        } else {
            format!("{}/{}", self.inner, segment_normalized)
        };
        Self {
            inner: clean(&joined),
        }
    }

    /// Get the parent directory.
    pub fn parent(&self) -> Option<Self> {
        match self.inner.rfind('/') {
            Some(0) if self.inner.len() > 1 => Some(Self {
                inner: "/".to_string(),
            }),
            Some(0) => None,
            Some(idx) if self.inner.starts_with("//") && idx == 1 => None,
            Some(idx) => Some(Self {
                inner: self.inner[..idx].to_string(),
            }),
            None if self.inner == "." => None,
            None => Some(Self {
                inner: ".".to_string(),
            }),
        }
    }

    /// Get the final component, if the path has one.
    pub fn file_name(&self) -> Option<&str> {
        match self.inner.rsplit('/').next() {
            Some("") | Some(".") | Some("..") | None => None,
            Some(name) => Some(name),
        }
    }

    /// Get the extension if present.
    pub fn extension(&self) -> Option<&str> {
        self.file_name().and_then(|name| {
            let idx = name.rfind('.')?;
            if idx == 0 {
                None
            } else {
                Some(&name[idx + 1..])
            }
        })
    }

    /// Whether the path is anchored at a filesystem root.
    pub fn is_absolute(&self) -> bool {
        self.inner.starts_with('/') || self.to_native().is_absolute()
    }

    /// Check if this appears to be a network path (`//server/share`).
    pub fn is_network_path(&self) -> bool {
        self.inner.starts_with("//")
    }
}

#[cfg(windows)]
fn forward_slashes(raw: &str) -> String {
    raw.replace('\\', "/")
}

#[cfg(not(windows))]
fn forward_slashes(raw: &str) -> String {
    raw.to_string()
}

/// Lexically clean a forward-slash path.
///
/// `..` never climbs above the root of an absolute path. A relative path
/// keeps the leading `..` components it cannot cancel: `a/../../b` is `../b`.
fn clean(raw: &str) -> String {
    let (prefix, rest) = if raw.starts_with("//") && !raw.starts_with("///") {
        ("//", &raw[2..])
    } else if raw.starts_with('/') {
        ("/", raw.trim_start_matches('/'))
    } else {
        ("", raw)
    };

    let mut parts: Vec<&str> = Vec::new();
    for component in rest.split('/') {
        match component {
            "" | "." => {}
            ".." => match parts.last() {
                Some(&last) if last != ".." => {
                    parts.pop();
                }
                _ if prefix.is_empty() => parts.push(".."),
                _ => {}
            },
            other => parts.push(other),
        }
    }

    let body = parts.join("/");
    match (prefix, body.is_empty()) {
        ("", true) => ".".to_string(),
        (_, true) => "/".to_string(),
        (prefix, false) => format!("{prefix}{body}"),
    }
}

impl AsRef<Path> for NormalizedPath {
    fn as_ref(&self) -> &Path {
        Path::new(&self.inner)
    }
}

impl std::fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl From<&str> for NormalizedPath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for NormalizedPath {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<PathBuf> for NormalizedPath {
    fn from(p: PathBuf) -> Self {
        Self::new(p)
    }
}

impl From<&Path> for NormalizedPath {
    fn from(p: &Path) -> Self {
        Self::new(p)
    }
}
