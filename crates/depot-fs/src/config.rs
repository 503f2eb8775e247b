//! Format-agnostic configuration loading and saving

use crate::{Error, Location, PathHandle, Result};
use serde::{Serialize, de::DeserializeOwned};

/// Format-agnostic configuration store.
///
/// Detects the format from the file extension and goes through
/// [`PathHandle`] for all file access.
#[derive(Debug, Default)]
pub struct ConfigStore;

impl ConfigStore {
    pub fn new() -> Self {
        Self
    }

    /// Load configuration from a file.
    ///
    /// Format is detected from file extension:
    /// - `.toml` -> TOML
    /// - `.json` -> JSON
    /// - `.yaml`, `.yml` -> YAML
    pub fn load<T: DeserializeOwned>(&self, location: &Location) -> Result<T> {
        let handle = PathHandle::open(location)?;
        let native = handle.path().to_native();
        let extension = handle.path().extension().unwrap_or("").to_lowercase();

        let bytes = handle.read_all()?;
        let content = String::from_utf8(bytes).map_err(|e| Error::ConfigParse {
            path: native.clone(),
            format: extension.to_uppercase(),
            message: e.to_string(),
        })?;

        match extension.as_str() {
            "toml" => toml::from_str(&content).map_err(|e| Error::ConfigParse {
                path: native,
                format: "TOML".into(),
                message: e.to_string(),
            }),
            "json" => serde_json::from_str(&content).map_err(|e| Error::ConfigParse {
                path: native,
                format: "JSON".into(),
                message: e.to_string(),
            }),
            "yaml" | "yml" => serde_yaml::from_str(&content).map_err(|e| Error::ConfigParse {
                path: native,
                format: "YAML".into(),
                message: e.to_string(),
            }),
            _ => Err(Error::UnsupportedFormat { extension }),
        }
    }

    /// Save configuration to a file, replacing any previous content.
    ///
    /// Missing parent directories are created.
    pub fn save<T: Serialize>(&self, location: &Location, value: &T) -> Result<()> {
        let target = location.resolve();
        let native = target.to_native();
        let extension = target.extension().unwrap_or("").to_lowercase();

        let content = match extension.as_str() {
            "toml" => toml::to_string_pretty(value).map_err(|e| Error::ConfigSerialize {
                path: native.clone(),
                format: "TOML".into(),
                message: e.to_string(),
            })?,
            "json" => serde_json::to_string_pretty(value).map_err(|e| Error::ConfigSerialize {
                path: native.clone(),
                format: "JSON".into(),
                message: e.to_string(),
            })?,
            "yaml" | "yml" => serde_yaml::to_string(value).map_err(|e| Error::ConfigSerialize {
                path: native.clone(),
                format: "YAML".into(),
                message: e.to_string(),
            })?,
            _ => return Err(Error::UnsupportedFormat { extension }),
        };

        if let Some(parent) = target.parent() {
            PathHandle::from_absolute(parent.to_native())?.make_dir()?;
        }
        PathHandle::from_absolute(&native)?.write_from_stream(&mut content.as_bytes())?;
        tracing::debug!(path = %target, "saved config");
        Ok(())
    }
}
