//! Upload configuration: driver selection and credentials
//!
//! On disk a configuration names its driver as a string:
//!
//! ```toml
//! driver = "remote-repository"
//! timeout_secs = 30
//!
//! [credentials]
//! username = "deploy"
//! password = "secret"
//! auth_scheme = "Basic"
//! ```
//!
//! In memory the driver is a [`Driver`] carrying exactly the settings that
//! backend needs, so an unknown name or a missing credentials table is
//! rejected while loading rather than at upload time.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use base64::{Engine, engine::general_purpose::STANDARD};
use serde::{Deserialize, Serialize};

use crate::TransferError;

fn default_auth_scheme() -> String {
    "Basic".to_string()
}

/// Account used against a remote artifact repository.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
    #[serde(default = "default_auth_scheme")]
    pub auth_scheme: String,
}

impl Credentials {
    /// Credentials with the `Basic` scheme.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            auth_scheme: default_auth_scheme(),
        }
    }

    pub fn with_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.auth_scheme = scheme.into();
        self
    }

    /// Value for the `Authorization` header: `<scheme> base64(user:password)`.
    pub fn authorization_header(&self) -> String {
        let token = STANDARD.encode(format!("{}:{}", self.username, self.password));
        format!("{} {}", self.auth_scheme, token)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .field("auth_scheme", &self.auth_scheme)
            .finish()
    }
}

/// Target bucket for the object-storage driver.
///
/// Both fields are optional on disk since the driver has no backend yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObjectStorageConfig {
    pub endpoint: String,
    pub bucket: String,
}

/// Upload backend together with its settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Driver {
    /// Write the payload to a path on this machine.
    Local,
    /// HTTP `PUT` to an artifact repository.
    RemoteRepository(Credentials),
    /// Object storage bucket. Not implemented.
    ObjectStorage(ObjectStorageConfig),
}

impl Driver {
    pub fn kind(&self) -> DriverKind {
        match self {
            Self::Local => DriverKind::Local,
            Self::RemoteRepository(_) => DriverKind::RemoteRepository,
            Self::ObjectStorage(_) => DriverKind::ObjectStorage,
        }
    }
}

/// Driver name without settings, as written in configuration files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DriverKind {
    Local,
    RemoteRepository,
    ObjectStorage,
}

impl DriverKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::RemoteRepository => "remote-repository",
            Self::ObjectStorage => "object-storage",
        }
    }
}

impl FromStr for DriverKind {
    type Err = TransferError;

    /// Accepts the canonical names and the legacy upper-case aliases
    /// `LOCAL`, `NEXUS` and `OSS`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "local" | "LOCAL" => Ok(Self::Local),
            "remote-repository" | "NEXUS" => Ok(Self::RemoteRepository),
            "object-storage" | "OSS" => Ok(Self::ObjectStorage),
            other => Err(TransferError::UnsupportedDriver {
                driver: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for DriverKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Complete configuration for one [`TransferManager`](crate::TransferManager).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTransferConfig", into = "RawTransferConfig")]
pub struct TransferConfig {
    pub driver: Driver,
    /// Request timeout for HTTP drivers. `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

impl TransferConfig {
    pub fn new(driver: Driver) -> Self {
        Self {
            driver,
            timeout: None,
        }
    }

    pub fn local() -> Self {
        Self::new(Driver::Local)
    }

    pub fn remote_repository(credentials: Credentials) -> Self {
        Self::new(Driver::RemoteRepository(credentials))
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build a configuration from a driver name and the optional settings
    /// tables.
    ///
    /// Settings the chosen driver does not use are ignored.
    pub fn from_parts(
        driver: &str,
        credentials: Option<Credentials>,
        object_storage: Option<ObjectStorageConfig>,
    ) -> Result<Self, TransferError> {
        let kind: DriverKind = driver.parse()?;
        let driver = match kind {
            DriverKind::Local => Driver::Local,
            DriverKind::RemoteRepository => {
                Driver::RemoteRepository(credentials.ok_or(TransferError::MissingCredentials {
                    driver: kind.to_string(),
                })?)
            }
            DriverKind::ObjectStorage => Driver::ObjectStorage(object_storage.unwrap_or_default()),
        };
        Ok(Self::new(driver))
    }
}

#[derive(Serialize, Deserialize)]
struct RawTransferConfig {
    driver: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    timeout_secs: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    credentials: Option<Credentials>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    object_storage: Option<ObjectStorageConfig>,
}

impl TryFrom<RawTransferConfig> for TransferConfig {
    type Error = TransferError;

    fn try_from(raw: RawTransferConfig) -> Result<Self, Self::Error> {
        let mut config = Self::from_parts(&raw.driver, raw.credentials, raw.object_storage)?;
        config.timeout = raw.timeout_secs.map(Duration::from_secs);
        Ok(config)
    }
}

impl From<TransferConfig> for RawTransferConfig {
    fn from(config: TransferConfig) -> Self {
        let driver = config.driver.kind().to_string();
        let timeout_secs = config.timeout.map(|t| t.as_secs());
        let (credentials, object_storage) = match config.driver {
            Driver::Local => (None, None),
            Driver::RemoteRepository(credentials) => (Some(credentials), None),
            Driver::ObjectStorage(storage) => {
                (None, (storage != ObjectStorageConfig::default()).then_some(storage))
            }
        };
        Self {
            driver,
            timeout_secs,
            credentials,
            object_storage,
        }
    }
}
