//! Upload dispatch over the configured [`Driver`]

use depot_fs::{Location, PathHandle};
use tracing::{debug, info, warn};

use crate::{
    Credentials, Driver, HttpTransport, PutRequest, ReqwestTransport, Result, TransferConfig,
    TransferError,
};

/// One upload: an in-memory payload, where it goes, and how it gets there.
///
/// A manager is consumed by [`TransferManager::upload`]; build a new one for
/// every transfer.
pub struct TransferManager {
    payload: Vec<u8>,
    destination: String,
    config: TransferConfig,
    transport: Option<Box<dyn HttpTransport>>,
}

impl TransferManager {
    /// Read the file at `source` fully into memory.
    ///
    /// Fails with [`TransferError::SourceMissing`] when nothing exists at
    /// `source`, and with a filesystem error when it is not a regular file.
    pub fn from_local_file(
        source: &Location,
        destination: impl Into<String>,
        config: TransferConfig,
    ) -> Result<Self> {
        let handle = PathHandle::open(source)?;
        if !handle.exists() {
            return Err(TransferError::SourceMissing {
                path: handle.path().to_native(),
            });
        }
        let payload = handle.read_all()?;
        debug!(source = %handle, bytes = payload.len(), "loaded upload payload");
        Ok(Self::from_bytes(payload, destination, config))
    }

    pub fn from_bytes(
        payload: impl Into<Vec<u8>>,
        destination: impl Into<String>,
        config: TransferConfig,
    ) -> Self {
        Self {
            payload: payload.into(),
            destination: destination.into(),
            config,
            transport: None,
        }
    }

    /// Use `transport` for HTTP drivers instead of a default [`ReqwestTransport`].
    pub fn with_transport(mut self, transport: impl HttpTransport + 'static) -> Self {
        self.transport = Some(Box::new(transport));
        self
    }

    pub fn source_size(&self) -> u64 {
        self.payload.len() as u64
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn config(&self) -> &TransferConfig {
        &self.config
    }

    /// Send the payload with the configured driver.
    ///
    /// Returns the payload length on success. Nothing is retried and a
    /// partially written destination is left in place.
    pub fn upload(self) -> Result<u64> {
        let Self {
            payload,
            destination,
            config,
            transport,
        } = self;

        match config.driver {
            Driver::Local => upload_local(&payload, &destination),
            Driver::RemoteRepository(credentials) => {
                let transport = match transport {
                    Some(transport) => transport,
                    None => Box::new(ReqwestTransport::with_timeout(config.timeout)?),
                };
                upload_remote(payload, destination, &credentials, transport.as_ref())
            }
            Driver::ObjectStorage(storage) => {
                debug!(bucket = %storage.bucket, "object storage driver selected");
                Err(TransferError::ObjectStorageUnimplemented)
            }
        }
    }
}

impl std::fmt::Debug for TransferManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransferManager")
            .field("bytes", &self.payload.len())
            .field("destination", &self.destination)
            .field("config", &self.config)
            .field("custom_transport", &self.transport.is_some())
            .finish()
    }
}

fn upload_local(payload: &[u8], destination: &str) -> Result<u64> {
    let mut target = PathHandle::from_absolute(destination)?;
    if let Some(parent) = target.path().parent() {
        PathHandle::from_absolute(parent.to_native())?.make_dir()?;
    }
    let written = target.write_all(payload)?;
    info!(destination = %target, bytes = written, driver = "local", "uploaded");
    Ok(written)
}

fn upload_remote(
    payload: Vec<u8>,
    url: String,
    credentials: &Credentials,
    transport: &dyn HttpTransport,
) -> Result<u64> {
    let length = payload.len() as u64;
    let request = PutRequest {
        url,
        headers: vec![
            (
                "Authorization".to_string(),
                credentials.authorization_header(),
            ),
            ("Content-Length".to_string(), length.to_string()),
        ],
        body: payload,
    };

    let status = transport.put(&request)?;
    if !(200..300).contains(&status) {
        warn!(url = %request.url, status, "remote repository answered with a non-success status");
    }
    info!(url = %request.url, bytes = length, driver = "remote-repository", "uploaded");
    Ok(length)
}
