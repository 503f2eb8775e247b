//! Uploads for depot
//!
//! A [`TransferManager`] holds one payload and sends it with the [`Driver`]
//! named in its [`TransferConfig`]: to a local path, to a remote artifact
//! repository over HTTP, or (not yet implemented) to object storage.

pub mod config;
pub mod error;
pub mod manager;
pub mod transport;

pub use config::{Credentials, Driver, DriverKind, ObjectStorageConfig, TransferConfig};
pub use error::{Result, TransferError, TransportError};
pub use manager::TransferManager;
pub use transport::{HttpTransport, PutRequest, ReqwestTransport};
