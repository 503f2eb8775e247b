//! HTTP transport seam for the remote-repository driver

use std::time::Duration;

use crate::TransportError;

/// A single `PUT` with a fully buffered body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PutRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl PutRequest {
    /// Header value by case-insensitive name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Sends one request and reports the response status.
///
/// Implementations return `Err` only when no response was obtained.
pub trait HttpTransport {
    fn put(&self, request: &PutRequest) -> Result<u16, TransportError>;
}

/// Blocking [`reqwest`] client.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::blocking::Client,
}

impl ReqwestTransport {
    /// Client without a request timeout.
    pub fn new() -> Result<Self, TransportError> {
        Self::with_timeout(None)
    }

    pub fn with_timeout(timeout: Option<Duration>) -> Result<Self, TransportError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;
        Ok(Self { client })
    }
}

impl HttpTransport for ReqwestTransport {
    fn put(&self, request: &PutRequest) -> Result<u16, TransportError> {
        let mut builder = self.client.put(&request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        let response = builder.body(request.body.clone()).send()?;
        Ok(response.status().as_u16())
    }
}
