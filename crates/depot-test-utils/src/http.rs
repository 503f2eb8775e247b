//! One-shot HTTP listener for upload tests.
//!
//! Realism level: **REAL SOCKET** — a plain `TcpListener` on loopback that
//! accepts one connection, records the request and answers with a fixed
//! status. Enough to check what a client put on the wire.

use std::io::{BufRead, BufReader, Read, Write};
use std::net::{SocketAddr, TcpListener};
use std::thread::JoinHandle;

/// A request captured by [`OneShotServer`].
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl RecordedRequest {
    /// Header value by case-insensitive name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Loopback server that handles exactly one request.
pub struct OneShotServer {
    addr: SocketAddr,
    handle: JoinHandle<RecordedRequest>,
}

impl OneShotServer {
    /// Bind to an ephemeral port and answer the first request with `status`.
    ///
    /// # Panics
    /// Panics if the listener cannot be bound.
    pub fn start(status: u16) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .unwrap_or_else(|e| panic!("OneShotServer::start: bind failed: {e}"));
        let addr = listener.local_addr().unwrap();
        let handle = std::thread::spawn(move || {
            let (stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream);

            let mut request_line = String::new();
            reader.read_line(&mut request_line).unwrap();
            let mut parts = request_line.split_whitespace();
            let method = parts.next().unwrap_or_default().to_string();
            let path = parts.next().unwrap_or_default().to_string();

            let mut headers = Vec::new();
            loop {
                let mut line = String::new();
                reader.read_line(&mut line).unwrap();
                let line = line.trim_end();
                if line.is_empty() {
                    break;
                }
                if let Some((key, value)) = line.split_once(':') {
                    headers.push((key.trim().to_string(), value.trim().to_string()));
                }
            }

            let length = headers
                .iter()
                .find(|(key, _)| key.eq_ignore_ascii_case("content-length"))
                .and_then(|(_, value)| value.parse::<usize>().ok())
                .unwrap_or(0);
            let mut body = vec![0; length];
            reader.read_exact(&mut body).unwrap();

            let response = format!(
                "HTTP/1.1 {status} Status\r\nContent-Length: 0\r\nConnection: close\r\n\r\n"
            );
            let mut stream = reader.into_inner();
            stream.write_all(response.as_bytes()).unwrap();
            stream.flush().unwrap();

            RecordedRequest {
                method,
                path,
                headers,
                body,
            }
        });
        Self { addr, handle }
    }

    /// Full URL for `path` on this server.
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Wait for the request to complete and return it.
    ///
    /// # Panics
    /// Panics if the server thread panicked.
    pub fn finish(self) -> RecordedRequest {
        self.handle
            .join()
            .unwrap_or_else(|_| panic!("OneShotServer::finish: server thread panicked"))
    }
}
