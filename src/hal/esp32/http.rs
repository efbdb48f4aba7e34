//! HTTPS client for ESP32-C3.
//!
//! One blocking GET per call over `esp_http_client`. Server certificates are
//! verified against the ESP-IDF certificate bundle, so the pinned
//! fingerprint in [`ApiConfig`](crate::config::ApiConfig) is only logged.
//!
//! # Example
//!
//! ```ignore
//! use torn_travel::hal::esp32::Esp32HttpClient;
//! use torn_travel::traits::HttpClient;
//!
//! let mut client = Esp32HttpClient::new()?;
//! let reply = client.get("https://api.torn.com/user/?selections=travel,basic&key=...")?;
//! log::info!("HTTP {}", reply.status);
//! ```

use crate::traits::{BodyBuffer, HttpClient, HttpReply};
use embedded_svc::http::client::Client;
use embedded_svc::io::Read;
use esp_idf_svc::http::client::{Configuration, EspHttpConnection};
use log::debug;

/// Bytes read from the response per `read` call.
const CHUNK_SIZE: usize = 512;

/// Blocking HTTPS client backed by `esp_http_client`.
pub struct Esp32HttpClient {
    client: Client<EspHttpConnection>,
}

impl Esp32HttpClient {
    /// Creates a client that trusts the built-in CA bundle.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying connection cannot be allocated.
    pub fn new() -> anyhow::Result<Self> {
        let connection = EspHttpConnection::new(&Configuration {
            use_global_ca_store: true,
            crt_bundle_attach: Some(esp_idf_hal::sys::esp_crt_bundle_attach),
            ..Default::default()
        })?;

        Ok(Self {
            client: Client::wrap(connection),
        })
    }
}

impl HttpClient for Esp32HttpClient {
    type Error = anyhow::Error;

    fn get(&mut self, url: &str) -> anyhow::Result<HttpReply> {
        let request = self.client.get(url)?;
        let mut response = request.submit()?;
        let status = response.status();

        // Capped at MAX_BODY_BYTES; an oversized reply is a transport error
        let mut body = BodyBuffer::default();
        let mut chunk = [0u8; CHUNK_SIZE];
        loop {
            let n = response.read(&mut chunk)?;
            if n == 0 {
                break;
            }
            body.push(&chunk[..n])?;
        }

        debug!("[HTTP] {} bytes, status {}", body.len(), status);
        Ok(HttpReply::new(status, body.into_bytes()))
    }
}
