//! Network abstraction traits for the Torn API client.
//!
//! The fetch path is split in two so each half can be tested alone:
//!
//! | Trait | Purpose |
//! |-------|---------|
//! | [`HttpClient`] | One blocking HTTPS GET, returns status code and body |
//! | [`StatusSource`] | Produces a fresh [`TravelStatus`] or a [`FetchError`] |
//!
//! [`StatusFetcher`](crate::StatusFetcher) implements [`StatusSource`] on top of
//! any [`HttpClient`]. Tests can mock either layer.
//!
//! # Endpoint
//!
//! ```text
//! GET https://api.torn.com/user/?selections=travel,basic&key=<API_KEY>
//!
//! {"status": {"state": "Traveling", ...},
//!  "travel": {"destination": "Mexico", "time_left": 1080, ...}, ...}
//! ```

extern crate alloc;
use alloc::vec::Vec;
use core::fmt::Display;

use crate::fetch::FetchError;
use crate::status::TravelStatus;

/// Largest response body a client accepts.
///
/// A `travel,basic` reply is well under 1 KiB; anything near this size is
/// not the payload we asked for and would otherwise eat the heap.
pub const MAX_BODY_BYTES: usize = 8 * 1024;

/// HTTP client trait for a single blocking GET.
///
/// # Implementation Notes
///
/// - No retries and no custom timeouts; the library default applies
/// - Any response that carries a status code is `Ok`, including 4xx/5xx
/// - `Err` is reserved for transport failures (DNS, TLS, connection reset)
///
/// # Example
///
/// ```rust,ignore
/// use torn_travel::traits::HttpClient;
///
/// fn ping<C: HttpClient>(client: &mut C) {
///     match client.get("https://api.torn.com/") {
///         Ok(reply) => log::info!("HTTP {}", reply.status),
///         Err(e) => log::warn!("transport: {}", e),
///     }
/// }
/// ```
pub trait HttpClient {
    /// Transport error. Its text is shown on the display.
    type Error: Display;

    /// Performs a GET request and reads the whole body.
    fn get(&mut self, url: &str) -> Result<HttpReply, Self::Error>;
}

/// Response to a GET request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpReply {
    /// HTTP status code (e.g., 200, 404).
    pub status: u16,
    /// Response body as bytes.
    pub body: Vec<u8>,
}

impl HttpReply {
    /// Creates a reply with the given status and body.
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Creates a 200 OK reply.
    pub fn ok(body: impl Into<Vec<u8>>) -> Self {
        Self::new(200, body)
    }

    /// Returns true for 2xx status codes.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Returns the body as a UTF-8 string, if valid.
    pub fn body_str(&self) -> Option<&str> {
        core::str::from_utf8(&self.body).ok()
    }
}

/// Response body grew past its limit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("response body exceeds {limit} bytes")]
pub struct BodyTooLarge {
    /// The limit that was hit.
    pub limit: usize,
}

/// Size-capped accumulator for a chunked response body.
///
/// # Example
///
/// ```rust
/// use torn_travel::traits::BodyBuffer;
///
/// let mut body = BodyBuffer::new(8);
/// body.push(b"{\"a\":").unwrap();
/// assert!(body.push(b"12345").is_err());
/// assert_eq!(body.len(), 5);
/// ```
#[derive(Debug)]
pub struct BodyBuffer {
    bytes: Vec<u8>,
    limit: usize,
}

impl BodyBuffer {
    /// Creates an empty buffer that holds at most `limit` bytes.
    pub fn new(limit: usize) -> Self {
        Self {
            bytes: Vec::new(),
            limit,
        }
    }

    /// Appends a chunk, or fails without appending if it would overflow.
    pub fn push(&mut self, chunk: &[u8]) -> Result<(), BodyTooLarge> {
        if chunk.len() > self.limit - self.bytes.len() {
            return Err(BodyTooLarge { limit: self.limit });
        }
        self.bytes.extend_from_slice(chunk);
        Ok(())
    }

    /// Bytes collected so far.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns true if nothing has been collected.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Consumes the buffer, returning the body.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

impl Default for BodyBuffer {
    fn default() -> Self {
        Self::new(MAX_BODY_BYTES)
    }
}

/// Source of authoritative travel status.
///
/// Called on boot, whenever the local countdown reaches zero, and on the
/// periodic refresh cadence.
pub trait StatusSource {
    /// Fetches the current status.
    fn fetch(&mut self) -> Result<TravelStatus, FetchError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reply_success_range() {
        assert!(HttpReply::ok("{}").is_success());
        assert!(HttpReply::new(204, "").is_success());
        assert!(!HttpReply::new(404, "").is_success());
        assert!(!HttpReply::new(500, "").is_success());
    }

    #[test]
    fn reply_body_str() {
        let reply = HttpReply::ok(r#"{"a":1}"#);
        assert_eq!(reply.body_str(), Some(r#"{"a":1}"#));

        let binary = HttpReply::ok(vec![0xff, 0xfe]);
        assert_eq!(binary.body_str(), None);
    }

    #[test]
    fn body_buffer_fills_to_exact_limit() {
        let mut body = BodyBuffer::new(4);
        body.push(b"ab").unwrap();
        body.push(b"cd").unwrap();
        assert_eq!(body.len(), 4);
        assert_eq!(body.push(b""), Ok(()));
        assert_eq!(body.into_bytes(), b"abcd".to_vec());
    }

    #[test]
    fn body_buffer_rejects_overflow_without_growing() {
        let mut body = BodyBuffer::new(4);
        body.push(b"abc").unwrap();

        let err = body.push(b"de").unwrap_err();
        assert_eq!(err, BodyTooLarge { limit: 4 });
        assert_eq!(err.to_string(), "response body exceeds 4 bytes");
        assert_eq!(body.len(), 3);
    }

    #[test]
    fn body_buffer_default_uses_max_body_bytes() {
        let mut body = BodyBuffer::default();
        assert!(body.is_empty());
        body.push(&vec![b' '; MAX_BODY_BYTES]).unwrap();
        assert!(body.push(b"}").is_err());
    }
}
