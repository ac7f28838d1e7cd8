//! HTTP transports for the single GET behind every download.
//!
//! The backend is picked once at composition time via [`select`]; the fetcher
//! only ever sees a `Box<dyn Transport>`.

#[cfg(feature = "curl")]
mod curl_easy;
#[cfg(feature = "ureq")]
mod ureq_agent;

#[cfg(feature = "curl")]
pub use curl_easy::CurlTransport;
#[cfg(feature = "ureq")]
pub use ureq_agent::UreqTransport;

pub use crate::config::TransportBackend;

use crate::error::{ImageError, TransportError};
use std::io::Write;

/// Performs one blocking GET and streams the response body into a sink.
pub trait Transport: Send + Sync {
    /// Short backend name for logs.
    fn name(&self) -> &'static str;

    /// GETs `url`, writing the body to `sink`. Returns the final HTTP status
    /// code; non-2xx responses are not errors at this layer.
    fn get(&self, url: &str, sink: &mut dyn Write) -> Result<u32, TransportError>;
}

/// Options shared by every backend.
#[derive(Debug, Clone, Copy)]
pub struct TransportOptions {
    pub follow_redirects: bool,
}

impl Default for TransportOptions {
    fn default() -> Self {
        Self {
            follow_redirects: true,
        }
    }
}

/// Picks a transport for `backend`. `Auto` prefers libcurl and falls back to
/// the pure-Rust client. Fails with `TransportUnavailable` when the requested
/// backend was not compiled in.
pub fn select(
    backend: TransportBackend,
    opts: TransportOptions,
) -> Result<Box<dyn Transport>, ImageError> {
    let chosen = match backend {
        TransportBackend::Auto => curl_transport(opts).or_else(|| ureq_transport(opts)),
        TransportBackend::Curl => curl_transport(opts),
        TransportBackend::Ureq => ureq_transport(opts),
    };
    let transport = chosen.ok_or_else(|| {
        ImageError::TransportUnavailable(format!(
            "backend {:?} requires a transport feature this build lacks",
            backend
        ))
    })?;
    tracing::debug!(backend = ?backend, transport = transport.name(), "selected transport");
    Ok(transport)
}

#[cfg(feature = "curl")]
fn curl_transport(opts: TransportOptions) -> Option<Box<dyn Transport>> {
    Some(Box::new(CurlTransport::new(opts)))
}

#[cfg(not(feature = "curl"))]
fn curl_transport(_opts: TransportOptions) -> Option<Box<dyn Transport>> {
    None
}

#[cfg(feature = "ureq")]
fn ureq_transport(opts: TransportOptions) -> Option<Box<dyn Transport>> {
    Some(Box::new(UreqTransport::new(opts)))
}

#[cfg(not(feature = "ureq"))]
fn ureq_transport(_opts: TransportOptions) -> Option<Box<dyn Transport>> {
    None
}
