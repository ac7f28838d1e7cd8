//! Error types for URL building, transport and download.

use std::path::PathBuf;
use thiserror::Error;

/// Failure reported by a `Transport` while performing a GET.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The HTTP client reported an error (DNS, connect, TLS, timeout...).
    #[error("{backend}: {source}")]
    Backend {
        backend: &'static str,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// Streaming the response body into the sink failed.
    #[error("body stream: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(feature = "curl")]
impl From<curl::Error> for TransportError {
    fn from(e: curl::Error) -> Self {
        TransportError::Backend {
            backend: "curl",
            source: Box::new(e),
        }
    }
}

#[cfg(feature = "ureq")]
impl From<ureq::Error> for TransportError {
    fn from(e: ureq::Error) -> Self {
        TransportError::Backend {
            backend: "ureq",
            source: Box::new(e),
        }
    }
}

/// Why a download did not produce a file.
#[derive(Debug, Error)]
pub enum FetchFailure {
    /// Response arrived but was not HTTP 200.
    #[error("HTTP {0}")]
    Status(u32),
    /// The transfer itself failed.
    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// Errors surfaced by the image fetcher.
#[derive(Debug, Error)]
pub enum ImageError {
    /// Target directory is missing, not a directory, or not writable.
    /// Checked before any network access.
    #[error("cannot write to directory \"{}\": {reason}", path.display())]
    Directory { path: PathBuf, reason: String },

    /// No HTTP transport matching the requested backend is compiled in.
    #[error("no HTTP transport available: {0}")]
    TransportUnavailable(String),

    /// Non-200 response or failed transfer. The partial file has been removed.
    #[error("could not fetch {url}: {cause}")]
    Fetch {
        url: String,
        #[source]
        cause: FetchFailure,
    },

    /// Local file creation failed after the directory was validated.
    #[error("io error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ImageError {
    /// HTTP status of a `Fetch` error that got a response, if any.
    pub fn http_status(&self) -> Option<u32> {
        match self {
            ImageError::Fetch {
                cause: FetchFailure::Status(code),
                ..
            } => Some(*code),
            _ => None,
        }
    }
}
