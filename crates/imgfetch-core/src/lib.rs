pub mod config;
pub mod logging;

pub mod error;
pub mod fetch;
pub mod filename;
pub mod image_url;
pub mod transport;

pub use error::{FetchFailure, ImageError, TransportError};
pub use fetch::{FetchSettings, ImageFetcher};
pub use image_url::{build_image_url, build_image_url_with_origin, ImageRequest, DEFAULT_ORIGIN};
pub use transport::{Transport, TransportBackend};
