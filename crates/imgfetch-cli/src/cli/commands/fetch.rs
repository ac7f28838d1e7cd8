//! Fetch command: download one image and print its path.

use anyhow::{Context, Result};
use imgfetch_core::config::ImgfetchConfig;
use imgfetch_core::transport;
use imgfetch_core::{ImageFetcher, ImageRequest, TransportBackend};
use std::path::Path;

pub fn run_fetch(
    cfg: &ImgfetchConfig,
    req: &ImageRequest,
    dir: Option<&Path>,
    full_path: bool,
    backend: Option<TransportBackend>,
) -> Result<()> {
    let backend = backend.unwrap_or(cfg.transport);
    let transport = transport::select(backend, cfg.transport_options())?;
    let fetcher = ImageFetcher::new(transport, cfg.fetch_settings());
    tracing::debug!(
        default_dir = %fetcher.settings().default_dir.display(),
        "fetch {}x{}",
        req.width,
        req.height
    );

    let saved = fetcher
        .fetch_image(dir, req, full_path)
        .context("image download failed")?;
    println!("{}", saved.display());
    Ok(())
}
