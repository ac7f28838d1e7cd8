//! Url command: print a placeholder image URL.

use anyhow::Result;
use imgfetch_core::config::ImgfetchConfig;
use imgfetch_core::ImageRequest;

pub fn run_url(cfg: &ImgfetchConfig, req: &ImageRequest) -> Result<()> {
    println!("{}", req.url_with_origin(&cfg.origin));
    Ok(())
}
