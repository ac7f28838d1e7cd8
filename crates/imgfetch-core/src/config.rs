use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::fetch::FetchSettings;
use crate::image_url::DEFAULT_ORIGIN;
use crate::transport::TransportOptions;

/// Download transport: libcurl, pure-Rust `ureq`, or whichever is compiled in (curl first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportBackend {
    #[default]
    Auto,
    Curl,
    Ureq,
}

/// Global configuration loaded from `~/.config/imgfetch/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImgfetchConfig {
    /// Image service origin, e.g. `https://picsum.photos`.
    pub origin: String,
    /// Directory downloads land in when none is given (None = platform temp dir).
    #[serde(default)]
    pub download_dir: Option<PathBuf>,
    /// Host-identifying value mixed into generated filenames (None = empty).
    #[serde(default)]
    pub host_id: Option<String>,
    /// Transport backend: "auto" (default), "curl" or "ureq".
    #[serde(default)]
    pub transport: TransportBackend,
    /// Follow HTTP redirects. The service answers with a redirect to its CDN.
    #[serde(default = "default_follow_redirects")]
    pub follow_redirects: bool,
}

fn default_follow_redirects() -> bool {
    true
}

impl Default for ImgfetchConfig {
    fn default() -> Self {
        Self {
            origin: DEFAULT_ORIGIN.to_string(),
            download_dir: None,
            host_id: None,
            transport: TransportBackend::Auto,
            follow_redirects: true,
        }
    }
}

impl ImgfetchConfig {
    /// Check that `origin` is an absolute http(s) URL.
    pub fn validate(&self) -> Result<()> {
        let origin = url::Url::parse(&self.origin)
            .with_context(|| format!("invalid origin {:?}", self.origin))?;
        match origin.scheme() {
            "http" | "https" => Ok(()),
            other => anyhow::bail!("origin scheme must be http or https, got {}", other),
        }
    }

    /// Resolve ambient defaults (temp dir, host id) into explicit fetcher settings.
    pub fn fetch_settings(&self) -> FetchSettings {
        FetchSettings {
            origin: self.origin.clone(),
            default_dir: self
                .download_dir
                .clone()
                .unwrap_or_else(std::env::temp_dir),
            host_id: self.host_id.clone().unwrap_or_default(),
        }
    }

    pub fn transport_options(&self) -> TransportOptions {
        TransportOptions {
            follow_redirects: self.follow_redirects,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("imgfetch")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ImgfetchConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = ImgfetchConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: ImgfetchConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}
