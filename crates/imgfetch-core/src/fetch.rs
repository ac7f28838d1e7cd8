//! Download one placeholder image to disk.
//!
//! Validates the target directory, picks a unique filename, builds the URL and
//! streams a single GET into the file. On a failed transfer or non-200 status
//! the partial file is removed.

use crate::error::{FetchFailure, ImageError};
use crate::filename::unique_filename;
use crate::image_url::{build_image_url_with_origin, ImageRequest};
use crate::transport::Transport;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Explicit environment for the fetcher, resolved once at startup.
#[derive(Debug, Clone)]
pub struct FetchSettings {
    /// Image service origin.
    pub origin: String,
    /// Directory used when the caller passes none.
    pub default_dir: PathBuf,
    /// Host-identifying value mixed into filenames.
    pub host_id: String,
}

pub struct ImageFetcher {
    transport: Box<dyn Transport>,
    settings: FetchSettings,
}

impl ImageFetcher {
    pub fn new(transport: Box<dyn Transport>, settings: FetchSettings) -> Self {
        Self {
            transport,
            settings,
        }
    }

    pub fn settings(&self) -> &FetchSettings {
        &self.settings
    }

    /// Downloads an image into `directory` (or the default directory).
    ///
    /// Returns the absolute file path when `return_full_path` is set, else the
    /// bare filename. The request's `grayscale` and `blur` are not applied to
    /// the download URL; use [`ImageRequest::url`] when those are needed.
    pub fn fetch_image(
        &self,
        directory: Option<&Path>,
        request: &ImageRequest,
        return_full_path: bool,
    ) -> Result<PathBuf, ImageError> {
        let dir = directory.unwrap_or(self.settings.default_dir.as_path());
        ensure_writable_dir(dir)?;

        let filename = unique_filename(&self.settings.host_id, request.extension.as_deref());
        let filepath = absolute(dir)?.join(&filename);

        if request.grayscale || request.blur.is_some() {
            tracing::debug!(
                grayscale = request.grayscale,
                blur = ?request.blur,
                "grayscale/blur are not applied to downloads"
            );
        }
        let url = build_image_url_with_origin(
            &self.settings.origin,
            request.width,
            request.height,
            request.randomize,
            false,
            None,
            request.extension.as_deref(),
        );
        tracing::debug!(
            url = %url,
            path = %filepath.display(),
            transport = self.transport.name(),
            "fetching image"
        );

        let file = File::create(&filepath).map_err(|source| ImageError::Io {
            path: filepath.clone(),
            source,
        })?;
        if let Err(cause) = self.download_to(&url, file) {
            if let Err(e) = fs::remove_file(&filepath) {
                tracing::warn!("failed to remove partial file {}: {}", filepath.display(), e);
            }
            tracing::warn!(url = %url, "could not fetch image: {}", cause);
            return Err(ImageError::Fetch { url, cause });
        }

        tracing::info!("saved image to {}", filepath.display());
        if return_full_path {
            Ok(filepath)
        } else {
            Ok(PathBuf::from(filename))
        }
    }

    /// Stream one GET into `file`. The file is left behind on error; the
    /// caller removes it.
    fn download_to(&self, url: &str, file: File) -> Result<(), FetchFailure> {
        let mut writer = BufWriter::new(file);
        let status = self.transport.get(url, &mut writer)?;
        writer
            .flush()
            .map_err(|e| FetchFailure::Transport(e.into()))?;
        if status != 200 {
            return Err(FetchFailure::Status(status));
        }
        Ok(())
    }
}

/// Fails with `ImageError::Directory` unless `dir` is an existing directory we
/// can create files in.
fn ensure_writable_dir(dir: &Path) -> Result<(), ImageError> {
    let directory_error = |reason: String| ImageError::Directory {
        path: dir.to_path_buf(),
        reason,
    };

    let meta = fs::metadata(dir).map_err(|e| directory_error(e.to_string()))?;
    if !meta.is_dir() {
        return Err(directory_error("not a directory".to_string()));
    }
    // Probe with an anonymous file; it is unlinked on drop.
    tempfile::tempfile_in(dir).map_err(|e| directory_error(format!("not writable: {}", e)))?;
    Ok(())
}

fn absolute(dir: &Path) -> Result<PathBuf, ImageError> {
    if dir.is_absolute() {
        return Ok(dir.to_path_buf());
    }
    std::env::current_dir()
        .map(|cwd| cwd.join(dir))
        .map_err(|source| ImageError::Io {
            path: dir.to_path_buf(),
            source,
        })
}
