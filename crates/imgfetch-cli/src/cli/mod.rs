//! CLI for imgfetch.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use imgfetch_core::config;
use imgfetch_core::{ImageRequest, TransportBackend};
use std::path::PathBuf;

use commands::{run_fetch, run_url};

/// Top-level CLI for imgfetch.
#[derive(Debug, Parser)]
#[command(name = "imgfetch")]
#[command(about = "imgfetch: placeholder image URLs and downloads", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

/// Size and cache-busting options shared by every command.
#[derive(Debug, Args)]
pub struct ImageArgs {
    /// Image width in pixels.
    #[arg(long, default_value_t = 640, value_parser = clap::value_parser!(u32).range(1..))]
    pub width: u32,

    /// Image height in pixels.
    #[arg(long, default_value_t = 480, value_parser = clap::value_parser!(u32).range(1..))]
    pub height: u32,

    /// Omit the cache-busting `random` query parameter.
    #[arg(long)]
    pub no_random: bool,

    /// File extension including the dot, e.g. `.jpg` or `.webp`.
    #[arg(long, value_name = "EXT")]
    pub ext: Option<String>,
}

impl ImageArgs {
    fn to_request(&self) -> ImageRequest {
        let mut req = ImageRequest::new(self.width, self.height).randomize(!self.no_random);
        if let Some(ext) = &self.ext {
            req = req.extension(ext.clone());
        }
        req
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TransportArg {
    Auto,
    Curl,
    Ureq,
}

impl From<TransportArg> for TransportBackend {
    fn from(arg: TransportArg) -> Self {
        match arg {
            TransportArg::Auto => TransportBackend::Auto,
            TransportArg::Curl => TransportBackend::Curl,
            TransportArg::Ureq => TransportBackend::Ureq,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print a placeholder image URL.
    Url {
        #[command(flatten)]
        image: ImageArgs,

        /// Request a grayscale image.
        #[arg(long)]
        grayscale: bool,

        /// Blur amount (1-10).
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=10))]
        blur: Option<u8>,
    },

    /// Download a placeholder image and print where it was saved.
    Fetch {
        #[command(flatten)]
        image: ImageArgs,

        /// Target directory (default: configured download_dir, else the system temp dir).
        #[arg(long, value_name = "PATH")]
        dir: Option<PathBuf>,

        /// Print only the generated filename instead of the full path.
        #[arg(long)]
        filename_only: bool,

        /// Override the configured transport backend.
        #[arg(long, value_enum)]
        transport: Option<TransportArg>,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Url {
                image,
                grayscale,
                blur,
            } => {
                let mut req = image.to_request().grayscale(grayscale);
                req.blur = blur;
                run_url(&cfg, &req)
            }
            CliCommand::Fetch {
                image,
                dir,
                filename_only,
                transport,
            } => run_fetch(
                &cfg,
                &image.to_request(),
                dir.as_deref(),
                !filename_only,
                transport.map(Into::into),
            ),
        }
    }
}
