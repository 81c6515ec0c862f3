use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};

/// Hub identifier of the pretrained checkpoint (EDSR, 4x)
pub const MODEL_ID: &str = "eugenesiow/edsr-base";

/// Filename the ONNX export is cached under
pub const MODEL_FILE: &str = "edsr-base-x4.onnx";

/// Download URL for the ONNX export of the 4x checkpoint
pub const MODEL_URL: &str =
    "https://huggingface.co/eugenesiow/edsr-base/resolve/main/onnx/edsr-base-x4.onnx";

// edsr-base has ~1.5M parameters, fp32 weights land around 6 MB
const MODEL_APPROX_SIZE: u64 = 6_000_000;

/// Where the model weights come from
#[derive(Debug, Clone, Default)]
pub enum ModelSource {
    /// The managed cache under ~/.cache/superscale, downloading on first use
    #[default]
    Cached,
    /// An explicit ONNX file on disk, no downloading
    File(PathBuf),
}

impl ModelSource {
    /// Resolve to an on-disk ONNX file, downloading into the cache if needed
    pub fn resolve(&self) -> Result<PathBuf> {
        match self {
            Self::File(path) => {
                if !path.exists() {
                    anyhow::bail!("Model file not found: {}", path.display());
                }
                Ok(path.clone())
            }
            Self::Cached => {
                let dir = cache_dir()?;
                fs::create_dir_all(&dir)
                    .with_context(|| format!("Failed to create cache directory {}", dir.display()))?;

                let path = dir.join(MODEL_FILE);
                if !path.exists() {
                    download_model(&path)?;
                }
                Ok(path)
            }
        }
    }
}

/// Standard cache location for downloaded weights
fn cache_dir() -> Result<PathBuf> {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .context("HOME is not set, cannot locate the model cache")?;

    Ok(Path::new(&home).join(".cache/superscale"))
}

/// Download the pretrained checkpoint with a progress bar.
/// The file is staged next to its final path and renamed once complete, so an
/// interrupted download never leaves a truncated model in the cache.
fn download_model(path: &Path) -> Result<()> {
    println!("Downloading {} ({})", MODEL_ID, MODEL_FILE);

    let client = reqwest::blocking::Client::new();
    let mut response = client
        .get(MODEL_URL)
        .send()
        .and_then(|r| r.error_for_status())
        .with_context(|| format!("Failed to download model from {}", MODEL_URL))?;

    let total_size = response.content_length().unwrap_or(MODEL_APPROX_SIZE);

    let pb = ProgressBar::new(total_size);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({eta})")
            .expect("valid template")
            .progress_chars("#>-"),
    );

    let staging = path.with_extension("onnx.part");
    let mut file = File::create(&staging)
        .with_context(|| format!("Failed to create {}", staging.display()))?;

    io::copy(&mut response, &mut pb.wrap_write(&mut file))
        .context("Failed while writing model download")?;
    pb.finish_and_clear();

    fs::rename(&staging, path)
        .with_context(|| format!("Failed to move download into place at {}", path.display()))?;

    println!("Model cached at {}", path.display());
    Ok(())
}
