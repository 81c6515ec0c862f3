use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use image::{ImageReader, RgbImage};

/// File types accepted by the image picker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupportedFormat {
    Png,
    Jpeg,
}

impl SupportedFormat {
    /// Extensions offered in file dialogs, lowercase
    pub const EXTENSIONS: [&'static str; 3] = ["png", "jpg", "jpeg"];

    /// Match a path against the supported extensions (case-insensitive).
    /// Returns None for anything else, including paths without an extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "png" => Some(Self::Png),
            "jpg" | "jpeg" => Some(Self::Jpeg),
            _ => None,
        }
    }
}

/// A decoded input image, kept in memory for the duration of the session
#[derive(Debug, Clone)]
pub struct SourceImage {
    pub path: PathBuf,
    pub image: Arc<RgbImage>,
}

impl SourceImage {
    /// Open and decode an image file, forcing RGB.
    /// The extension is checked before any decoding happens, mirroring the
    /// picker filter for paths that arrive from elsewhere (CLI, tests).
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if SupportedFormat::from_path(path).is_none() {
            anyhow::bail!(
                "Unsupported file type: {} (expected png, jpg or jpeg)",
                path.display()
            );
        }

        let img = ImageReader::open(path)?
            .decode()
            .map_err(|e| anyhow::anyhow!("Failed to decode image: {}", e))?;

        Ok(Self {
            path: path.to_path_buf(),
            image: Arc::new(img.to_rgb8()),
        })
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }
}

/// The result of a super-resolution run
#[derive(Debug, Clone)]
pub struct EnhancedImage {
    pub image: RgbImage,
    pub source_width: u32,
    pub source_height: u32,
    pub scale: u32,
}

impl EnhancedImage {
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    /// Encode as PNG for the save/download path
    pub fn to_png_bytes(&self) -> Result<Vec<u8>> {
        let mut buffer = Cursor::new(Vec::new());
        self.image
            .write_to(&mut buffer, image::ImageFormat::Png)
            .map_err(|e| anyhow::anyhow!("Failed to encode PNG: {}", e))?;
        Ok(buffer.into_inner())
    }
}
