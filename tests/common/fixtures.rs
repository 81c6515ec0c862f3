use anyhow::Result;
use image::{ImageBuffer, Rgb, RgbImage};
use superscale::SuperResolve;
use tempfile::NamedTempFile;

/// Creates a 64x48 gradient test image and returns the temp file.
/// The file will be automatically cleaned up when dropped.
pub fn create_test_image() -> NamedTempFile {
    let img = gradient_image(64, 48);
    let file = tempfile::Builder::new()
        .suffix(".png")
        .tempfile()
        .expect("Failed to create temp image file");
    img.save_with_format(file.path(), image::ImageFormat::Png)
        .expect("Failed to save test image");
    file
}

/// A small RGB gradient, deterministic across runs
pub fn gradient_image(width: u32, height: u32) -> RgbImage {
    ImageBuffer::from_fn(width, height, |x, y| {
        let r = (x * 255 / width.max(1)) as u8;
        let g = (y * 255 / height.max(1)) as u8;
        Rgb([r, g, 128u8])
    })
}

/// Cheap stand-in for the EDSR model: nearest-neighbour 4x.
/// Keeps orchestration tests hermetic (no downloads, no ONNX runtime).
pub struct Nearest4x;

impl SuperResolve for Nearest4x {
    fn scale(&self) -> u32 {
        4
    }

    fn upscale(&self, image: &RgbImage) -> Result<RgbImage> {
        let (width, height) = image.dimensions();
        Ok(image::imageops::resize(
            image,
            width * 4,
            height * 4,
            image::imageops::FilterType::Nearest,
        ))
    }
}

/// A model that violates its own scale contract
pub struct BrokenScale;

impl SuperResolve for BrokenScale {
    fn scale(&self) -> u32 {
        4
    }

    fn upscale(&self, image: &RgbImage) -> Result<RgbImage> {
        let (width, height) = image.dimensions();
        Ok(image::imageops::resize(
            image,
            width * 2,
            height * 2,
            image::imageops::FilterType::Nearest,
        ))
    }
}
