use anyhow::{Context, Result};
use image::{Rgb, RgbImage};
use ndarray::{Array, ArrayViewD, Dim, Ix, Ix4};

/// Convert an RGB image to a normalized NCHW tensor with values in [0, 1]
pub fn image_to_tensor(image: &RgbImage) -> Array<f32, Dim<[Ix; 4]>> {
    let (width, height) = image.dimensions();

    let mut input = Array::zeros((1, 3, height as usize, width as usize));
    for (x, y, pixel) in image.enumerate_pixels() {
        let (x, y) = (x as usize, y as usize);
        let [r, g, b] = pixel.0;
        input[[0, 0, y, x]] = (r as f32) / 255.;
        input[[0, 1, y, x]] = (g as f32) / 255.;
        input[[0, 2, y, x]] = (b as f32) / 255.;
    }
    input
}

/// Convert a NCHW model output back into an 8-bit RGB image.
/// Values are clamped to [0, 1] before quantization.
pub fn tensor_to_image(output: ArrayViewD<'_, f32>) -> Result<RgbImage> {
    let output = output
        .into_dimensionality::<Ix4>()
        .context("model output is not a NCHW tensor")?;

    let shape = output.shape();
    if shape[0] != 1 || shape[1] != 3 {
        anyhow::bail!(
            "unexpected model output shape {:?}, expected (1, 3, H, W)",
            shape
        );
    }
    let (height, width) = (shape[2], shape[3]);

    let mut image = RgbImage::new(width as u32, height as u32);
    for (x, y, pixel) in image.enumerate_pixels_mut() {
        let (x, y) = (x as usize, y as usize);
        let r = output[[0, 0, y, x]].clamp(0., 1.);
        let g = output[[0, 1, y, x]].clamp(0., 1.);
        let b = output[[0, 2, y, x]].clamp(0., 1.);
        *pixel = Rgb([
            (r * 255.).round() as u8,
            (g * 255.).round() as u8,
            (b * 255.).round() as u8,
        ]);
    }

    Ok(image)
}
