mod common;

use common::gradient_image;
use ndarray::Array;
use superscale::enhance::tensor::{image_to_tensor, tensor_to_image};

#[test]
fn tensor_layout_and_normalization() {
    let mut img = image::RgbImage::new(2, 1);
    img.put_pixel(0, 0, image::Rgb([255, 0, 51]));
    img.put_pixel(1, 0, image::Rgb([0, 102, 255]));

    let tensor = image_to_tensor(&img);

    assert_eq!(tensor.shape(), &[1, 3, 1, 2]);
    // pixel (x, y) channel c lands at [0, c, y, x], normalized by 255
    assert!((tensor[[0, 0, 0, 0]] - 1.0).abs() < 1e-6);
    assert!((tensor[[0, 2, 0, 0]] - 0.2).abs() < 1e-6);
    assert!((tensor[[0, 1, 0, 1]] - 0.4).abs() < 1e-6);
}

#[test]
fn out_of_range_values_are_clamped() -> anyhow::Result<()> {
    let mut tensor = Array::<f32, _>::zeros((1, 3, 1, 2));
    tensor[[0, 0, 0, 0]] = -0.5;
    tensor[[0, 1, 0, 0]] = 1.5;
    tensor[[0, 2, 0, 0]] = 0.5;

    let image = tensor_to_image(tensor.view().into_dyn())?;

    assert_eq!(image.get_pixel(0, 0).0, [0, 255, 128]);
    Ok(())
}

#[test]
fn conversion_roundtrip_is_lossless() -> anyhow::Result<()> {
    let img = gradient_image(7, 5);

    let restored = tensor_to_image(image_to_tensor(&img).view().into_dyn())?;

    assert_eq!(img.as_raw(), restored.as_raw());
    Ok(())
}

#[test]
fn rejects_non_nchw_output() {
    let tensor = Array::<f32, _>::zeros((1, 4, 2, 2));
    assert!(tensor_to_image(tensor.view().into_dyn()).is_err());
}
