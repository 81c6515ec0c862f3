mod common;

use superscale::Pipeline;
use superscale::enhance::steps::RgbConvertStep;

#[test]
fn rgb_convert_step_records_source_dimensions() -> anyhow::Result<()> {
    let mut pipeline = Pipeline::new().add_step_boxed(Box::new(RgbConvertStep));

    let input = image::DynamicImage::ImageLuma8(image::GrayImage::new(10, 8));
    let results = pipeline.run(input)?;

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].get_int("source_width"), Some(10));
    assert_eq!(results[0].get_int("source_height"), Some(8));
    assert!(matches!(
        results[0].image,
        image::DynamicImage::ImageRgb8(_)
    ));
    Ok(())
}

#[test]
fn debug_dir_must_be_empty() -> anyhow::Result<()> {
    let dir = tempfile::TempDir::new()?;
    std::fs::write(dir.path().join("existing.txt"), b"x")?;

    let result = Pipeline::new().with_debug(dir.path().to_path_buf());
    assert!(result.is_err());
    Ok(())
}

#[test]
fn debug_mode_dumps_intermediates() -> anyhow::Result<()> {
    let dir = tempfile::TempDir::new()?;
    let out = dir.path().join("debug");

    let mut pipeline = Pipeline::new()
        .add_step_boxed(Box::new(RgbConvertStep))
        .with_debug(out.clone())?;
    pipeline.run(image::DynamicImage::ImageRgb8(common::gradient_image(8, 8)))?;

    assert!(out.join("00_input/01.png").exists());
    assert!(out.join("01_rgb_conversion/01.png").exists());
    Ok(())
}
