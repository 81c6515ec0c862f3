mod common;

use common::{BrokenScale, Nearest4x, gradient_image};
use superscale::enhance_image;

#[test]
fn output_is_four_times_input() -> anyhow::Result<()> {
    let input = gradient_image(64, 48);
    let enhanced = enhance_image(&Nearest4x, &input)?;

    assert_eq!(enhanced.dimensions(), (256, 192));
    assert_eq!(enhanced.scale, 4);
    assert_eq!((enhanced.source_width, enhanced.source_height), (64, 48));
    Ok(())
}

#[test]
fn enhancement_is_deterministic() -> anyhow::Result<()> {
    let input = gradient_image(32, 32);

    let first = enhance_image(&Nearest4x, &input)?;
    let second = enhance_image(&Nearest4x, &input)?;

    assert_eq!(first.image.as_raw(), second.image.as_raw());
    Ok(())
}

#[test]
fn empty_input_is_rejected() {
    let input = image::RgbImage::new(0, 0);
    assert!(enhance_image(&Nearest4x, &input).is_err());
}

#[test]
fn scale_contract_is_enforced() {
    let input = gradient_image(16, 16);
    let err = enhance_image(&BrokenScale, &input).unwrap_err();
    assert!(err.to_string().contains("expected 64x64"));
}

#[test]
fn png_bytes_decode_back() -> anyhow::Result<()> {
    let input = gradient_image(20, 10);
    let enhanced = enhance_image(&Nearest4x, &input)?;

    let bytes = enhanced.to_png_bytes()?;
    let decoded = image::load_from_memory(&bytes)?;

    assert_eq!((decoded.width(), decoded.height()), (80, 40));
    Ok(())
}
