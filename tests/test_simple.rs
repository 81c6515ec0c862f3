mod common;

use superscale::SourceImage;

#[test]
fn test_simple() -> anyhow::Result<()> {
    let file = common::create_test_image();
    let source = SourceImage::open(file.path())?;

    assert_eq!((source.width(), source.height()), (64, 48));

    Ok(())
}
