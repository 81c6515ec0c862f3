use std::path::Path;

use superscale::{SourceImage, SupportedFormat};

#[test]
fn supported_extensions_are_recognized() {
    assert_eq!(
        SupportedFormat::from_path(Path::new("photo.png")),
        Some(SupportedFormat::Png)
    );
    assert_eq!(
        SupportedFormat::from_path(Path::new("photo.JPG")),
        Some(SupportedFormat::Jpeg)
    );
    assert_eq!(
        SupportedFormat::from_path(Path::new("photo.jpeg")),
        Some(SupportedFormat::Jpeg)
    );
}

#[test]
fn unsupported_extensions_are_rejected() {
    assert_eq!(SupportedFormat::from_path(Path::new("anim.gif")), None);
    assert_eq!(SupportedFormat::from_path(Path::new("photo.webp")), None);
    assert_eq!(SupportedFormat::from_path(Path::new("noext")), None);
}

#[test]
fn open_rejects_unsupported_type_before_decoding() -> anyhow::Result<()> {
    let file = tempfile::Builder::new().suffix(".gif").tempfile()?;
    std::fs::write(file.path(), b"GIF89a")?;

    let err = SourceImage::open(file.path()).unwrap_err();
    assert!(err.to_string().contains("Unsupported file type"));
    Ok(())
}

#[test]
fn open_rejects_corrupt_data() -> anyhow::Result<()> {
    let file = tempfile::Builder::new().suffix(".png").tempfile()?;
    std::fs::write(file.path(), b"not a png at all")?;

    let err = SourceImage::open(file.path()).unwrap_err();
    assert!(err.to_string().contains("Failed to decode"));
    Ok(())
}
