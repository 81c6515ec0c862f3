use image::ImageReader;
use superscale::enhance::steps::*;
use superscale::{ModelSource, Pipeline};

fn main() -> anyhow::Result<()> {
    let img = ImageReader::open("lowres.png")?
        .decode()
        .map_err(|e| anyhow::anyhow!("Failed to decode image: {}", e))?;

    println!("Input: {}x{}", img.width(), img.height());

    let mut pipeline = Pipeline::new()
        .with_verbose(true)
        .add_step_boxed(Box::new(RgbConvertStep))
        .add_step_boxed(Box::new(SuperResolveStep::new(ModelSource::Cached)));

    let results = pipeline.run(img)?;
    let enhanced = results
        .first()
        .ok_or_else(|| anyhow::anyhow!("pipeline produced no output"))?;

    println!(
        "Enhanced: {}x{} (scale {})",
        enhanced.image.width(),
        enhanced.image.height(),
        enhanced.get_int("scale").unwrap_or(0)
    );

    enhanced.image.save("enhanced.png")?;
    println!("Saved enhanced.png");

    Ok(())
}
