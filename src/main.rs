use clap::Parser;
use image::ImageReader;
use std::path::PathBuf;

use superscale::enhance::steps::*;
use superscale::{ModelSource, Pipeline, SupportedFormat};

#[derive(Parser)]
#[command(name = "superscale")]
#[command(about = "4x image super-resolution with a pretrained EDSR model")]
struct Cli {
    /// Path to input image file; omit to open the interactive window
    #[arg(value_name = "IMAGE")]
    image_path: Option<PathBuf>,

    /// Where to write the enhanced image (always PNG)
    #[arg(short, long, value_name = "FILE", default_value = "enhanced.png")]
    output: PathBuf,

    /// Use a local ONNX model file instead of the cached download
    #[arg(long, value_name = "FILE")]
    model: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Save intermediate images to directory (must be empty)
    #[arg(long, value_name = "DIR")]
    debug_out: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let source = match args.model {
        Some(path) => ModelSource::File(path),
        None => ModelSource::Cached,
    };

    let Some(image_path) = args.image_path else {
        return launch_gui(source, args.verbose);
    };

    // Reject unsupported types up front, the same filter the picker applies
    if SupportedFormat::from_path(&image_path).is_none() {
        anyhow::bail!(
            "Unsupported file type: {} (expected png, jpg or jpeg)",
            image_path.display()
        );
    }

    if args.verbose {
        println!("Loading image: {:?}", image_path);
    }

    let img = ImageReader::open(&image_path)?
        .decode()
        .map_err(|e| anyhow::anyhow!("Failed to decode image: {}", e))?;

    if args.verbose {
        println!("Image loaded: {}x{}\n", img.width(), img.height());
    }

    // Build pipeline
    let mut pipeline = Pipeline::new()
        .with_verbose(args.verbose)
        .add_step_boxed(Box::new(RgbConvertStep))
        .add_step_boxed(Box::new(SuperResolveStep::new(source)));

    // Enable debug mode if requested
    if let Some(debug_dir) = args.debug_out {
        pipeline = pipeline.with_debug(debug_dir)?;
    }

    if args.verbose {
        println!("Running pipeline...\n");
    }
    let results = pipeline.run(img)?;

    let enhanced = results
        .first()
        .ok_or_else(|| anyhow::anyhow!("pipeline produced no output"))?;

    enhanced
        .image
        .save_with_format(&args.output, image::ImageFormat::Png)
        .map_err(|e| anyhow::anyhow!("Failed to save enhanced image: {}", e))?;

    println!(
        "Enhanced {}x{} -> {}x{}, saved to {}",
        enhanced.get_int("source_width").unwrap_or(0),
        enhanced.get_int("source_height").unwrap_or(0),
        enhanced.image.width(),
        enhanced.image.height(),
        args.output.display()
    );

    Ok(())
}

#[cfg(feature = "gui")]
fn launch_gui(source: ModelSource, verbose: bool) -> anyhow::Result<()> {
    superscale::gui::run(source, verbose)?;
    Ok(())
}

#[cfg(not(feature = "gui"))]
fn launch_gui(_source: ModelSource, _verbose: bool) -> anyhow::Result<()> {
    anyhow::bail!("this build has no GUI; pass an IMAGE to enhance")
}
