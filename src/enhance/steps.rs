use crate::enhance::{Enhancer, ModelSource, SuperResolve, enhance_image};
use crate::pipeline::{MetadataValue, PipelineContext, PipelineData, PipelineStep};
use anyhow::Result;

/// Normalize decoded input to 8-bit RGB.
/// Uploads may be grayscale, paletted, or carry an alpha channel; the model
/// expects plain RGB, so everything is converted up front and the source
/// dimensions are recorded for later steps.
pub struct RgbConvertStep;

impl PipelineStep for RgbConvertStep {
    fn process(&self, data: Vec<PipelineData>, _context: &PipelineContext) -> Result<Vec<PipelineData>> {
        let mut result = Vec::new();
        for item in data {
            let rgb = item.image.to_rgb8();
            let (width, height) = rgb.dimensions();
            let new_item = PipelineData {
                image: image::DynamicImage::ImageRgb8(rgb),
                original: item.original.clone(),
                metadata: item.metadata.clone(),
            }
            .with_metadata("source_width", MetadataValue::Int(width as i32))
            .with_metadata("source_height", MetadataValue::Int(height as i32));
            result.push(new_item);
        }
        Ok(result)
    }

    fn name(&self) -> &str {
        "RGB Conversion"
    }
}

/// Run the pretrained EDSR model on each item.
/// The underlying ONNX session is loaded once on first use and reused for
/// all subsequent calls.
pub struct SuperResolveStep {
    enhancer: Enhancer,
}

impl SuperResolveStep {
    pub fn new(source: ModelSource) -> Self {
        Self {
            enhancer: Enhancer::new(source),
        }
    }
}

impl PipelineStep for SuperResolveStep {
    fn process(&self, data: Vec<PipelineData>, context: &PipelineContext) -> Result<Vec<PipelineData>> {
        if context.verbose && !self.enhancer.is_loaded() {
            println!("Initializing EDSR engine...");
        }
        let engine = self.enhancer.engine()?;
        if context.verbose {
            println!("EDSR engine ready ({}x upscale)", engine.scale());
        }

        let mut result = Vec::new();
        for item in data {
            let rgb = item.image.to_rgb8();
            let enhanced = enhance_image(engine.as_ref(), &rgb)?;

            let new_item = PipelineData {
                image: image::DynamicImage::ImageRgb8(enhanced.image),
                original: item.original.clone(),
                metadata: item.metadata.clone(),
            }
            .with_metadata("scale", MetadataValue::Int(enhanced.scale as i32))
            .with_metadata(
                "enhanced_width",
                MetadataValue::Int((enhanced.source_width * enhanced.scale) as i32),
            )
            .with_metadata(
                "enhanced_height",
                MetadataValue::Int((enhanced.source_height * enhanced.scale) as i32),
            );
            result.push(new_item);
        }

        Ok(result)
    }

    fn name(&self) -> &str {
        "Super-Resolution"
    }
}
