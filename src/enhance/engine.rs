use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use image::RgbImage;
use ort::{GraphOptimizationLevel, Session, inputs};

use crate::enhance::{SuperResolve, tensor};

/// Upscaling factor of the pretrained EDSR checkpoint
pub const EDSR_SCALE: u32 = 4;

/// ONNX session wrapper around the pretrained EDSR model.
/// Inference-only: the session runs a forward pass with no gradient state,
/// and one engine is shared across all requests of the process.
#[derive(Debug)]
pub struct EdsrEngine {
    // The session is guarded so the engine can be shared across UI tasks
    session: Mutex<Session>,
    input_name: String,
    output_name: String,
    scale: u32,
}

impl EdsrEngine {
    /// Load the model from an ONNX file
    pub fn load(path: &Path) -> Result<Self> {
        let session = Session::builder()?
            .with_optimization_level(GraphOptimizationLevel::Level3)?
            .commit_from_file(path)
            .with_context(|| format!("Failed to load ONNX model {}", path.display()))?;

        // Tensor names vary between exports, so read them off the session
        let input_name = session
            .inputs
            .first()
            .map(|i| i.name.clone())
            .context("model has no inputs")?;
        let output_name = session
            .outputs
            .first()
            .map(|o| o.name.clone())
            .context("model has no outputs")?;

        Ok(Self {
            session: Mutex::new(session),
            input_name,
            output_name,
            scale: EDSR_SCALE,
        })
    }
}

impl SuperResolve for EdsrEngine {
    fn scale(&self) -> u32 {
        self.scale
    }

    fn upscale(&self, image: &RgbImage) -> Result<RgbImage> {
        let input = tensor::image_to_tensor(image);

        let session = self.session.lock().unwrap();
        let outputs = session
            .run(inputs![self.input_name.as_str() => input.view()]?)
            .context("model inference failed")?;

        let output = outputs[self.output_name.as_str()].try_extract_tensor::<f32>()?;
        tensor::tensor_to_image(output)
    }
}
