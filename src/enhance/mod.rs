pub mod engine;
pub mod fetch;
pub mod steps;
pub mod tensor;

use std::sync::{Arc, Mutex};

use anyhow::Result;
use image::RgbImage;

pub use engine::{EDSR_SCALE, EdsrEngine};
pub use fetch::ModelSource;

use crate::models::EnhancedImage;

/// Seam between the orchestration and the upscaling backend.
/// Production uses the pretrained EDSR ONNX model; tests plug in a cheap
/// stand-in so the surrounding glue stays exercisable offline.
pub trait SuperResolve: Send + Sync {
    /// Spatial upscaling factor this model produces
    fn scale(&self) -> u32;

    /// Run a forward pass on an RGB image
    fn upscale(&self, image: &RgbImage) -> Result<RgbImage>;
}

/// Run one super-resolution request through a model and check its contract:
/// the output must be exactly scale x the input in both dimensions.
pub fn enhance_image(model: &dyn SuperResolve, image: &RgbImage) -> Result<EnhancedImage> {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        anyhow::bail!("input image has no pixels");
    }

    let scale = model.scale();
    let output = model.upscale(image)?;

    let expected = (width * scale, height * scale);
    if output.dimensions() != expected {
        anyhow::bail!(
            "model produced {}x{}, expected {}x{} ({}x upscale of {}x{})",
            output.width(),
            output.height(),
            expected.0,
            expected.1,
            scale,
            width,
            height
        );
    }

    Ok(EnhancedImage {
        image: output,
        source_width: width,
        source_height: height,
        scale,
    })
}

/// Loads the pretrained model once and reuses it for every request.
/// The engine is initialized lazily on first use, so constructing an
/// Enhancer is free and the (possibly network-bound) model resolution only
/// happens when an enhancement is actually requested.
pub struct Enhancer {
    source: ModelSource,
    verbose: bool,
    // Lazy-initialized engine, shared via Arc so callers can hold on to it
    // without keeping the mutex locked
    engine: Mutex<Option<Arc<EdsrEngine>>>,
}

impl Enhancer {
    pub fn new(source: ModelSource) -> Self {
        Self {
            source,
            verbose: false,
            engine: Mutex::new(None),
        }
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Whether the model has already been resolved and loaded
    pub fn is_loaded(&self) -> bool {
        self.engine.lock().unwrap().is_some()
    }

    /// Get the shared engine, resolving and loading the model on first call
    pub fn engine(&self) -> Result<Arc<EdsrEngine>> {
        let mut guard = self.engine.lock().unwrap();
        if guard.is_none() {
            if self.verbose {
                println!("Resolving EDSR model...");
            }
            let path = self.source.resolve()?;
            if self.verbose {
                println!("Loading model from {:?}", path);
            }
            *guard = Some(Arc::new(EdsrEngine::load(&path)?));
            if self.verbose {
                println!("Model loaded successfully");
            }
        }
        Ok(guard.as_ref().unwrap().clone())
    }

    /// Enhance one image with the cached model
    pub fn enhance(&self, image: &RgbImage) -> Result<EnhancedImage> {
        let engine = self.engine()?;
        enhance_image(engine.as_ref(), image)
    }
}

impl std::fmt::Debug for Enhancer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Enhancer")
            .field("source", &self.source)
            .field("loaded", &self.is_loaded())
            .finish()
    }
}
