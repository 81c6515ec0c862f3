pub mod enhance;
pub mod models;
pub mod pipeline;

pub use enhance::{EdsrEngine, Enhancer, ModelSource, SuperResolve, enhance_image};
pub use models::{EnhancedImage, SourceImage, SupportedFormat};
pub use pipeline::{
    DebugConfig, MetadataValue, Pipeline, PipelineContext, PipelineData, PipelineStep,
};

#[cfg(feature = "gui")]
pub mod gui;
