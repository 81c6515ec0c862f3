use std::sync::Arc;

use crate::enhance::Enhancer;

#[derive(Debug)]
pub struct AppState {
    /// The lazily-loaded model, shared by every enhancement task
    pub enhancer: Arc<Enhancer>,
}

impl AppState {
    pub fn new(enhancer: Arc<Enhancer>) -> Self {
        Self { enhancer }
    }
}
