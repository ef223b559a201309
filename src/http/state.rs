use crate::pipeline::CallPipeline;
use std::sync::Arc;

/// Shared application state for HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Analyzer plus call log, built once at startup
    pub pipeline: Arc<CallPipeline>,
}

impl AppState {
    pub fn new(pipeline: CallPipeline) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
        }
    }

    pub fn groq_configured(&self) -> bool {
        self.pipeline.analyzer().mode().is_live()
    }
}
