use crate::llm::ModelProvider;
use std::sync::Arc;

/// Process-wide state: one configured handle per external provider, built at
/// startup and reused across requests. Handles are stateless beyond their
/// connection pools, so no locking is involved.
#[derive(Clone)]
pub struct AppState {
    /// General-purpose provider: Markdown conversion, sentiment, image
    /// descriptions.
    pub general: Arc<dyn ModelProvider + Send + Sync>,
    /// Search-grounded provider: factuality, political leaning, source
    /// credibility.
    pub grounded: Arc<dyn ModelProvider + Send + Sync>,
}

impl AppState {
    pub fn new(
        general: Arc<dyn ModelProvider + Send + Sync>,
        grounded: Arc<dyn ModelProvider + Send + Sync>,
    ) -> Self {
        Self { general, grounded }
    }
}
