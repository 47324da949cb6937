use std::sync::Arc;

use crate::catalog::CourseCatalog;
use crate::llm_client::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Loaded once at startup, read-only afterwards.
    pub catalog: Arc<CourseCatalog>,
    /// Production: `LlmClient`. Tests swap in a stub.
    pub generator: Arc<dyn TextGenerator>,
}
