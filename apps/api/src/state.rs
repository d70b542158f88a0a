use std::sync::Arc;

use crate::config::Config;
use crate::extraction::PageReader;
use crate::review::dispatcher::GenerationBackend;

/// Shared application state injected into all route handlers via Axum extractors.
/// Holds collaborators only; no per-user data survives a request.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable PDF page reader. Default: PdfPageReader.
    pub page_reader: Arc<dyn PageReader>,
    /// Pluggable generation endpoint. Default: GeminiClient.
    pub generator: Arc<dyn GenerationBackend>,
}
