use std::sync::Arc;

use crate::analysis::fetcher::PageFetcher;
use crate::analysis::tagger::PosTagger;
use crate::config::Config;
use crate::llm_client::CompletionService;

/// Shared application state injected into all route handlers via Axum extractors.
/// Everything here is built once at startup and read-only afterwards.
#[derive(Clone)]
pub struct AppState {
    pub fetcher: PageFetcher,
    /// Part-of-speech tagger; its model is loaded before the listener binds.
    pub tagger: Arc<dyn PosTagger>,
    pub llm: Arc<dyn CompletionService>,
    pub config: Config,
}
