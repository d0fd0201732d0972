use std::sync::Arc;

use crate::config::Config;
use crate::optimization::client::OptimizationClient;
use crate::workflow::sessions::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub sessions: SessionStore,
    /// Pluggable optimizer. Default: GeminiOptimizer; tests inject a fake.
    pub optimizer: Arc<dyn OptimizationClient>,
    pub config: Config,
}
