use crate::observability::AppMetrics;
use crate::services::recipe_search::RecipeSearchService;
use std::sync::Arc;
use std::time::Duration;

/// Default per-request handling timeout
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Application state shared by every request handler
#[derive(Clone)]
pub struct AppState {
    /// Recipe search pipeline
    pub recipe_search_service: Arc<dyn RecipeSearchService>,
    /// Request and search counters
    pub metrics: Arc<AppMetrics>,
    /// Requests still running after this are answered with 408
    pub request_timeout: Duration,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("recipe_search_service", &"Arc<dyn RecipeSearchService>")
            .field("metrics", &self.metrics)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

impl AppState {
    /// Create new application state
    pub fn new(
        recipe_search_service: Box<dyn RecipeSearchService>,
        metrics: Arc<AppMetrics>,
    ) -> Self {
        Self {
            recipe_search_service: Arc::from(recipe_search_service),
            metrics,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    pub fn with_request_timeout(mut self, request_timeout: Duration) -> Self {
        self.request_timeout = request_timeout;
        self
    }
}
