use recetas::api::{self, app_state::AppState};
use recetas::config::ConfigLoader;
use recetas::observability::{
    AppMetrics, ObservabilityState, create_observability_router, init_tracing,
};
use recetas::providers::{RecipeProvider, Translator, create_recipe_provider, create_translator};
use recetas::services::create_recipe_search_service;
use std::sync::Arc;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let config = ConfigLoader::load()?;
    ConfigLoader::validate(&config)?;

    let _log_guard = init_tracing(&config.logging);
    info!("Starting Recetas...");
    info!("Configuration loaded successfully");

    let credentials = config.edamam.credentials();
    if credentials.is_none() {
        warn!("APP_ID, APP_KEY or EDAMAM_ACCOUNT_USER is not set; every search will fail");
    }

    let translator: Arc<dyn Translator> = Arc::from(create_translator(&config.translation)?);
    info!("Translator initialized: {}", config.translation.base_url);

    let recipe_provider: Arc<dyn RecipeProvider> = Arc::from(create_recipe_provider(&config.edamam)?);
    info!("Recipe provider initialized: {}", config.edamam.base_url);

    let metrics = Arc::new(AppMetrics::default());
    let recipe_search_service =
        create_recipe_search_service(credentials, translator, recipe_provider, metrics.clone());
    info!("Recipe search service initialized");

    let app_state = AppState::new(recipe_search_service, metrics.clone()).with_request_timeout(
        std::time::Duration::from_secs(config.server.request_timeout),
    );

    let observability_state = Arc::new(ObservabilityState::new(
        env!("CARGO_PKG_VERSION").to_string(),
        metrics,
    ));
    let router =
        create_observability_router(observability_state).merge(api::create_router(app_state));
    info!("API router created with observability endpoints");

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    info!(
        "Try it: http://localhost:{}/api/recipes?ingredients=pollo,arroz",
        config.server.port
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
