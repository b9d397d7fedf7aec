//! # WeatherHub Server
//!
//! Main entry point for the WeatherHub application. Wires the configuration,
//! database pool, Redis cache, provider client, and service layer together
//! and serves the REST API.

use std::sync::Arc;
use tokio::signal;
use tracing::{error, info, warn};
use weatherhub_config::ConfigLoader;
use weatherhub_core::{HubError, HubResult};
use weatherhub_provider::{OpenWeatherMapClient, WeatherProvider};
use weatherhub_repository::{
    create_pool, CacheStore, CachedWeatherRepository, HealthProbe, PgWeatherRepository,
    RedisCacheStore, WeatherRepository,
};
use weatherhub_rest::{create_router, AppState};
use weatherhub_service::{WeatherService, WeatherServiceImpl};

mod startup;

#[tokio::main]
async fn main() {
    init_logging();

    info!("Starting WeatherHub Server...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run().await {
        error!("Application error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> HubResult<()> {
    // Load configuration
    let config_loader = ConfigLoader::from_default_location()?;
    let config = config_loader.get().await;

    info!("Environment: {}", config.app.environment);

    startup::print_banner();

    // Create database pool and run migrations
    let db_pool = create_pool(&config.database).await?;
    db_pool.run_migrations().await?;

    // Create cache store. A failing Redis setup degrades to a disabled
    // cache rather than aborting startup.
    let cache: Arc<dyn CacheStore> = match RedisCacheStore::from_config(&config.redis) {
        Ok(cache) => Arc::new(cache),
        Err(e) => {
            warn!("Redis unavailable, running without cache: {}", e);
            Arc::new(RedisCacheStore::disabled())
        }
    };

    // Assemble the repository stack: Postgres behind the caching decorator
    let pg_repository = Arc::new(PgWeatherRepository::new(Arc::clone(&db_pool)));
    let repository: Arc<dyn WeatherRepository> = Arc::new(CachedWeatherRepository::new(
        pg_repository as Arc<dyn WeatherRepository>,
        Arc::clone(&cache),
        config.cache.ttl(),
    ));

    // Provider client
    let provider: Arc<dyn WeatherProvider> =
        Arc::new(OpenWeatherMapClient::new(&config.provider)?);

    // Service layer
    let weather_service: Arc<dyn WeatherService> =
        Arc::new(WeatherServiceImpl::new(repository, provider));

    // REST router
    let app_state = AppState::new(
        weather_service,
        Arc::clone(&db_pool) as Arc<dyn HealthProbe>,
        cache,
    );
    let router = create_router(app_state, &config.server);

    let addr = config.server.addr();
    startup::print_startup_info(config.server.port);
    info!("Starting REST server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| HubError::Internal(format!("Failed to bind REST: {}", e)))?;

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| HubError::Internal(format!("REST server error: {}", e)))?;

    db_pool.close().await;

    info!("Server shutdown complete");
    Ok(())
}

fn init_logging() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,weatherhub=debug,tower_http=debug"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        _ = terminate => {
            info!("Received terminate signal, initiating graceful shutdown...");
        }
    }
}
