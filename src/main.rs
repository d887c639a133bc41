use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use fittrack_backend::infrastructure::config::{Config, LogFormat};
use fittrack_backend::infrastructure::db::{check_connection, create_pool};
use fittrack_backend::infrastructure::http::start_http_server;
use fittrack_backend::infrastructure::repositories::GatewayNutritionRepository;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        environment = ?config.environment,
        "Starting FitTrack Backend on {}:{}",
        config.host,
        config.port
    );

    // Create database connection pool
    let pool = create_pool(&config.database_url, config.store_timeout()).await?;
    tracing::info!("Database connection pool created");

    // Verify database connection
    check_connection(&pool).await?;
    tracing::info!("Database connection verified");

    if config.nutrition_api_key.is_none() {
        tracing::warn!("NUTRITION_API_KEY not set. Nutrition estimates will fail until it is configured");
    }

    let estimator = Arc::new(GatewayNutritionRepository::new(
        config.nutrition_api_url.clone(),
        config.nutrition_api_key.clone(),
        config.nutrition_model.clone(),
        config.nutrition_timeout(),
    )?);
    tracing::info!(
        model = %config.nutrition_model,
        cache_enabled = config.nutrition_cache_enabled,
        "Nutrition estimator initialized"
    );

    let pool = Arc::new(pool);
    let config = Arc::new(config);

    // Start HTTP server with all routes
    start_http_server(pool, config, estimator).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "fittrack_backend=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "fittrack_backend=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
