use autopost_backend::controllers::autopost::AutopostController;
use autopost_backend::domain::autopost::{AutopostService, TracingSelectionTracer};
use autopost_backend::infrastructure::config::{Config, LogFormat};
use autopost_backend::infrastructure::db::{check_connection, create_pool};
use autopost_backend::infrastructure::http::start_http_server;
use autopost_backend::infrastructure::repositories::{PgContentRepository, PgWeightRepository};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        "Starting Autopost Backend on {}:{}",
        config.host,
        config.port
    );

    // Create database connection pool
    let pool = create_pool(&config.database_url).await?;
    tracing::info!("Database connection pool created");

    // Apply pending migrations
    sqlx::migrate!().run(&pool).await?;
    tracing::info!("Database migrations applied");

    // Verify database connection
    check_connection(&pool).await?;
    tracing::info!("Database connection verified");

    let pool = Arc::new(pool);
    let config = Arc::new(config);

    // === DEPENDENCY INJECTION SETUP ===
    // 1. Instantiate repositories (inject db pool)
    tracing::info!("Instantiating repositories...");
    let weight_repo = Arc::new(PgWeightRepository::new(pool.clone()));
    let content_repo = Arc::new(PgContentRepository::new(pool.clone()));

    // 2. Instantiate services (inject repositories and tracer)
    tracing::info!("Instantiating services...");
    let autopost_service = Arc::new(AutopostService::new(
        weight_repo,
        content_repo,
        Arc::new(TracingSelectionTracer),
    ));

    // 3. Instantiate controllers (inject services)
    tracing::info!("Instantiating controllers...");
    let autopost_controller = Arc::new(AutopostController::new(autopost_service));

    // Start HTTP server with all routes
    start_http_server(pool, config, autopost_controller).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "autopost_backend=debug,autopost=info,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "autopost_backend=debug,autopost=info,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
