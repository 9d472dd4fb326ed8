use actix_web::{web, App, HttpResponse, HttpServer};
use anyhow::Context;
use drillbook::config::{Config, LogFormat};
use drillbook::middleware::{cors_policy, RequestId};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    config.validate().context("Configuration validation failed")?;

    init_tracing(&config);

    tracing::info!("Starting Drillbook coaching record store");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Server binding to: {}", config.server.bind_address());

    // Create database connection pool; the store file is created if missing
    let db_pool = config
        .database
        .create_pool()
        .await
        .context("Failed to create database pool")?;

    tracing::info!(
        "Database pool initialized ({} max connections)",
        config.database.max_connections
    );

    // Start HTTP server
    let bind_address = config.server.bind_address();
    let server = HttpServer::new(move || {
        App::new()
            .wrap(cors_policy())
            .wrap(RequestId)
            .wrap(TracingLogger::default())
            .configure(drillbook::modules::configure(db_pool.clone()))
            .route("/", web::get().to(index))
    })
    .workers(config.server.workers)
    .bind(&bind_address)
    .with_context(|| format!("Failed to bind {}", bind_address))?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await?;
    Ok(())
}

fn init_tracing(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("drillbook={},actix_web=info", config.app.log_level).into()
    });

    let registry = tracing_subscriber::registry().with(filter);
    match config.app.log_format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}

async fn index() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "service": "Drillbook coaching record store",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "running"
    }))
}
