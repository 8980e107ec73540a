use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{web, App, HttpResponse, HttpServer};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use repohub::config::Config;
use repohub::registry::controllers;
use repohub::registry::{RegistryService, RepositoryRegistry};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "repohub=debug,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().expect("Failed to load configuration");

    tracing::info!("Starting Repohub Repository Registry Service");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Server binding to: {}", config.server.bind_address());

    // One registry shared across all workers; data lives only in memory
    // and is discarded on shutdown.
    let registry = Arc::new(RepositoryRegistry::new());
    let service = Arc::new(RegistryService::new(registry));

    // Start HTTP server
    let bind_address = config.server.bind_address();
    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(Cors::permissive())
            .app_data(web::Data::new(service.clone()))
            .route("/health", web::get().to(health_check))
            .configure(controllers::configure)
    })
    .bind(&bind_address)?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await
}

async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "repohub"
    }))
}
