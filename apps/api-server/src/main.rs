//! # Blog API Server
//!
//! The main entry point for the Actix-web HTTP server.

use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

mod config;
mod docs;
mod handlers;
mod middleware;
mod state;
mod telemetry;

use config::AppConfig;
use middleware::authorization::Authorization;
use middleware::cors::cors_policy;
use middleware::error::json_config;
use state::AppState;
use telemetry::TelemetryConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    telemetry::init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env();

    tracing::info!(
        environment = ?config.environment,
        "Starting Blog API Server on {}:{}",
        config.host,
        config.port
    );

    // One repository (and database client) for the whole process
    let state = AppState::new(&config).await.map_err(|e| {
        tracing::error!("Failed to initialize application state: {}", e);
        std::io::Error::other(e.to_string())
    })?;

    let docs_enabled = config.environment.is_development();
    if docs_enabled {
        tracing::info!("API documentation enabled at /swagger-ui/");
    }

    let cors = config.cors.clone();
    tracing::info!(origins = ?cors.allowed_origins, "CORS policy configured");

    HttpServer::new(move || {
        App::new()
            .wrap(Authorization)
            .wrap(cors_policy(&cors))
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(state.clone()))
            .app_data(json_config())
            .configure(handlers::configure_routes)
            .configure(|cfg| docs::configure_docs(cfg, docs_enabled))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
