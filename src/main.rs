use std::io;

use actix_web::{App, HttpServer};
use ems::app;
use ems::config::{Config, LogFormat};
use ems::middleware::{ErrorHandler, RequestId};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn init_tracing(config: &Config) {
    let json = config.app.log_format == LogFormat::Json;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("ems={},actix_web=info", config.app.log_level).into()
            }),
        )
        .with(json.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!json).then(|| tracing_subscriber::fmt::layer()))
        .init();
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    // Load configuration
    let config = Config::from_env().map_err(io::Error::other)?;
    config.validate().map_err(io::Error::other)?;

    init_tracing(&config);

    tracing::info!("Starting Employee Management Service");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Record store: {}", config.store.name());
    tracing::info!("Server binding to: {}", config.server.bind_address());

    let repository = app::build_repository(&config.store)
        .await
        .map_err(io::Error::other)?;
    let service = app::service_data(repository);

    // Start HTTP server
    let bind_address = config.server.bind_address();
    let server = HttpServer::new(move || {
        App::new()
            .wrap(ErrorHandler)
            .wrap(RequestId)
            .wrap(TracingLogger::default())
            .app_data(service.clone())
            .configure(app::configure)
    })
    .workers(config.server.workers)
    .bind(&bind_address)?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await
}
