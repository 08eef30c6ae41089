use std::time::Duration;

use actix_web::{web, App, HttpResponse, HttpServer};
use tracing::info;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::prelude::*;

use api_gateway::clients::ServiceClients;
use api_gateway::identity::IdentityClient;
use api_gateway::{rest_api, Config};

async fn health_handler() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "service": "api-gateway",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,api_gateway=debug".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(true)
                .with_target(true),
        )
        .init();

    info!("Starting API Gateway...");

    let config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;

    let clients = ServiceClients::new(&config.services.post_service);
    let identity = IdentityClient::new(
        &config.services.identity_service,
        Duration::from_millis(config.services.identity_timeout_ms),
    )?;

    info!(
        post_service = %config.services.post_service,
        identity_service = %config.services.identity_service,
        "Service clients initialized"
    );

    let bind_addr = format!("{}:{}", config.app.host, config.app.port);
    info!("API Gateway starting on http://{}", bind_addr);

    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(clients.clone()))
            .app_data(web::Data::new(identity.clone()))
            .configure(rest_api::configure)
            .route("/health", web::get().to(health_handler))
    })
    .bind(&bind_addr)?
    .run()
    .await?;

    Ok(())
}
