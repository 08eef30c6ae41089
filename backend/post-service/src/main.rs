use std::net::SocketAddr;
use std::sync::Arc;

use tonic::transport::Server;
use tracing::info;
use tracing_subscriber::prelude::*;

use post_service::db::{MemoryStore, PostRepository};
use post_service::grpc::pulse::post_service::post_service_server::PostServiceServer;
use post_service::grpc::PostServiceImpl;
use post_service::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,post_service=debug".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(true)
                .with_target(true),
        )
        .init();

    let config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;

    let addr: SocketAddr = format!("{}:{}", config.app.host, config.app.port).parse()?;

    let store = Arc::new(MemoryStore::new());
    let repo = PostRepository::new(store);
    let service = PostServiceImpl::new(repo);

    let (mut health_reporter, health_service) = tonic_health::server::health_reporter();
    health_reporter
        .set_serving::<PostServiceServer<PostServiceImpl>>()
        .await;

    info!(env = %config.app.env, "Post service listening on {}", addr);

    Server::builder()
        .add_service(health_service)
        .add_service(PostServiceServer::new(service))
        .serve(addr)
        .await?;

    Ok(())
}
