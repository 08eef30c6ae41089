/// API Gateway Library
///
/// HTTP-facing edge of the Pulse platform. Routes REST requests to backend
/// services, delegating token validation to the identity service and post
/// storage to the post service over gRPC. No business logic lives here.
///
/// # Modules
///
/// - `rest_api`: HTTP request handlers and DTOs
/// - `clients`: gRPC channels to backend services
/// - `identity`: identity service client (token validation, passthroughs)
/// - `error`: error taxonomy and the RPC/auth -> HTTP status mapping
/// - `config`: configuration management
pub mod clients;
pub mod config;
pub mod error;
pub mod identity;
pub mod rest_api;

pub use config::Config;
pub use error::GatewayError;
