/// REST API Module
///
/// HTTP endpoints exposed to clients. These handlers translate HTTP requests
/// into gRPC calls to the post service (and HTTP calls to the identity
/// service) and map the outcomes back onto HTTP status semantics.
///
/// Architecture:
/// ```text
/// Client (HTTP REST)
///     ↓
/// REST handler (this module)
///     ↓
/// gRPC client → post-service        HTTP client → identity-service
/// ```
use actix_web::web;

use crate::error::GatewayError;

pub mod models;
pub mod posts;
pub mod users;

/// Register all gateway routes. Shared between `main` and the integration
/// tests so both run the exact same routing table.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _| {
        GatewayError::BadRequest(err.to_string()).into()
    }))
    .service(
        web::scope("/api/v1")
            .route("/register", web::post().to(users::register))
            .route("/token", web::post().to(users::login))
            .route("/me", web::get().to(users::me))
            .route("/posts", web::post().to(posts::create_post))
            .route("/posts", web::get().to(posts::list_posts))
            .route("/posts/{id}", web::get().to(posts::get_post))
            .route("/posts/{id}", web::put().to(posts::update_post))
            .route("/posts/{id}", web::delete().to(posts::delete_post)),
    );
}
