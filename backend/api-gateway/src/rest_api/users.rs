//! Identity API endpoints
//!
//! POST /api/v1/register - Forward a registration to the identity service
//! POST /api/v1/token    - Forward a password-grant login
//! GET  /api/v1/me       - Return the validated caller's profile
//!
//! The gateway owns none of the credential logic; these handlers relay the
//! identity service's replies with their status codes intact.

use actix_web::{web, HttpRequest, HttpResponse};
use tracing::info;
use validator::Validate;

use crate::error::GatewayError;
use crate::identity::IdentityClient;
use crate::rest_api::models::{LoginForm, RegisterBody};
use crate::rest_api::posts::authenticate;

/// POST /api/v1/register
pub async fn register(
    body: web::Json<RegisterBody>,
    identity: web::Data<IdentityClient>,
) -> Result<HttpResponse, GatewayError> {
    body.validate()
        .map_err(|e| GatewayError::BadRequest(e.to_string()))?;

    info!(login = %body.login, "POST /api/v1/register");

    let payload = serde_json::to_value(&*body)
        .map_err(|e| GatewayError::Internal(e.to_string()))?;
    let (status, mut reply) = identity.register(&payload).await?;

    // Upstream replies with a lowercase token_type; clients expect "Bearer".
    if let Some(object) = reply.as_object_mut() {
        object.insert("token_type".to_string(), "Bearer".into());
    }

    Ok(HttpResponse::build(
        actix_web::http::StatusCode::from_u16(status)
            .unwrap_or(actix_web::http::StatusCode::INTERNAL_SERVER_ERROR),
    )
    .json(reply))
}

/// POST /api/v1/token
pub async fn login(
    form: web::Form<LoginForm>,
    identity: web::Data<IdentityClient>,
) -> Result<HttpResponse, GatewayError> {
    info!(username = %form.username, "POST /api/v1/token");

    let (status, reply) = identity.login(&form.username, &form.password).await?;

    if status != 200 {
        let detail = reply
            .get("detail")
            .and_then(|d| d.as_str())
            .unwrap_or("Authentication failed");
        return Ok(HttpResponse::build(
            actix_web::http::StatusCode::from_u16(status)
                .unwrap_or(actix_web::http::StatusCode::INTERNAL_SERVER_ERROR),
        )
        .json(serde_json::json!({ "detail": detail, "status": status })));
    }

    Ok(HttpResponse::Ok().json(reply))
}

/// GET /api/v1/me
pub async fn me(
    req: HttpRequest,
    identity: web::Data<IdentityClient>,
) -> Result<HttpResponse, GatewayError> {
    let user = authenticate(&req, &identity).await?;

    info!(user_id = %user.id, "GET /api/v1/me");

    let mut profile = serde_json::Map::new();
    profile.insert("id".to_string(), user.id.into());
    profile.extend(user.profile);

    Ok(HttpResponse::Ok().json(profile))
}
