//! Post API endpoints
//!
//! POST   /api/v1/posts        - Create a post (auth required)
//! GET    /api/v1/posts/{id}   - Get a post
//! GET    /api/v1/posts        - List an owner's posts, paginated
//! PUT    /api/v1/posts/{id}   - Update a post (auth required)
//! DELETE /api/v1/posts/{id}   - Delete a post (auth required)
//!
//! Each handler runs the same pipeline: authenticate (where required),
//! dispatch a single gRPC call, translate the outcome. For create and delete
//! the owner id comes exclusively from the validated token, never from the
//! request, so a caller can only act on its own resources.

use actix_web::http::header::AUTHORIZATION;
use actix_web::{web, HttpRequest, HttpResponse};
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::clients::proto::post::{
    CreatePostRequest, DeletePostRequest, GetPostRequest, ListPostsRequest, UpdatePostRequest,
};
use crate::clients::ServiceClients;
use crate::error::GatewayError;
use crate::identity::{AuthenticatedUser, IdentityClient};
use crate::rest_api::models::{
    CreatePostBody, ListPostsQuery, ListPostsResponse, PostResponse, UpdatePostBody,
};

pub const MAX_PAGE_SIZE: u32 = 100;

/// Pull the bearer token out of the Authorization header.
fn bearer_token(req: &HttpRequest) -> Option<&str> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

/// Validate the request's bearer token against the identity service.
pub(crate) async fn authenticate(
    req: &HttpRequest,
    identity: &IdentityClient,
) -> Result<AuthenticatedUser, GatewayError> {
    let token = bearer_token(req)
        .ok_or_else(|| GatewayError::Unauthorized("Missing authorization header".to_string()))?;

    Ok(identity.validate(token).await?)
}

fn validate_body<T: Validate>(body: &T) -> Result<(), GatewayError> {
    body.validate()
        .map_err(|e| GatewayError::BadRequest(e.to_string()))
}

/// POST /api/v1/posts
pub async fn create_post(
    req: HttpRequest,
    body: web::Json<CreatePostBody>,
    clients: web::Data<ServiceClients>,
    identity: web::Data<IdentityClient>,
) -> Result<HttpResponse, GatewayError> {
    validate_body(&*body)?;
    let user = authenticate(&req, &identity).await?;

    info!(owner_id = %user.id, "POST /api/v1/posts");

    let request = tonic::Request::new(CreatePostRequest {
        owner_id: user.id,
        title: body.title.clone(),
        content: body.content.clone(),
    });

    let response = clients
        .post_client()
        .create_post(request)
        .await
        .map_err(GatewayError::from_rpc_status)?;

    Ok(HttpResponse::Created().json(PostResponse::from(response.into_inner())))
}

/// GET /api/v1/posts/{id}
pub async fn get_post(
    path: web::Path<Uuid>,
    clients: web::Data<ServiceClients>,
) -> Result<HttpResponse, GatewayError> {
    let post_id = path.into_inner();

    info!(post_id = %post_id, "GET /api/v1/posts/{{id}}");

    let request = tonic::Request::new(GetPostRequest {
        post_id: post_id.to_string(),
    });

    let response = clients
        .post_client()
        .get_post(request)
        .await
        .map_err(GatewayError::from_rpc_status)?;

    Ok(HttpResponse::Ok().json(PostResponse::from(response.into_inner())))
}

/// GET /api/v1/posts?owner_id=&page=&page_size=
pub async fn list_posts(
    query: web::Query<ListPostsQuery>,
    clients: web::Data<ServiceClients>,
) -> Result<HttpResponse, GatewayError> {
    let page = query.page.unwrap_or(1);
    let page_size = query.page_size.unwrap_or(10);

    if query.owner_id.trim().is_empty() {
        return Err(GatewayError::BadRequest("owner_id is required".to_string()));
    }
    if page < 1 {
        return Err(GatewayError::BadRequest("page must be >= 1".to_string()));
    }
    if page_size < 1 || page_size > MAX_PAGE_SIZE {
        return Err(GatewayError::BadRequest(format!(
            "page_size must be between 1 and {MAX_PAGE_SIZE}"
        )));
    }

    info!(owner_id = %query.owner_id, page, page_size, "GET /api/v1/posts");

    let request = tonic::Request::new(ListPostsRequest {
        owner_id: query.owner_id.clone(),
        page: page as i32,
        page_size: page_size as i32,
    });

    let response = clients
        .post_client()
        .list_posts(request)
        .await
        .map_err(GatewayError::from_rpc_status)?
        .into_inner();

    Ok(HttpResponse::Ok().json(ListPostsResponse {
        posts: response.posts.into_iter().map(PostResponse::from).collect(),
        total: response.total,
    }))
}

/// PUT /api/v1/posts/{id}
pub async fn update_post(
    req: HttpRequest,
    path: web::Path<Uuid>,
    body: web::Json<UpdatePostBody>,
    clients: web::Data<ServiceClients>,
    identity: web::Data<IdentityClient>,
) -> Result<HttpResponse, GatewayError> {
    validate_body(&*body)?;
    if body.title.is_none() && body.content.is_none() {
        return Err(GatewayError::BadRequest("No fields to update".to_string()));
    }

    let _user = authenticate(&req, &identity).await?;
    let post_id = path.into_inner();

    info!(post_id = %post_id, "PUT /api/v1/posts/{{id}}");

    let request = tonic::Request::new(UpdatePostRequest {
        post_id: post_id.to_string(),
        title: body.title.clone(),
        content: body.content.clone(),
    });

    let response = clients
        .post_client()
        .update_post(request)
        .await
        .map_err(GatewayError::from_rpc_status)?;

    Ok(HttpResponse::Ok().json(PostResponse::from(response.into_inner())))
}

/// DELETE /api/v1/posts/{id}
pub async fn delete_post(
    req: HttpRequest,
    path: web::Path<Uuid>,
    clients: web::Data<ServiceClients>,
    identity: web::Data<IdentityClient>,
) -> Result<HttpResponse, GatewayError> {
    let user = authenticate(&req, &identity).await?;
    let post_id = path.into_inner();

    info!(post_id = %post_id, owner_id = %user.id, "DELETE /api/v1/posts/{{id}}");

    let request = tonic::Request::new(DeletePostRequest {
        post_id: post_id.to_string(),
        owner_id: user.id,
    });

    let response = clients
        .post_client()
        .delete_post(request)
        .await
        .map_err(GatewayError::from_rpc_status)?;

    // NOT_FOUND arrives as a status error; an unsuccessful OK reply should
    // not happen, but answer 404 rather than lie with 204.
    if !response.into_inner().success {
        return Err(GatewayError::NotFound(
            "Post not found or not authorized".to_string(),
        ));
    }

    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn bearer_token_requires_the_scheme_prefix() {
        let req = TestRequest::default()
            .insert_header((AUTHORIZATION, "Bearer abc123"))
            .to_http_request();
        assert_eq!(bearer_token(&req), Some("abc123"));

        let req = TestRequest::default()
            .insert_header((AUTHORIZATION, "Basic abc123"))
            .to_http_request();
        assert_eq!(bearer_token(&req), None);

        let req = TestRequest::default().to_http_request();
        assert_eq!(bearer_token(&req), None);
    }
}
