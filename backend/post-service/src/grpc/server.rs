// gRPC service implementation for the post service
use tonic::{Request, Response, Status};
use uuid::Uuid;

use crate::db::PostRepository;
use crate::error::StoreError;

// Import generated proto code
pub mod pulse {
    pub mod post_service {
        pub mod v1 {
            tonic::include_proto!("pulse.post_service.v1");
        }
        pub use v1::*;
    }
}

use pulse::post_service::post_service_server::PostService;
use pulse::post_service::*;

/// PostService gRPC implementation
///
/// Validates request fields, emits one log entry per call, and translates
/// repository outcomes into gRPC status codes. Page size is capped at 100.
pub struct PostServiceImpl {
    repo: PostRepository,
}

pub const MAX_PAGE_SIZE: i32 = 100;

impl PostServiceImpl {
    pub fn new(repo: PostRepository) -> Self {
        Self { repo }
    }
}

fn post_to_proto(post: &crate::models::Post) -> Post {
    Post {
        id: post.id.to_string(),
        owner_id: post.owner_id.clone(),
        title: post.title.clone(),
        content: post.content.clone(),
        created_at: post.created_at.timestamp(),
        updated_at: post.updated_at.timestamp(),
    }
}

fn parse_post_id(raw: &str) -> Result<Uuid, Status> {
    Uuid::parse_str(raw).map_err(|_| Status::invalid_argument("Invalid post ID format"))
}

fn require_field(value: &str, name: &str) -> Result<(), Status> {
    if value.trim().is_empty() {
        return Err(Status::invalid_argument(format!("{name} must not be empty")));
    }
    Ok(())
}

fn internal(context: &str, err: StoreError) -> Status {
    tracing::error!(error = %err, "{context}");
    Status::internal(context.to_string())
}

#[tonic::async_trait]
impl PostService for PostServiceImpl {
    /// Create a new post
    async fn create_post(
        &self,
        request: Request<CreatePostRequest>,
    ) -> Result<Response<Post>, Status> {
        let req = request.into_inner();

        tracing::info!(owner_id = %req.owner_id, "gRPC: Creating post");

        require_field(&req.owner_id, "owner_id")?;
        require_field(&req.title, "title")?;
        require_field(&req.content, "content")?;

        let post = self
            .repo
            .create(&req.owner_id, &req.title, &req.content)
            .await
            .map_err(|e| internal("Failed to create post", e))?;

        Ok(Response::new(post_to_proto(&post)))
    }

    /// Get a post by ID
    async fn get_post(&self, request: Request<GetPostRequest>) -> Result<Response<Post>, Status> {
        let req = request.into_inner();

        tracing::info!(post_id = %req.post_id, "gRPC: Getting post");

        let post_id = parse_post_id(&req.post_id)?;

        match self
            .repo
            .get(post_id)
            .await
            .map_err(|e| internal("Failed to fetch post", e))?
        {
            Some(post) => Ok(Response::new(post_to_proto(&post))),
            None => Err(Status::not_found(format!(
                "Post with ID {} not found",
                req.post_id
            ))),
        }
    }

    /// List an owner's posts, one page at a time
    async fn list_posts(
        &self,
        request: Request<ListPostsRequest>,
    ) -> Result<Response<ListPostsResponse>, Status> {
        let req = request.into_inner();

        tracing::info!(
            owner_id = %req.owner_id,
            page = req.page,
            page_size = req.page_size,
            "gRPC: Listing posts"
        );

        require_field(&req.owner_id, "owner_id")?;
        if req.page < 1 {
            return Err(Status::invalid_argument("page must be >= 1"));
        }
        if req.page_size < 1 || req.page_size > MAX_PAGE_SIZE {
            return Err(Status::invalid_argument(format!(
                "page_size must be between 1 and {MAX_PAGE_SIZE}"
            )));
        }

        let (posts, total) = self
            .repo
            .list(&req.owner_id, req.page as u32, req.page_size as u32)
            .await
            .map_err(|e| internal("Failed to list posts", e))?;

        Ok(Response::new(ListPostsResponse {
            posts: posts.iter().map(post_to_proto).collect(),
            total: total as i64,
        }))
    }

    /// Update a post's title and/or content
    async fn update_post(
        &self,
        request: Request<UpdatePostRequest>,
    ) -> Result<Response<Post>, Status> {
        let req = request.into_inner();

        tracing::info!(post_id = %req.post_id, "gRPC: Updating post");

        let post_id = parse_post_id(&req.post_id)?;

        if req.title.is_none() && req.content.is_none() {
            return Err(Status::invalid_argument("No fields to update"));
        }
        if let Some(title) = &req.title {
            require_field(title, "title")?;
        }
        if let Some(content) = &req.content {
            require_field(content, "content")?;
        }

        match self
            .repo
            .update(post_id, req.title.as_deref(), req.content.as_deref())
            .await
            .map_err(|e| internal("Failed to update post", e))?
        {
            Some(post) => Ok(Response::new(post_to_proto(&post))),
            None => Err(Status::not_found(format!(
                "Post with ID {} not found",
                req.post_id
            ))),
        }
    }

    /// Delete a post owned by the caller
    async fn delete_post(
        &self,
        request: Request<DeletePostRequest>,
    ) -> Result<Response<DeletePostResponse>, Status> {
        let req = request.into_inner();

        tracing::info!(post_id = %req.post_id, owner_id = %req.owner_id, "gRPC: Deleting post");

        let post_id = parse_post_id(&req.post_id)?;
        require_field(&req.owner_id, "owner_id")?;

        let deleted = self
            .repo
            .delete(post_id, &req.owner_id)
            .await
            .map_err(|e| internal("Failed to delete post", e))?;

        if !deleted {
            // Missing post and foreign post answer alike.
            return Err(Status::not_found(format!(
                "Post with ID {} not found or not authorized",
                req.post_id
            )));
        }

        Ok(Response::new(DeletePostResponse { success: true }))
    }
}
