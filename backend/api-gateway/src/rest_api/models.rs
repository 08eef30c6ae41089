//! REST API request/response models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::clients::proto;

// ============================================================================
// Post Models
// ============================================================================

#[derive(Debug, Deserialize, Validate)]
pub struct CreatePostBody {
    #[validate(length(min = 1, max = 100, message = "title must be 1..=100 characters"))]
    pub title: String,
    #[validate(length(min = 1, message = "content must not be empty"))]
    pub content: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdatePostBody {
    #[validate(length(min = 1, max = 100, message = "title must be 1..=100 characters"))]
    pub title: Option<String>,
    #[validate(length(min = 1, message = "content must not be empty"))]
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ListPostsQuery {
    pub owner_id: String,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct PostResponse {
    pub id: String,
    pub owner_id: String,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<proto::post::Post> for PostResponse {
    fn from(post: proto::post::Post) -> Self {
        Self {
            id: post.id,
            owner_id: post.owner_id,
            title: post.title,
            content: post.content,
            created_at: DateTime::from_timestamp(post.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::from_timestamp(post.updated_at, 0).unwrap_or_default(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ListPostsResponse {
    pub posts: Vec<PostResponse>,
    pub total: i64,
}

// ============================================================================
// Identity Models
// ============================================================================

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct RegisterBody {
    #[validate(length(min = 1))]
    pub login: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 8, message = "password must be at least 8 characters"))]
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}
