use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored post.
///
/// `id`, `owner_id` and `created_at` are fixed at creation; `update` touches
/// only `title`, `content` and `updated_at`. The owner id is an opaque string
/// issued by the identity service and is never validated here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub owner_id: String,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
