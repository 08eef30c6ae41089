use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::db::RecordStore;
use crate::error::Result;
use crate::models::Post;

/// Post repository over an ordered-append record store.
///
/// Input validation (non-empty title/content, page bounds) is a precondition
/// enforced by the gRPC layer; the repository does not re-validate.
#[derive(Clone)]
pub struct PostRepository {
    store: Arc<dyn RecordStore>,
}

impl PostRepository {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Create a new post with a fresh id and equal created/updated timestamps.
    pub async fn create(&self, owner_id: &str, title: &str, content: &str) -> Result<Post> {
        let now = Utc::now();
        let post = Post {
            id: Uuid::new_v4(),
            owner_id: owner_id.to_string(),
            title: title.to_string(),
            content: content.to_string(),
            created_at: now,
            updated_at: now,
        };

        self.store.append(post.clone()).await?;
        Ok(post)
    }

    /// Point lookup by id.
    pub async fn get(&self, post_id: Uuid) -> Result<Option<Post>> {
        self.store.get(post_id).await
    }

    /// Return page `page` (1-based) of `owner_id`'s posts in creation order,
    /// plus the owner's total post count.
    ///
    /// The store has no offset seeks, so this fetches the first
    /// `page * page_size` matching records in one bounded scan and slices off
    /// the earlier pages. Cost grows with page depth; accepted limitation.
    /// The count runs as its own scan, so `total` and the returned page may
    /// reflect the store at slightly different instants under concurrent
    /// writes.
    pub async fn list(&self, owner_id: &str, page: u32, page_size: u32) -> Result<(Vec<Post>, u64)> {
        debug_assert!(page >= 1, "page is 1-based");
        debug_assert!(page_size >= 1);

        let total = self.store.count_owner(owner_id).await?;

        let limit = page as usize * page_size as usize;
        let fetched = self.store.scan_owner(owner_id, limit).await?;

        // Drop the earlier pages; a short fetch yields an empty page while
        // `total` stays accurate.
        let start = (page as usize - 1) * page_size as usize;
        let posts: Vec<Post> = fetched.into_iter().skip(start).collect();

        Ok((posts, total))
    }

    /// Apply the provided fields and refresh `updated_at`. Owner and
    /// `created_at` are never touched. Returns `None` when the post does not
    /// exist.
    pub async fn update(
        &self,
        post_id: Uuid,
        title: Option<&str>,
        content: Option<&str>,
    ) -> Result<Option<Post>> {
        let Some(mut post) = self.store.get(post_id).await? else {
            return Ok(None);
        };

        if let Some(title) = title {
            post.title = title.to_string();
        }
        if let Some(content) = content {
            post.content = content.to_string();
        }
        post.updated_at = Utc::now();

        // The record can vanish between the lookup and the write; per-record
        // atomicity of the store decides, and we report not-found.
        if self.store.replace(post.clone()).await? {
            Ok(Some(post))
        } else {
            Ok(None)
        }
    }

    /// Delete `post_id` if it exists and belongs to `owner_id`.
    ///
    /// Returns false both for a missing post and for a post owned by someone
    /// else; callers cannot tell the two apart, so a delete response never
    /// leaks whether another owner's id exists.
    pub async fn delete(&self, post_id: Uuid, owner_id: &str) -> Result<bool> {
        match self.store.get(post_id).await? {
            Some(post) if post.owner_id == owner_id => self.store.remove(post_id).await,
            _ => Ok(false),
        }
    }
}
