use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::db::RecordStore;
use crate::error::Result;
use crate::models::Post;

/// In-memory `RecordStore` backed by an insertion-ordered vector.
///
/// Point lookups scan linearly, which is fine at this scale; the repository
/// only relies on the ordered-scan and count contract.
#[derive(Default)]
pub struct MemoryStore {
    rows: RwLock<Vec<Post>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn append(&self, post: Post) -> Result<()> {
        self.rows.write().await.push(post);
        Ok(())
    }

    async fn get(&self, id: Uuid) -> Result<Option<Post>> {
        let rows = self.rows.read().await;
        Ok(rows.iter().find(|p| p.id == id).cloned())
    }

    async fn scan_owner(&self, owner_id: &str, limit: usize) -> Result<Vec<Post>> {
        let rows = self.rows.read().await;
        Ok(rows
            .iter()
            .filter(|p| p.owner_id == owner_id)
            .take(limit)
            .cloned()
            .collect())
    }

    async fn count_owner(&self, owner_id: &str) -> Result<u64> {
        let rows = self.rows.read().await;
        Ok(rows.iter().filter(|p| p.owner_id == owner_id).count() as u64)
    }

    async fn replace(&self, post: Post) -> Result<bool> {
        let mut rows = self.rows.write().await;
        match rows.iter_mut().find(|p| p.id == post.id) {
            Some(slot) => {
                *slot = post;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn remove(&self, id: Uuid) -> Result<bool> {
        let mut rows = self.rows.write().await;
        let before = rows.len();
        rows.retain(|p| p.id != id);
        Ok(rows.len() != before)
    }
}
