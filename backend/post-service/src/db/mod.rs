//! Record store boundary and repositories.
//!
//! The post collection lives in an external ordered-append store that offers
//! efficient appends and efficient owner-filtered iteration in insertion
//! order, but no arbitrary-offset seeks. `RecordStore` captures exactly that
//! contract; `MemoryStore` is the bundled implementation.

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::Result;
use crate::models::Post;

pub mod memory;
pub mod post_repo;

pub use memory::MemoryStore;
pub use post_repo::PostRepository;

/// Ordered-append post collection.
///
/// Iteration order is insertion order. Per-record operations are atomic;
/// nothing here locks across calls.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Append a record to the end of the collection.
    async fn append(&self, post: Post) -> Result<()>;

    /// Point lookup by id.
    async fn get(&self, id: Uuid) -> Result<Option<Post>>;

    /// Return up to `limit` records owned by `owner_id`, in insertion order.
    async fn scan_owner(&self, owner_id: &str, limit: usize) -> Result<Vec<Post>>;

    /// Count all records owned by `owner_id`.
    async fn count_owner(&self, owner_id: &str) -> Result<u64>;

    /// Replace the record with the same id, keeping its position.
    /// Returns false when no such record exists.
    async fn replace(&self, post: Post) -> Result<bool>;

    /// Remove a record by id. Returns false when no such record exists.
    async fn remove(&self, id: Uuid) -> Result<bool>;
}
