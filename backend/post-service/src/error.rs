use thiserror::Error;

/// Result type for post-service storage operations
pub type Result<T> = std::result::Result<T, StoreError>;

/// Faults raised by the record store backend.
///
/// "Not found" and "wrong owner" are data, not errors: repository operations
/// surface them as `Option` / `bool` so the gRPC layer can pick status codes
/// without string matching.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("record store error: {0}")]
    Backend(String),
}
