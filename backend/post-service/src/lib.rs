/// Post Service Library
///
/// Stores and retrieves short text posts for the Pulse platform, exposed to
/// the API gateway over gRPC.
///
/// # Modules
///
/// - `db`: record store boundary and the post repository
/// - `grpc`: gRPC server implementation
/// - `models`: post data structures
/// - `error`: error types
/// - `config`: configuration management
pub mod config;
pub mod db;
pub mod error;
pub mod grpc;
pub mod models;

pub use config::Config;
pub use error::{Result, StoreError};
