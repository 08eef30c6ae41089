//! gRPC surface for inter-service communication.
//!
//! The generated proto types and the `PostService` server implementation
//! live in `server`.

pub mod server;

pub use server::*;
