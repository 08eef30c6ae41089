//! gRPC service clients
//!
//! One lazily-connected channel per backend service. HTTP/2 multiplexing
//! handles request concurrency, so handing each request its own lightweight
//! client over the shared channel satisfies the open-use-close contract
//! without reconnecting per call. Connect and request timeouts bound every
//! outbound RPC; a timed-out call surfaces as an error immediately, never a
//! hang.

use std::sync::Arc;
use std::time::Duration;

use tonic::transport::{Channel, Endpoint};

// Proto module definitions from build.rs
pub mod proto {
    pub mod post {
        tonic::include_proto!("pulse.post_service.v1");
    }
}

use proto::post::post_service_client::PostServiceClient;

/// Service client manager with a pooled gRPC connection per backend.
///
/// Each `Channel` is lazy-initialized on first use and reused across all
/// requests; cloning a client is just an `Arc` bump.
///
/// # Panics:
/// Panics if the endpoint URL is malformed. Endpoints are validated at
/// startup from configuration, so this is acceptable.
#[derive(Clone)]
pub struct ServiceClients {
    post_channel: Arc<Channel>,
}

impl ServiceClients {
    /// Create a new ServiceClients instance for the given post service URL
    /// (e.g. "http://post-service:50051").
    pub fn new(post_endpoint: &str) -> Self {
        Self {
            post_channel: Arc::new(Self::create_channel(post_endpoint)),
        }
    }

    /// Create a configured gRPC channel.
    ///
    /// - `connect_lazy()`: connects on first RPC, so services can start in
    ///   any order.
    /// - `connect_timeout(5s)` / `timeout(10s)`: bound every outbound call.
    /// - keep-alive settings prevent idle connections being dropped by
    ///   proxies and load balancers.
    fn create_channel(endpoint: &str) -> Channel {
        Endpoint::from_shared(endpoint.to_string())
            .expect("Invalid endpoint URL")
            .connect_timeout(Duration::from_secs(5))
            .timeout(Duration::from_secs(10))
            .http2_keep_alive_interval(Duration::from_secs(60))
            .keep_alive_timeout(Duration::from_secs(20))
            .keep_alive_while_idle(true)
            .connect_lazy()
    }

    /// Get a post service client over the shared channel.
    pub fn post_client(&self) -> PostServiceClient<Channel> {
        PostServiceClient::new((*self.post_channel).clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_service_clients_creation() {
        let clients = ServiceClients::new("http://localhost:50051");
        let _post = clients.post_client();
    }

    #[tokio::test]
    async fn test_service_clients_clone_shares_channel() {
        let clients = ServiceClients::new("http://localhost:50051");
        let clients_clone = clients.clone();

        assert_eq!(Arc::strong_count(&clients.post_channel), 2);
        drop(clients_clone);
        assert_eq!(Arc::strong_count(&clients.post_channel), 1);
    }

    #[tokio::test]
    #[should_panic(expected = "Invalid endpoint URL")]
    async fn test_invalid_endpoint_panics() {
        let _ = ServiceClients::new("not-a-url");
    }
}
