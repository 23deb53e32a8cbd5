//! gRPC client for the text-embedding service.
//!
//! Wraps the auto-generated client with connection management, the
//! empty-text shortcut and dimension checking.

use crate::proto::text_embedder_client::TextEmbedderClient;
use crate::proto::EmbedRequest;
use crate::EmbedError;
use async_trait::async_trait;
use tonic::transport::Channel;
use tracing::{debug, error, info};

/// Capability interface for the external embedding provider.
///
/// Contract:
/// - every returned vector has exactly `dimension()` entries
/// - empty or whitespace-only text yields the zero vector without a
///   provider round trip
/// - transient provider failures surface as `EmbedError`; callers do not
///   retry
#[async_trait]
pub trait Embedder: Send + Sync {
    /// Fixed vector dimension for this deployment.
    fn dimension(&self) -> usize;

    /// Map text to its embedding vector.
    async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbedError>;
}

/// Client for the gRPC embedding service.
#[derive(Clone)]
pub struct EmbeddingClient {
    client: TextEmbedderClient<Channel>,
    service_addr: String,
    dimension: usize,
}

impl EmbeddingClient {
    /// Connect to the embedding service.
    ///
    /// # Arguments
    /// * `addr` - Address of the gRPC service (e.g., "http://localhost:50061")
    /// * `dimension` - Expected vector dimension (e.g., 1536); responses of
    ///   any other length are rejected
    pub async fn connect(addr: impl Into<String>, dimension: usize) -> Result<Self, EmbedError> {
        let addr = addr.into();
        info!("Connecting to embedding service at {}", addr);

        let channel = Channel::from_shared(addr.clone())
            .map_err(|e| EmbedError::ConnectionError(e.to_string()))?
            .connect()
            .await
            .map_err(|e| EmbedError::ConnectionError(e.to_string()))?;

        Ok(EmbeddingClient {
            client: TextEmbedderClient::new(channel),
            service_addr: addr,
            dimension,
        })
    }

    /// Get the address of the embedding service this client talks to.
    pub fn service_address(&self) -> &str {
        &self.service_addr
    }
}

#[async_trait]
impl Embedder for EmbeddingClient {
    fn dimension(&self) -> usize {
        self.dimension
    }

    async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbedError> {
        if text.trim().is_empty() {
            return Ok(vec![0.0; self.dimension]);
        }

        debug!("Embedding {} chars of query text", text.chars().count());
        let request = tonic::Request::new(EmbedRequest {
            text: text.to_string(),
        });

        let mut client = self.client.clone();
        let response = client.embed(request).await.map_err(|e| {
            error!("gRPC error while embedding text: {}", e);
            EmbedError::RpcError(e.to_string())
        })?;

        let vector = response.into_inner().vector;
        if vector.len() != self.dimension {
            error!(
                "Embedding dimension mismatch: expected {}, got {}",
                self.dimension,
                vector.len()
            );
            return Err(EmbedError::InvalidResponse {
                expected: self.dimension,
                found: vector.len(),
            });
        }
        Ok(vector)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proto::text_embedder_server::{TextEmbedder, TextEmbedderServer};
    use crate::proto::EmbedResponse;
    use tokio::net::TcpListener;
    use tokio_stream::wrappers::TcpListenerStream;
    use tonic::transport::Server;
    use tonic::{Request, Response, Status};

    /// Mock embedder that returns a vector derived from the text length
    #[derive(Default)]
    struct MockTextEmbedder {
        dimension: usize,
    }

    #[tonic::async_trait]
    impl TextEmbedder for MockTextEmbedder {
        async fn embed(
            &self,
            request: Request<EmbedRequest>,
        ) -> Result<Response<EmbedResponse>, Status> {
            let text = request.into_inner().text;
            let seed = text.chars().count() as f32;
            let vector: Vec<f32> = (0..self.dimension)
                .map(|i| (seed + i as f32).sin())
                .collect();
            Ok(Response::new(EmbedResponse { vector }))
        }
    }

    /// Start a mock embedding service on a random port
    async fn start_mock_service(dimension: usize) -> (String, tokio::task::JoinHandle<()>) {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock embedding service");

        let addr = listener.local_addr().expect("Failed to get local address");
        let service = TextEmbedderServer::new(MockTextEmbedder { dimension });

        let handle = tokio::spawn(async move {
            Server::builder()
                .add_service(service)
                .serve_with_incoming(TcpListenerStream::new(listener))
                .await
                .expect("Mock embedding service failed");
        });

        (format!("http://{}", addr), handle)
    }

    #[tokio::test]
    async fn test_embed_round_trip() {
        let (addr, handle) = start_mock_service(8).await;

        let client = EmbeddingClient::connect(addr, 8)
            .await
            .expect("Failed to connect");
        let vector = client.embed("難過的時候適合看什麼電影").await.unwrap();

        assert_eq!(vector.len(), 8);
        handle.abort();
    }

    #[tokio::test]
    async fn test_empty_text_short_circuits_to_zero_vector() {
        let (addr, handle) = start_mock_service(4).await;

        let client = EmbeddingClient::connect(addr, 4)
            .await
            .expect("Failed to connect");
        assert_eq!(client.embed("").await.unwrap(), vec![0.0; 4]);
        assert_eq!(client.embed("   ").await.unwrap(), vec![0.0; 4]);

        handle.abort();
    }

    #[tokio::test]
    async fn test_dimension_mismatch_is_rejected() {
        // Service produces 8-dim vectors but the client expects 16.
        let (addr, handle) = start_mock_service(8).await;

        let client = EmbeddingClient::connect(addr, 16)
            .await
            .expect("Failed to connect");
        let result = client.embed("some text").await;

        assert!(matches!(
            result,
            Err(EmbedError::InvalidResponse { expected: 16, found: 8 })
        ));
        handle.abort();
    }
}
