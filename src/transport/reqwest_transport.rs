use crate::error::{DictionaryError, DictionaryResult};
use crate::transport::{HttpResponse, HttpTransport};
use async_trait::async_trait;
use reqwest::Client;

/// `HttpTransport` backed by a `reqwest` client.
///
/// No timeout and no retries are configured.
#[derive(Clone)]
pub struct ReqwestTransport {
    pub(crate) client: Client,
}

impl ReqwestTransport {
    /// Create a new transport
    pub fn new() -> DictionaryResult<Self> {
        let client = Client::builder()
            .user_agent(concat!("vsm-dictionary-neo/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| DictionaryError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }

    /// Wrap an existing client
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &str) -> DictionaryResult<HttpResponse> {
        let response = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(HttpResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_creation() {
        let transport = ReqwestTransport::new();
        assert!(transport.is_ok());
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_transport_error() {
        let transport = ReqwestTransport::new().unwrap();
        let err = transport.get("http://127.0.0.1:1/solr/select").await.unwrap_err();
        assert!(matches!(err, DictionaryError::Transport(_)));
    }
}
