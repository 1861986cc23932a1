//! GraphQL transport
//!
//! The [`GraphqlTransport`] trait is the seam between the typed client and the
//! network. [`HttpTransport`] posts JSON to the configured endpoint; tests and
//! headless callers substitute their own implementation.

use async_trait::async_trait;

use crate::errors::{AppError, AppResult};
use crate::queries::GraphqlRequest;

/// Executes one GraphQL request and returns the raw response body.
///
/// Implementations report transport-level failures only. GraphQL `errors`
/// arrive inside the returned body and are handled by the client.
#[async_trait(?Send)]
pub trait GraphqlTransport {
    /// Send `request` and return the decoded JSON body.
    async fn execute(&self, request: &GraphqlRequest) -> AppResult<serde_json::Value>;
}

#[async_trait(?Send)]
impl<T: GraphqlTransport + ?Sized> GraphqlTransport for std::sync::Arc<T> {
    async fn execute(&self, request: &GraphqlRequest) -> AppResult<serde_json::Value> {
        (**self).execute(request).await
    }
}

/// HTTP transport for a GraphQL endpoint
#[derive(Debug, Clone)]
pub struct HttpTransport {
    endpoint: String,
    #[cfg(not(target_arch = "wasm32"))]
    client: reqwest::Client,
}

impl HttpTransport {
    /// Create a transport posting to `endpoint`.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            #[cfg(not(target_arch = "wasm32"))]
            client: reqwest::Client::new(),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[async_trait(?Send)]
impl GraphqlTransport for HttpTransport {
    async fn execute(&self, request: &GraphqlRequest) -> AppResult<serde_json::Value> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| AppError::Network(format!("Failed to reach {}: {e}", self.endpoint)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Http {
                status: status.as_u16(),
                message: status
                    .canonical_reason()
                    .unwrap_or("unexpected status")
                    .to_string(),
            });
        }

        response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| AppError::Decode(format!("Failed to parse response: {e}")))
    }
}

#[cfg(target_arch = "wasm32")]
#[async_trait(?Send)]
impl GraphqlTransport for HttpTransport {
    async fn execute(&self, request: &GraphqlRequest) -> AppResult<serde_json::Value> {
        use gloo_net::http::Request;

        let response = Request::post(&self.endpoint)
            .json(request)
            .map_err(|e| AppError::Decode(format!("Failed to encode request: {e}")))?
            .send()
            .await
            .map_err(|e| AppError::Network(format!("Failed to reach {}: {e}", self.endpoint)))?;

        if !response.ok() {
            return Err(AppError::Http {
                status: response.status(),
                message: response.status_text(),
            });
        }

        response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| AppError::Decode(format!("Failed to parse response: {e}")))
    }
}
