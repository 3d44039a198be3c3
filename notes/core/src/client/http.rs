//! HTTP Analysis Client
//!
//! [`SubmissionClient`] backed by reqwest.
//!
//! # Service API
//!
//! - `POST /analyze` - Analyze a note, body `{"text": "..."}`, returns the stored report
//! - `GET /health` - Liveness probe, returns `{"ok": true}`

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;

use super::traits::{SubmissionClient, SubmitError, DEFAULT_FAILURE_MESSAGE};
use crate::model::AnalysisResult;

/// Path of the analysis endpoint, relative to the base URL
pub const ANALYZE_PATH: &str = "/analyze";

/// Path of the health endpoint, relative to the base URL
pub const HEALTH_PATH: &str = "/health";

/// Health probes are the only requests with a timeout
const HEALTH_TIMEOUT: Duration = Duration::from_secs(5);

/// Request body for `POST /analyze`
#[derive(Clone, Debug, Serialize)]
struct AnalyzeRequest<'a> {
    text: &'a str,
}

/// Analysis service client
#[derive(Clone, Debug)]
pub struct HttpAnalysisClient {
    /// Base URL without trailing slash
    base_url: String,
    /// HTTP client
    http_client: reqwest::Client,
}

impl HttpAnalysisClient {
    /// Create a client for the service at `base_url`
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built
    /// (for example when the TLS backend fails to initialize).
    pub fn new(base_url: impl Into<String>) -> Result<Self, SubmitError> {
        let http_client = reqwest::Client::builder()
            .user_agent(concat!("notes-core/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self::with_http_client(base_url, http_client))
    }

    /// Create a client that reuses an existing reqwest client
    pub fn with_http_client(base_url: impl Into<String>, http_client: reqwest::Client) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            http_client,
        }
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get analyze endpoint URL
    fn analyze_url(&self) -> String {
        format!("{}{ANALYZE_PATH}", self.base_url)
    }

    /// Get health endpoint URL
    fn health_url(&self) -> String {
        format!("{}{HEALTH_PATH}", self.base_url)
    }
}

#[async_trait]
impl SubmissionClient for HttpAnalysisClient {
    async fn submit(&self, note: &str) -> Result<AnalysisResult, SubmitError> {
        let url = self.analyze_url();
        tracing::debug!(url = %url, chars = note.chars().count(), "Submitting note");

        let response = self
            .http_client
            .post(&url)
            .json(&AnalyzeRequest { text: note })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    tracing::debug!(error = %e, "Failed to read error body");
                    DEFAULT_FAILURE_MESSAGE.to_string()
                }
            };
            let err = SubmitError::rejected(status.as_u16(), message);
            tracing::warn!(status = status.as_u16(), message = %err, "Analysis rejected");
            return Err(err);
        }

        let body = response.bytes().await?;
        let result = AnalysisResult::from_slice(&body)?;

        tracing::info!(
            labels = result.labels().len(),
            score = ?result.score(),
            "Analysis received"
        );
        Ok(result)
    }

    async fn health_check(&self) -> bool {
        let healthy = self
            .http_client
            .get(self.health_url())
            .timeout(HEALTH_TIMEOUT)
            .send()
            .await
            .is_ok_and(|r| r.status().is_success());

        tracing::debug!(healthy, base_url = %self.base_url, "Health check");
        healthy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = HttpAnalysisClient::new("http://localhost:8000").unwrap();
        assert_eq!(client.base_url(), "http://localhost:8000");
        assert_eq!(client.analyze_url(), "http://localhost:8000/analyze");
        assert_eq!(client.health_url(), "http://localhost:8000/health");
    }

    #[test]
    fn test_trailing_slashes_are_trimmed() {
        let client = HttpAnalysisClient::new("https://api.example.com/v1//").unwrap();
        assert_eq!(client.analyze_url(), "https://api.example.com/v1/analyze");
    }

    #[test]
    fn test_request_body_shape() {
        let body = serde_json::to_string(&AnalyzeRequest { text: "Hello world" }).unwrap();
        assert_eq!(body, r#"{"text":"Hello world"}"#);
    }
}
