//! Submission Client Traits
//!
//! The contract between the form controller and whatever delivers a note to
//! the analysis service.
//!
//! Every failure is collapsed into one [`SubmitError`] whose `Display` text
//! is the human-readable message the form shows inline. Structured details
//! (HTTP status, underlying error) stay available for logging.

use async_trait::async_trait;
use thiserror::Error;

use crate::model::AnalysisResult;

/// Message used when a rejected request carries no readable body
pub const DEFAULT_FAILURE_MESSAGE: &str = "Analyze failed";

/// Errors surfaced by a [`SubmissionClient`]
#[derive(Debug, Error)]
pub enum SubmitError {
    /// The service answered with a non-success status
    ///
    /// Displays only `message`: the response body text, or
    /// [`DEFAULT_FAILURE_MESSAGE`] when the body was empty or unreadable.
    #[error("{message}")]
    Rejected {
        /// HTTP status code of the response
        status: u16,
        /// Message extracted from the response body
        message: String,
    },

    /// The request could not be completed (connection refused, DNS, ...)
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// The success response body was not valid JSON
    #[error(transparent)]
    Decode(#[from] serde_json::Error),

    /// The request was cancelled or its task died before the client returned
    #[error("Request interrupted: {0}")]
    Interrupted(String),
}

impl SubmitError {
    /// Build a rejection from a status and a possibly empty body
    pub fn rejected(status: u16, body: impl Into<String>) -> Self {
        let body = body.into();
        let message = if body.is_empty() {
            DEFAULT_FAILURE_MESSAGE.to_string()
        } else {
            body
        };
        Self::Rejected { status, message }
    }

    /// HTTP status, when the service answered at all
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Rejected { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            Self::Decode(_) | Self::Interrupted(_) => None,
        }
    }
}

/// Delivers a note to the analysis service
///
/// Implementations perform exactly one request per [`submit`] call: no
/// retry, no timeout, no cancellation. Callers own those concerns.
///
/// [`submit`]: SubmissionClient::submit
#[async_trait]
pub trait SubmissionClient: Send + Sync {
    /// Submit an already trimmed, non-empty note for analysis
    async fn submit(&self, note: &str) -> Result<AnalysisResult, SubmitError>;

    /// Check if the service is reachable
    async fn health_check(&self) -> bool {
        true
    }
}

#[async_trait]
impl<C: SubmissionClient + ?Sized> SubmissionClient for std::sync::Arc<C> {
    async fn submit(&self, note: &str) -> Result<AnalysisResult, SubmitError> {
        (**self).submit(note).await
    }

    async fn health_check(&self) -> bool {
        (**self).health_check().await
    }
}
