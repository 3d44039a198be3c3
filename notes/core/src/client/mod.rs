//! Submission Client
//!
//! Wraps the single network exchange with the analysis service behind a
//! trait, so the form controller can be driven by the HTTP implementation
//! in production and by mocks in tests.
//!
//! # Usage
//!
//! ```ignore
//! use notes_core::client::{HttpAnalysisClient, SubmissionClient};
//!
//! let client = HttpAnalysisClient::new("http://127.0.0.1:8000")?;
//! let result = client.submit("Aspirin 100 mg helped with headache").await?;
//! println!("{}", result.text());
//! ```

mod http;
mod traits;

pub use http::{HttpAnalysisClient, ANALYZE_PATH, HEALTH_PATH};
pub use traits::{SubmissionClient, SubmitError, DEFAULT_FAILURE_MESSAGE};
