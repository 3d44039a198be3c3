//! Notes Core - Headless Note Submission for the Analysis Service
//!
//! This crate provides the form logic for submitting a short note to the
//! analysis service and showing the most recent result, completely
//! independent of any UI framework.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                      UI Surface                          │
//! │            (notes-tui, tests, anything else)             │
//! │                                                          │
//! │   edit / submit  ───────▶        ◀───────  FormView      │
//! └─────────────────────────────┬────────────────────────────┘
//!                               │
//! ┌─────────────────────────────┼────────────────────────────┐
//! │                       NOTES CORE                         │
//! │  ┌──────────────────────────┴─────────────────────────┐  │
//! │  │                 FormController                     │  │
//! │  │   text · loading · error · last result             │  │
//! │  └──────────────────────────┬─────────────────────────┘  │
//! │  ┌──────────────────────────┴─────────────────────────┐  │
//! │  │       SubmissionClient (HttpAnalysisClient)        │  │
//! │  └──────────────────────────┬─────────────────────────┘  │
//! └─────────────────────────────┼────────────────────────────┘
//!                               │  POST {base}/analyze
//!                               ▼
//!                      Analysis service
//! ```
//!
//! # Key Types
//!
//! - [`FormController`]: Owns form state and drives submissions
//! - [`SubmissionClient`]: One network call per note, uniform error signal
//! - [`HttpAnalysisClient`]: reqwest implementation of the client
//! - [`AnalysisResult`]: The backend's response, read leniently
//! - [`FormView`]: Pure render model derived from the form state
//! - [`ClientConfig`]: Base URL resolution (CLI, env, TOML, default)
//!
//! # Quick Start
//!
//! ```ignore
//! use notes_core::{load_config, FormController, HttpAnalysisClient};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = load_config()?;
//!     let client = HttpAnalysisClient::new(&config.base_url)?;
//!     let mut form = FormController::new(client);
//!
//!     form.edit("  Aspirin 100 mg helped with headache  ");
//!     form.submit().await;
//!
//!     if let Some(card) = form.view().result {
//!         println!("{} - {}", card.timestamp, card.score_line());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # No TUI Dependencies
//!
//! This crate has **zero** dependencies on ratatui, crossterm, or any other
//! UI framework.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod config;
pub mod form;
pub mod model;
pub mod view;

// Re-exports for convenience
pub use client::{HttpAnalysisClient, SubmissionClient, SubmitError, DEFAULT_FAILURE_MESSAGE};
pub use config::{
    default_config_path, load_config, load_config_from_path, ClientConfig, ConfigError,
    ConfigOverrides, ConfigSource,
};
pub use form::{FormController, FormState, PendingSubmit, SubmitOutcome, FALLBACK_ERROR_MESSAGE};
pub use model::AnalysisResult;
pub use view::{FormView, ResultView};
