//! Form Controller
//!
//! Owns the note form's state and orchestrates submissions through a
//! [`SubmissionClient`].
//!
//! # State
//!
//! The form is two-phase: idle or submitting (`loading`). There are no
//! terminal states; the form is usable again after every success and every
//! failure.
//!
//! # Submitting
//!
//! [`FormController::submit`] runs the whole flow in one future. Surfaces
//! with their own event loop use [`FormController::begin_submit`] and
//! [`FormController::complete`] instead, so the network call can run on a
//! spawned task while input keeps flowing.
//!
//! In both paths `loading` is cleared last, after the result or error has
//! been stored. In `submit` this is held by a drop guard, so dropping the
//! future mid-request also returns the form to idle.

use crate::client::{SubmissionClient, SubmitError};
use crate::model::AnalysisResult;
use crate::view::FormView;

/// Error shown when a failure carries no message of its own
pub const FALLBACK_ERROR_MESSAGE: &str = "Noget gik galt";

/// Callback invoked after every state change
pub type ChangeObserver = Box<dyn FnMut(&FormState) + Send>;

/// Observable state of the note form
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormState {
    text: String,
    loading: bool,
    error: String,
    last_result: Option<AnalysisResult>,
}

impl FormState {
    /// Create an empty, idle form
    pub fn new() -> Self {
        Self::default()
    }

    /// Current note text, verbatim
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether a submission is in flight
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Current error message (empty when none)
    pub fn error(&self) -> &str {
        &self.error
    }

    /// Most recent successful result
    pub fn last_result(&self) -> Option<&AnalysisResult> {
        self.last_result.as_ref()
    }

    /// Trimmed note, if there is anything to submit
    fn submittable(&self) -> Option<&str> {
        Some(self.text.trim()).filter(|t| !t.is_empty())
    }

    /// Store the outcome of a submission (does not touch `loading`)
    fn apply(&mut self, result: Result<AnalysisResult, SubmitError>) -> SubmitOutcome {
        match result {
            Ok(result) => {
                self.last_result = Some(result);
                self.text.clear();
                SubmitOutcome::Succeeded
            }
            Err(e) => {
                let mut message = e.to_string();
                if message.is_empty() {
                    message = FALLBACK_ERROR_MESSAGE.to_string();
                }
                tracing::warn!(status = ?e.status(), error = %message, "Submission failed");
                self.error.clone_from(&message);
                SubmitOutcome::Failed(message)
            }
        }
    }
}

/// What a submit attempt did
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Nothing to submit; no request was made and no state changed
    Skipped,
    /// A result was received and stored
    Succeeded,
    /// The submission failed; carries the message now shown in the form
    Failed(String),
}

/// A submission that has started but not completed
///
/// Returned by [`FormController::begin_submit`]. Hand it back to
/// [`FormController::complete`] together with the client's result.
#[must_use = "a pending submission must be completed to clear the loading state"]
#[derive(Debug)]
pub struct PendingSubmit {
    note: String,
}

impl PendingSubmit {
    /// The trimmed note to send
    pub fn note(&self) -> &str {
        &self.note
    }
}

/// Clears `loading` and notifies the observer when dropped
struct LoadingGuard<'a> {
    state: &'a mut FormState,
    observer: &'a mut Option<ChangeObserver>,
}

impl LoadingGuard<'_> {
    fn finish(self, result: Result<AnalysisResult, SubmitError>) -> SubmitOutcome {
        self.state.apply(result)
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.state.loading = false;
        if let Some(observer) = self.observer.as_mut() {
            observer(&*self.state);
        }
    }
}

/// Controller for the note form
pub struct FormController<C> {
    client: C,
    state: FormState,
    observer: Option<ChangeObserver>,
}

impl<C: SubmissionClient> FormController<C> {
    /// Create a controller with an empty form
    pub fn new(client: C) -> Self {
        Self {
            client,
            state: FormState::new(),
            observer: None,
        }
    }

    /// Register a callback run after every state change (e.g. a redraw)
    #[must_use]
    pub fn with_observer(mut self, observer: impl FnMut(&FormState) + Send + 'static) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    /// The submission client
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Current state
    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Render model for the current state
    pub fn view(&self) -> FormView {
        FormView::from_state(&self.state)
    }

    /// Replace the note text verbatim
    pub fn edit(&mut self, text: impl Into<String>) {
        self.state.text = text.into();
        self.notify();
    }

    /// Start a submission
    ///
    /// Returns `None` without touching state if the trimmed text is empty.
    /// Otherwise sets `loading`, clears the error and returns the trimmed
    /// note to send.
    pub fn begin_submit(&mut self) -> Option<PendingSubmit> {
        let note = self.state.submittable()?.to_string();
        self.state.loading = true;
        self.state.error.clear();
        tracing::debug!(chars = note.chars().count(), "Submission started");
        self.notify();
        Some(PendingSubmit { note })
    }

    /// Finish a submission started with [`begin_submit`](Self::begin_submit)
    pub fn complete(
        &mut self,
        pending: PendingSubmit,
        result: Result<AnalysisResult, SubmitError>,
    ) -> SubmitOutcome {
        drop(pending);
        self.guard().finish(result)
    }

    /// Submit the current note and wait for the outcome
    pub async fn submit(&mut self) -> SubmitOutcome {
        let Some(pending) = self.begin_submit() else {
            return SubmitOutcome::Skipped;
        };
        let guard = LoadingGuard {
            state: &mut self.state,
            observer: &mut self.observer,
        };
        let result = self.client.submit(pending.note()).await;
        guard.finish(result)
    }

    fn guard(&mut self) -> LoadingGuard<'_> {
        LoadingGuard {
            state: &mut self.state,
            observer: &mut self.observer,
        }
    }

    fn notify(&mut self) {
        if let Some(observer) = self.observer.as_mut() {
            observer(&self.state);
        }
    }
}
