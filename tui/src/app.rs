//! Main Application
//!
//! The App struct manages the TUI lifecycle as a thin display client:
//! - Event loop (keyboard, resize)
//! - FormController for the note form
//! - A spawned task for the submission in flight
//!
//! # Event Loop
//!
//! The App never awaits the network inline. Submitting starts the form's
//! split submission, spawns the client call, and keeps polling terminal
//! events while it runs. When the task finishes its result is handed back
//! to the controller on the same loop, then the frame is redrawn.

use std::io;

use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use ratatui::backend::Backend;
use ratatui::{Frame, Terminal};
use tokio::task::{JoinError, JoinHandle};

use notes_core::{
    AnalysisResult, FormController, PendingSubmit, SubmissionClient, SubmitError, SubmitOutcome,
};

use crate::ui::{self, BackendHealth, StatusLine};

/// A submission whose client call runs on a spawned task
struct InFlight {
    pending: PendingSubmit,
    task: JoinHandle<Result<AnalysisResult, SubmitError>>,
}

/// Main application state
pub struct App<C> {
    /// Is the app still running?
    running: bool,

    /// The note form
    form: FormController<C>,
    /// Submission currently in flight
    in_flight: Option<InFlight>,

    /// Startup health probe
    health_probe: Option<JoinHandle<bool>>,
    /// Last observed service reachability
    health: BackendHealth,
    /// Shown in the status bar
    base_url: String,
}

impl<C> App<C>
where
    C: SubmissionClient + Clone + 'static,
{
    /// Create a new App around `client`
    pub fn new(client: C, base_url: impl Into<String>) -> Self {
        Self {
            running: true,
            form: FormController::new(client),
            in_flight: None,
            health_probe: None,
            health: BackendHealth::Unknown,
            base_url: base_url.into(),
        }
    }

    /// Probe the service in the background
    pub fn probe_health(&mut self) {
        let client = self.form.client().clone();
        self.health_probe = Some(tokio::spawn(async move { client.health_check().await }));
    }

    /// Main event loop
    pub async fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> anyhow::Result<()> {
        let mut event_stream = EventStream::new();

        // Render initial frame immediately so user sees UI
        self.render(terminal)?;

        while self.running {
            tokio::select! {
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        // Only handle Press events (not Release or Repeat)
                        Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                            self.handle_key(key);
                        }
                        Some(Ok(_)) => {}
                        Some(Err(e)) => return Err(e.into()),
                        None => self.running = false,
                    }
                }

                joined = join_task(self.in_flight.as_mut().map(|f| &mut f.task)) => {
                    self.finish_submission(joined);
                }

                probed = join_task(self.health_probe.as_mut()) => {
                    self.finish_health_probe(probed);
                }
            }

            self.render(terminal)?;
        }

        self.shutdown();
        Ok(())
    }

    /// Handle keyboard input
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            // Quit
            KeyCode::Esc => self.running = false,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.running = false;
            }

            // Newline inside the note
            KeyCode::Enter if key.modifiers.contains(KeyModifiers::ALT) => self.insert('\n'),

            // Submit note
            KeyCode::Enter => self.submit(),

            // Clear field
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.form.edit(String::new());
            }

            // Typing
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.insert(c);
            }

            KeyCode::Backspace => {
                let mut text = self.form.state().text().to_string();
                if text.pop().is_some() {
                    self.form.edit(text);
                }
            }

            _ => {}
        }
    }

    /// Start a submission unless the submit control is disabled
    fn submit(&mut self) {
        if !self.form.view().submit_enabled {
            return;
        }
        let Some(pending) = self.form.begin_submit() else {
            return;
        };

        let client = self.form.client().clone();
        let note = pending.note().to_string();
        let task = tokio::spawn(async move { client.submit(&note).await });
        self.in_flight = Some(InFlight { pending, task });
    }

    fn insert(&mut self, c: char) {
        let mut text = self.form.state().text().to_string();
        text.push(c);
        self.form.edit(text);
    }

    /// Hand a finished task's result to the form
    fn finish_submission(
        &mut self,
        joined: Result<Result<AnalysisResult, SubmitError>, JoinError>,
    ) -> Option<SubmitOutcome> {
        let in_flight = self.in_flight.take()?;
        let result = joined.unwrap_or_else(|e| {
            tracing::error!(error = %e, "Submission task failed");
            Err(SubmitError::Interrupted(e.to_string()))
        });

        match &result {
            Ok(_) => self.health = BackendHealth::Online,
            Err(SubmitError::Transport(e)) if e.is_connect() => {
                self.health = BackendHealth::Offline;
            }
            Err(_) => {}
        }

        Some(self.form.complete(in_flight.pending, result))
    }

    fn finish_health_probe(&mut self, probed: Result<bool, JoinError>) {
        self.health_probe = None;
        self.health = match probed {
            Ok(true) => BackendHealth::Online,
            Ok(false) => BackendHealth::Offline,
            Err(e) => {
                tracing::warn!(error = %e, "Health probe task failed");
                BackendHealth::Unknown
            }
        };
    }

    /// Wait for the submission in flight, if any, and apply its result
    pub async fn wait_for_submission(&mut self) -> Option<SubmitOutcome> {
        let task = &mut self.in_flight.as_mut()?.task;
        let joined = task.await;
        self.finish_submission(joined)
    }

    /// Wait for the health probe, if any, and record its result
    pub async fn wait_for_health(&mut self) -> Option<BackendHealth> {
        let probe = self.health_probe.as_mut()?;
        let probed = probe.await;
        self.finish_health_probe(probed);
        Some(self.health)
    }

    /// Abort background work and return the form to idle
    pub fn shutdown(&mut self) {
        if let Some(probe) = self.health_probe.take() {
            probe.abort();
        }
        if let Some(in_flight) = self.in_flight.take() {
            in_flight.task.abort();
            let _ = self.form.complete(
                in_flight.pending,
                Err(SubmitError::Interrupted("cancelled on exit".to_string())),
            );
        }
    }

    /// Render the UI
    fn render<B: Backend>(&self, terminal: &mut Terminal<B>) -> io::Result<()> {
        terminal.draw(|frame| self.draw(frame))?;
        Ok(())
    }

    /// Draw the current state into a frame
    pub fn draw(&self, frame: &mut Frame) {
        let view = self.form.view();
        let status = StatusLine {
            base_url: &self.base_url,
            health: self.health,
        };
        ui::draw(frame, &view, &status);
    }

    /// The note form
    pub fn form(&self) -> &FormController<C> {
        &self.form
    }

    /// Is the app still running?
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Is a submission in flight?
    pub fn is_submitting(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Last observed service reachability
    pub fn health(&self) -> BackendHealth {
        self.health
    }
}

/// Await a background task, or never resolve if there is none
async fn join_task<T>(task: Option<&mut JoinHandle<T>>) -> Result<T, JoinError> {
    match task {
        Some(task) => task.await,
        None => std::future::pending().await,
    }
}
