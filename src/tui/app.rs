//! Application state and logic.

use crate::presentation;
use crate::runner::RunnerError;
use strictly_rps::RoundOutcome;
use tracing::debug;

/// Messages delivered to the UI state.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// A round was started on the worker.
    RoundStarted,
    /// The worker delivered an outcome.
    RoundFinished(RoundOutcome),
    /// The round could not be started or was lost.
    RoundFailed(RunnerError),
}

/// Main application state.
///
/// Owns everything on screen; the worker only ever sends back a
/// [`RoundOutcome`].
#[derive(Debug)]
pub struct App {
    status_message: String,
    result: Option<String>,
    waiting: bool,
}

impl App {
    /// Creates a new application.
    pub fn new() -> Self {
        Self {
            status_message: "Press Enter to play, 'q' to quit.".to_string(),
            result: None,
            waiting: false,
        }
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Text of the last finished round.
    pub fn result(&self) -> Option<&str> {
        self.result.as_deref()
    }

    /// Whether the play action is enabled.
    pub fn can_play(&self) -> bool {
        !self.waiting
    }

    /// Handles an event from the round runner.
    pub fn handle_event(&mut self, event: AppEvent) {
        debug!(?event, "Handling app event");

        match event {
            AppEvent::RoundStarted => {
                self.waiting = true;
                self.result = None;
                self.status_message = "⏳ Get ready, show your hand to the camera...".to_string();
            }
            AppEvent::RoundFinished(outcome) => {
                self.waiting = false;
                self.result = Some(presentation::describe(&outcome));
                self.status_message = "Press Enter to play again, 'q' to quit.".to_string();
            }
            AppEvent::RoundFailed(RunnerError::RoundInProgress) => {
                // Stay disabled; the in-flight round will report.
                self.status_message = "A round is already in progress.".to_string();
            }
            AppEvent::RoundFailed(e) => {
                self.waiting = false;
                self.status_message = format!("Round failed: {}. Press 'q' to quit.", e);
            }
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
