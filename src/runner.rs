//! Runs rounds off the caller's thread, one at a time.
//!
//! The round source is moved onto a blocking worker for the duration of a
//! round and handed back with the outcome over a oneshot channel. While it
//! is away there is nothing to start a second round with.

use crate::round::RoundSource;
use derive_more::{Display, Error};
use strictly_rps::RoundOutcome;
use tokio::sync::oneshot::{self, error::TryRecvError};
use tracing::{debug, error, info, instrument};

/// Round runner failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum RunnerError {
    /// A round is already being played.
    #[display("A round is already in progress")]
    RoundInProgress,
    /// No round was started.
    #[display("No round is in progress")]
    NoRoundInProgress,
    /// The worker died without reporting; the rig is gone.
    #[display("Round worker stopped without reporting an outcome")]
    WorkerLost,
}

enum State<S> {
    Idle(S),
    InFlight(oneshot::Receiver<(S, RoundOutcome)>),
    Lost,
}

/// Owns a round source and plays it on a worker thread.
pub struct RoundRunner<S> {
    state: State<S>,
}

impl<S> RoundRunner<S>
where
    S: RoundSource + Send + 'static,
{
    /// Creates an idle runner.
    pub fn new(source: S) -> Self {
        Self {
            state: State::Idle(source),
        }
    }

    /// True while a round is being played.
    pub fn is_busy(&self) -> bool {
        matches!(self.state, State::InFlight(_))
    }

    /// True once a worker has been lost; no further rounds can be played.
    pub fn is_lost(&self) -> bool {
        matches!(self.state, State::Lost)
    }

    /// Starts a round on a blocking worker.
    ///
    /// Must be called from within a Tokio runtime.
    #[instrument(skip(self))]
    pub fn start(&mut self) -> Result<(), RunnerError> {
        let mut source = match std::mem::replace(&mut self.state, State::Lost) {
            State::Idle(source) => source,
            State::InFlight(rx) => {
                self.state = State::InFlight(rx);
                return Err(RunnerError::RoundInProgress);
            }
            State::Lost => return Err(RunnerError::WorkerLost),
        };

        let (tx, rx) = oneshot::channel();
        tokio::task::spawn_blocking(move || {
            let outcome = source.play_round();
            if tx.send((source, outcome)).is_err() {
                debug!("Round outcome dropped, runner went away");
            }
        });
        self.state = State::InFlight(rx);
        info!("Round started");
        Ok(())
    }

    /// Returns the outcome if the in-flight round has finished.
    ///
    /// `Ok(None)` while the round is still being played.
    #[instrument(skip(self))]
    pub fn try_outcome(&mut self) -> Result<Option<RoundOutcome>, RunnerError> {
        let rx = match &mut self.state {
            State::InFlight(rx) => rx,
            State::Idle(_) => return Err(RunnerError::NoRoundInProgress),
            State::Lost => return Err(RunnerError::WorkerLost),
        };

        match rx.try_recv() {
            Ok((source, outcome)) => {
                self.state = State::Idle(source);
                debug!(?outcome, "Round delivered");
                Ok(Some(outcome))
            }
            Err(TryRecvError::Empty) => Ok(None),
            Err(TryRecvError::Closed) => {
                error!("Round worker lost");
                self.state = State::Lost;
                Err(RunnerError::WorkerLost)
            }
        }
    }

    /// Waits for the in-flight round to finish.
    #[instrument(skip(self))]
    pub async fn outcome(&mut self) -> Result<RoundOutcome, RunnerError> {
        let rx = match std::mem::replace(&mut self.state, State::Lost) {
            State::InFlight(rx) => rx,
            State::Idle(source) => {
                self.state = State::Idle(source);
                return Err(RunnerError::NoRoundInProgress);
            }
            State::Lost => return Err(RunnerError::WorkerLost),
        };

        match rx.await {
            Ok((source, outcome)) => {
                self.state = State::Idle(source);
                debug!(?outcome, "Round delivered");
                Ok(outcome)
            }
            Err(_) => {
                error!("Round worker lost");
                Err(RunnerError::WorkerLost)
            }
        }
    }

    /// Starts a round and waits for it.
    pub async fn play(&mut self) -> Result<RoundOutcome, RunnerError> {
        self.start()?;
        self.outcome().await
    }
}
