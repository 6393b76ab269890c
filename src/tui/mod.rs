//! Terminal UI for Strictly Hands

mod app;
mod ui;

pub use app::{App, AppEvent};

use crate::GameConfig;
use crate::round::{RoundSource, replay_rig};
use crate::runner::RoundRunner;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::{debug, error, info, instrument};

type Term = Terminal<CrosstermBackend<Stdout>>;

/// Run the TUI client
#[instrument(skip_all, fields(captures_dir = %config.captures_dir().display()))]
pub async fn run_tui(config: GameConfig) -> Result<()> {
    info!("Starting Strictly Hands TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut runner = RoundRunner::new(replay_rig(&config));
    let res = run_app(&mut terminal, &mut runner).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "TUI loop error");
    }
    res
}

/// Draws, polls the in-flight round and handles keys until the user quits.
async fn run_app<S>(terminal: &mut Term, runner: &mut RoundRunner<S>) -> Result<()>
where
    S: RoundSource + Send + 'static,
{
    let mut app = App::new();

    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if runner.is_busy() {
            match runner.try_outcome() {
                Ok(Some(outcome)) => app.handle_event(AppEvent::RoundFinished(outcome)),
                Ok(None) => {}
                Err(e) => app.handle_event(AppEvent::RoundFailed(e)),
            }
        }

        if event::poll(Duration::from_millis(100))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    info!("User quit");
                    return Ok(());
                }
                KeyCode::Enter | KeyCode::Char('p') if app.can_play() => {
                    match runner.start() {
                        Ok(()) => app.handle_event(AppEvent::RoundStarted),
                        Err(e) => app.handle_event(AppEvent::RoundFailed(e)),
                    }
                }
                KeyCode::Enter | KeyCode::Char('p') => {
                    debug!("Play pressed while a round is in flight, ignoring");
                }
                _ => {}
            }
        }

        tokio::task::yield_now().await;
    }
}
