//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Update Loop
//!
//! ```text
//! key event ─▶ NameInput ─▶ Action ─▶ update() ─▶ Effect::FetchJoke ─▶ spawn_fetch
//!                                         ▲                                │
//!                                         └──── Action::JokeFetched ◀──────┘
//! ```
//!
//! Every action marks the frame dirty; the next iteration redraws from
//! `core::view::render`.
//!
//! ## Redraw Strategy
//!
//! - **Loading**: draws every ~80ms so the spinner turns.
//! - **Idle**: sleeps up to 500ms, only redraws on events or resize.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::{Write, stdout};
use std::sync::{Arc, mpsc};

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::jokes::{JokeApiClient, JokeService};
use crate::tui::component::EventHandler;
use crate::tui::components::{NameInput, NameInputEvent};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub name_input: NameInput,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            name_input: NameInput::new(),
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableBracketedPaste,
            Show,                        // Show cursor for input editing
            SetCursorStyle::SteadyBlock  // Redraws reset the blink timer
        )?;
        info!("Terminal modes enabled (bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = restore_terminal_modes(&mut stdout());
    }
}

fn restore_terminal_modes(out: &mut impl Write) -> std::io::Result<()> {
    execute!(
        out,
        DisableBracketedPaste,
        SetCursorStyle::DefaultUserShape,
        Hide // Hide cursor on exit
    )
}

/// Build the joke service from resolved config.
pub fn build_service(config: &ResolvedConfig) -> Arc<dyn JokeService> {
    Arc::new(JokeApiClient::new(
        Some(config.base_url.clone()),
        config.query.clone(),
    ))
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::new(build_service(&config));
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    let start_time = std::time::Instant::now();
    let mut needs_redraw = true; // Force first frame

    let result = loop {
        let animating = app.request.is_loading();
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            if let Err(e) = terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame)) {
                break Err(e);
            }
            needs_redraw = false;
        }

        let timeout = if animating {
            std::time::Duration::from_millis(80)
        } else {
            std::time::Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            let action = match event {
                TuiEvent::Resize => continue,
                TuiEvent::Quit | TuiEvent::ForceQuit => Action::Quit,
                other => match tui.name_input.handle_event(&other) {
                    Some(NameInputEvent::Changed(name)) => Action::NameChanged(name),
                    Some(NameInputEvent::Submit) => Action::Submit,
                    Some(NameInputEvent::CursorMoved) | None => continue,
                },
            };
            should_quit |= dispatch(&mut app, action, &tx);
        }

        // Handle background task actions (fetch results)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            should_quit |= dispatch(&mut app, action, &tx);
        }

        if should_quit {
            break Ok(());
        }
    };

    ratatui::restore();
    info!("Joke Wizard exiting");
    result
}

/// Runs one action through the reducer and performs its effect.
/// Returns `true` when the app should quit.
fn dispatch(app: &mut App, action: Action, tx: &mpsc::Sender<Action>) -> bool {
    match update(app, action) {
        Effect::Quit => true,
        Effect::FetchJoke => {
            spawn_fetch(app.service.clone(), tx.clone());
            false
        }
        Effect::None => false,
    }
}

fn spawn_fetch(service: Arc<dyn JokeService>, tx: mpsc::Sender<Action>) {
    info!("Spawning joke fetch via {}", service.name());
    tokio::spawn(async move {
        let started = std::time::Instant::now();
        let result = service.fetch_joke().await;
        debug!(
            "Fetch settled in {}ms (ok={})",
            started.elapsed().as_millis(),
            result.is_ok()
        );
        if tx.send(Action::JokeFetched(result)).is_err() {
            warn!("Failed to send fetch result: receiver dropped");
        }
    });
}
