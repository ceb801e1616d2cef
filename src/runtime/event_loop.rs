use std::sync::mpsc::{Receiver, TryRecvError};
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::{App, ListView};
use crate::audio::{AudioEvent, AudioPlayer};
use crate::catalog::{CatalogOutcome, TranscriptOutcome, spawn_transcript_fetch};
use crate::config;
use crate::http::timeout_from_secs;
use crate::ui;

/// State tracked by the runtime event loop across iterations.
pub struct EventLoopState {
    /// Pending catalog request; `None` once its outcome was applied.
    catalog: Option<Receiver<CatalogOutcome>>,
    /// Notifications from the audio thread.
    audio_events: Receiver<AudioEvent>,
    /// Transcript request in flight, if any.
    transcript: Option<Receiver<TranscriptOutcome>>,
    /// Internal two-key prefix state used for `gg` handling.
    pub pending_gg: bool,
}

impl EventLoopState {
    pub fn new(catalog: Receiver<CatalogOutcome>, audio_events: Receiver<AudioEvent>) -> Self {
        Self {
            catalog: Some(catalog),
            audio_events,
            transcript: None,
            pending_gg: false,
        }
    }
}

/// Main terminal event loop. Every event is handled to completion before the
/// next one is looked at. Returns `Ok(())` when shutdown is requested.
pub fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    app: &mut App<AudioPlayer>,
    state: &mut EventLoopState,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        poll_catalog(app, state);
        poll_transcript(app, state);

        while let Ok(audio_event) = state.audio_events.try_recv() {
            app.handle_audio_event(audio_event);
        }

        terminal.draw(|f| ui::draw(f, app, &settings.ui, &settings.server.base_url))?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if handle_key_event(key, settings, app, state) {
                    return Ok(());
                }
            }
        }
    }
}

fn poll_catalog(app: &mut App<AudioPlayer>, state: &mut EventLoopState) {
    let Some(rx) = state.catalog.as_ref() else {
        return;
    };
    match rx.try_recv() {
        Ok(outcome) => {
            app.apply_catalog(outcome);
            state.catalog = None;
        }
        Err(TryRecvError::Empty) => {}
        Err(TryRecvError::Disconnected) => {
            tracing::error!("catalog loader exited without a result");
            app.view = ListView::Failed;
            state.catalog = None;
        }
    }
}

fn poll_transcript(app: &mut App<AudioPlayer>, state: &mut EventLoopState) {
    let Some(rx) = state.transcript.as_ref() else {
        return;
    };
    match rx.try_recv() {
        Ok(outcome) => {
            app.apply_transcript(outcome);
            state.transcript = None;
        }
        Err(TryRecvError::Empty) => {}
        Err(TryRecvError::Disconnected) => state.transcript = None,
    }
}

fn toggle_transcript(settings: &config::Settings, app: &mut App<AudioPlayer>, state: &mut EventLoopState) {
    if let Some(request) = app.toggle_transcript(&settings.transcript_endpoint()) {
        // A request for an earlier popup is simply dropped.
        state.transcript = Some(spawn_transcript_fetch(
            request.url,
            request.identifier,
            timeout_from_secs(settings.catalog.timeout_secs),
        ));
    }
}

/// Returns true when the user asked to quit.
fn handle_key_event(
    key: KeyEvent,
    settings: &config::Settings,
    app: &mut App<AudioPlayer>,
    state: &mut EventLoopState,
) -> bool {
    if key.code != KeyCode::Char('g') {
        state.pending_gg = false;
    }

    if app.transcript.is_some() {
        match key.code {
            KeyCode::Char('t') | KeyCode::Esc => {
                toggle_transcript(settings, app, state);
                return false;
            }
            KeyCode::Char('j') | KeyCode::Down => {
                app.scroll_transcript(1);
                return false;
            }
            KeyCode::Char('k') | KeyCode::Up => {
                app.scroll_transcript(-1);
                return false;
            }
            _ => {}
        }
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            app.controller
                .audio()
                .quit_softly(Duration::from_millis(settings.audio.quit_fade_out_ms));
            return true;
        }
        KeyCode::Char('j') | KeyCode::Down => app.next(),
        KeyCode::Char('k') | KeyCode::Up => app.prev(),
        KeyCode::Char('g') => {
            if state.pending_gg {
                state.pending_gg = false;
                app.select_first();
            } else {
                state.pending_gg = true;
            }
        }
        KeyCode::Char('G') | KeyCode::End => app.select_last(),
        KeyCode::Home => app.select_first(),
        KeyCode::Enter | KeyCode::Char(' ') => app.activate_selected(),
        KeyCode::Char('t') => toggle_transcript(settings, app, state),
        _ => {}
    }

    false
}
