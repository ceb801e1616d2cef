use std::env;

use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::App;
use crate::audio::AudioPlayer;
use crate::catalog::spawn_loader;
use crate::controller::PlaybackController;
use crate::http::timeout_from_secs;

mod event_loop;
mod logging;
mod settings;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let (mut settings, settings_warning) = settings::load_settings();

    if let Some(base_url) = env::args().nth(1) {
        settings.server.base_url = base_url;
    }

    let _log_guard = logging::init(&settings.log);
    if let Some(msg) = settings_warning {
        tracing::warn!("{msg}");
    }
    tracing::info!(server = %settings.server.base_url, "starting podplay");

    let (audio_player, audio_events) = AudioPlayer::new(settings.audio.clone());
    let controller = PlaybackController::new(audio_player, settings.media_prefix());
    let mut app = App::new(controller);

    let catalog = spawn_loader(
        settings.catalog_url(),
        timeout_from_secs(settings.catalog.timeout_secs),
        settings.catalog.label_suffix.clone(),
    );

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result: Result<(), Box<dyn std::error::Error>> = (|| {
        let mut state = event_loop::EventLoopState::new(catalog, audio_events);
        event_loop::run(&mut terminal, &settings, &mut app, &mut state)
    })();

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref err) = run_result {
        tracing::error!("event loop failed: {err}");
    }
    run_result
}
