use std::env;
use std::error::Error;
use std::path::Path;

use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::App;
use crate::audio::AudioPlayer;
use crate::catalog::{self, Track};
use crate::config::Settings;

mod event_loop;
mod settings;
mod startup;

pub fn run() -> Result<(), Box<dyn Error>> {
    let settings = settings::load_settings();

    let source = env::args().nth(1).unwrap_or_else(|| {
        std::env::current_dir()
            .ok()
            .and_then(|p| p.to_str().map(|s| s.to_string()))
            .unwrap_or_else(|| "Music".to_string())
    });

    let tracks = load_catalog(Path::new(&source), &settings)?;
    let audio_player = AudioPlayer::new(tracks.clone(), settings.audio.clone());
    let mut app = App::new(tracks);

    app.set_current_source(source.clone());
    app.set_playback_handle(audio_player.playback_handle());

    startup::apply_defaults(&mut app, &audio_player, &settings);

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result = event_loop::run(&mut terminal, &settings, &mut app, &audio_player);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    run_result
}

/// Build the catalog from either a playlist manifest or a directory scan.
/// Sorted by title in both cases; an empty result is valid and leaves the
/// transport controls inert.
fn load_catalog(source: &Path, settings: &Settings) -> Result<Vec<Track>, Box<dyn Error>> {
    if catalog::is_manifest(source) {
        catalog::load_manifest(source, settings.catalog.base_dir.as_deref())
    } else {
        Ok(catalog::scan(source, &settings.catalog))
    }
}
