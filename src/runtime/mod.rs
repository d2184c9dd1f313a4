use std::env;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use tracing_subscriber::EnvFilter;

use crate::events::EventBus;
use crate::library::{Library, scan};
use crate::plugin::{NowPlaying, PluginConfig};

mod playback;
mod settings;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("nowplaying=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let settings = settings::load_settings();

    let dir = match env::args_os().nth(1) {
        Some(arg) => PathBuf::from(arg),
        None => env::current_dir()?,
    };

    let library = Arc::new(Mutex::new(Library::new(scan(&dir, &settings.library))));
    let bus = EventBus::new();

    let plugin = NowPlaying::start(
        PluginConfig::from_settings(&settings.nowplaying),
        &bus,
        library.clone(),
    );

    let started = playback::play_through(&bus, &library);
    tracing::info!(
        tracks = started,
        location = %plugin.location().display(),
        "playlist finished"
    );

    plugin.stop();
    Ok(())
}
