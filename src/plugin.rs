//! The now-playing plugin: renders the configured template whenever a track
//! starts and writes the result to the destination file.

use std::path::PathBuf;
use std::sync::Arc;

use crate::config::{DEFAULT_OUTPUT_FILE, NowPlayingSettings};
use crate::events::{EventBus, PlayerEvent, Subscription};
use crate::format::{Rendered, render};
use crate::metadata::{MetadataSource, TrackId};
use crate::sink::write_now_playing;

pub const NAME: &str = "nowplaying";
pub const VERSION_MAJOR: u32 = 0;
pub const VERSION_MINOR: u32 = 2;
pub const DESCRIPTION: &str = "Write information about current song into file";

/// Everything the event handler needs, fixed at plugin start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginConfig {
    pub format: String,
    pub location: PathBuf,
    pub capacity: usize,
}

impl PluginConfig {
    pub fn from_settings(settings: &NowPlayingSettings) -> Self {
        let location = settings.resolved_location().unwrap_or_else(|| {
            tracing::info!("no config directory, writing {DEFAULT_OUTPUT_FILE} to the working directory");
            PathBuf::from(DEFAULT_OUTPUT_FILE)
        });

        Self {
            format: settings.format.clone(),
            location,
            capacity: settings.capacity,
        }
    }
}

/// A started plugin. Dropping it (or calling [`NowPlaying::stop`])
/// unsubscribes from the bus.
#[derive(Debug)]
pub struct NowPlaying {
    location: PathBuf,
    _subscription: Subscription,
}

impl NowPlaying {
    pub fn start<S>(config: PluginConfig, bus: &EventBus, source: Arc<S>) -> Self
    where
        S: MetadataSource + Send + Sync + ?Sized + 'static,
    {
        tracing::info!(
            plugin = NAME,
            version_major = VERSION_MAJOR,
            version_minor = VERSION_MINOR,
            format = %config.format,
            location = %config.location.display(),
            "started"
        );

        let location = config.location.clone();
        let subscription = bus.subscribe(move |event| {
            if let PlayerEvent::TrackStarted { track } = *event {
                on_track_started(&config, &*source, track);
            }
        });

        Self {
            location,
            _subscription: subscription,
        }
    }

    pub fn location(&self) -> &std::path::Path {
        &self.location
    }

    pub fn stop(self) {}
}

impl Drop for NowPlaying {
    fn drop(&mut self) {
        tracing::info!(plugin = NAME, "stopped");
    }
}

/// Render for `track` and write the result. Returns the rendered line when it
/// reached the destination; failures are logged and the line is discarded.
pub fn on_track_started<S>(config: &PluginConfig, source: &S, track: TrackId) -> Option<Rendered>
where
    S: MetadataSource + ?Sized,
{
    let rendered = render(&config.format, source, track, config.capacity);

    match write_now_playing(&config.location, rendered.as_str()) {
        Ok(()) => {
            tracing::debug!(
                text = rendered.as_str(),
                length = rendered.len(),
                truncated = rendered.is_truncated(),
                "wrote now playing"
            );
            Some(rendered)
        }
        Err(e) => {
            tracing::warn!(error = %e, "now playing not written");
            None
        }
    }
}
