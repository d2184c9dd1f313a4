use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::events::{EventBus, PlayerEvent};
use crate::library::Library;

/// Announce every track in library order, then stop.
///
/// Each track's playtime is reset before its start event is published, the
/// way a player rewinds a track it is about to play.
pub fn play_through(bus: &EventBus, library: &Arc<Mutex<Library>>) -> usize {
    let ids = match library.lock() {
        Ok(lib) => lib.ids(),
        Err(_) => return 0,
    };

    let mut started = 0;
    for track in ids {
        if let Ok(mut lib) = library.lock() {
            lib.set_playtime(track, Duration::ZERO);
        }
        tracing::debug!(track, "track started");
        bus.publish(PlayerEvent::TrackStarted { track });
        started += 1;
    }

    bus.publish(PlayerEvent::Stopped);
    started
}
