use std::path::PathBuf;
use std::time::Duration;

use crate::metadata::{MetaField, MetadataSource, TrackId};

#[derive(Debug, Clone)]
pub struct Track {
    pub path: PathBuf,
    pub title: String,
    pub artist: Option<String>,
    pub album: Option<String>,
    pub track_number: Option<String>,
    pub file_type: Option<String>,
    pub duration: Option<Duration>,
    /// Elapsed playback position, updated by the player.
    pub playtime: Duration,
}

/// Tracks known to the player, addressed by their index.
#[derive(Debug, Clone, Default)]
pub struct Library {
    tracks: Vec<Track>,
}

impl Library {
    pub fn new(tracks: Vec<Track>) -> Self {
        Self { tracks }
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn get(&self, id: TrackId) -> Option<&Track> {
        self.tracks.get(id)
    }

    pub fn ids(&self) -> std::ops::Range<TrackId> {
        0..self.tracks.len()
    }

    /// Record how far playback of `id` has progressed. Unknown ids are ignored.
    pub fn set_playtime(&mut self, id: TrackId, playtime: Duration) {
        if let Some(t) = self.tracks.get_mut(id) {
            t.playtime = playtime;
        }
    }
}

impl MetadataSource for Library {
    fn lookup_string(&self, track: TrackId, field: MetaField) -> Option<String> {
        let Some(t) = self.get(track) else {
            tracing::debug!(track, field = field.key(), "lookup on unknown track");
            return None;
        };
        match field {
            MetaField::Album => t.album.clone(),
            MetaField::Artist => t.artist.clone(),
            MetaField::Title => Some(t.title.clone()),
            MetaField::Track => t.track_number.clone(),
            MetaField::FileType => t.file_type.clone(),
        }
    }

    fn total_duration(&self, track: TrackId) -> f64 {
        self.get(track)
            .and_then(|t| t.duration)
            .map_or(0.0, |d| d.as_secs_f64())
    }

    fn elapsed_playtime(&self, track: TrackId) -> i64 {
        self.get(track)
            .map_or(0, |t| i64::try_from(t.playtime.as_secs()).unwrap_or(i64::MAX))
    }
}
