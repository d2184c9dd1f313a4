//! Metadata lookup capability.
//!
//! The renderer never owns track data. It asks a [`MetadataSource`] for the
//! fields of one track at a time; the host player decides where they come from.

/// Identity of a track inside the host's library.
pub type TrackId = usize;

/// String fields a template can ask for.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MetaField {
    Album,
    Artist,
    Title,
    /// Track number as tagged (may be "3" or "3/12").
    Track,
    /// Container/codec name, e.g. "MP3" or "FLAC".
    FileType,
}

impl MetaField {
    /// Host-side key name for this field.
    pub fn key(self) -> &'static str {
        match self {
            MetaField::Album => "album",
            MetaField::Artist => "artist",
            MetaField::Title => "title",
            MetaField::Track => "track",
            MetaField::FileType => "filetype",
        }
    }
}

/// Read-only access to track metadata.
///
/// Implementations must not fail and must not have side effects: a missing
/// field is `None`, an unknown track answers like a track with no metadata.
pub trait MetadataSource {
    fn lookup_string(&self, track: TrackId, field: MetaField) -> Option<String>;

    /// Total duration in seconds.
    fn total_duration(&self, track: TrackId) -> f64;

    /// Elapsed playtime in whole seconds.
    fn elapsed_playtime(&self, track: TrackId) -> i64;
}

/// Shared sources: the host keeps updating playtime while the plugin reads.
///
/// A poisoned lock still serves the data it guards.
impl<S: MetadataSource> MetadataSource for std::sync::Mutex<S> {
    fn lookup_string(&self, track: TrackId, field: MetaField) -> Option<String> {
        self.lock()
            .unwrap_or_else(|e| e.into_inner())
            .lookup_string(track, field)
    }

    fn total_duration(&self, track: TrackId) -> f64 {
        self.lock()
            .unwrap_or_else(|e| e.into_inner())
            .total_duration(track)
    }

    fn elapsed_playtime(&self, track: TrackId) -> i64 {
        self.lock()
            .unwrap_or_else(|e| e.into_inner())
            .elapsed_playtime(track)
    }
}
