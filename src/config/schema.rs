use std::path::PathBuf;

use serde::Deserialize;

/// Template used when none is configured.
pub const DEFAULT_FORMAT: &str = "%a - %t";

/// Render capacity in bytes, terminator slot included.
pub const DEFAULT_CAPACITY: usize = 1024;

/// File name written under the config directory when no location is set.
pub const DEFAULT_OUTPUT_FILE: &str = "current_song";

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/nowplaying/config.toml` or `~/.config/nowplaying/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `NOWPLAYING__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub nowplaying: NowPlayingSettings,
    pub library: LibrarySettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NowPlayingSettings {
    /// Template rendered on every track start, e.g. `"%a - %t (%T)"`.
    pub format: String,
    /// Destination file. Defaults to `current_song` in the config directory.
    pub location: Option<PathBuf>,
    /// Maximum rendered size in bytes, including one reserved byte.
    pub capacity: usize,
}

impl Default for NowPlayingSettings {
    fn default() -> Self {
        Self {
            format: DEFAULT_FORMAT.to_string(),
            location: None,
            capacity: DEFAULT_CAPACITY,
        }
    }
}

impl NowPlayingSettings {
    /// Configured location, or `current_song` under the default config
    /// directory. `None` only when no config directory can be determined.
    pub fn resolved_location(&self) -> Option<PathBuf> {
        self.location
            .clone()
            .or_else(|| super::default_config_dir().map(|d| d.join(DEFAULT_OUTPUT_FILE)))
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// File extensions to treat as audio (case-insensitive, without dot).
    pub extensions: Vec<String>,
    /// Whether to follow symlinks during scanning.
    pub follow_links: bool,
    /// Whether to include hidden files/directories (dotfiles).
    pub include_hidden: bool,
    /// Whether to recurse into subdirectories.
    pub recursive: bool,
    /// Optional cap on directory recursion depth.
    pub max_depth: Option<usize>,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            extensions: vec!["mp3".into(), "flac".into(), "wav".into(), "ogg".into()],
            follow_links: true,
            include_hidden: true,
            recursive: true,
            max_depth: None,
        }
    }
}
