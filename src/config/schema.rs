use serde::Deserialize;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/podplay/config.toml` or `~/.config/podplay/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `PODPLAY__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub catalog: CatalogSettings,
    pub media: MediaSettings,
    pub audio: AudioSettings,
    pub ui: UiSettings,
    pub log: LogSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Scheme, host and port of the podcast server, e.g. `http://127.0.0.1:5001`.
    pub base_url: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5001".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CatalogSettings {
    /// Path of the endpoint returning the catalog as JSON.
    pub path: String,
    /// Request timeout in seconds. 0 disables the timeout entirely.
    pub timeout_secs: u64,
    /// Suffix stripped from identifiers when building display labels.
    pub label_suffix: String,
    /// Path under which `<category>/<filename>` transcripts are served.
    pub transcript_path: String,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            path: "/api/podcasts".to_string(),
            timeout_secs: 0,
            label_suffix: ".mp3".to_string(),
            transcript_path: "/api/transcript".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MediaSettings {
    /// Path prefix under which each identifier is served.
    pub prefix: String,
}

impl Default for MediaSettings {
    fn default() -> Self {
        Self {
            prefix: "/podcasts".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AudioSettings {
    /// Output volume applied to every episode (0.0 - 1.0).
    pub volume: f32,
    /// Fade-out duration when quitting (milliseconds).
    /// Set to 0 to stop immediately.
    pub quit_fade_out_ms: u64,
    /// How often the audio thread checks whether the current episode finished.
    pub poll_interval_ms: u64,
    /// Timeout for downloading an episode, in seconds. 0 disables it.
    pub download_timeout_secs: u64,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            volume: 1.0,
            quit_fade_out_ms: 300,
            poll_interval_ms: 200,
            download_timeout_secs: 0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// The text rendered inside the top header box.
    pub header_text: String,
    /// Glyph shown on rows that are not playing.
    pub play_glyph: String,
    /// Glyph shown on the row that is playing.
    pub pause_glyph: String,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            header_text: " ~ Fresh episodes, one at a time ~ ".to_string(),
            play_glyph: "▶".to_string(),
            pause_glyph: "⏸".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// Log file location. Defaults to `$XDG_STATE_HOME/podplay/podplay.log`.
    pub file: Option<String>,
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    pub filter: Option<String>,
}
