//! Messages exchanged with the audio thread.

/// Sequence number of a source; bumped on every `set_source`.
pub type Generation = u64;

#[derive(Debug)]
pub enum AudioCmd {
    /// Fetch and decode `locator`, replacing the current source. Stays paused.
    Load {
        locator: String,
        generation: Generation,
    },
    /// Start or resume the current source.
    Play,
    /// Pause the current source.
    Pause,
    /// Quit the audio thread, optionally fading out over `fade_out_ms` milliseconds.
    Quit { fade_out_ms: u64 },
}

/// Notifications from the audio thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AudioEvent {
    /// The source reached its natural end. Never sent for a pause.
    Ended { generation: Generation },
    /// The source could not be fetched or decoded.
    Failed {
        generation: Generation,
        reason: String,
    },
}

impl AudioEvent {
    pub fn generation(&self) -> Generation {
        match self {
            Self::Ended { generation } | Self::Failed { generation, .. } => *generation,
        }
    }
}

/// An output that numbers its sources, so events about a replaced source can
/// be recognised.
pub trait SourceGeneration {
    /// Generation of the most recently set source; 0 before the first one.
    fn generation(&self) -> Generation;

    /// Whether `event` refers to the most recently set source.
    fn is_current(&self, event: &AudioEvent) -> bool {
        event.generation() == self.generation()
    }
}
