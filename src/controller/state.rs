/// Position of a row in render order.
pub type RowId = usize;

/// Glyph shown on a row's button.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Icon {
    #[default]
    Play,
    Pause,
}

/// Visual state of one row.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct RowView {
    pub highlighted: bool,
    pub icon: Icon,
}

impl RowView {
    pub fn stopped() -> Self {
        Self {
            highlighted: false,
            icon: Icon::Play,
        }
    }

    pub fn playing() -> Self {
        Self {
            highlighted: true,
            icon: Icon::Pause,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.highlighted
    }
}

/// The row currently playing and the identifier it was activated with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveEntry {
    pub row: RowId,
    pub identifier: String,
}

/// Which track, if any, is playing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PlaybackState {
    active: Option<ActiveEntry>,
}

impl PlaybackState {
    /// Nothing selected.
    pub fn idle() -> Self {
        Self { active: None }
    }

    pub fn playing(row: RowId, identifier: impl Into<String>) -> Self {
        Self {
            active: Some(ActiveEntry {
                row,
                identifier: identifier.into(),
            }),
        }
    }

    pub fn active(&self) -> Option<&ActiveEntry> {
        self.active.as_ref()
    }

    pub fn active_row(&self) -> Option<RowId> {
        self.active.as_ref().map(|a| a.row)
    }

    pub fn is_idle(&self) -> bool {
        self.active.is_none()
    }
}
