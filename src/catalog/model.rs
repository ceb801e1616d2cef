use super::label::display_label;

/// One playable episode as listed by the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    /// Opaque resource name, appended verbatim to the media prefix.
    pub identifier: String,
    /// Human-friendly label derived from the identifier. Never used for identity.
    pub label: String,
}

impl Track {
    /// Build a track, deriving its label by stripping `suffix`.
    pub fn new(identifier: impl Into<String>, suffix: &str) -> Self {
        let identifier = identifier.into();
        let label = display_label(&identifier, suffix);
        Self { identifier, label }
    }
}
