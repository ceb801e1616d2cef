use std::mem;

use crate::catalog::Track;

use super::output::AudioOutput;
use super::state::{PlaybackState, RowId, RowView};
use super::transition::{Effect, Event, transition};

/// A rendered row: the track it is bound to and how it currently looks.
#[derive(Debug, Clone)]
pub struct Row {
    pub track: Track,
    pub view: RowView,
}

/// Owns the playback state, the rows and the audio output.
///
/// Every transition is applied synchronously: the state is replaced, row
/// views are updated, and audio commands are issued before the call returns.
pub struct PlaybackController<A> {
    audio: A,
    media_prefix: String,
    rows: Vec<Row>,
    state: PlaybackState,
}

impl<A: AudioOutput> PlaybackController<A> {
    /// Create a controller that resolves identifiers under `media_prefix`.
    pub fn new(audio: A, media_prefix: impl Into<String>) -> Self {
        Self {
            audio,
            media_prefix: media_prefix.into(),
            rows: Vec::new(),
            state: PlaybackState::idle(),
        }
    }

    /// Append a stopped row bound to `track`.
    pub fn render_row(&mut self, track: Track) -> RowId {
        self.rows.push(Row {
            track,
            view: RowView::stopped(),
        });
        self.rows.len() - 1
    }

    /// Toggle or switch playback for `row`.
    pub fn on_row_activated(&mut self, row: RowId) {
        let Some(identifier) = self.rows.get(row).map(|r| r.track.identifier.clone()) else {
            tracing::debug!(row, "ignoring activation of unknown row");
            return;
        };

        tracing::debug!(row, %identifier, "row activated");
        self.dispatch(Event::Activated { row, identifier });
    }

    /// Reset the playing row after the audio output reached its natural end.
    pub fn on_playback_ended(&mut self) {
        if self.state.is_idle() {
            tracing::debug!("end of media with nothing playing");
        }
        self.dispatch(Event::PlaybackEnded);
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    #[cfg(test)]
    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    /// The track bound to the active row, if any.
    pub fn active_track(&self) -> Option<&Track> {
        let entry = self.state.active()?;
        self.rows
            .get(entry.row)
            .map(|r| &r.track)
            .filter(|track| track.identifier == entry.identifier)
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    fn dispatch(&mut self, event: Event) {
        let state = mem::take(&mut self.state);
        let (next, effects) = transition(state, event, &self.media_prefix);
        self.state = next;
        for effect in effects {
            self.apply(effect);
        }
    }

    fn apply(&mut self, effect: Effect) {
        match effect {
            Effect::Deactivate(row) => self.set_view(row, RowView::stopped()),
            Effect::Activate(row) => self.set_view(row, RowView::playing()),
            Effect::SetSource(locator) => self.audio.set_source(&locator),
            Effect::Play => self.audio.play(),
            Effect::Pause => self.audio.pause(),
        }
    }

    fn set_view(&mut self, row: RowId, view: RowView) {
        match self.rows.get_mut(row) {
            Some(r) => r.view = view,
            None => tracing::debug!(row, "ignoring stale row reference"),
        }
    }
}
