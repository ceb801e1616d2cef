use crate::catalog::resource_locator;

use super::state::{PlaybackState, RowId};

/// Inputs to the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The user activated `row`, bound to `identifier`.
    Activated { row: RowId, identifier: String },
    /// The audio output reached the natural end of its source.
    PlaybackEnded,
}

/// Side effects requested by a transition, in the order they must be applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Remove the highlight and show the Play icon.
    Deactivate(RowId),
    /// Highlight and show the Pause icon.
    Activate(RowId),
    SetSource(String),
    Play,
    Pause,
}

/// Compute the next state and the effects for `event`.
pub fn transition(
    state: PlaybackState,
    event: Event,
    media_prefix: &str,
) -> (PlaybackState, Vec<Effect>) {
    match event {
        Event::Activated { row, identifier } => {
            let is_currently_playing = state.active_row() == Some(row);
            let mut effects = Vec::with_capacity(4);

            // A different row loses its playing look before anything else.
            // Its audio is replaced by the source swap below, not paused.
            if let Some(previous) = state.active_row() {
                if previous != row {
                    effects.push(Effect::Deactivate(previous));
                }
            }

            if is_currently_playing {
                effects.push(Effect::Pause);
                effects.push(Effect::Deactivate(row));
                (PlaybackState::idle(), effects)
            } else {
                effects.push(Effect::SetSource(resource_locator(media_prefix, &identifier)));
                effects.push(Effect::Play);
                effects.push(Effect::Activate(row));
                (PlaybackState::playing(row, identifier), effects)
            }
        }
        Event::PlaybackEnded => match state.active_row() {
            Some(row) => (PlaybackState::idle(), vec![Effect::Deactivate(row)]),
            None => (state, Vec::new()),
        },
    }
}
