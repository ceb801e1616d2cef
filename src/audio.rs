//! Audio playback backed by a dedicated `rodio` thread.
//!
//! `AudioPlayer` is the `AudioOutput` handed to the playback controller. It
//! forwards commands to the audio thread and tags every source with a
//! generation so late notifications about a replaced source can be told
//! apart from fresh ones.

mod fetch;
mod player;
mod sink;
mod thread;
mod types;

pub use player::AudioPlayer;
pub use types::{AudioEvent, Generation, SourceGeneration};

#[cfg(test)]
mod tests;
