use super::output::AudioOutput;
use crate::audio::{Generation, SourceGeneration};

/// One call made on an `AudioOutput`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AudioCall {
    SetSource(String),
    Play,
    Pause,
}

/// `AudioOutput` that only remembers what it was asked to do.
///
/// Numbers its sources like the real player does.
#[derive(Debug, Default)]
pub struct RecordingOutput {
    pub calls: Vec<AudioCall>,
    pub generation: Generation,
}

impl RecordingOutput {
    pub fn take(&mut self) -> Vec<AudioCall> {
        std::mem::take(&mut self.calls)
    }
}

impl AudioOutput for RecordingOutput {
    fn set_source(&mut self, locator: &str) {
        self.generation += 1;
        self.calls.push(AudioCall::SetSource(locator.to_string()));
    }

    fn play(&mut self) {
        self.calls.push(AudioCall::Play);
    }

    fn pause(&mut self) {
        self.calls.push(AudioCall::Pause);
    }
}

impl SourceGeneration for RecordingOutput {
    fn generation(&self) -> Generation {
        self.generation
    }
}
