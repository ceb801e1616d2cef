use std::sync::Mutex;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::JoinHandle;
use std::time::Duration;

use crate::config::AudioSettings;
use crate::controller::AudioOutput;

use super::thread::spawn_audio_thread;
use super::types::{AudioCmd, AudioEvent, Generation, SourceGeneration};

pub struct AudioPlayer {
    tx: Sender<AudioCmd>,
    generation: Generation,
    join: Mutex<Option<JoinHandle<()>>>,
}

impl AudioPlayer {
    /// Spawn the audio thread. The receiver yields its notifications.
    pub fn new(audio_settings: AudioSettings) -> (Self, Receiver<AudioEvent>) {
        let (tx, rx) = mpsc::channel::<AudioCmd>();
        let (event_tx, event_rx) = mpsc::channel::<AudioEvent>();

        let audio_handle = spawn_audio_thread(rx, event_tx, audio_settings);

        let player = Self {
            tx,
            generation: 0,
            join: Mutex::new(Some(audio_handle)),
        };
        (player, event_rx)
    }

    /// A player whose commands go to `tx` instead of an audio thread.
    #[cfg(test)]
    pub(super) fn detached(tx: Sender<AudioCmd>) -> Self {
        Self {
            tx,
            generation: 0,
            join: Mutex::new(None),
        }
    }

    fn send(&self, cmd: AudioCmd) {
        if self.tx.send(cmd).is_err() {
            tracing::debug!("audio thread is gone; dropping command");
        }
    }

    pub fn quit_softly(&self, fade_out: Duration) {
        self.send(AudioCmd::Quit {
            fade_out_ms: fade_out.as_millis() as u64,
        });

        if let Ok(mut j) = self.join.lock() {
            if let Some(h) = j.take() {
                let _ = h.join();
            }
        }
    }
}

impl AudioOutput for AudioPlayer {
    fn set_source(&mut self, locator: &str) {
        self.generation += 1;
        self.send(AudioCmd::Load {
            locator: locator.to_string(),
            generation: self.generation,
        });
    }

    fn play(&mut self) {
        self.send(AudioCmd::Play);
    }

    fn pause(&mut self) {
        self.send(AudioCmd::Pause);
    }
}

impl SourceGeneration for AudioPlayer {
    fn generation(&self) -> Generation {
        self.generation
    }
}
