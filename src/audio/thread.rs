use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::thread::JoinHandle;
use std::time::Duration;

use rodio::{OutputStream, OutputStreamBuilder, Sink};

use crate::config::AudioSettings;
use crate::http::{blocking_client, timeout_from_secs};

use super::fetch::{Fetched, spawn_fetch};
use super::sink::sink_from_bytes;
use super::types::{AudioCmd, AudioEvent, Generation};

pub(super) fn spawn_audio_thread(
    rx: Receiver<AudioCmd>,
    events: Sender<AudioEvent>,
    audio_settings: AudioSettings,
) -> JoinHandle<()> {
    thread::spawn(move || {
        let mut stream = match OutputStreamBuilder::open_default_stream() {
            Ok(stream) => stream,
            Err(err) => {
                tracing::error!("no audio output device: {err}");
                return;
            }
        };
        // rodio logs to stderr when OutputStream is dropped, which would
        // scribble over the TUI.
        stream.log_on_drop(false);

        let client = match blocking_client(timeout_from_secs(audio_settings.download_timeout_secs)) {
            Ok(client) => client,
            Err(err) => {
                tracing::error!("cannot build HTTP client for audio: {err}");
                return;
            }
        };
        let poll = Duration::from_millis(audio_settings.poll_interval_ms.max(1));

        // Downloads run on their own workers so commands (Quit in
        // particular) are never stuck behind a slow transfer.
        let (fetched_tx, fetched_rx) = mpsc::channel::<Fetched>();

        let mut sink: Option<Sink> = None;
        let mut generation: Generation = 0;
        // Requested transport state; applies to a source still downloading too.
        let mut paused = true;

        loop {
            match rx.recv_timeout(poll) {
                Ok(cmd) => match cmd {
                    AudioCmd::Load {
                        locator,
                        generation: next,
                    } => {
                        if let Some(old) = sink.take() {
                            old.stop();
                        }
                        generation = next;
                        paused = true;

                        tracing::info!(%locator, generation, "loading source");
                        spawn_fetch(client.clone(), locator, generation, fetched_tx.clone());
                    }

                    AudioCmd::Play => {
                        paused = false;
                        if let Some(ref s) = sink {
                            s.play();
                        }
                    }

                    AudioCmd::Pause => {
                        paused = true;
                        if let Some(ref s) = sink {
                            s.pause();
                        }
                    }

                    AudioCmd::Quit { fade_out_ms } => {
                        if let Some(ref s) = sink {
                            if !paused {
                                fade_out_sink(s, fade_out_ms);
                            }
                            s.stop();
                        }
                        break;
                    }
                },
                Err(RecvTimeoutError::Timeout) => {
                    // A drained sink that was not paused ended on its own.
                    let drained = sink.as_ref().is_some_and(|s| !paused && s.empty());
                    if drained {
                        sink = None;
                        paused = true;
                        tracing::debug!(generation, "source ended");
                        let _ = events.send(AudioEvent::Ended { generation });
                    }
                }
                Err(RecvTimeoutError::Disconnected) => break,
            }

            while let Ok(fetched) = fetched_rx.try_recv() {
                if fetched.generation != generation {
                    tracing::debug!(
                        generation = fetched.generation,
                        "dropping download for a replaced source"
                    );
                    continue;
                }
                sink = start_source(&stream, fetched, paused, &audio_settings, &events);
            }
        }
    })
}

/// Decode freshly downloaded bytes; honours a Play that arrived meanwhile.
fn start_source(
    stream: &OutputStream,
    fetched: Fetched,
    paused: bool,
    audio_settings: &AudioSettings,
    events: &Sender<AudioEvent>,
) -> Option<Sink> {
    let generation = fetched.generation;
    let result = fetched
        .result
        .and_then(|bytes| sink_from_bytes(stream, bytes, audio_settings.volume));

    match result {
        Ok(s) => {
            if !paused {
                s.play();
            }
            Some(s)
        }
        Err(err) => {
            tracing::warn!(generation, "cannot play source: {err}");
            let _ = events.send(AudioEvent::Failed {
                generation,
                reason: err.to_string(),
            });
            None
        }
    }
}

fn fade_out_sink(sink: &Sink, fade_out_ms: u64) {
    if fade_out_ms == 0 {
        sink.set_volume(0.0);
        return;
    }
    let steps: u64 = 20;
    let step_ms = (fade_out_ms / steps).max(1);
    let start = sink.volume();
    for step in 1..=steps {
        let t = step as f32 / steps as f32;
        sink.set_volume(start * (1.0 - t));
        thread::sleep(Duration::from_millis(step_ms));
    }
    sink.set_volume(0.0);
}
