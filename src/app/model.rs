//! Application model types: `App`, `ListView` and the transcript popup.
//!
//! The `App` struct holds what the list area currently shows, which row the
//! cursor is on, the controller that owns playback, and the transcript popup
//! when one is open.

use crate::audio::{AudioEvent, SourceGeneration};
use crate::catalog::{CatalogOutcome, TranscriptError, TranscriptOutcome, Track, transcript_url};
use crate::controller::{AudioOutput, PlaybackController, Row};

/// What the list area shows.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum ListView {
    /// Waiting for the catalog request.
    #[default]
    Loading,
    /// The request failed.
    Failed,
    /// The server has no episodes.
    Empty,
    /// One row per episode.
    Rows,
}

/// What the transcript popup shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TranscriptState {
    Loading,
    Loaded(String),
    /// The episode is not in a category, so the server has no transcript for it.
    Missing,
    /// The server answered 404.
    NotFound,
    Failed,
}

/// The open transcript popup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TranscriptView {
    pub identifier: String,
    pub label: String,
    pub state: TranscriptState,
    /// First visible line.
    pub scroll: u16,
}

/// A transcript the runtime should fetch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TranscriptRequest {
    pub url: String,
    pub identifier: String,
}

/// The main application model.
pub struct App<A> {
    pub view: ListView,
    pub selected: usize,
    pub controller: PlaybackController<A>,
    pub transcript: Option<TranscriptView>,
}

impl<A: AudioOutput> App<A> {
    /// Create a new `App` in the loading state.
    pub fn new(controller: PlaybackController<A>) -> Self {
        Self {
            view: ListView::Loading,
            selected: 0,
            controller,
            transcript: None,
        }
    }

    /// Show the catalog outcome: render rows, or pick a placeholder.
    pub fn apply_catalog(&mut self, outcome: CatalogOutcome) {
        match outcome {
            CatalogOutcome::Loaded(tracks) if tracks.is_empty() => {
                self.view = ListView::Empty;
            }
            CatalogOutcome::Loaded(tracks) => {
                for track in tracks {
                    self.controller.render_row(track);
                }
                self.view = ListView::Rows;
                self.selected = 0;
            }
            CatalogOutcome::Failed(_) => {
                self.view = ListView::Failed;
            }
        }
    }

    pub fn rows(&self) -> &[Row] {
        self.controller.rows()
    }

    /// Return true if any rows were rendered.
    pub fn has_rows(&self) -> bool {
        !self.controller.rows().is_empty()
    }

    /// Play, pause or switch to the row under the cursor.
    pub fn activate_selected(&mut self) {
        if self.has_rows() {
            self.controller.on_row_activated(self.selected);
        }
    }

    /// Forward the audio output's end-of-media notification.
    pub fn playback_ended(&mut self) {
        self.controller.on_playback_ended();
    }

    /// The episode currently playing, if any.
    pub fn now_playing(&self) -> Option<&Track> {
        self.controller.active_track()
    }

    /// Move selection to the next row, wrapping to the first.
    pub fn next(&mut self) {
        let len = self.rows().len();
        if len > 0 {
            self.selected = (self.selected + 1) % len;
        }
    }

    /// Move selection to the previous row, wrapping to the last.
    pub fn prev(&mut self) {
        let len = self.rows().len();
        if len > 0 {
            self.selected = (self.selected + len - 1) % len;
        }
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.rows().len().saturating_sub(1);
    }

    /// Open the transcript popup for the row under the cursor, or close it.
    ///
    /// Returns the request to make when the popup opens on an episode that
    /// can have a transcript.
    pub fn toggle_transcript(&mut self, endpoint: &str) -> Option<TranscriptRequest> {
        if self.transcript.take().is_some() {
            return None;
        }
        let track = self.rows().get(self.selected).map(|r| r.track.clone())?;

        let url = transcript_url(endpoint, &track.identifier);
        let state = match url {
            Some(_) => TranscriptState::Loading,
            None => TranscriptState::Missing,
        };
        self.transcript = Some(TranscriptView {
            identifier: track.identifier.clone(),
            label: track.label,
            state,
            scroll: 0,
        });

        url.map(|url| TranscriptRequest {
            url,
            identifier: track.identifier,
        })
    }

    /// Show a finished transcript request if its popup is still waiting for it.
    pub fn apply_transcript(&mut self, outcome: TranscriptOutcome) {
        let Some(view) = self.transcript.as_mut() else {
            return;
        };
        if view.identifier != outcome.identifier || view.state != TranscriptState::Loading {
            return;
        }
        view.state = match outcome.result {
            Ok(text) => TranscriptState::Loaded(text),
            Err(TranscriptError::NotFound) => TranscriptState::NotFound,
            Err(_) => TranscriptState::Failed,
        };
    }

    /// Scroll the transcript popup by `delta` lines, staying within the text.
    pub fn scroll_transcript(&mut self, delta: i32) {
        let Some(view) = self.transcript.as_mut() else {
            return;
        };
        let TranscriptState::Loaded(text) = &view.state else {
            return;
        };
        let last = text.lines().count().saturating_sub(1).min(u16::MAX as usize) as u16;
        let next = (view.scroll as i32 + delta).clamp(0, last as i32);
        view.scroll = next as u16;
    }
}

impl<A: AudioOutput + SourceGeneration> App<A> {
    /// React to a notification from the audio output.
    ///
    /// Events about a source that was replaced since are dropped, so a late
    /// end-of-media cannot stop the row that is playing now.
    pub fn handle_audio_event(&mut self, event: AudioEvent) {
        if !self.controller.audio().is_current(&event) {
            tracing::debug!(?event, "ignoring event for a replaced source");
            return;
        }

        match event {
            AudioEvent::Ended { .. } => self.playback_ended(),
            AudioEvent::Failed { reason, .. } => {
                // Nothing is audible; show the row as stopped again.
                tracing::warn!("playback failed: {reason}");
                self.playback_ended();
            }
        }
    }
}
