use super::*;
use crate::audio::AudioEvent;
use crate::catalog::{CatalogError, CatalogOutcome, TranscriptError, TranscriptOutcome, Track};
use crate::controller::testing::{AudioCall, RecordingOutput};
use crate::controller::{Icon, PlaybackController};

fn app() -> App<RecordingOutput> {
    App::new(PlaybackController::new(
        RecordingOutput::default(),
        "http://h/podcasts",
    ))
}

fn loaded(ids: &[&str]) -> CatalogOutcome {
    CatalogOutcome::Loaded(ids.iter().map(|id| Track::new(*id, ".mp3")).collect())
}

#[test]
fn starts_loading_with_no_rows() {
    let a = app();
    assert_eq!(a.view, ListView::Loading);
    assert!(!a.has_rows());
}

#[test]
fn empty_catalog_shows_placeholder_and_no_rows() {
    let mut a = app();
    a.apply_catalog(loaded(&[]));
    assert_eq!(a.view, ListView::Empty);
    assert!(a.rows().is_empty());
}

#[test]
fn populated_catalog_renders_rows_in_order() {
    let mut a = app();
    a.apply_catalog(loaded(&["ep1.mp3", "ep_two.mp3"]));
    assert_eq!(a.view, ListView::Rows);
    let labels: Vec<&str> = a.rows().iter().map(|r| r.track.label.as_str()).collect();
    assert_eq!(labels, vec!["ep1", "ep two"]);
    assert!(a.rows().iter().all(|r| r.view.icon == Icon::Play));
}

#[test]
fn failed_fetch_shows_placeholder_and_no_rows() {
    let mut a = app();
    a.apply_catalog(CatalogOutcome::Failed(CatalogError::Status(500)));
    assert_eq!(a.view, ListView::Failed);
    assert!(a.rows().is_empty());
}

#[test]
fn activate_selected_toggles_the_row_under_the_cursor() {
    let mut a = app();
    a.apply_catalog(loaded(&["a.mp3", "b.mp3"]));

    a.next();
    a.activate_selected();
    assert_eq!(a.now_playing().map(|t| t.label.as_str()), Some("b"));

    a.activate_selected();
    assert!(a.now_playing().is_none());
    assert_eq!(
        a.controller.audio().calls,
        vec![
            AudioCall::SetSource("http://h/podcasts/b.mp3".into()),
            AudioCall::Play,
            AudioCall::Pause,
        ]
    );
}

#[test]
fn activate_without_rows_does_nothing() {
    let mut a = app();
    a.apply_catalog(loaded(&[]));
    a.activate_selected();
    a.playback_ended();
    assert!(a.controller.audio().calls.is_empty());
}

#[test]
fn playback_ended_clears_now_playing() {
    let mut a = app();
    a.apply_catalog(loaded(&["a.mp3"]));
    a.activate_selected();
    a.playback_ended();
    assert!(a.now_playing().is_none());
    assert_eq!(a.rows()[0].view.icon, Icon::Play);
}

#[test]
fn navigation_wraps_and_jumps() {
    let mut a = app();
    a.next();
    a.prev();
    assert_eq!(a.selected, 0);

    a.apply_catalog(loaded(&["a", "b", "c"]));
    a.prev();
    assert_eq!(a.selected, 2);
    a.next();
    assert_eq!(a.selected, 0);
    a.select_last();
    assert_eq!(a.selected, 2);
    a.select_first();
    assert_eq!(a.selected, 0);
}

#[test]
fn stale_end_of_media_leaves_the_new_row_playing() {
    let mut a = app();
    a.apply_catalog(loaded(&["a.mp3", "b.mp3"]));

    a.activate_selected();
    a.next();
    a.activate_selected();
    assert_eq!(a.controller.audio().generation, 2);

    // The first source finishing late must not stop the second.
    a.handle_audio_event(AudioEvent::Ended { generation: 1 });
    assert_eq!(a.now_playing().map(|t| t.label.as_str()), Some("b"));
    assert_eq!(a.rows()[0].view.icon, Icon::Play);
    assert_eq!(a.rows()[1].view.icon, Icon::Pause);

    a.handle_audio_event(AudioEvent::Ended { generation: 2 });
    assert!(a.now_playing().is_none());
    assert_eq!(a.rows()[1].view.icon, Icon::Play);
}

#[test]
fn current_failure_resets_the_row_to_play() {
    let mut a = app();
    a.apply_catalog(loaded(&["a.mp3"]));
    a.activate_selected();
    assert_eq!(a.rows()[0].view.icon, Icon::Pause);

    a.handle_audio_event(AudioEvent::Failed {
        generation: 1,
        reason: "HTTP error! status: 404".into(),
    });
    assert!(a.now_playing().is_none());
    assert_eq!(a.rows()[0].view.icon, Icon::Play);

    // No extra audio calls: the output already gave up on the source.
    assert_eq!(
        a.controller.audio().calls,
        vec![
            AudioCall::SetSource("http://h/podcasts/a.mp3".into()),
            AudioCall::Play,
        ]
    );
}

#[test]
fn stale_failure_is_ignored() {
    let mut a = app();
    a.apply_catalog(loaded(&["a.mp3", "b.mp3"]));
    a.activate_selected();
    a.next();
    a.activate_selected();

    a.handle_audio_event(AudioEvent::Failed {
        generation: 1,
        reason: "decode".into(),
    });
    assert_eq!(a.now_playing().map(|t| t.label.as_str()), Some("b"));
}

const ENDPOINT: &str = "http://h/api/transcript";

#[test]
fn transcript_opens_loading_for_categorized_rows() {
    let mut a = app();
    a.apply_catalog(loaded(&["tech/ai_news.mp3"]));

    let request = a.toggle_transcript(ENDPOINT).unwrap();
    assert_eq!(request.url, "http://h/api/transcript/tech/ai_news.mp3");
    assert_eq!(request.identifier, "tech/ai_news.mp3");

    let view = a.transcript.as_ref().unwrap();
    assert_eq!(view.label, "ai news");
    assert_eq!(view.state, TranscriptState::Loading);

    // Toggling again closes without a new request.
    assert!(a.toggle_transcript(ENDPOINT).is_none());
    assert!(a.transcript.is_none());
}

#[test]
fn transcript_for_flat_rows_is_missing_without_a_request() {
    let mut a = app();
    a.apply_catalog(loaded(&["ep1.mp3"]));
    assert!(a.toggle_transcript(ENDPOINT).is_none());
    assert_eq!(
        a.transcript.as_ref().map(|t| &t.state),
        Some(&TranscriptState::Missing)
    );
}

#[test]
fn transcript_without_rows_stays_closed() {
    let mut a = app();
    a.apply_catalog(loaded(&[]));
    assert!(a.toggle_transcript(ENDPOINT).is_none());
    assert!(a.transcript.is_none());
}

#[test]
fn transcript_outcomes_fill_the_waiting_popup() {
    let mut a = app();
    a.apply_catalog(loaded(&["tech/a.mp3", "tech/b.mp3", "tech/c.mp3"]));

    a.toggle_transcript(ENDPOINT);
    a.apply_transcript(TranscriptOutcome {
        identifier: "tech/a.mp3".into(),
        result: Ok("line one\nline two".into()),
    });
    assert_eq!(
        a.transcript.as_ref().unwrap().state,
        TranscriptState::Loaded("line one\nline two".into())
    );

    a.toggle_transcript(ENDPOINT);
    a.next();
    a.toggle_transcript(ENDPOINT);
    a.apply_transcript(TranscriptOutcome {
        identifier: "tech/b.mp3".into(),
        result: Err(TranscriptError::NotFound),
    });
    assert_eq!(a.transcript.as_ref().unwrap().state, TranscriptState::NotFound);

    a.toggle_transcript(ENDPOINT);
    a.next();
    a.toggle_transcript(ENDPOINT);
    a.apply_transcript(TranscriptOutcome {
        identifier: "tech/c.mp3".into(),
        result: Err(TranscriptError::Status(500)),
    });
    assert_eq!(a.transcript.as_ref().unwrap().state, TranscriptState::Failed);
}

#[test]
fn late_transcript_for_another_episode_is_ignored() {
    let mut a = app();
    a.apply_catalog(loaded(&["tech/a.mp3", "tech/b.mp3"]));

    a.toggle_transcript(ENDPOINT);
    a.toggle_transcript(ENDPOINT);
    a.next();
    a.toggle_transcript(ENDPOINT);

    a.apply_transcript(TranscriptOutcome {
        identifier: "tech/a.mp3".into(),
        result: Ok("for a".into()),
    });
    let view = a.transcript.as_ref().unwrap();
    assert_eq!(view.identifier, "tech/b.mp3");
    assert_eq!(view.state, TranscriptState::Loading);

    // And nothing happens once the popup is closed.
    a.toggle_transcript(ENDPOINT);
    a.apply_transcript(TranscriptOutcome {
        identifier: "tech/b.mp3".into(),
        result: Ok("for b".into()),
    });
    assert!(a.transcript.is_none());
}

#[test]
fn transcript_scroll_stays_within_the_text() {
    let mut a = app();
    a.apply_catalog(loaded(&["tech/a.mp3"]));
    a.scroll_transcript(1);

    a.toggle_transcript(ENDPOINT);
    a.scroll_transcript(1);
    assert_eq!(a.transcript.as_ref().unwrap().scroll, 0);

    a.apply_transcript(TranscriptOutcome {
        identifier: "tech/a.mp3".into(),
        result: Ok("one\ntwo\nthree".into()),
    });
    a.scroll_transcript(1);
    a.scroll_transcript(5);
    assert_eq!(a.transcript.as_ref().unwrap().scroll, 2);
    a.scroll_transcript(-10);
    assert_eq!(a.transcript.as_ref().unwrap().scroll, 0);
}
