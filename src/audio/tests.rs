use super::fetch::{SourceError, spawn_fetch};
use super::player::AudioPlayer;
use super::types::{AudioCmd, AudioEvent, SourceGeneration};
use crate::controller::AudioOutput;
use crate::http::blocking_client;
use crate::http::testing::{serve_once, serve_silence};
use std::sync::mpsc;
use std::time::{Duration, Instant};

#[test]
fn set_source_bumps_generation_and_forwards_commands() {
    let (tx, rx) = mpsc::channel();
    let mut player = AudioPlayer::detached(tx);

    player.set_source("http://h/podcasts/a.mp3");
    player.play();
    player.pause();

    match rx.try_recv().unwrap() {
        AudioCmd::Load {
            locator,
            generation,
        } => {
            assert_eq!(locator, "http://h/podcasts/a.mp3");
            assert_eq!(generation, 1);
        }
        other => panic!("unexpected command {other:?}"),
    }
    assert!(matches!(rx.try_recv().unwrap(), AudioCmd::Play));
    assert!(matches!(rx.try_recv().unwrap(), AudioCmd::Pause));
}

#[test]
fn events_for_replaced_sources_are_stale() {
    let (tx, _rx) = mpsc::channel();
    let mut player = AudioPlayer::detached(tx);
    assert_eq!(player.generation(), 0);

    player.set_source("a");
    let ended_a = AudioEvent::Ended { generation: 1 };
    assert!(player.is_current(&ended_a));

    player.set_source("b");
    assert!(!player.is_current(&ended_a));
    assert!(player.is_current(&AudioEvent::Failed {
        generation: 2,
        reason: "404".into(),
    }));
}

#[test]
fn commands_after_thread_exit_are_dropped_quietly() {
    let (tx, rx) = mpsc::channel();
    drop(rx);
    let mut player = AudioPlayer::detached(tx);

    player.set_source("a");
    player.play();
    player.set_source("b");
    assert_eq!(player.generation(), 2);
    assert!(!player.is_current(&AudioEvent::Ended { generation: 1 }));
    assert!(player.is_current(&AudioEvent::Ended { generation: 2 }));

    let started = Instant::now();
    player.quit_softly(Duration::from_millis(500));
    // Nothing to join, so no fade is waited for either.
    assert!(started.elapsed() < Duration::from_millis(500));

    // Quitting twice is harmless.
    player.quit_softly(Duration::ZERO);
    assert_eq!(player.generation(), 2);
}

#[test]
fn spawn_fetch_returns_before_the_download_finishes() {
    let addr = serve_silence();
    let (tx, rx) = mpsc::channel();

    let started = Instant::now();
    spawn_fetch(
        blocking_client(None).unwrap(),
        format!("http://{addr}/podcasts/slow.mp3"),
        7,
        tx,
    );
    assert!(started.elapsed() < Duration::from_secs(1));
    assert!(rx.recv_timeout(Duration::from_millis(300)).is_err());
}

#[test]
fn spawn_fetch_delivers_bytes_tagged_with_generation() {
    let addr = serve_once("HTTP/1.1 200 OK", "ID3-not-really");
    let (tx, rx) = mpsc::channel();

    spawn_fetch(
        blocking_client(None).unwrap(),
        format!("http://{addr}/podcasts/a.mp3"),
        3,
        tx,
    );

    let fetched = rx.recv_timeout(Duration::from_secs(10)).unwrap();
    assert_eq!(fetched.generation, 3);
    assert_eq!(fetched.result.unwrap(), b"ID3-not-really".to_vec());
}

#[test]
fn spawn_fetch_reports_http_errors() {
    let addr = serve_once("HTTP/1.1 404 NOT FOUND", "{}");
    let (tx, rx) = mpsc::channel();

    spawn_fetch(
        blocking_client(None).unwrap(),
        format!("http://{addr}/podcasts/missing.mp3"),
        1,
        tx,
    );

    let fetched = rx.recv_timeout(Duration::from_secs(10)).unwrap();
    assert_eq!(fetched.generation, 1);
    match fetched.result {
        Err(err @ SourceError::Status(404)) => {
            assert_eq!(err.to_string(), "HTTP error! status: 404");
        }
        other => panic!("unexpected result {other:?}"),
    }
}

#[test]
fn download_timeout_bounds_a_stalled_fetch() {
    let addr = serve_silence();
    let (tx, rx) = mpsc::channel();

    spawn_fetch(
        blocking_client(Some(Duration::from_millis(300))).unwrap(),
        format!("http://{addr}/podcasts/stalled.mp3"),
        2,
        tx,
    );

    let fetched = rx.recv_timeout(Duration::from_secs(10)).unwrap();
    match fetched.result {
        Err(SourceError::Fetch(err)) => assert!(err.is_timeout(), "{err:?}"),
        other => panic!("unexpected result {other:?}"),
    }
}
