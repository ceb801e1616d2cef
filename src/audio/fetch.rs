//! Downloading episode bytes off the audio thread.

use std::sync::mpsc::Sender;
use std::thread;

use rodio::decoder::DecoderError;
use thiserror::Error;

use super::types::Generation;

#[derive(Debug, Error)]
pub(super) enum SourceError {
    #[error("request failed: {0}")]
    Fetch(#[from] reqwest::Error),
    #[error("HTTP error! status: {0}")]
    Status(u16),
    #[error("cannot decode audio: {0}")]
    Decode(#[from] DecoderError),
}

/// Bytes for one source, tagged with the generation that asked for them.
#[derive(Debug)]
pub(super) struct Fetched {
    pub generation: Generation,
    pub result: Result<Vec<u8>, SourceError>,
}

pub(super) fn fetch_bytes(
    client: &reqwest::blocking::Client,
    locator: &str,
) -> Result<Vec<u8>, SourceError> {
    let response = client.get(locator).send()?;
    let status = response.status();
    if !status.is_success() {
        return Err(SourceError::Status(status.as_u16()));
    }
    Ok(response.bytes()?.to_vec())
}

/// Download `locator` on a worker and send the result to `tx`.
///
/// Returns immediately. A result nobody waits for anymore is dropped.
pub(super) fn spawn_fetch(
    client: reqwest::blocking::Client,
    locator: String,
    generation: Generation,
    tx: Sender<Fetched>,
) {
    thread::spawn(move || {
        let result = fetch_bytes(&client, &locator);
        let _ = tx.send(Fetched { generation, result });
    });
}
