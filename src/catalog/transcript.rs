use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::http::blocking_client;

#[derive(Debug, Error)]
pub enum TranscriptError {
    #[error("transcript not found")]
    NotFound,
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("HTTP error! status: {0}")]
    Status(u16),
    #[error("response is not a transcript: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Result of one transcript request, keyed by the episode it was for.
#[derive(Debug)]
pub struct TranscriptOutcome {
    pub identifier: String,
    pub result: Result<String, TranscriptError>,
}

#[derive(Deserialize)]
struct TranscriptBody {
    transcript: String,
}

/// URL of the transcript for `identifier`.
///
/// Only `category/filename` identifiers from a categorized catalog have one.
pub fn transcript_url(endpoint: &str, identifier: &str) -> Option<String> {
    let (category, filename) = identifier.split_once('/')?;
    if category.is_empty() || filename.is_empty() || filename.contains('/') {
        return None;
    }
    Some(format!(
        "{}/{}/{}",
        endpoint.trim_end_matches('/'),
        category,
        filename
    ))
}

/// Fetch one transcript with a single GET request.
pub fn fetch_transcript(client: &reqwest::blocking::Client, url: &str) -> Result<String, TranscriptError> {
    let response = client.get(url).send()?;
    let status = response.status();
    if status == reqwest::StatusCode::NOT_FOUND {
        return Err(TranscriptError::NotFound);
    }
    if !status.is_success() {
        return Err(TranscriptError::Status(status.as_u16()));
    }
    let body = response.text()?;
    let parsed: TranscriptBody = serde_json::from_str(&body).map_err(TranscriptError::Decode)?;
    Ok(parsed.transcript)
}

/// Fetch the transcript at `url` on a worker thread. Exactly one outcome is sent.
pub fn spawn_transcript_fetch(
    url: String,
    identifier: String,
    timeout: Option<Duration>,
) -> Receiver<TranscriptOutcome> {
    let (tx, rx) = mpsc::channel::<TranscriptOutcome>();

    thread::spawn(move || {
        tracing::info!(%url, "fetching transcript");

        let result = blocking_client(timeout)
            .map_err(TranscriptError::from)
            .and_then(|client| fetch_transcript(&client, &url));
        if let Err(ref err) = result {
            tracing::warn!(%identifier, "failed to fetch transcript: {err}");
        }

        let _ = tx.send(TranscriptOutcome { identifier, result });
    });

    rx
}
