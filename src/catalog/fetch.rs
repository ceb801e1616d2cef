use std::collections::BTreeMap;
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::http::blocking_client;

use super::model::Track;

/// Reasons the catalog could not be loaded.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("HTTP error! status: {0}")]
    Status(u16),
    #[error("response is not valid JSON: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("unexpected catalog shape: {0}")]
    Shape(#[source] serde_json::Error),
}

/// The single result delivered by the loader thread.
#[derive(Debug)]
pub enum CatalogOutcome {
    Loaded(Vec<Track>),
    Failed(CatalogError),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogBody {
    /// `["a.mp3", "b.mp3"]`
    Flat(Vec<String>),
    /// `{"tech": [{"filename": "a.mp3", ...}, ...], ...}`
    Categorized(BTreeMap<String, Vec<CategorizedEntry>>),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CategorizedEntry {
    Name(String),
    Entry { filename: String },
}

impl CategorizedEntry {
    fn into_filename(self) -> String {
        match self {
            Self::Name(name) => name,
            Self::Entry { filename } => filename,
        }
    }
}

/// Parse a catalog response body into tracks, keeping server order.
///
/// Categorized listings are flattened in category name order and their
/// identifiers become `category/filename`.
pub fn parse_catalog(body: &str, label_suffix: &str) -> Result<Vec<Track>, CatalogError> {
    let value: serde_json::Value = serde_json::from_str(body).map_err(CatalogError::Decode)?;
    let parsed: CatalogBody = serde_json::from_value(value).map_err(CatalogError::Shape)?;

    let identifiers: Vec<String> = match parsed {
        CatalogBody::Flat(ids) => ids,
        CatalogBody::Categorized(categories) => categories
            .into_iter()
            .flat_map(|(category, entries)| {
                entries
                    .into_iter()
                    .map(move |e| format!("{}/{}", category, e.into_filename()))
            })
            .collect(),
    };

    Ok(identifiers
        .into_iter()
        .map(|id| Track::new(id, label_suffix))
        .collect())
}

/// Fetch and parse the catalog at `url` with a single GET request.
pub fn fetch_catalog(
    client: &reqwest::blocking::Client,
    url: &str,
    label_suffix: &str,
) -> Result<Vec<Track>, CatalogError> {
    let response = client.get(url).send()?;
    let status = response.status();
    if !status.is_success() {
        return Err(CatalogError::Status(status.as_u16()));
    }
    let body = response.text()?;
    parse_catalog(&body, label_suffix)
}

/// Fetch the catalog on a worker thread. Exactly one outcome is sent.
///
/// `timeout` of `None` leaves the request open until the server answers.
pub fn spawn_loader(url: String, timeout: Option<Duration>, label_suffix: String) -> Receiver<CatalogOutcome> {
    let (tx, rx) = mpsc::channel::<CatalogOutcome>();

    thread::spawn(move || {
        tracing::info!(%url, "fetching podcast catalog");

        let result = blocking_client(timeout)
            .map_err(CatalogError::from)
            .and_then(|client| fetch_catalog(&client, &url, &label_suffix));

        let outcome = match result {
            Ok(tracks) => {
                tracing::info!(count = tracks.len(), "podcast catalog loaded");
                CatalogOutcome::Loaded(tracks)
            }
            Err(err) => {
                tracing::error!("failed to fetch podcasts: {err}");
                CatalogOutcome::Failed(err)
            }
        };

        // The receiver is gone only if the UI already quit.
        let _ = tx.send(outcome);
    });

    rx
}
