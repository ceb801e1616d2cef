//! Catalog loading: fetching the list of episodes from the server and
//! turning identifiers into `Track` values, plus per-episode transcripts.

mod fetch;
mod label;
mod model;
mod transcript;

#[cfg(test)]
pub use fetch::CatalogError;
pub use fetch::{CatalogOutcome, spawn_loader};
pub use label::resource_locator;
pub use model::Track;
pub use transcript::{TranscriptError, TranscriptOutcome, spawn_transcript_fetch, transcript_url};
