//! Single-selection playback controller.
//!
//! Guarantees that at most one row is marked playing at any time. The
//! decision logic lives in the pure `transition` function; the
//! `PlaybackController` applies the resulting effects to its rows and to the
//! one `AudioOutput` it owns.

mod output;
mod playback;
mod state;
mod transition;

pub use output::AudioOutput;
pub use playback::{PlaybackController, Row};
pub use state::{Icon, RowView};

#[cfg(test)]
pub(crate) mod testing;
