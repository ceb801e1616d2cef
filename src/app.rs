//! Application module: exposes the app model used by the TUI and runtime.
//!
//! The `App` model lives in `app::model` and holds the list view state, the
//! cursor and the playback controller.

mod model;

pub use model::*;

#[cfg(test)]
mod tests;
