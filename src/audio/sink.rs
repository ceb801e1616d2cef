//! Turning downloaded bytes into a ready-to-play `rodio` sink.

use std::io::Cursor;

use rodio::{Decoder, OutputStream, Sink};

use super::fetch::SourceError;

/// Decode `bytes` into a paused `Sink` connected to `stream`.
pub(super) fn sink_from_bytes(
    stream: &OutputStream,
    bytes: Vec<u8>,
    volume: f32,
) -> Result<Sink, SourceError> {
    let source = Decoder::new(Cursor::new(bytes))?;

    let sink = Sink::connect_new(stream.mixer());
    sink.set_volume(volume);
    sink.append(source);
    sink.pause();
    Ok(sink)
}
