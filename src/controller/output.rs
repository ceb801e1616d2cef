/// The platform capability that actually renders sound.
///
/// One source at a time. End-of-media is reported out of band: whoever
/// drives the implementation calls `PlaybackController::on_playback_ended`.
pub trait AudioOutput {
    /// Replace the current source. Whatever was playing stops.
    fn set_source(&mut self, locator: &str);
    fn play(&mut self);
    fn pause(&mut self);
}
