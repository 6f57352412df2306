//! Audio output abstraction
//!
//! The controller drives playback through [`AudioOutput`] and never touches
//! a device directly, so the decode/device layer (and tests) plug in behind
//! a trait seam. Equalization rides on [`AudioGraph`]: the controller
//! forwards settings verbatim and applies no curves or clamping of its own.

use crate::error::Result;
use crate::types::EqSettings;
use aria_core::SourceHandle;

/// Sink the controller plays tracks through.
///
/// Implementations own decode and device state. `load` replaces whatever
/// source was previously loaded; `play` may refuse (device lost, decode
/// failure) and the controller treats a refusal as staying paused.
pub trait AudioOutput {
    /// Replace the loaded source with `source`, positioned at its start
    fn load(&mut self, source: &SourceHandle);

    /// Begin or resume playback of the loaded source
    fn play(&mut self) -> Result<()>;

    /// Pause playback, holding position
    fn pause(&mut self);

    /// Jump to an absolute position, in seconds
    fn seek(&mut self, seconds: f64);

    /// Current playback position, in seconds
    fn current_time(&self) -> f64;

    /// Duration of the loaded source, in seconds (0.0 when unknown)
    fn duration(&self) -> f64;

    /// Set the output gain, 0.0 to 1.0
    fn set_volume(&mut self, gain: f32);
}

/// Processing graph that consumes equalizer settings.
pub trait AudioGraph {
    /// Apply `settings` to the graph
    fn apply(&mut self, settings: &EqSettings);
}
