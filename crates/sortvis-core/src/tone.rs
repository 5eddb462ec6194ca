#![forbid(unsafe_code)]

//! Optional tone side channel.
//!
//! On steps where an element is being compared or moved, a short tone whose
//! pitch follows the element's value may be played. The channel is pure
//! side effect: nothing it does feeds back into a run, and every failure is
//! logged and swallowed.
//!
//! Audio hardware is a scoped resource. A [`ToneBackend`] opens a
//! [`ToneSink`] when sound is enabled; the resulting [`ToneChannel`] is
//! dropped when sound is disabled or the session goes away, which releases
//! the sink.
//!
//! # Failure Modes
//!
//! - Backend refuses to open: the session logs a warning and stays silent.
//! - A single tone fails: logged at `warn`, the step is still consumed.

use std::fmt;
use std::time::Duration;

use crate::element::Step;

/// Frequency for the smallest value.
pub const MIN_FREQUENCY_HZ: f32 = 200.0;
/// Width of the audible band values are mapped across.
pub const BAND_HZ: f32 = 800.0;
/// Length of each tone.
pub const TONE_DURATION: Duration = Duration::from_millis(100);
/// Output gain for each tone.
pub const TONE_GAIN: f32 = 0.1;

/// A single tone request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    /// Pitch in hertz.
    pub frequency_hz: f32,
    /// How long the tone sounds.
    pub duration: Duration,
    /// Output gain in `0.0..=1.0`.
    pub gain: f32,
}

impl Tone {
    /// Map `value` linearly onto `[MIN_FREQUENCY_HZ, MIN_FREQUENCY_HZ + BAND_HZ]`.
    #[must_use]
    pub fn for_value(value: u32, max_value: u32) -> Self {
        let ratio = if max_value == 0 {
            0.0
        } else {
            (value as f32 / max_value as f32).clamp(0.0, 1.0)
        };
        Self {
            frequency_hz: MIN_FREQUENCY_HZ + ratio * BAND_HZ,
            duration: TONE_DURATION,
            gain: TONE_GAIN,
        }
    }
}

/// Errors raised by tone backends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToneError {
    /// The platform refused to provide an output device.
    Unavailable(String),
    /// A tone could not be played on an open device.
    Playback(String),
}

impl fmt::Display for ToneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable(msg) => write!(f, "audio unavailable: {msg}"),
            Self::Playback(msg) => write!(f, "audio playback error: {msg}"),
        }
    }
}

impl std::error::Error for ToneError {}

/// An open audio output.
pub trait ToneSink {
    /// Play one tone. Must not block for the tone's duration.
    fn play(&mut self, tone: Tone) -> Result<(), ToneError>;
}

/// Factory for [`ToneSink`]s.
pub trait ToneBackend {
    /// Acquire an output device.
    fn open(&self) -> Result<Box<dyn ToneSink>, ToneError>;
}

/// Backend that discards every tone. The headless default.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentBackend;

struct SilentSink;

impl ToneSink for SilentSink {
    fn play(&mut self, _tone: Tone) -> Result<(), ToneError> {
        Ok(())
    }
}

impl ToneBackend for SilentBackend {
    fn open(&self) -> Result<Box<dyn ToneSink>, ToneError> {
        Ok(Box::new(SilentSink))
    }
}

/// Backend that reports each tone as a `trace` event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TraceBackend;

struct TraceSink;

impl ToneSink for TraceSink {
    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    fn play(&mut self, tone: Tone) -> Result<(), ToneError> {
        crate::trace!(
            frequency_hz = tone.frequency_hz,
            duration_ms = tone.duration.as_millis() as u64,
            "tone"
        );
        Ok(())
    }
}

impl ToneBackend for TraceBackend {
    fn open(&self) -> Result<Box<dyn ToneSink>, ToneError> {
        Ok(Box::new(TraceSink))
    }
}

/// An acquired sink. Dropping the channel releases it.
pub struct ToneChannel {
    sink: Box<dyn ToneSink>,
}

impl ToneChannel {
    /// Acquire a sink from `backend`.
    pub fn open(backend: &dyn ToneBackend) -> Result<Self, ToneError> {
        let sink = backend.open()?;
        crate::debug!("tone channel opened");
        Ok(Self { sink })
    }

    /// Play a tone for the first active element of `step`, if any.
    ///
    /// Errors are logged and dropped.
    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    pub fn emit_for(&mut self, step: &Step) {
        let Some((_, element)) = step.active_elements().next() else {
            return;
        };
        let tone = Tone::for_value(element.value, step.len() as u32);
        if let Err(err) = self.sink.play(tone) {
            crate::warn!(error = %err, "tone playback failed");
        }
    }
}

impl Drop for ToneChannel {
    fn drop(&mut self) {
        crate::debug!("tone channel released");
    }
}

impl fmt::Debug for ToneChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToneChannel").finish_non_exhaustive()
    }
}
