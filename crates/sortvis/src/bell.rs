#![forbid(unsafe_code)]

//! Terminal bell tone backend for interactive mode.
//!
//! A terminal bell has no pitch, so each tone is rendered as a BEL byte.
//! Bells closer together than one tone duration are dropped to keep fast
//! runs from turning into a continuous buzz.

use std::io::{self, Write};
use std::time::Instant;

use sortvis_core::tone::{Tone, ToneBackend, ToneError, ToneSink};

const BEL: &[u8] = b"\x07";

/// Backend that rings the terminal bell on stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct BellBackend;

impl ToneBackend for BellBackend {
    fn open(&self) -> Result<Box<dyn ToneSink>, ToneError> {
        Ok(Box::new(BellSink::new(io::stdout())))
    }
}

/// Sink that writes one BEL per accepted tone to `out`.
pub struct BellSink<W> {
    out: W,
    last: Option<Instant>,
}

impl<W: Write> BellSink<W> {
    pub fn new(out: W) -> Self {
        Self { out, last: None }
    }
}

impl<W: Write> ToneSink for BellSink<W> {
    fn play(&mut self, tone: Tone) -> Result<(), ToneError> {
        let now = Instant::now();
        if let Some(last) = self.last
            && now.duration_since(last) < tone.duration
        {
            return Ok(());
        }
        self.last = Some(now);
        self.out
            .write_all(BEL)
            .and_then(|()| self.out.flush())
            .map_err(|e| ToneError::Playback(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn first_tone_rings_once() {
        let mut sink = BellSink::new(Vec::new());
        sink.play(Tone::for_value(5, 10)).unwrap();
        assert_eq!(sink.out, BEL);
    }

    #[test]
    fn tones_inside_one_duration_are_dropped() {
        let mut sink = BellSink::new(Vec::new());
        let tone = Tone {
            duration: Duration::from_secs(60),
            ..Tone::for_value(1, 10)
        };
        for _ in 0..5 {
            sink.play(tone).unwrap();
        }
        assert_eq!(sink.out, BEL);
    }

    #[test]
    fn zero_duration_tones_always_ring() {
        let mut sink = BellSink::new(Vec::new());
        let tone = Tone {
            duration: Duration::ZERO,
            ..Tone::for_value(1, 10)
        };
        sink.play(tone).unwrap();
        sink.play(tone).unwrap();
        assert_eq!(sink.out, b"\x07\x07");
    }

    #[test]
    fn write_failure_is_a_playback_error() {
        struct Broken;
        impl Write for Broken {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::Error::other("closed"))
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }
        let mut sink = BellSink::new(Broken);
        let err = sink.play(Tone::for_value(1, 10)).unwrap_err();
        assert!(matches!(err, ToneError::Playback(_)));
    }
}
