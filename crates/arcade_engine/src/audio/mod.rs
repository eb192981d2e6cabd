//! Audio boundary
//!
//! Playback lives outside the core: game systems fire best-effort sound
//! cues through [`AudioSink`] and carry on regardless of the outcome. A
//! suspended audio context or a missing device is a warning, never an
//! error that reaches the scheduler.

use std::fmt;

/// Sound cues the shipped systems can fire
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Ball bounced off a wall or paddle
    Bounce,

    /// A side scored
    Score,

    /// The match ended
    GameOver,
}

impl fmt::Display for SoundEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Bounce => "bounce",
            Self::Score => "score",
            Self::GameOver => "game_over",
        };
        write!(f, "{name}")
    }
}

/// Playback failure reported by a sink
#[derive(thiserror::Error, Debug)]
pub enum AudioError {
    /// The backing audio context is not available
    #[error("audio context unavailable: {0}")]
    ContextUnavailable(String),

    /// The sink has no sample for this effect
    #[error("no sample loaded for {0}")]
    MissingSample(SoundEffect),
}

/// External playback boundary
pub trait AudioSink {
    /// Start playing an effect
    fn play(&mut self, effect: SoundEffect) -> Result<(), AudioError>;

    /// Stop an effect if it is playing
    fn stop(&mut self, effect: SoundEffect) -> Result<(), AudioError>;
}

/// Sink that plays nothing; the default for headless use
#[derive(Debug, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&mut self, _effect: SoundEffect) -> Result<(), AudioError> {
        Ok(())
    }

    fn stop(&mut self, _effect: SoundEffect) -> Result<(), AudioError> {
        Ok(())
    }
}

/// Fire an effect, logging and swallowing any failure
pub fn play_best_effort(sink: &mut dyn AudioSink, effect: SoundEffect) {
    if let Err(err) = sink.play(effect) {
        log::warn!("audio playback failed for {effect}: {err}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingSink;

    impl AudioSink for FailingSink {
        fn play(&mut self, _effect: SoundEffect) -> Result<(), AudioError> {
            Err(AudioError::ContextUnavailable("suspended".into()))
        }

        fn stop(&mut self, _effect: SoundEffect) -> Result<(), AudioError> {
            Ok(())
        }
    }

    #[test]
    fn test_failures_are_swallowed() {
        let mut sink = FailingSink;
        // Must not panic or propagate
        play_best_effort(&mut sink, SoundEffect::Bounce);
    }

    #[test]
    fn test_null_audio_accepts_everything() {
        let mut sink = NullAudio;
        assert!(sink.play(SoundEffect::Score).is_ok());
        assert!(sink.stop(SoundEffect::Score).is_ok());
    }
}
