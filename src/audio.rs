//! Alert siren playback.
//!
//! The controller only ever plays or stops one looping sound. Playback goes
//! through a `rodio::Sink`; when no output device is available the game runs
//! without a sound handle and every audio call becomes a no-op.

use rodio::source::SineWave;
use rodio::{OutputStream, OutputStreamHandle, Sink, Source};

use crate::config::AudioConfig;

/// Keeps the output device open for as long as sounds may play
pub struct AudioOutput {
    _stream: OutputStream,
    handle: OutputStreamHandle,
}

impl AudioOutput {
    /// Open the default output device, or `None` if there isn't one
    pub fn try_default() -> Option<Self> {
        match OutputStream::try_default() {
            Ok((stream, handle)) => Some(Self {
                _stream: stream,
                handle,
            }),
            Err(e) => {
                log::warn!("no audio output available, alert siren disabled: {}", e);
                None
            }
        }
    }

    /// Create the alert sound on this device
    pub fn alert_sound(&self, config: &AudioConfig) -> Option<AlertSound> {
        match Sink::try_new(&self.handle) {
            Ok(sink) => Some(AlertSound::new(sink, config)),
            Err(e) => {
                log::warn!("failed to create alert sink: {}", e);
                None
            }
        }
    }
}

/// Handle for the looping alert siren
pub struct AlertSound {
    sink: Sink,
    tone_hz: f32,
    volume: f32,
    /// Whether the siren source has been queued on the sink
    queued: bool,
}

impl AlertSound {
    /// Wrap a sink. The sink is paused until `play` is called.
    pub fn new(sink: Sink, config: &AudioConfig) -> Self {
        sink.pause();
        Self {
            sink,
            tone_hz: config.tone_hz,
            volume: config.volume,
            queued: false,
        }
    }

    pub fn play(&mut self) {
        // The tone is endless, so it only needs queueing once; afterwards
        // play/stop just unpause/pause the sink.
        if !self.queued {
            self.sink
                .append(SineWave::new(self.tone_hz).amplify(self.volume));
            self.queued = true;
        }
        self.sink.play();
    }

    pub fn stop(&mut self) {
        self.sink.pause();
    }

    pub fn is_playing(&self) -> bool {
        self.queued && !self.sink.is_paused()
    }
}

impl Drop for AlertSound {
    fn drop(&mut self) {
        self.sink.pause();
    }
}

#[cfg(test)]
pub(crate) fn idle_alert_sound() -> AlertSound {
    let (sink, _queue) = Sink::new_idle();
    AlertSound::new(sink, &AudioConfig::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_sound_is_stopped() {
        let sound = idle_alert_sound();
        assert!(!sound.is_playing());
    }

    #[test]
    fn test_play_then_stop() {
        let mut sound = idle_alert_sound();
        sound.play();
        assert!(sound.is_playing());
        sound.stop();
        assert!(!sound.is_playing());
    }

    #[test]
    fn test_replay_does_not_requeue() {
        let mut sound = idle_alert_sound();
        sound.play();
        sound.stop();
        sound.play();
        assert!(sound.is_playing());
        assert_eq!(sound.sink.len(), 1);
    }
}
