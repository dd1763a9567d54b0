//! Alert siren parameters.

/// Siren tone frequency (Hz)
pub const ALERT_TONE_HZ: f32 = 880.0;
/// Siren volume (0.0 - 1.0)
pub const ALERT_VOLUME: f32 = 0.2;
