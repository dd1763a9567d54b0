//! Movement tuning defaults.

/// Walking speed in Normal mode (units per second)
pub const NORMAL_SPEED: f32 = 5.0;
/// Creeping speed in Stealth mode (units per second)
pub const SLOW_SPEED: f32 = 2.0;
/// Running speed in Alert mode (units per second)
pub const ALERT_SPEED: f32 = 10.0;
/// Turn rate when steering left/right (degrees per second)
pub const TURN_SPEED_DEGREES: f32 = 100.0;
/// Speed multiplier while Shift is held in Normal mode
pub const BOOST_MULTIPLIER: f32 = 1.8;
