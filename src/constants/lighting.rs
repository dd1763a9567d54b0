//! Main light and alert light parameters.

/// Main light intensity in Normal mode
pub const NORMAL_INTENSITY: f32 = 1.0;
/// Main light intensity in Stealth mode (dimmed)
pub const STEALTH_INTENSITY: f32 = 0.2;
/// Main light intensity in Alert mode
pub const ALERT_INTENSITY: f32 = 1.4;
/// Seconds between alert light swaps
pub const FLASH_INTERVAL: f32 = 0.2;
/// Shortest flash interval a config may ask for (seconds)
pub const MIN_FLASH_INTERVAL: f32 = 0.01;

/// Beacon sweep rate while the signal is on (degrees per second)
pub const SIGNAL_ROTATION_DEGREES: f32 = 10.0;
/// Beacon spotlight intensity
pub const SIGNAL_INTENSITY: f32 = 3.0;
