//! Virtual axis smoothing.

/// Rate at which an axis moves toward a held direction (units per second)
pub const AXIS_SENSITIVITY: f32 = 3.0;
/// Rate at which an axis falls back to zero when released (units per second)
pub const AXIS_GRAVITY: f32 = 3.0;
/// Axis values below this are treated as zero
pub const AXIS_DEAD_ZONE: f32 = 0.001;
