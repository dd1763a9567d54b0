//! Window defaults.

/// Default window width
pub const WINDOW_DEFAULT_WIDTH: u32 = 640;
/// Default window height
pub const WINDOW_DEFAULT_HEIGHT: u32 = 360;
/// Window title prefix
pub const WINDOW_TITLE: &str = "Patrol Controller";
