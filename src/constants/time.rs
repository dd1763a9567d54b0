//! Frame timing constants.

/// Cap on a single frame's delta so a stalled window doesn't burst the flasher (seconds)
pub const MAX_FRAME_DT: f32 = 0.25;
/// Target frame period for the event loop (seconds)
pub const TARGET_FRAME_DT: f32 = 1.0 / 60.0;
