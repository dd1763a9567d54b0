//! Controller systems, one per concern:
//! - `mode`: Normal/Stealth/Alert state machine, main light, alert flasher and siren
//! - `movement`: mode-dependent walking speed, boost and turning
//! - `signal`: the toggleable sweeping beacon

pub mod mode;
pub mod movement;
pub mod signal;

pub use mode::ModeController;
pub use movement::{MovementController, MovementInput};
pub use signal::SignalToggle;
