//! Controller constants organized by domain.
//!
//! These are the defaults behind `config::ControllerConfig`; a config file
//! overrides any of them at startup.

mod audio;
mod input;
mod lighting;
mod movement;
mod time;
mod window;

pub use audio::*;
pub use input::*;
pub use lighting::*;
pub use movement::*;
pub use time::*;
pub use window::*;
