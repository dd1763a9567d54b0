//! Patroller movement system.
//!
//! Speed depends on the current mode; Shift boosts only in Normal mode.
//! Axis values are used as given (no clamping), so an out-of-range axis
//! simply scales the motion.

use hecs::World;

use crate::components::{Mode, Transform};
use crate::config::MovementConfig;

/// Per-frame movement input
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MovementInput {
    /// Forward/back axis, nominally -1.0..=1.0
    pub forward: f32,
    /// Turn axis, nominally -1.0..=1.0 (positive turns right)
    pub turn: f32,
    pub boost_held: bool,
}

/// Movement component - speed tiers for each mode
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovementController {
    pub normal_speed: f32,
    pub slow_speed: f32,
    pub alert_speed: f32,
    /// Degrees per second
    pub rotation_speed: f32,
    pub boost_multiplier: f32,
}

impl MovementController {
    pub fn new(config: &MovementConfig) -> Self {
        Self {
            normal_speed: config.normal_speed,
            slow_speed: config.slow_speed,
            alert_speed: config.alert_speed,
            rotation_speed: config.rotation_speed,
            boost_multiplier: config.boost_multiplier,
        }
    }

    pub fn speed_for_mode(&self, mode: Mode) -> f32 {
        match mode {
            Mode::Normal => self.normal_speed,
            Mode::Stealth => self.slow_speed,
            Mode::Alert => self.alert_speed,
        }
    }

    /// Speed for this frame, including the Normal-mode boost
    pub fn effective_speed(&self, mode: Mode, boost_held: bool) -> f32 {
        let speed = self.speed_for_mode(mode);
        if mode == Mode::Normal && boost_held {
            speed * self.boost_multiplier
        } else {
            speed
        }
    }

    /// Move along the current facing, then turn
    pub fn tick(&self, transform: &mut Transform, dt: f32, input: MovementInput, mode: Mode) {
        let speed = self.effective_speed(mode, input.boost_held);
        transform.translate_forward(input.forward * speed * dt);
        transform.rotate_yaw((input.turn * self.rotation_speed * dt).to_radians());
    }
}

impl Default for MovementController {
    fn default() -> Self {
        Self::new(&MovementConfig::default())
    }
}

/// Apply movement to every entity with a `MovementController`
pub fn update_movement(world: &mut World, dt: f32, input: MovementInput, mode: Mode) {
    puffin::profile_function!();

    for (_, (controller, transform)) in world.query_mut::<(&MovementController, &mut Transform)>() {
        controller.tick(transform, dt, input, mode);
    }
}
