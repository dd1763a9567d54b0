use std::f32::consts::TAU;
use std::fmt;

use glam::Vec3;

/// Behavioral regime of the patroller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    #[default]
    Normal,
    Stealth,
    Alert,
}

impl Mode {
    pub fn name(&self) -> &'static str {
        match self {
            Mode::Normal => "Normal",
            Mode::Stealth => "Stealth",
            Mode::Alert => "Alert",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Transform component - world position plus heading around the vertical axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    /// Heading in radians, always within [0, TAU)
    pub yaw: f32,
}

impl Transform {
    pub fn new(position: Vec3) -> Self {
        Self { position, yaw: 0.0 }
    }

    /// Unit vector the entity is facing. Yaw 0 faces +Z, positive yaw turns toward +X.
    pub fn forward(&self) -> Vec3 {
        Vec3::new(self.yaw.sin(), 0.0, self.yaw.cos())
    }

    /// Move along the current facing
    pub fn translate_forward(&mut self, distance: f32) {
        self.position += self.forward() * distance;
    }

    /// Turn by `radians`, wrapping into [0, TAU)
    pub fn rotate_yaw(&mut self, radians: f32) {
        let yaw = (self.yaw + radians).rem_euclid(TAU);
        // rem_euclid rounds tiny negative sums up to exactly TAU
        self.yaw = if yaw >= TAU { 0.0 } else { yaw };
    }

    pub fn yaw_degrees(&self) -> f32 {
        self.yaw.to_degrees()
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::new(Vec3::ZERO)
    }
}

/// Light component - owned by whichever controller drives it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    pub intensity: f32,
    pub enabled: bool,
}

impl Light {
    pub fn new(intensity: f32) -> Self {
        Self {
            intensity,
            enabled: true,
        }
    }

    pub fn disabled(intensity: f32) -> Self {
        Self {
            intensity,
            enabled: false,
        }
    }
}

/// Patroller marker component
#[derive(Debug, Clone, Copy)]
pub struct Patroller;

/// Signal beacon marker component
#[derive(Debug, Clone, Copy)]
pub struct Beacon;
