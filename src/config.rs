//! Controller configuration.
//!
//! Every tunable has a default in `constants`; a JSON file may override any
//! subset of them, e.g.
//!
//! ```json
//! { "movement": { "alert_speed": 12.0 }, "lighting": { "flash_interval": 0.1 } }
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::constants::*;
use crate::error::ConfigError;

/// Speed tiers and turn rate for `MovementController`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MovementConfig {
    pub normal_speed: f32,
    pub slow_speed: f32,
    pub alert_speed: f32,
    /// Degrees per second
    pub rotation_speed: f32,
    pub boost_multiplier: f32,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            normal_speed: NORMAL_SPEED,
            slow_speed: SLOW_SPEED,
            alert_speed: ALERT_SPEED,
            rotation_speed: TURN_SPEED_DEGREES,
            boost_multiplier: BOOST_MULTIPLIER,
        }
    }
}

/// Per-mode main light intensities and the alert flash rate
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LightingConfig {
    pub normal_intensity: f32,
    pub stealth_intensity: f32,
    pub alert_intensity: f32,
    /// Seconds between alert light swaps
    pub flash_interval: f32,
}

impl Default for LightingConfig {
    fn default() -> Self {
        Self {
            normal_intensity: NORMAL_INTENSITY,
            stealth_intensity: STEALTH_INTENSITY,
            alert_intensity: ALERT_INTENSITY,
            flash_interval: FLASH_INTERVAL,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SignalConfig {
    /// Degrees per second while the beacon is on
    pub rotation_speed: f32,
    pub intensity: f32,
}

impl Default for SignalConfig {
    fn default() -> Self {
        Self {
            rotation_speed: SIGNAL_ROTATION_DEGREES,
            intensity: SIGNAL_INTENSITY,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AudioConfig {
    pub enabled: bool,
    pub tone_hz: f32,
    pub volume: f32,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            tone_hz: ALERT_TONE_HZ,
            volume: ALERT_VOLUME,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    pub movement: MovementConfig,
    pub lighting: LightingConfig,
    pub signal: SignalConfig,
    pub audio: AudioConfig,
}

impl ControllerConfig {
    /// Parse and validate a JSON config
    pub fn from_json(json: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: ControllerConfig =
            serde_json::from_str(json).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json, path)
    }

    /// Load `path` if it exists, otherwise fall back to defaults
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            log::info!("loading config from {}", path.display());
            Self::load(path)
        } else {
            log::info!("no config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let m = &self.movement;
        for (name, value) in [
            ("movement.normal_speed", m.normal_speed),
            ("movement.slow_speed", m.slow_speed),
            ("movement.alert_speed", m.alert_speed),
            ("movement.rotation_speed", m.rotation_speed),
            ("movement.boost_multiplier", m.boost_multiplier),
            ("lighting.normal_intensity", self.lighting.normal_intensity),
            ("lighting.stealth_intensity", self.lighting.stealth_intensity),
            ("lighting.alert_intensity", self.lighting.alert_intensity),
            ("signal.rotation_speed", self.signal.rotation_speed),
            ("signal.intensity", self.signal.intensity),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::invalid(format!(
                    "{} must be a non-negative number, got {}",
                    name, value
                )));
            }
        }

        let interval = self.lighting.flash_interval;
        if !(interval.is_finite() && interval >= MIN_FLASH_INTERVAL) {
            return Err(ConfigError::invalid(format!(
                "lighting.flash_interval must be at least {}, got {}",
                MIN_FLASH_INTERVAL, interval
            )));
        }

        if !(0.0..=1.0).contains(&self.audio.volume) {
            return Err(ConfigError::invalid(format!(
                "audio.volume must be within 0.0..=1.0, got {}",
                self.audio.volume
            )));
        }

        Ok(())
    }
}
