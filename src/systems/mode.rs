//! Mode state machine and the lighting/audio effects it drives.
//!
//! Every `set_mode` re-applies the full effect set for the destination mode,
//! self-transitions included. The alert flasher is stopped and both alert
//! lights forced off before anything else is applied, so no transition ever
//! leaves a stale alert light on.

use hecs::{Entity, World};

use crate::audio::AlertSound;
use crate::components::{Light, Mode};
use crate::config::LightingConfig;
use crate::constants::MIN_FLASH_INTERVAL;
use crate::events::{ControllerEvent, EventQueue};
use crate::time_system::RepeatingTimer;

/// Owns the current mode and the light/sound state that depends on it
pub struct ModeController {
    mode: Mode,
    config: LightingConfig,
    main_light: Option<Entity>,
    alert_lights: [Option<Entity>; 2],
    alert_sound: Option<AlertSound>,
    flash_timer: RepeatingTimer,
    /// Enabled state of the first alert light; the second is always the opposite
    flash_phase: bool,
}

impl ModeController {
    pub fn new(config: LightingConfig) -> Self {
        let flash_timer = RepeatingTimer::new(config.flash_interval.max(MIN_FLASH_INTERVAL));
        Self {
            mode: Mode::Normal,
            config,
            main_light: None,
            alert_lights: [None, None],
            alert_sound: None,
            flash_timer,
            flash_phase: false,
        }
    }

    pub fn with_main_light(mut self, light: Entity) -> Self {
        self.main_light = Some(light);
        self
    }

    pub fn with_alert_lights(mut self, first: Entity, second: Entity) -> Self {
        self.alert_lights = [Some(first), Some(second)];
        self
    }

    pub fn with_alert_sound(mut self, sound: Option<AlertSound>) -> Self {
        self.alert_sound = sound;
        self
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_flashing(&self) -> bool {
        self.flash_timer.is_running()
    }

    pub fn flash_phase(&self) -> bool {
        self.flash_phase
    }

    pub fn is_alert_sound_playing(&self) -> bool {
        self.alert_sound.as_ref().is_some_and(|s| s.is_playing())
    }

    /// Intensity the main light takes in `mode`
    pub fn intensity_for_mode(&self, mode: Mode) -> f32 {
        match mode {
            Mode::Normal => self.config.normal_intensity,
            Mode::Stealth => self.config.stealth_intensity,
            Mode::Alert => self.config.alert_intensity,
        }
    }

    /// Put lights and sound into the Normal configuration. Called once at spawn.
    pub fn activate(&mut self, world: &World) {
        self.apply(world, Mode::Normal);
    }

    /// Stop the flasher, switch the alert lights off and silence the siren.
    /// Called before the entity goes away so nothing keeps running on its behalf.
    pub fn deactivate(&mut self, world: &World) {
        self.stop_flashing(world);
        if let Some(sound) = self.alert_sound.as_mut() {
            sound.stop();
        }
    }

    /// Transition to `mode`, re-running its side effects even if it's already current
    pub fn set_mode(&mut self, world: &World, mode: Mode, events: &mut EventQueue) {
        let from = self.mode;
        self.apply(world, mode);
        log::info!("mode changed: {} -> {}", from, mode);
        events.push(ControllerEvent::ModeChanged { from, to: mode });
    }

    /// Apply a mode request coming from the keyboard, if any
    pub fn handle_input(&mut self, world: &World, request: Option<Mode>, events: &mut EventQueue) {
        if let Some(mode) = request {
            self.set_mode(world, mode, events);
        }
    }

    /// Advance the flasher by `dt`, swapping the alert lights once per elapsed interval
    pub fn update(&mut self, world: &World, dt: f32, events: &mut EventQueue) {
        puffin::profile_function!();

        let fired = self.flash_timer.advance(dt);
        for _ in 0..fired {
            self.flash_phase = !self.flash_phase;
            self.set_alert_lights(world, self.flash_phase, !self.flash_phase);
            log::debug!("alert flash: phase={}", self.flash_phase);
            events.push(ControllerEvent::AlertFlash {
                phase: self.flash_phase,
            });
        }
    }

    fn apply(&mut self, world: &World, mode: Mode) {
        // Old flasher goes first; nothing of the new mode may be observed
        // while alert lights from the previous run are still lit.
        self.stop_flashing(world);

        self.mode = mode;
        let intensity = self.intensity_for_mode(mode);
        if let Some(mut light) = self.main_light.and_then(|e| world.get::<&mut Light>(e).ok()) {
            light.intensity = intensity;
        }

        match mode {
            Mode::Alert => {
                self.flash_phase = false;
                self.flash_timer.start();
                if let Some(sound) = self.alert_sound.as_mut() {
                    sound.play();
                }
            }
            Mode::Normal | Mode::Stealth => {
                if let Some(sound) = self.alert_sound.as_mut() {
                    sound.stop();
                }
            }
        }
    }

    fn stop_flashing(&mut self, world: &World) {
        self.flash_timer.cancel();
        self.set_alert_lights(world, false, false);
    }

    fn set_alert_lights(&self, world: &World, first: bool, second: bool) {
        for (entity, enabled) in self.alert_lights.into_iter().zip([first, second]) {
            if let Some(mut light) = entity.and_then(|e| world.get::<&mut Light>(e).ok()) {
                light.enabled = enabled;
            }
        }
    }
}
