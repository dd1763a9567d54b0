//! Signal beacon: a spotlight toggled with a key that sweeps while on.
//!
//! Independent of the patroller's mode.

use hecs::{Entity, World};

use crate::components::{Light, Transform};
use crate::config::SignalConfig;
use crate::events::{ControllerEvent, EventQueue};

/// Signal component - on/off state of the beacon and the spotlight it drives
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignalToggle {
    pub on: bool,
    pub light: Option<Entity>,
    /// Degrees per second while on
    pub rotation_speed: f32,
}

impl SignalToggle {
    pub fn new(config: &SignalConfig, light: Option<Entity>) -> Self {
        Self {
            on: false,
            light,
            rotation_speed: config.rotation_speed,
        }
    }

    /// Force the beacon off at spawn
    pub fn activate(&mut self, world: &World) {
        self.on = false;
        self.sync_light(world);
    }

    pub fn toggle(&mut self, world: &World, events: &mut EventQueue) {
        self.on = !self.on;
        self.sync_light(world);
        log::info!("signal {}", if self.on { "on" } else { "off" });
        events.push(ControllerEvent::SignalToggled { on: self.on });
    }

    /// Sweep the beacon while it's on
    pub fn update(&self, transform: &mut Transform, dt: f32) {
        if self.on {
            transform.rotate_yaw((self.rotation_speed * dt).to_radians());
        }
    }

    fn sync_light(&self, world: &World) {
        if let Some(mut light) = self.light.and_then(|e| world.get::<&mut Light>(e).ok()) {
            light.enabled = self.on;
        }
    }
}

/// Toggle every beacon if requested, then sweep the ones that are on
pub fn update_signals(world: &mut World, toggle_pressed: bool, dt: f32, events: &mut EventQueue) {
    puffin::profile_function!();

    if toggle_pressed {
        for (_, signal) in world.query::<&mut SignalToggle>().iter() {
            signal.toggle(world, events);
        }
    }

    for (_, (signal, transform)) in world.query_mut::<(&SignalToggle, &mut Transform)>() {
        signal.update(transform, dt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::*;

    fn beacon(world: &mut World) -> (Entity, Entity) {
        let light = world.spawn((Light::new(SIGNAL_INTENSITY),));
        let mut signal = SignalToggle::new(&SignalConfig::default(), Some(light));
        signal.activate(world);
        let beacon = world.spawn((Transform::default(), signal));
        (beacon, light)
    }

    fn light_on(world: &World, light: Entity) -> bool {
        world.get::<&Light>(light).unwrap().enabled
    }

    #[test]
    fn test_starts_off_with_light_disabled() {
        let mut world = World::new();
        let (beacon, light) = beacon(&mut world);
        assert!(!world.get::<&SignalToggle>(beacon).unwrap().on);
        assert!(!light_on(&world, light));
    }

    #[test]
    fn test_toggle_on_enables_light_and_rotates() {
        let mut world = World::new();
        let mut events = EventQueue::new();
        let (beacon, light) = beacon(&mut world);

        update_signals(&mut world, true, 1.0, &mut events);
        assert!(light_on(&world, light));
        let yaw = world.get::<&Transform>(beacon).unwrap().yaw_degrees();
        assert!((yaw - SIGNAL_ROTATION_DEGREES).abs() < 1e-3);
        assert_eq!(
            events.drain().collect::<Vec<_>>(),
            vec![ControllerEvent::SignalToggled { on: true }]
        );
    }

    #[test]
    fn test_holding_does_not_retoggle() {
        let mut world = World::new();
        let mut events = EventQueue::new();
        let (beacon, _) = beacon(&mut world);

        update_signals(&mut world, true, 0.1, &mut events);
        update_signals(&mut world, false, 0.1, &mut events);
        update_signals(&mut world, false, 0.1, &mut events);
        assert!(world.get::<&SignalToggle>(beacon).unwrap().on);
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn test_two_presses_turn_it_back_off() {
        let mut world = World::new();
        let mut events = EventQueue::new();
        let (beacon, light) = beacon(&mut world);

        update_signals(&mut world, true, 0.0, &mut events);
        update_signals(&mut world, true, 0.0, &mut events);
        assert!(!world.get::<&SignalToggle>(beacon).unwrap().on);
        assert!(!light_on(&world, light));

        update_signals(&mut world, false, 5.0, &mut events);
        assert_eq!(world.get::<&Transform>(beacon).unwrap().yaw, 0.0);
    }

    #[test]
    fn test_rotation_wraps_past_full_turn() {
        let signal = SignalToggle {
            on: true,
            light: None,
            rotation_speed: 90.0,
        };
        let mut t = Transform::default();
        signal.update(&mut t, 5.0);
        assert!((t.yaw_degrees() - 90.0).abs() < 1e-3);
    }

    #[test]
    fn test_missing_light_is_noop() {
        let world = World::new();
        let mut events = EventQueue::new();
        let mut signal = SignalToggle::new(&SignalConfig::default(), None);
        signal.toggle(&world, &mut events);
        assert!(signal.on);
    }
}
