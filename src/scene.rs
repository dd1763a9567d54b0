//! Scene setup and teardown.
//!
//! Spawns the patroller with its main light and two alert lights, plus the
//! signal beacon with its spotlight.

use glam::Vec3;
use hecs::{Entity, World};

use crate::audio::AlertSound;
use crate::components::{Beacon, Light, Patroller, Transform};
use crate::config::ControllerConfig;
use crate::systems::mode::ModeController;
use crate::systems::movement::MovementController;
use crate::systems::signal::SignalToggle;

/// Where the beacon stands relative to the patroller's start
const BEACON_OFFSET: Vec3 = Vec3::new(0.0, 10.0, -20.0);

/// The patroller entity and the controller that owns its lighting state
pub struct Patrol {
    pub entity: Entity,
    pub mode: ModeController,
    pub beacon: Entity,
}

/// Populate `world` with the patroller and beacon.
/// Returns the handles the frame loop needs.
pub fn init_world(world: &mut World, config: &ControllerConfig, sound: Option<AlertSound>) -> Patrol {
    let main_light = world.spawn((Light::new(config.lighting.normal_intensity),));
    let alert_a = world.spawn((Light::disabled(config.lighting.alert_intensity),));
    let alert_b = world.spawn((Light::disabled(config.lighting.alert_intensity),));

    let mut mode = ModeController::new(config.lighting.clone())
        .with_main_light(main_light)
        .with_alert_lights(alert_a, alert_b)
        .with_alert_sound(sound);
    mode.activate(world);

    let entity = world.spawn((
        Transform::default(),
        MovementController::new(&config.movement),
        Patroller,
    ));

    let spotlight = world.spawn((Light::new(config.signal.intensity),));
    let mut signal = SignalToggle::new(&config.signal, Some(spotlight));
    signal.activate(world);
    let beacon = world.spawn((Transform::new(BEACON_OFFSET), signal, Beacon));

    log::info!("spawned patroller {:?} and beacon {:?}", entity, beacon);

    Patrol {
        entity,
        mode,
        beacon,
    }
}

/// Shut down the patroller's effects, then remove it from the world.
/// The flasher is cancelled before the entity disappears.
pub fn despawn_patroller(world: &mut World, mut patrol: Patrol) {
    patrol.mode.deactivate(world);
    if world.despawn(patrol.entity).is_err() {
        log::warn!("patroller {:?} was already despawned", patrol.entity);
    }
}
