//! Per-frame update.
//!
//! Order within a frame: mode switch from input, movement (reads the mode
//! that was just applied), beacon, then the alert flasher. Events raised
//! along the way are drained by `process_events`.

use hecs::World;

use crate::components::Transform;
use crate::events::{ControllerEvent, EventQueue};
use crate::input::InputResult;
use crate::scene::Patrol;
use crate::systems::movement;
use crate::systems::signal;

/// Advance the scene by one frame
pub fn run_frame(
    world: &mut World,
    patrol: &mut Patrol,
    input: &InputResult,
    dt: f32,
    events: &mut EventQueue,
) {
    puffin::profile_function!();

    patrol.mode.handle_input(world, input.mode_request, events);
    movement::update_movement(world, dt, input.movement, patrol.mode.mode());
    signal::update_signals(world, input.toggle_signal, dt, events);
    patrol.mode.update(world, dt, events);
}

/// Drain and log this frame's events. Returns how many were processed.
pub fn process_events(events: &mut EventQueue) -> usize {
    let mut processed = 0;
    for event in events.drain() {
        match event {
            ControllerEvent::ModeChanged { from, to } => {
                log::debug!("event: mode {} -> {}", from, to)
            }
            ControllerEvent::SignalToggled { on } => log::debug!("event: signal on={}", on),
            ControllerEvent::AlertFlash { phase } => log::trace!("event: flash phase={}", phase),
        }
        processed += 1;
    }
    processed
}

/// One-line status for the window title
pub fn status_line(world: &World, patrol: &Patrol) -> String {
    let (position, heading) = world
        .get::<&Transform>(patrol.entity)
        .map(|t| (t.position, t.yaw_degrees()))
        .unwrap_or_default();
    let signal_on = world
        .get::<&signal::SignalToggle>(patrol.beacon)
        .map(|s| s.on)
        .unwrap_or(false);

    format!(
        "{} | pos ({:.1}, {:.1}) | heading {:.0}° | signal {}",
        patrol.mode.mode(),
        position.x,
        position.z,
        heading,
        if signal_on { "on" } else { "off" }
    )
}
