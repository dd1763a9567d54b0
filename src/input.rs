//! Input handling and control mapping.
//!
//! Tracks held keys and per-frame presses from winit keyboard events, and
//! turns them into mode requests, the signal toggle and smoothed movement axes.

use std::collections::HashSet;

use winit::keyboard::KeyCode;

use crate::components::Mode;
use crate::constants::*;
use crate::systems::movement::MovementInput;

const FORWARD_KEYS: [KeyCode; 2] = [KeyCode::KeyW, KeyCode::ArrowUp];
const BACK_KEYS: [KeyCode; 2] = [KeyCode::KeyS, KeyCode::ArrowDown];
const LEFT_KEYS: [KeyCode; 2] = [KeyCode::KeyA, KeyCode::ArrowLeft];
const RIGHT_KEYS: [KeyCode; 2] = [KeyCode::KeyD, KeyCode::ArrowRight];
const BOOST_KEYS: [KeyCode; 2] = [KeyCode::ShiftLeft, KeyCode::ShiftRight];

const NORMAL_KEY: KeyCode = KeyCode::KeyN;
const STEALTH_KEY: KeyCode = KeyCode::KeyC;
const ALERT_KEY: KeyCode = KeyCode::Space;
const SIGNAL_KEY: KeyCode = KeyCode::KeyB;

/// A virtual axis that eases toward its target instead of jumping
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputAxis {
    pub value: f32,
}

impl InputAxis {
    /// Move toward `target` (-1, 0 or 1). Reversing direction snaps through zero first.
    pub fn update(&mut self, target: f32, dt: f32) {
        if target == 0.0 {
            let step = AXIS_GRAVITY * dt;
            if self.value.abs() <= step {
                self.value = 0.0;
            } else {
                self.value -= step * self.value.signum();
            }
        } else {
            if self.value != 0.0 && self.value.signum() != target.signum() {
                self.value = 0.0;
            }
            self.value = (self.value + AXIS_SENSITIVITY * dt * target).clamp(-1.0, 1.0);
        }

        if self.value.abs() < AXIS_DEAD_ZONE {
            self.value = 0.0;
        }
    }
}

/// Input state tracking
#[derive(Debug, Default)]
pub struct InputState {
    /// Keys currently held down
    pub keys_held: HashSet<KeyCode>,
    /// Keys that went down since the last `process_keyboard`
    pub keys_pressed: HashSet<KeyCode>,
    pub forward_axis: InputAxis,
    pub turn_axis: InputAxis,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key going down. OS key repeats are ignored so presses stay edge-triggered.
    pub fn press(&mut self, key: KeyCode, repeat: bool) {
        if repeat {
            return;
        }
        if self.keys_held.insert(key) {
            self.keys_pressed.insert(key);
        }
    }

    pub fn release(&mut self, key: KeyCode) {
        self.keys_held.remove(&key);
    }

    /// Drop all key state (e.g. the window lost focus)
    pub fn clear(&mut self) {
        self.keys_held.clear();
        self.keys_pressed.clear();
    }

    pub fn is_held(&self, key: KeyCode) -> bool {
        self.keys_held.contains(&key)
    }

    fn any_held(&self, keys: &[KeyCode]) -> bool {
        keys.iter().any(|k| self.is_held(*k))
    }

    fn digital_axis(&self, negative: &[KeyCode], positive: &[KeyCode]) -> f32 {
        let mut axis = 0.0;
        if self.any_held(positive) {
            axis += 1.0;
        }
        if self.any_held(negative) {
            axis -= 1.0;
        }
        axis
    }
}

/// Result of processing input for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputResult {
    /// Mode switch requested this frame
    pub mode_request: Option<Mode>,
    /// Signal key pressed this frame
    pub toggle_signal: bool,
    pub movement: MovementInput,
}

/// Process keyboard input for this frame, consuming the pending presses
pub fn process_keyboard(input: &mut InputState, dt: f32) -> InputResult {
    let mut result = InputResult::default();

    // Checked in this order; a later key pressed in the same frame wins
    if input.keys_pressed.remove(&NORMAL_KEY) {
        result.mode_request = Some(Mode::Normal);
    }
    if input.keys_pressed.remove(&STEALTH_KEY) {
        result.mode_request = Some(Mode::Stealth);
    }
    if input.keys_pressed.remove(&ALERT_KEY) {
        result.mode_request = Some(Mode::Alert);
    }

    if input.keys_pressed.remove(&SIGNAL_KEY) {
        result.toggle_signal = true;
    }

    let forward_target = input.digital_axis(&BACK_KEYS, &FORWARD_KEYS);
    let turn_target = input.digital_axis(&LEFT_KEYS, &RIGHT_KEYS);
    input.forward_axis.update(forward_target, dt);
    input.turn_axis.update(turn_target, dt);

    result.movement = MovementInput {
        forward: input.forward_axis.value,
        turn: input.turn_axis.value,
        boost_held: input.any_held(&BOOST_KEYS),
    };

    input.keys_pressed.clear();
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_is_edge_triggered() {
        let mut input = InputState::new();
        input.press(KeyCode::KeyB, false);
        assert!(process_keyboard(&mut input, 0.016).toggle_signal);

        // Still held, no new press
        assert!(!process_keyboard(&mut input, 0.016).toggle_signal);

        // Repeat events while held don't count either
        input.press(KeyCode::KeyB, true);
        assert!(!process_keyboard(&mut input, 0.016).toggle_signal);

        input.release(KeyCode::KeyB);
        input.press(KeyCode::KeyB, false);
        assert!(process_keyboard(&mut input, 0.016).toggle_signal);
    }

    #[test]
    fn test_mode_keys_map_to_modes() {
        let mut input = InputState::new();
        for (key, mode) in [
            (KeyCode::KeyN, Mode::Normal),
            (KeyCode::KeyC, Mode::Stealth),
            (KeyCode::Space, Mode::Alert),
        ] {
            input.press(key, false);
            assert_eq!(process_keyboard(&mut input, 0.016).mode_request, Some(mode));
            input.release(key);
        }
        assert_eq!(process_keyboard(&mut input, 0.016).mode_request, None);
    }

    #[test]
    fn test_later_mode_key_wins_in_same_frame() {
        let mut input = InputState::new();
        input.press(KeyCode::Space, false);
        input.press(KeyCode::KeyN, false);
        assert_eq!(process_keyboard(&mut input, 0.016).mode_request, Some(Mode::Alert));
    }

    #[test]
    fn test_press_and_release_within_frame_still_counts() {
        let mut input = InputState::new();
        input.press(KeyCode::KeyC, false);
        input.release(KeyCode::KeyC);
        assert_eq!(process_keyboard(&mut input, 0.016).mode_request, Some(Mode::Stealth));
    }

    #[test]
    fn test_boost_follows_either_shift() {
        let mut input = InputState::new();
        assert!(!process_keyboard(&mut input, 0.016).movement.boost_held);
        input.press(KeyCode::ShiftRight, false);
        assert!(process_keyboard(&mut input, 0.016).movement.boost_held);
        input.release(KeyCode::ShiftRight);
        assert!(!process_keyboard(&mut input, 0.016).movement.boost_held);
    }

    #[test]
    fn test_axis_ramps_up_and_saturates() {
        let mut input = InputState::new();
        input.press(KeyCode::KeyW, false);
        let first = process_keyboard(&mut input, 0.1).movement.forward;
        assert!(first > 0.0 && first < 1.0);

        let later = process_keyboard(&mut input, 1.0).movement.forward;
        assert_eq!(later, 1.0);
    }

    #[test]
    fn test_axis_falls_back_to_zero_on_release() {
        let mut input = InputState::new();
        input.press(KeyCode::KeyD, false);
        process_keyboard(&mut input, 1.0);
        input.release(KeyCode::KeyD);
        let easing = process_keyboard(&mut input, 0.1).movement.turn;
        assert!(easing > 0.0 && easing < 1.0);
        assert_eq!(process_keyboard(&mut input, 1.0).movement.turn, 0.0);
    }

    #[test]
    fn test_axis_snaps_on_reversal() {
        let mut axis = InputAxis { value: 0.8 };
        axis.update(-1.0, 0.1);
        assert!(axis.value < 0.0);
    }

    #[test]
    fn test_opposite_keys_cancel() {
        let mut input = InputState::new();
        input.press(KeyCode::KeyA, false);
        input.press(KeyCode::ArrowRight, false);
        assert_eq!(process_keyboard(&mut input, 1.0).movement.turn, 0.0);
    }
}
