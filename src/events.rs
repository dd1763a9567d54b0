//! Controller event system for decoupled communication between systems.
//!
//! Controllers emit events, the frame loop drains them for logging and the
//! window title. Nothing in the controllers depends on who listens.

use crate::components::Mode;

/// Events that controllers emit during a frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControllerEvent {
    /// The mode was (re)applied
    ModeChanged { from: Mode, to: Mode },
    /// The alert lights swapped; `phase` is the state of the first alert light
    AlertFlash { phase: bool },
    /// The signal beacon was switched on or off
    SignalToggled { on: bool },
}

/// Simple event queue - events are pushed during update, processed at end of frame
#[derive(Debug, Default)]
pub struct EventQueue {
    events: Vec<ControllerEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Push an event to be processed later
    pub fn push(&mut self, event: ControllerEvent) {
        self.events.push(event);
    }

    /// Drain all events for processing
    pub fn drain(&mut self) -> impl Iterator<Item = ControllerEvent> + '_ {
        self.events.drain(..)
    }

    /// Check if there are pending events
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_preserves_order_and_empties() {
        let mut events = EventQueue::new();
        events.push(ControllerEvent::SignalToggled { on: true });
        events.push(ControllerEvent::AlertFlash { phase: false });

        let drained: Vec<_> = events.drain().collect();
        assert_eq!(
            drained,
            vec![
                ControllerEvent::SignalToggled { on: true },
                ControllerEvent::AlertFlash { phase: false },
            ]
        );
        assert!(events.is_empty());
    }
}
