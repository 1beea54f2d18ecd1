use std::collections::HashSet;

use super::types::{InputEvent, MouseButton};

/// Per-frame input deltas.
///
/// `InputState` holds the current state (held buttons, pointer position);
/// `InputFrame` holds this frame's events in arrival order and the
/// transition sets derived from them.
#[derive(Debug, Default)]
pub struct InputFrame {
    /// Events in arrival order, with double-clicks already synthesized.
    pub events: Vec<InputEvent>,

    /// Mouse buttons pressed this frame (double-clicks included).
    pub buttons_pressed: HashSet<MouseButton>,

    /// Mouse buttons released this frame.
    pub buttons_released: HashSet<MouseButton>,
}

impl InputFrame {
    pub fn clear(&mut self) {
        self.events.clear();
        self.buttons_pressed.clear();
        self.buttons_released.clear();
    }

    pub fn push_event(&mut self, ev: InputEvent) {
        self.events.push(ev);
    }
}
