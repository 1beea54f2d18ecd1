use std::collections::HashSet;
use std::time::Instant;

use crate::coords::Vec2;

use super::click::ClickTracker;
use super::frame::InputFrame;
use super::types::{
    ButtonState,
    InputEvent,
    Modifiers,
    MouseButton,
    PointerButtonEvent,
    PointerMoveEvent,
};

/// Current input state for a single window.
///
/// Holds "is down" information and the pointer position.
/// Per-frame transitions are recorded into an `InputFrame`.
#[derive(Debug, Default)]
pub struct InputState {
    /// Current modifier state.
    pub modifiers: Modifiers,

    /// Whether the window is focused.
    pub focused: bool,

    /// Pointer position in logical pixels.
    pub pointer_pos: Option<Vec2>,

    /// Set of currently held mouse buttons.
    pub buttons_down: HashSet<MouseButton>,

    /// Double-click detection over raw presses.
    pub clicks: ClickTracker,
}

impl InputState {
    /// Applies an input event to the current state and writes deltas to `frame`.
    pub fn apply_event(&mut self, frame: &mut InputFrame, ev: InputEvent) {
        self.apply_event_at(frame, ev, Instant::now());
    }

    /// Like [`apply_event`](Self::apply_event) with an explicit timestamp for
    /// double-click detection.
    pub fn apply_event_at(&mut self, frame: &mut InputFrame, ev: InputEvent, now: Instant) {
        match ev {
            InputEvent::ModifiersChanged(m) => {
                self.modifiers = m;
            }

            InputEvent::Focused(f) => {
                self.focused = f;
                if !f {
                    // Release everything held so widgets do not keep a stuck drag.
                    self.release_all(frame);
                    self.clicks.reset();
                }
            }

            InputEvent::PointerMoved(PointerMoveEvent { x, y }) => {
                self.pointer_pos = Some(Vec2::new(x, y));
            }

            InputEvent::PointerLeft => {
                self.pointer_pos = None;
            }

            InputEvent::PointerButton(pb) => {
                let pos = Vec2::new(pb.x, pb.y);
                self.pointer_pos = Some(pos);
                self.modifiers = pb.modifiers;

                match pb.state {
                    ButtonState::Pressed => {
                        if self.buttons_down.insert(pb.button) {
                            frame.buttons_pressed.insert(pb.button);
                            if self.clicks.register_press(pb.button, pos, now) {
                                log::trace!("double-click {:?} at ({}, {})", pb.button, pb.x, pb.y);
                                frame.push_event(InputEvent::PointerDoubleClick(pb));
                                return;
                            }
                        }
                    }
                    ButtonState::Released => {
                        if self.buttons_down.remove(&pb.button) {
                            frame.buttons_released.insert(pb.button);
                        }
                    }
                }
            }

            InputEvent::PointerDoubleClick(pb) => {
                // Host-synthesized double-click: it is still a press.
                self.pointer_pos = Some(Vec2::new(pb.x, pb.y));
                self.modifiers = pb.modifiers;
                if self.buttons_down.insert(pb.button) {
                    frame.buttons_pressed.insert(pb.button);
                }
            }
        }

        frame.push_event(ev);
    }

    pub fn button_down(&self, btn: MouseButton) -> bool {
        self.buttons_down.contains(&btn)
    }

    fn release_all(&mut self, frame: &mut InputFrame) {
        let pos = self.pointer_pos.unwrap_or_default();
        for button in self.buttons_down.drain() {
            frame.buttons_released.insert(button);
            frame.push_event(InputEvent::PointerButton(PointerButtonEvent {
                button,
                state: ButtonState::Released,
                x: pos.x,
                y: pos.y,
                modifiers: self.modifiers,
            }));
        }
    }
}
