use ramp_engine::coords::Vec2;

pub use ramp_engine::input::MouseButton;

/// Pointer events routed to widgets, in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UiEvent {
    /// A button went down at `pos`.
    Press { pos: Vec2, button: MouseButton },
    /// A button came up at `pos`.
    ///
    /// Fires wherever the pointer is, so a widget that owns a drag must not
    /// require `rect.contains(pos)` to finish it.
    Release { pos: Vec2, button: MouseButton },
    /// Pointer moved to `pos`, held buttons or not.
    Move { pos: Vec2 },
    /// Second press of a double-click. Replaces the `Press` for that click.
    DoubleClick { pos: Vec2, button: MouseButton },
}

impl UiEvent {
    #[inline]
    pub fn pos(&self) -> Vec2 {
        match self {
            UiEvent::Press { pos, .. }
            | UiEvent::Release { pos, .. }
            | UiEvent::Move { pos }
            | UiEvent::DoubleClick { pos, .. } => *pos,
        }
    }
}

/// Result returned by [`Widget::on_event`](crate::widget::Widget::on_event).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was handled; stop routing.
    Consumed,
    /// Event was not handled; keep routing.
    Ignored,
}

impl EventResult {
    #[inline]
    pub fn is_consumed(self) -> bool {
        self == EventResult::Consumed
    }
}
