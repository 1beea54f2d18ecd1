//! Input subsystem.
//!
//! Public API is platform-agnostic and does not expose winit types.
//! Hosts translate platform events into `InputEvent`s (see [`platform`]) and
//! feed them through [`InputState::apply_event`], which records the frame's
//! deltas into an [`InputFrame`] and synthesizes double-clicks.

mod click;
mod frame;
mod state;
mod types;

pub mod platform;

pub use click::ClickTracker;
pub use frame::InputFrame;
pub use state::InputState;
pub use types::{
    ButtonState,
    InputEvent,
    Modifiers,
    MouseButton,
    PointerButtonEvent,
    PointerMoveEvent,
};
