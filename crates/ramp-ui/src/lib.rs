//! Ramp UI: a gradient stop editor widget and the small widget layer it
//! runs on, on top of `ramp-engine`.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use ramp_ui::prelude::*;
//!
//! let mut editor = GradientEdit::new()
//!     .color_picker(|initial: Color| -> Option<Color> { my_dialog::pick(initial) })
//!     .on_gradient_changed(|stops| log::info!("{} stops", stops.len()));
//! let mut ui = UiScene::new();
//!
//! // In your frame callback:
//! ui.dispatch(&mut editor, viewport, &input_frame);
//! let draw_list = ui.paint(&editor, viewport);
//! // Pass draw_list to your renderer.
//! ```
//!
//! # Custom widgets
//!
//! Implement [`Widget`](widget::Widget) for any type; [`UiScene`](scene::UiScene)
//! drives anything that implements it, boxed or not.

pub mod constraints;
pub mod event;
pub mod gradient;
pub mod painter;
pub mod picker;
pub mod scene;
pub mod widget;
pub mod widgets;

/// Everything needed to host or extend the editor.
pub mod prelude {
    pub use crate::constraints::{Constraints, LayoutCtx};
    pub use crate::event::{EventResult, MouseButton, UiEvent};
    pub use crate::gradient::{Gradient, StopColor};
    pub use crate::painter::Painter;
    pub use crate::picker::{ColorPicker, NoPicker};
    pub use crate::scene::{UiScene, translate_input};
    pub use crate::widget::{Element, Widget};
    pub use crate::widgets::gradient_edit::{DragState, GradientEdit};

    // Re-export the engine primitives everyone needs.
    pub use ramp_engine::coords::{Rect, Vec2};
    pub use ramp_engine::paint::{Color, ColorStop, LinearGradient, Paint};
}
