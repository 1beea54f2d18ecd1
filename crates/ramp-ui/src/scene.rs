use std::cell::Cell;

use ramp_engine::coords::{Rect, Vec2};
use ramp_engine::input::{ButtonState, InputEvent, InputFrame};
use ramp_engine::scene::DrawList;

use crate::constraints::LayoutCtx;
use crate::event::UiEvent;
use crate::painter::Painter;
use crate::widget::Widget;

/// Maps one platform-agnostic input event onto a widget event.
///
/// Focus, modifier and pointer-leave events have no widget counterpart;
/// focus loss reaches widgets as the releases `InputState` synthesizes.
pub fn translate_input(ev: &InputEvent) -> Option<UiEvent> {
    match ev {
        InputEvent::PointerMoved(m) => Some(UiEvent::Move { pos: Vec2::new(m.x, m.y) }),
        InputEvent::PointerButton(pb) => {
            let pos = Vec2::new(pb.x, pb.y);
            Some(match pb.state {
                ButtonState::Pressed => UiEvent::Press { pos, button: pb.button },
                ButtonState::Released => UiEvent::Release { pos, button: pb.button },
            })
        }
        InputEvent::PointerDoubleClick(pb) => Some(UiEvent::DoubleClick {
            pos: Vec2::new(pb.x, pb.y),
            button: pb.button,
        }),
        InputEvent::ModifiersChanged(_) | InputEvent::PointerLeft | InputEvent::Focused(_) => None,
    }
}

// ── UiScene ───────────────────────────────────────────────────────────────

/// Per-window frame driver.
///
/// Owns the `DrawList` refilled by [`paint`](Self::paint) and the repaint
/// flag widgets raise through [`LayoutCtx::request_repaint`]. The root widget
/// stays owned by the host, so its state persists across frames and its
/// concrete API remains reachable.
///
/// # Example
///
/// ```rust,ignore
/// // on window event:
/// if let Some(ev) = translate_window_event(window.scale_factor(), &input, &event) {
///     input.apply_event(&mut frame, ev);
/// }
/// // once per frame:
/// ui.dispatch(&mut editor, viewport, &frame);
/// frame.clear();
/// if ui.take_repaint_request() {
///     window.request_redraw();
/// }
/// // on redraw:
/// renderer.render(ui.paint(&editor, viewport));
/// ```
#[derive(Debug, Default)]
pub struct UiScene {
    /// Draw list populated by the most recent [`paint`](Self::paint) call.
    pub draw_list: DrawList,
    repaint: Cell<bool>,
}

impl UiScene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Routes every event of `frame`, in arrival order, to `root` laid out
    /// over the whole `viewport`.
    pub fn dispatch<W: Widget + ?Sized>(&mut self, root: &mut W, viewport: Vec2, frame: &InputFrame) {
        let rect = Rect::new(0.0, 0.0, viewport.x, viewport.y);
        let ctx = LayoutCtx::with_repaint(&self.repaint);
        for ev in frame.events.iter().filter_map(translate_input) {
            let result = root.on_event(&ev, rect, &ctx);
            log::trace!("{ev:?} consumed: {}", result.is_consumed());
        }
    }

    /// Routes a single widget event, e.g. from a host with its own input model.
    pub fn send<W: Widget + ?Sized>(&mut self, root: &mut W, viewport: Vec2, event: &UiEvent) {
        let rect = Rect::new(0.0, 0.0, viewport.x, viewport.y);
        root.on_event(event, rect, &LayoutCtx::with_repaint(&self.repaint));
    }

    /// Lays out and paints `root` over the whole `viewport`.
    ///
    /// The returned list is owned by the scene and valid until the next call.
    #[must_use]
    pub fn paint<W: Widget + ?Sized>(&mut self, root: &W, viewport: Vec2) -> &mut DrawList {
        self.draw_list.clear();

        let rect = Rect::new(0.0, 0.0, viewport.x, viewport.y);
        {
            let mut painter = Painter::new(&mut self.draw_list);
            root.paint(&mut painter, rect);
        }
        self.repaint.set(false);
        &mut self.draw_list
    }

    /// Returns and clears the pending repaint request.
    pub fn take_repaint_request(&self) -> bool {
        self.repaint.replace(false)
    }
}
