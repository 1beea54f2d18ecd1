use ramp_engine::coords::{Rect, Vec2};
use ramp_engine::input::MouseButton;
use ramp_engine::paint::Color;

use crate::constraints::{Constraints, LayoutCtx};
use crate::event::{EventResult, UiEvent};
use crate::gradient::{Gradient, StopColor};
use crate::painter::Painter;
use crate::picker::{ColorPicker, NoPicker};
use crate::widget::Widget;

/// Pointer interaction state of a [`GradientEdit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    /// Index of the stop under the pointer. Stable until release, since
    /// nothing re-sorts mid-drag.
    Dragging(usize),
}

/// Horizontal gradient editor with draggable stop handles.
///
/// Mouse bindings:
/// - primary press on a handle, then move: drag the stop; release commits
/// - secondary press on a handle: recolor through the installed [`ColorPicker`]
/// - primary double-click on a handle: remove the stop
/// - primary double-click elsewhere: insert a stop with an unset color
///
/// Every committed mutation calls the `on_gradient_changed` callback with the
/// full stop list. A drag commits once, on release, and only if the list
/// actually changed.
///
/// # Example
/// ```rust,ignore
/// GradientEdit::new()
///     .color_picker(|initial| Some(my_dialog::run(initial)?))
///     .on_gradient_changed(|stops| println!("{} stops", stops.len()))
/// ```
pub struct GradientEdit {
    gradient: Gradient,
    drag: DragState,
    /// Stops as they were when the current drag started.
    drag_origin: Option<Vec<StopColor>>,
    handle_size: Vec2,
    tick_width: f32,
    outline_width: f32,
    highlight_color: Color,
    preferred_size: Vec2,
    repaint_pending: bool,
    picker: Box<dyn ColorPicker>,
    on_gradient_changed: Option<Box<dyn FnMut(&[StopColor])>>,
}

impl GradientEdit {
    pub const PREFERRED_SIZE: Vec2 = Vec2::new(200.0, 50.0);

    pub fn new() -> Self {
        Self {
            gradient: Gradient::new(),
            drag: DragState::Idle,
            drag_origin: None,
            handle_size: Vec2::new(10.0, 10.0),
            tick_width: 1.0,
            outline_width: 1.0,
            highlight_color: Color::from_straight(1.0, 0.0, 0.0, 1.0),
            preferred_size: Self::PREFERRED_SIZE,
            repaint_pending: false,
            picker: Box::new(NoPicker),
            on_gradient_changed: None,
        }
    }

    /// Starts from `stops` (clamped and sorted) instead of the white-to-black default.
    pub fn with_stops(mut self, stops: Vec<StopColor>) -> Self {
        self.gradient = Gradient::from_stops(stops);
        self
    }
    pub fn handle_size(mut self, w: f32, h: f32) -> Self { self.handle_size = Vec2::new(w, h); self }
    pub fn highlight_color(mut self, v: Color) -> Self { self.highlight_color = v; self }
    pub fn preferred_size(mut self, w: f32, h: f32) -> Self { self.preferred_size = Vec2::new(w, h); self }
    pub fn color_picker(mut self, picker: impl ColorPicker + 'static) -> Self {
        self.picker = Box::new(picker);
        self
    }
    pub fn on_gradient_changed(mut self, f: impl FnMut(&[StopColor]) + 'static) -> Self {
        self.on_gradient_changed = Some(Box::new(f));
        self
    }

    // ── queries ───────────────────────────────────────────────────────────

    #[inline]
    pub fn gradient(&self) -> &[StopColor] {
        self.gradient.stops()
    }

    #[inline]
    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    /// Returns and clears the repaint request raised by programmatic
    /// mutations. Event-driven mutations also raise it through the scene.
    pub fn take_repaint_request(&mut self) -> bool {
        std::mem::take(&mut self.repaint_pending)
    }

    // ── mutations ─────────────────────────────────────────────────────────

    /// Replaces all stops (clamped into `[0, 1]`, sorted).
    ///
    /// Notifies only when the normalized result differs from the current stops.
    pub fn set_gradient(&mut self, stops: Vec<StopColor>) {
        if self.gradient.set(stops) {
            self.abort_drag();
            self.commit("set gradient");
        }
    }

    /// Inserts `stop` in order. Its position must be in `[0, 1]`.
    pub fn add_stop(&mut self, stop: StopColor) {
        self.abort_drag();
        let index = self.gradient.insert(stop);
        log::debug!("stop added at #{index} ({})", stop.position);
        self.commit("add stop");
    }

    /// Removes the stop at `index`. Out of range is ignored.
    pub fn remove_stop_at(&mut self, index: usize) {
        match self.gradient.remove(index) {
            Some(stop) => {
                log::debug!("stop #{index} removed ({})", stop.position);
                self.abort_drag();
                self.commit("remove stop");
            }
            None => log::debug!("remove_stop_at: index {index} out of range"),
        }
    }

    /// Recolors the stop at `index`. Out of range is ignored.
    pub fn set_color_at(&mut self, index: usize, color: Color) {
        if self.gradient.set_color(index, color) {
            self.commit("set color");
        } else {
            log::debug!("set_color_at: index {index} out of range");
        }
    }

    /// Recolors the stop at `index` with `color`, or with the picker's answer
    /// when `color` is `None`. A cancelled picker changes nothing.
    pub fn choose_color_at(&mut self, index: usize, color: Option<Color>) {
        let Some(current) = self.gradient.get(index).map(|s| s.color) else {
            log::debug!("choose_color_at: index {index} out of range");
            return;
        };
        let color = match color {
            Some(c) => c,
            None => match self.picker.pick(current) {
                Some(c) => c,
                None => {
                    log::debug!("color choice for stop #{index} cancelled");
                    return;
                }
            },
        };
        self.set_color_at(index, color);
    }

    // ── hit testing ───────────────────────────────────────────────────────

    /// Index of the first stop (in storage order, skipping `exclude`) whose
    /// handle region contains `pos`, for the widget laid out at `rect`.
    ///
    /// The region spans `handle_size` on each side of the handle center
    /// horizontally and vertically.
    pub fn hit_test(&self, pos: Vec2, rect: Rect, exclude: &[usize]) -> Option<usize> {
        let mid = rect.center().y;
        if (pos.y - mid).abs() > self.handle_size.y {
            return None;
        }
        self.gradient
            .stops()
            .iter()
            .enumerate()
            .filter(|(i, _)| !exclude.contains(i))
            .find(|(_, stop)| (pos.x - rect.x_at(stop.position)).abs() <= self.handle_size.x)
            .map(|(i, _)| i)
    }

    // ── internal ──────────────────────────────────────────────────────────

    fn commit(&mut self, what: &str) {
        self.repaint_pending = true;
        log::trace!("{what}: {} stops", self.gradient.len());
        if let Some(f) = &mut self.on_gradient_changed {
            f(self.gradient.stops());
        }
    }

    fn begin_drag(&mut self, index: usize) {
        log::trace!("drag start on stop #{index}");
        self.drag_origin = Some(self.gradient.stops().to_vec());
        self.drag = DragState::Dragging(index);
    }

    fn end_drag(&mut self) {
        self.drag = DragState::Idle;
        self.gradient.sort();
        let origin = self.drag_origin.take();
        if origin.as_deref() != Some(self.gradient.stops()) {
            self.commit("drag");
        }
    }

    /// Drops an in-flight drag whose index a structural change invalidated.
    fn abort_drag(&mut self) {
        if self.drag != DragState::Idle {
            log::debug!("drag cancelled by a structural change");
            self.drag = DragState::Idle;
            self.drag_origin = None;
        }
    }

    fn flush_repaint(&mut self, ctx: &LayoutCtx<'_>) {
        if self.take_repaint_request() {
            ctx.request_repaint();
        }
    }
}

impl Default for GradientEdit { fn default() -> Self { Self::new() } }

impl Widget for GradientEdit {
    fn measure(&self, constraints: Constraints, _ctx: &LayoutCtx) -> Vec2 {
        constraints.constrain(self.preferred_size)
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        if rect.is_empty() {
            return;
        }

        if !self.gradient.is_empty() {
            painter.fill_rect(rect, self.gradient.to_linear_gradient(rect));
        }

        // Handles: a tick in the stop's color under a highlight outline.
        let mid = rect.center().y;
        let (hw, hh) = (self.handle_size.x, self.handle_size.y);
        for stop in self.gradient.stops() {
            let x = rect.x_at(stop.position);
            painter.line(
                Vec2::new(x, mid - hh),
                Vec2::new(x, mid + hh),
                stop.color,
                self.tick_width,
            );
            painter.stroke_rect(
                Rect::from_center_size(Vec2::new(x, mid), Vec2::new(hw, hh)),
                self.highlight_color,
                self.outline_width,
            );
        }
    }

    fn on_event(&mut self, event: &UiEvent, rect: Rect, ctx: &LayoutCtx<'_>) -> EventResult {
        // Outside the rect only a live drag keeps listening.
        if self.drag == DragState::Idle && !rect.contains(event.pos()) {
            return EventResult::Ignored;
        }

        let result = match (*event, self.drag) {
            (UiEvent::Press { pos, button }, DragState::Idle) => {
                match self.hit_test(pos, rect, &[]) {
                    Some(i) if button == MouseButton::PRIMARY => {
                        self.begin_drag(i);
                        EventResult::Consumed
                    }
                    Some(i) if button == MouseButton::SECONDARY => {
                        self.choose_color_at(i, None);
                        EventResult::Consumed
                    }
                    _ => EventResult::Ignored,
                }
            }

            // Pointer moves are tracked outside the rect while a drag is live.
            (UiEvent::Move { pos }, DragState::Dragging(i)) => {
                if self.gradient.set_position(i, rect.normalize_x(pos.x)) {
                    self.repaint_pending = true;
                }
                EventResult::Consumed
            }

            (UiEvent::Release { button, .. }, DragState::Dragging(_))
                if button == MouseButton::PRIMARY =>
            {
                self.end_drag();
                EventResult::Consumed
            }

            (UiEvent::DoubleClick { pos, button }, DragState::Idle)
                if button == MouseButton::PRIMARY =>
            {
                match self.hit_test(pos, rect, &[]) {
                    Some(i) => self.remove_stop_at(i),
                    None => self.add_stop(StopColor::new(rect.normalize_x(pos.x), Color::default())),
                }
                EventResult::Consumed
            }

            // Everything else during a drag belongs to the drag.
            (_, DragState::Dragging(_)) => EventResult::Consumed,

            _ => EventResult::Ignored,
        };

        self.flush_repaint(ctx);
        result
    }
}
