use ramp_engine::coords::{Rect, Vec2};
use ramp_engine::paint::{Color, Paint};
use ramp_engine::scene::{DrawList, ZIndex};

/// Drawing surface passed to [`Widget::paint`](crate::widget::Widget::paint).
///
/// Wraps the engine's `DrawList` and hands out increasing z-indices, so later
/// calls always paint on top of earlier ones.
pub struct Painter<'a> {
    draw_list: &'a mut DrawList,
    z: i32,
}

impl<'a> Painter<'a> {
    pub fn new(draw_list: &'a mut DrawList) -> Self {
        Self { draw_list, z: 0 }
    }

    /// Filled axis-aligned rectangle (solid color or gradient).
    pub fn fill_rect(&mut self, rect: Rect, paint: impl Into<Paint>) {
        let z = self.next_z();
        self.draw_list.push_rect(z, rect, paint.into());
    }

    /// Straight line segment.
    pub fn line(&mut self, from: Vec2, to: Vec2, color: Color, width: f32) {
        let z = self.next_z();
        self.draw_list.push_line(z, from, to, color, width);
    }

    /// Rectangle outline.
    pub fn stroke_rect(&mut self, rect: Rect, color: Color, width: f32) {
        let z = self.next_z();
        self.draw_list.push_stroke_rect(z, rect, color, width);
    }

    #[inline]
    fn next_z(&mut self) -> ZIndex {
        let z = ZIndex::new(self.z);
        self.z += 1;
        z
    }
}
