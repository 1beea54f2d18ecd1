use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Straight line segment payload. `width` is in logical pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct LineCmd {
    pub from: Vec2,
    pub to: Vec2,
    pub color: Color,
    pub width: f32,
}

impl DrawList {
    /// Records a line segment from `from` to `to`.
    #[inline]
    pub fn push_line(&mut self, z: ZIndex, from: Vec2, to: Vec2, color: Color, width: f32) {
        self.push(z, DrawCmd::Line(LineCmd { from, to, color, width }));
    }
}
