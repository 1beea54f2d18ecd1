use crate::coords::Rect;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Rectangle outline payload.
///
/// The stroke is centered on the rect's edges.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeRectCmd {
    pub rect: Rect,
    pub color: Color,
    pub width: f32,
}

impl DrawList {
    /// Records an unfilled rectangle outline.
    #[inline]
    pub fn push_stroke_rect(&mut self, z: ZIndex, rect: Rect, color: Color, width: f32) {
        self.push(z, DrawCmd::StrokeRect(StrokeRectCmd { rect, color, width }));
    }
}
