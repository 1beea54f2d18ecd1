//! Shape payloads and their `DrawList` push helpers.

pub mod line;
pub mod rect;
pub mod stroke_rect;
