use crate::coords::Vec2;

use super::Color;

/// A single gradient stop as seen by renderers.
///
/// `t` is expected in [0, 1]; [`LinearGradient::sample`] clamps the query,
/// not the stops.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColorStop {
    pub t: f32,
    pub color: Color,
}

impl ColorStop {
    #[inline]
    pub const fn new(t: f32, color: Color) -> Self {
        Self { t, color }
    }
}

/// Linear gradient in logical pixel space, padded outside `[start, end]`.
///
/// Semantics:
/// - `start` and `end` are positions in the same coordinate space as geometry.
/// - Stops are premultiplied colors, expected sorted by `t`.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub start: Vec2,
    pub end: Vec2,
    pub stops: Vec<ColorStop>,
}

impl LinearGradient {
    pub fn new(start: Vec2, end: Vec2, stops: Vec<ColorStop>) -> Self {
        Self { start, end, stops }
    }

    /// Returns true when the gradient definition can be rasterized.
    ///
    /// A single stop is accepted and renders as a solid fill.
    pub fn is_valid(&self) -> bool {
        self.start.is_finite()
            && self.end.is_finite()
            && !self.stops.is_empty()
            && self.stops.iter().all(|s| s.t.is_finite() && s.color.is_finite())
            && (self.end.x != self.start.x || self.end.y != self.start.y)
    }

    /// Color at parameter `t` along the gradient axis.
    pub fn sample(&self, t: f32) -> Color {
        sample_stops(&self.stops, t)
    }
}

/// Interpolates sorted `stops` at `t` (clamped to `[0, 1]`).
///
/// - no stops: transparent
/// - before the first / after the last stop: that stop's color
/// - otherwise: linear between the bracketing pair
pub fn sample_stops(stops: &[ColorStop], t: f32) -> Color {
    let Some(first) = stops.first() else {
        return Color::transparent();
    };
    let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
    if t <= first.t {
        return first.color;
    }
    let mut prev = *first;
    for stop in &stops[1..] {
        if t <= stop.t {
            let span = stop.t - prev.t;
            if span <= f32::EPSILON {
                return stop.color;
            }
            return prev.color.lerp(stop.color, (t - prev.t) / span);
        }
        prev = *stop;
    }
    prev.color
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp() -> Vec<ColorStop> {
        vec![
            ColorStop::new(0.0, Color::white()),
            ColorStop::new(1.0, Color::black()),
        ]
    }

    #[test]
    fn sample_empty_is_transparent() {
        assert_eq!(sample_stops(&[], 0.5), Color::transparent());
    }

    #[test]
    fn sample_single_stop_is_solid() {
        let stops = [ColorStop::new(0.3, Color::black())];
        assert_eq!(sample_stops(&stops, 0.0), Color::black());
        assert_eq!(sample_stops(&stops, 1.0), Color::black());
    }

    #[test]
    fn sample_interpolates_between_stops() {
        let mid = sample_stops(&ramp(), 0.5);
        assert_eq!(mid, Color::from_premul(0.5, 0.5, 0.5, 1.0));
    }

    #[test]
    fn sample_pads_outside_range() {
        let stops = vec![
            ColorStop::new(0.25, Color::white()),
            ColorStop::new(0.75, Color::black()),
        ];
        assert_eq!(sample_stops(&stops, 0.1), Color::white());
        assert_eq!(sample_stops(&stops, 0.9), Color::black());
        assert_eq!(sample_stops(&stops, -4.0), Color::white());
    }

    #[test]
    fn sample_hard_edge_between_coincident_stops() {
        let stops = vec![
            ColorStop::new(0.0, Color::white()),
            ColorStop::new(0.5, Color::white()),
            ColorStop::new(0.5, Color::black()),
            ColorStop::new(1.0, Color::black()),
        ];
        assert_eq!(sample_stops(&stops, 0.5), Color::white());
        assert_eq!(sample_stops(&stops, 0.6), Color::black());
    }

    #[test]
    fn degenerate_axis_is_invalid() {
        let p = Vec2::new(4.0, 4.0);
        assert!(!LinearGradient::new(p, p, ramp()).is_valid());
        assert!(LinearGradient::new(p, Vec2::new(10.0, 4.0), ramp()).is_valid());
        assert!(!LinearGradient::new(p, Vec2::new(10.0, 4.0), Vec::new()).is_valid());
    }
}
