//! Gradient model: an ordered list of stop/color pairs.

use ramp_engine::coords::{Rect, Vec2};
use ramp_engine::paint::{Color, ColorStop, LinearGradient, sample_stops};

/// A color anchored at a normalized position along the gradient.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct StopColor {
    /// Position in `[0, 1]`.
    pub position: f32,
    pub color: Color,
}

impl StopColor {
    #[inline]
    pub const fn new(position: f32, color: Color) -> Self {
        Self { position, color }
    }
}

impl From<StopColor> for ColorStop {
    #[inline]
    fn from(s: StopColor) -> Self {
        ColorStop::new(s.position, s.color)
    }
}

/// Clamps a position into `[0, 1]`; non-finite values become `0.0`.
#[inline]
pub fn clamp_position(position: f32) -> f32 {
    if position.is_finite() { position.clamp(0.0, 1.0) } else { 0.0 }
}

/// Clamps every position and stable-sorts by position.
pub fn normalize_stops(stops: &mut [StopColor]) {
    for stop in stops.iter_mut() {
        stop.position = clamp_position(stop.position);
    }
    stops.sort_by(|a, b| a.position.total_cmp(&b.position));
}

/// Ordered stop sequence.
///
/// Invariants:
/// - every position lies in `[0, 1]`
/// - stops are sorted ascending after every operation except
///   [`set_position`](Self::set_position), which leaves re-sorting to the
///   caller (a drag re-sorts once on release)
///
/// Neither unique positions nor a minimum stop count are enforced.
#[derive(Debug, Clone, PartialEq)]
pub struct Gradient {
    stops: Vec<StopColor>,
}

impl Default for Gradient {
    /// White at `0.0` to black at `1.0`.
    fn default() -> Self {
        Self {
            stops: vec![
                StopColor::new(0.0, Color::white()),
                StopColor::new(1.0, Color::black()),
            ],
        }
    }
}

impl Gradient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a gradient from arbitrary stops, clamping and sorting them.
    pub fn from_stops(mut stops: Vec<StopColor>) -> Self {
        normalize_stops(&mut stops);
        Self { stops }
    }

    #[inline]
    pub fn stops(&self) -> &[StopColor] {
        &self.stops
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&StopColor> {
        self.stops.get(index)
    }

    /// Replaces the stops with a normalized copy of `stops`.
    ///
    /// Returns `false`, leaving the gradient untouched, when the normalized
    /// sequence equals the current one.
    pub fn set(&mut self, mut stops: Vec<StopColor>) -> bool {
        normalize_stops(&mut stops);
        if stops == self.stops {
            return false;
        }
        self.stops = stops;
        true
    }

    /// Inserts `stop` before the first stop whose position is not less than
    /// its own, and returns the index it landed at.
    ///
    /// `stop.position` must already be in `[0, 1]`; debug builds assert it,
    /// release builds clamp.
    pub fn insert(&mut self, mut stop: StopColor) -> usize {
        debug_assert!(
            (0.0..=1.0).contains(&stop.position),
            "Gradient::insert: position {} outside [0, 1]",
            stop.position
        );
        stop.position = clamp_position(stop.position);

        let index = self
            .stops
            .iter()
            .position(|s| s.position >= stop.position)
            .unwrap_or(self.stops.len());
        self.stops.insert(index, stop);
        index
    }

    /// Removes the stop at `index`; out of range returns `None`.
    pub fn remove(&mut self, index: usize) -> Option<StopColor> {
        (index < self.stops.len()).then(|| self.stops.remove(index))
    }

    /// Recolors the stop at `index`. Returns `false` when out of range.
    pub fn set_color(&mut self, index: usize, color: Color) -> bool {
        match self.stops.get_mut(index) {
            Some(stop) => {
                stop.color = color;
                true
            }
            None => false,
        }
    }

    /// Moves the stop at `index` to `position` (clamped) without re-sorting.
    /// Returns `false` when out of range.
    pub fn set_position(&mut self, index: usize, position: f32) -> bool {
        match self.stops.get_mut(index) {
            Some(stop) => {
                stop.position = clamp_position(position);
                true
            }
            None => false,
        }
    }

    /// Restores ascending order; stops at equal positions keep their order.
    pub fn sort(&mut self) {
        self.stops.sort_by(|a, b| a.position.total_cmp(&b.position));
    }

    /// Color at `t` (clamped to `[0, 1]`).
    pub fn sample(&self, t: f32) -> Color {
        sample_stops(&self.color_stops(), t)
    }

    pub fn color_stops(&self) -> Vec<ColorStop> {
        self.stops.iter().copied().map(ColorStop::from).collect()
    }

    /// Horizontal gradient spanning `rect` from its left to its right edge.
    pub fn to_linear_gradient(&self, rect: Rect) -> LinearGradient {
        let y = rect.center().y;
        LinearGradient::new(
            Vec2::new(rect.origin.x, y),
            Vec2::new(rect.max().x, y),
            self.color_stops(),
        )
    }
}
