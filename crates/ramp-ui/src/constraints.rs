use std::cell::Cell;

use ramp_engine::coords::Vec2;

// ── Constraints ───────────────────────────────────────────────────────────

/// Layout constraints passed down from parent to child during measure.
///
/// A child may return any size in `[min, max]`. Parents enforce their own
/// policy by calling [`Constraints::constrain`] on the returned size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constraints {
    pub min: Vec2,
    pub max: Vec2,
}

impl Constraints {
    /// Tight: child must be exactly `size`.
    #[inline]
    pub fn tight(size: Vec2) -> Self {
        Self { min: size, max: size }
    }

    /// Loose: child can be anywhere from zero up to `max`.
    #[inline]
    pub fn loose(max: Vec2) -> Self {
        Self { min: Vec2::zero(), max }
    }

    /// No constraint: child can take any positive size.
    #[inline]
    pub fn unbounded() -> Self {
        Self { min: Vec2::zero(), max: Vec2::new(f32::INFINITY, f32::INFINITY) }
    }

    /// Clamp a size into `[min, max]`.
    #[inline]
    #[must_use]
    pub fn constrain(self, size: Vec2) -> Vec2 {
        Vec2::new(
            size.x.max(self.min.x).min(self.max.x),
            size.y.max(self.min.y).min(self.max.y),
        )
    }
}

// ── LayoutCtx ────────────────────────────────────────────────────────────

/// Frame services handed to [`Widget::measure`](crate::widget::Widget::measure)
/// and [`Widget::on_event`](crate::widget::Widget::on_event).
#[derive(Clone, Copy, Default)]
pub struct LayoutCtx<'a> {
    /// Repaint flag owned by the [`UiScene`](crate::scene::UiScene).
    ///
    /// `None` in contexts that do not track repaints (custom hosts, tests).
    pub repaint: Option<&'a Cell<bool>>,
}

impl<'a> LayoutCtx<'a> {
    #[inline]
    pub fn with_repaint(flag: &'a Cell<bool>) -> Self {
        Self { repaint: Some(flag) }
    }

    /// Ask the host to paint another frame.
    #[inline]
    pub fn request_repaint(&self) {
        if let Some(flag) = self.repaint {
            flag.set(true);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constrain_clamps_below_min() {
        let c = Constraints { min: Vec2::new(10.0, 10.0), max: Vec2::new(100.0, 100.0) };
        assert_eq!(c.constrain(Vec2::new(5.0, 3.0)), Vec2::new(10.0, 10.0));
    }

    #[test]
    fn constrain_clamps_above_max() {
        let c = Constraints::loose(Vec2::new(50.0, 50.0));
        assert_eq!(c.constrain(Vec2::new(200.0, 200.0)), Vec2::new(50.0, 50.0));
    }

    #[test]
    fn tight_forces_size() {
        let c = Constraints::tight(Vec2::new(120.0, 30.0));
        assert_eq!(c.constrain(Vec2::new(200.0, 50.0)), Vec2::new(120.0, 30.0));
    }

    #[test]
    fn unbounded_keeps_size() {
        let v = Vec2::new(200.0, 50.0);
        assert_eq!(Constraints::unbounded().constrain(v), v);
    }

    #[test]
    fn request_repaint_sets_flag() {
        let flag = Cell::new(false);
        LayoutCtx::with_repaint(&flag).request_repaint();
        assert!(flag.get());
        // Detached contexts are a no-op.
        LayoutCtx::default().request_repaint();
    }
}
