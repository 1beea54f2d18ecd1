use super::Vec2;

/// Axis-aligned rectangle in logical pixels (top-left origin).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    /// Rectangle of `size` whose center sits on `center`.
    #[inline]
    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        Self {
            origin: Vec2::new(center.x - size.x * 0.5, center.y - size.y * 0.5),
            size,
        }
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        Vec2::new(self.origin.x + self.size.x, self.origin.y + self.size.y)
    }

    #[inline]
    pub fn center(self) -> Vec2 {
        Vec2::new(
            self.origin.x + self.size.x * 0.5,
            self.origin.y + self.size.y * 0.5,
        )
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    /// Half-open containment: [min, max).
    #[inline]
    pub fn contains(self, p: Vec2) -> bool {
        p.x >= self.origin.x
            && p.y >= self.origin.y
            && p.x < self.origin.x + self.size.x
            && p.y < self.origin.y + self.size.y
    }

    /// Maps an absolute x coordinate onto `[0, 1]` across the rect's width.
    ///
    /// Values left of the rect map to `0.0`, values right of it to `1.0`.
    /// A zero-width rect maps everything to `0.0`.
    #[inline]
    pub fn normalize_x(self, x: f32) -> f32 {
        if self.size.x <= 0.0 {
            return 0.0;
        }
        ((x - self.origin.x) / self.size.x).clamp(0.0, 1.0)
    }

    /// Inverse of [`normalize_x`](Self::normalize_x) for `t` in `[0, 1]`.
    #[inline]
    pub fn x_at(self, t: f32) -> f32 {
        self.origin.x + t * self.size.x
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: f32, y: f32, w: f32, h: f32) -> Rect { Rect::new(x, y, w, h) }

    // ── contains ──────────────────────────────────────────────────────────

    #[test]
    fn contains_top_left_inclusive() {
        assert!(r(0.0, 0.0, 10.0, 10.0).contains(Vec2::new(0.0, 0.0)));
    }

    #[test]
    fn contains_bottom_right_exclusive() {
        assert!(!r(0.0, 0.0, 10.0, 10.0).contains(Vec2::new(10.0, 10.0)));
    }

    #[test]
    fn contains_outside() {
        assert!(!r(0.0, 0.0, 10.0, 10.0).contains(Vec2::new(-1.0, 5.0)));
        assert!(!r(0.0, 0.0, 10.0, 10.0).contains(Vec2::new(5.0, 11.0)));
    }

    // ── center / from_center_size ─────────────────────────────────────────

    #[test]
    fn from_center_size_round_trips_center() {
        let rect = Rect::from_center_size(Vec2::new(50.0, 25.0), Vec2::new(10.0, 10.0));
        assert_eq!(rect, r(45.0, 20.0, 10.0, 10.0));
        assert_eq!(rect.center(), Vec2::new(50.0, 25.0));
    }

    // ── normalize_x ───────────────────────────────────────────────────────

    #[test]
    fn normalize_x_maps_across_width() {
        let rect = r(100.0, 0.0, 200.0, 50.0);
        assert_eq!(rect.normalize_x(100.0), 0.0);
        assert_eq!(rect.normalize_x(150.0), 0.25);
        assert_eq!(rect.normalize_x(300.0), 1.0);
    }

    #[test]
    fn normalize_x_clamps_outside() {
        let rect = r(0.0, 0.0, 200.0, 50.0);
        assert_eq!(rect.normalize_x(-40.0), 0.0);
        assert_eq!(rect.normalize_x(900.0), 1.0);
    }

    #[test]
    fn normalize_x_zero_width_is_zero() {
        assert_eq!(r(10.0, 0.0, 0.0, 50.0).normalize_x(20.0), 0.0);
    }

    #[test]
    fn x_at_inverts_normalize_x() {
        let rect = r(20.0, 0.0, 200.0, 50.0);
        assert_eq!(rect.x_at(0.5), 120.0);
        assert_eq!(rect.normalize_x(rect.x_at(0.75)), 0.75);
    }

    // ── is_empty ──────────────────────────────────────────────────────────

    #[test]
    fn is_empty_zero_size() {
        assert!(r(0.0, 0.0, 0.0, 5.0).is_empty());
        assert!(!r(0.0, 0.0, 1.0, 1.0).is_empty());
    }
}
