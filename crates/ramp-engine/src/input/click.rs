use std::time::{Duration, Instant};

use crate::coords::Vec2;

use super::MouseButton;

/// Detects double-clicks from a stream of button presses.
///
/// A press is a double-click when it uses the same button as the previous
/// press, arrives within `interval` of it, and lands within `slop` logical
/// pixels of it. A detected double-click resets the tracker, so a third
/// rapid press starts a new sequence instead of producing another double.
#[derive(Debug, Clone)]
pub struct ClickTracker {
    interval: Duration,
    slop: f32,
    last: Option<(MouseButton, Instant, Vec2)>,
}

impl ClickTracker {
    pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(500);
    pub const DEFAULT_SLOP: f32 = 4.0;

    pub fn new() -> Self {
        Self::with_thresholds(Self::DEFAULT_INTERVAL, Self::DEFAULT_SLOP)
    }

    pub fn with_thresholds(interval: Duration, slop: f32) -> Self {
        Self { interval, slop, last: None }
    }

    /// Records a press and reports whether it completes a double-click.
    pub fn register_press(&mut self, button: MouseButton, pos: Vec2, now: Instant) -> bool {
        let is_double = match self.last {
            Some((prev_button, at, prev_pos)) => {
                prev_button == button
                    && now.saturating_duration_since(at) <= self.interval
                    && (pos - prev_pos).length() <= self.slop
            }
            None => false,
        };

        self.last = if is_double { None } else { Some((button, now, pos)) };
        is_double
    }

    /// Forgets the previous press (e.g. on focus loss).
    pub fn reset(&mut self) {
        self.last = None;
    }
}

impl Default for ClickTracker {
    fn default() -> Self {
        Self::new()
    }
}
