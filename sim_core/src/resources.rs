use glam::Vec2;

use crate::params::Params;

/// Time resource for tracking simulation time
#[derive(Debug, Clone, Copy)]
pub struct Time {
    pub dt: f32,  // Fixed step interval
    pub now: f32, // Total simulated time
}

impl Time {
    pub fn new(dt: f32, now: f32) -> Self {
        Self { dt, now }
    }
}

impl Default for Time {
    fn default() -> Self {
        Self {
            dt: Params::FIXED_DT,
            now: 0.0,
        }
    }
}

/// Ordered history of past projectile positions
///
/// One point is appended per step, so `len()` is the number of steps taken
/// since the last `clear`. The trail is never bounded or deduplicated and
/// deliberately survives across runs until it is cleared.
#[derive(Debug, Clone, Default)]
pub struct Trail {
    points: Vec<Vec2>,
}

impl Trail {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, pos: Vec2) {
        self.points.push(pos);
    }

    /// Idempotent; does not touch the live kinematic state.
    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Vec2> {
        self.points.iter()
    }

    pub fn last(&self) -> Option<Vec2> {
        self.points.last().copied()
    }
}

/// Events that occurred during this step
#[derive(Debug, Clone, Copy, Default)]
pub struct Events {
    pub landed: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.landed = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trail_preserves_insertion_order() {
        let mut trail = Trail::new();
        trail.push(Vec2::new(1.0, 1.0));
        trail.push(Vec2::new(2.0, 2.0));
        trail.push(Vec2::new(3.0, 3.0));

        let xs: Vec<f32> = trail.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![1.0, 2.0, 3.0], "Trail is chronological");
        assert_eq!(trail.last(), Some(Vec2::new(3.0, 3.0)));
    }

    #[test]
    fn test_trail_clear_is_idempotent() {
        let mut trail = Trail::new();
        trail.push(Vec2::ZERO);
        trail.clear();
        assert!(trail.is_empty());
        trail.clear();
        assert!(trail.is_empty());
    }

    #[test]
    fn test_trail_keeps_duplicate_points() {
        let mut trail = Trail::new();
        trail.push(Vec2::new(5.0, 5.0));
        trail.push(Vec2::new(5.0, 5.0));
        assert_eq!(trail.len(), 2, "Trail never deduplicates");
    }

    #[test]
    fn test_events_clear() {
        let mut events = Events::new();
        events.landed = true;
        events.clear();
        assert!(!events.landed);
    }
}
